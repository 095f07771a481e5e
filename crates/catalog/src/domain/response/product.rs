use crate::model::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub status: bool,
    pub stock: i32,
    pub category: String,
    pub thumbnails: Vec<String>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            title: value.title,
            description: value.description,
            code: value.code,
            price: value.price,
            status: value.status,
            stock: value.stock,
            category: value.category,
            thumbnails: value.thumbnails,
        }
    }
}
