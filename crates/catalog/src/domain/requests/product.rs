use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    /// Cap on how many records to return, in stored order. Absent means all.
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Smartphone")]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    #[schema(example = "6.1 inch display, 128GB storage")]
    pub description: String,

    #[validate(length(min = 1, message = "Code is required"))]
    #[schema(example = "SM-128")]
    pub code: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    #[schema(example = 499.99)]
    pub price: f64,

    #[schema(example = true)]
    pub status: Option<bool>,

    #[validate(range(min = 1, message = "Stock must be greater than zero"))]
    #[schema(example = 100)]
    pub stock: i32,

    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "phones")]
    pub category: String,

    pub thumbnails: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    // Always taken from the request path, never from the client body.
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Smartphone")]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    #[schema(example = "6.1 inch display, 128GB storage")]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "Code is required"))]
    #[schema(example = "SM-128")]
    pub code: Option<String>,

    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    #[schema(example = 449.99)]
    pub price: Option<f64>,

    #[schema(example = false)]
    pub status: Option<bool>,

    #[validate(range(min = 1, message = "Stock must be greater than zero"))]
    #[schema(example = 80)]
    pub stock: Option<i32>,

    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "phones")]
    pub category: Option<String>,

    pub thumbnails: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create_request() -> CreateProductRequest {
        CreateProductRequest {
            title: "Smartphone".to_string(),
            description: "6.1 inch display".to_string(),
            code: "SM-128".to_string(),
            price: 499.99,
            status: None,
            stock: 100,
            category: "phones".to_string(),
            thumbnails: None,
        }
    }

    #[test]
    fn valid_create_request_passes_validation() {
        assert!(valid_create_request().validate().is_ok());
    }

    #[test]
    fn empty_title_fails_validation() {
        let mut req = valid_create_request();
        req.title = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_price_fails_validation() {
        let mut req = valid_create_request();
        req.price = 0.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_price_fails_validation() {
        let mut req = valid_create_request();
        req.price = -10.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_stock_fails_validation() {
        let mut req = valid_create_request();
        req.stock = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn missing_required_field_is_a_deserialization_error() {
        let raw = r#"{"title": "Smartphone", "description": "d", "code": "c"}"#;
        let result: Result<CreateProductRequest, _> = serde_json::from_str(raw);
        assert!(result.is_err());
    }

    #[test]
    fn update_request_with_no_fields_passes_validation() {
        let raw = r#"{}"#;
        let req: UpdateProductRequest = serde_json::from_str(raw).expect("deserialize");
        assert!(req.validate().is_ok());
        assert!(req.id.is_none());
    }

    #[test]
    fn update_request_rejects_zero_price() {
        let raw = r#"{"price": 0.0}"#;
        let req: UpdateProductRequest = serde_json::from_str(raw).expect("deserialize");
        assert!(req.validate().is_err());
    }
}
