use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::product::FindAllProducts, model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::FileStore, errors::RepositoryError};
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryRepository {
    store: FileStore,
}

impl ProductQueryRepository {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching all products with limit: {:?}", req.limit);

        let mut products: Vec<ProductModel> = self.store.read_all().await?;

        if let Some(limit) = req.limit {
            products.truncate(limit);
        }

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        let products: Vec<ProductModel> = self.store.read_all().await?;

        // Linear scan, first match wins when duplicate ids exist.
        Ok(products.into_iter().find(|p| p.id == id))
    }
}
