use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{api::ApiResponse, product::ProductResponse},
    },
};
use async_trait::async_trait;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, metrics: Metrics) -> Self {
        Self { command, metrics }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆕 Creating product '{}'", req.title);

        let started = Instant::now();

        let product = match self.command.create_product(req).await {
            Ok(product) => {
                self.metrics
                    .record(Method::Post, Status::Success, started.elapsed().as_secs_f64());
                product
            }
            Err(e) => {
                error!("❌ Failed to create product: {e:?}");
                self.metrics
                    .record(Method::Post, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Product created: '{}' (ID: {})", product.title, product.id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("✏️ Updating product ID: {:?}", req.id);

        let started = Instant::now();

        let product = match self.command.update_product(req).await {
            Ok(product) => {
                self.metrics
                    .record(Method::Put, Status::Success, started.elapsed().as_secs_f64());
                product
            }
            Err(RepositoryError::NotFound) => {
                error!("❌ Product not found with ID: {:?}", req.id);
                self.metrics
                    .record(Method::Put, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::NotFound("Product not found".to_string()));
            }
            Err(e) => {
                error!("❌ Failed to update product: {e:?}");
                self.metrics
                    .record(Method::Put, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Product updated: '{}' (ID: {})", product.title, product.id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting product ID: {id}");

        let started = Instant::now();

        match self.command.delete_product(id).await {
            Ok(()) => {
                self.metrics
                    .record(Method::Delete, Status::Success, started.elapsed().as_secs_f64());
            }
            Err(RepositoryError::NotFound) => {
                error!("❌ Product not found with ID: {id}");
                self.metrics
                    .record(Method::Delete, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::NotFound("Product not found".to_string()));
            }
            Err(e) => {
                error!("❌ Failed to delete product: {e:?}");
                self.metrics
                    .record(Method::Delete, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        }

        info!("✅ Product deleted (ID: {id})");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product deleted successfully".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product as ProductModel;
    use crate::repository::ProductCommandRepository;
    use shared::config::FileStore;
    use std::sync::Arc;

    fn product(id: i32, title: &str) -> ProductModel {
        ProductModel {
            id,
            title: title.to_string(),
            description: "desc".to_string(),
            code: format!("C-{id}"),
            price: 10.0,
            status: true,
            stock: 5,
            category: "misc".to_string(),
            thumbnails: Vec::new(),
        }
    }

    fn create_request(title: &str) -> CreateProductRequest {
        CreateProductRequest {
            title: title.to_string(),
            description: "desc".to_string(),
            code: "C-NEW".to_string(),
            price: 10.0,
            status: None,
            stock: 5,
            category: "misc".to_string(),
            thumbnails: None,
        }
    }

    async fn service_over(
        dir: &tempfile::TempDir,
        seeded: &[ProductModel],
    ) -> ProductCommandService {
        let store = FileStore::new(dir.path().join("products.json"));
        store.write_all(seeded).await.expect("seed store");
        ProductCommandService::new(
            Arc::new(ProductCommandRepository::new(store)),
            Metrics::new(),
        )
    }

    #[tokio::test]
    async fn create_returns_the_created_record_in_the_envelope() {
        let dir = tempfile::tempdir().expect("temp dir");
        let service = service_over(&dir, &[product(1, "a")]).await;

        let response = service
            .create_product(&create_request("new"))
            .await
            .expect("create");

        assert_eq!(response.status, "success");
        assert_eq!(response.data.id, 2);
        assert!(response.data.status);
    }

    #[tokio::test]
    async fn update_miss_maps_to_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let service = service_over(&dir, &[product(1, "a")]).await;

        let req = UpdateProductRequest {
            id: Some(42),
            title: None,
            description: None,
            code: None,
            price: Some(12.0),
            status: None,
            stock: None,
            category: None,
            thumbnails: None,
        };

        let result = service.update_product(&req).await;

        assert!(matches!(
            result,
            Err(ServiceError::NotFound(msg)) if msg == "Product not found"
        ));
    }

    #[tokio::test]
    async fn delete_miss_maps_to_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let service = service_over(&dir, &[product(1, "a")]).await;

        let result = service.delete_product(42).await;

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_hit_returns_a_confirmation_envelope() {
        let dir = tempfile::tempdir().expect("temp dir");
        let service = service_over(&dir, &[product(1, "a")]).await;

        let response = service.delete_product(1).await.expect("delete");

        assert_eq!(response.message, "Product deleted successfully");
    }
}
