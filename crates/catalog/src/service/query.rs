use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::FindAllProducts,
        response::{api::ApiResponse, product::ProductResponse},
    },
};
use async_trait::async_trait;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        info!("🔍 Finding all products | Limit: {:?}", req.limit);

        let started = Instant::now();

        let products = match self.query.find_all(req).await {
            Ok(products) => {
                self.metrics
                    .record(Method::Get, Status::Success, started.elapsed().as_secs_f64());
                products
            }
            Err(e) => {
                error!("❌ Failed to fetch products: {e:?}");
                self.metrics
                    .record(Method::Get, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        info!("✅ Found {} products", data.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let started = Instant::now();

        let product = match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.metrics
                    .record(Method::Get, Status::Success, started.elapsed().as_secs_f64());
                product
            }
            Ok(None) => {
                error!("❌ Product not found with ID: {id}");
                self.metrics
                    .record(Method::Get, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::NotFound("Product not found".to_string()));
            }
            Err(e) => {
                error!("❌ Storage error while finding product ID {id}: {e:?}");
                self.metrics
                    .record(Method::Get, Status::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Product retrieved: '{}' (ID: {id})", product.title);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product retrieved successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }
}
