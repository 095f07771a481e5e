use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        response::{api::ApiResponse, product::ProductResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    params(FindAllProducts),
    responses(
        (status = 200, description = "List of products in stored order", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, description = "Malformed limit parameter"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Missing or invalid required field"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid field value"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    // Record identity comes from the path; a client-sent id is discarded.
    body.id = Some(id);
    let response = service.update_product(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = serde_json::Value),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_product(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Product deleted successfully"
        })),
    ))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{id}", get(get_product))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::di::DependenciesInject;
    use crate::model::Product as ProductModel;
    use shared::config::FileStore;
    use shared::utils::Metrics;

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

    async fn container_over(
        dir: &tempfile::TempDir,
        seeded: &[ProductModel],
    ) -> (DependenciesInject, FileStore) {
        let store = FileStore::new(dir.path().join("products.json"));
        store.write_all(seeded).await.expect("seed store");
        (
            DependenciesInject::new(store.clone(), Metrics::new()),
            store,
        )
    }

    #[tokio::test]
    async fn get_products_responds_ok_with_the_collection() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (di, _) = container_over(&dir, &[product(1, "a"), product(2, "b")]).await;

        let response = get_products(
            Extension(di.product_query.clone()),
            Query(FindAllProducts { limit: None }),
        )
        .await
        .expect("handler")
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_product_responds_not_found_for_absent_id() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (di, _) = container_over(&dir, &[product(1, "a")]).await;

        let result = get_product(Extension(di.product_query.clone()), Path(42)).await;

        let err = result.err().expect("should be an error");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_product_responds_created_and_persists() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (di, store) = container_over(&dir, &[product(1, "a")]).await;

        let body = CreateProductRequest {
            title: "B".to_string(),
            description: "d".to_string(),
            code: "c1".to_string(),
            price: 10.0,
            status: None,
            stock: 5,
            category: "x".to_string(),
            thumbnails: None,
        };

        let response = create_product(
            Extension(di.product_command.clone()),
            SimpleValidatedJson(body),
        )
        .await
        .expect("handler")
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);

        let all: Vec<ProductModel> = store.read_all().await.expect("read");
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].id, 2);
    }

    #[tokio::test]
    async fn update_product_ignores_a_client_sent_id() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (di, store) = container_over(&dir, &[product(1, "a")]).await;

        let body: UpdateProductRequest =
            serde_json::from_str(r#"{"id": 99, "price": 15.0}"#).expect("deserialize");

        let response = update_product(
            Extension(di.product_command.clone()),
            Path(1),
            SimpleValidatedJson(body),
        )
        .await
        .expect("handler")
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let all: Vec<ProductModel> = store.read_all().await.expect("read");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[0].price, 15.0);
    }

    #[tokio::test]
    async fn delete_product_responds_ok_then_get_is_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (di, _) = container_over(&dir, &[product(1, "a")]).await;

        let response = delete_product(Extension(di.product_command.clone()), Path(1))
            .await
            .expect("handler")
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let result = get_product(Extension(di.product_query.clone()), Path(1)).await;
        let err = result.err().expect("should be an error");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_product_responds_not_found_for_absent_id() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (di, _) = container_over(&dir, &[product(1, "a")]).await;

        let result = delete_product(Extension(di.product_command.clone()), Path(42)).await;

        let err = result.err().expect("should be an error");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
