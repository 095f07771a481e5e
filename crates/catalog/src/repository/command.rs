use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::FileStore, errors::RepositoryError};
use tracing::info;

#[derive(Clone)]
pub struct ProductCommandRepository {
    store: FileStore,
}

impl ProductCommandRepository {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        info!("🆕 Creating product '{}'", req.title);

        let _guard = self.store.write_guard().await;

        let mut products: Vec<ProductModel> = self.store.read_all().await?;

        // Not a running counter: the next id is one past the current maximum,
        // so deleting the highest record lets its id be reissued.
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        let product = ProductModel {
            id: next_id,
            title: req.title.clone(),
            description: req.description.clone(),
            code: req.code.clone(),
            price: req.price,
            status: req.status.unwrap_or(true),
            stock: req.stock,
            category: req.category.clone(),
            thumbnails: req.thumbnails.clone().unwrap_or_default(),
        };

        products.push(product.clone());
        self.store.write_all(&products).await?;

        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("update request is missing a record id".into()))?;

        info!("✏️ Updating product ID: {id}");

        let _guard = self.store.write_guard().await;

        let mut products: Vec<ProductModel> = self.store.read_all().await?;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        // Shallow merge: only the supplied fields overwrite stored values.
        if let Some(title) = &req.title {
            product.title = title.clone();
        }
        if let Some(description) = &req.description {
            product.description = description.clone();
        }
        if let Some(code) = &req.code {
            product.code = code.clone();
        }
        if let Some(price) = req.price {
            product.price = price;
        }
        if let Some(status) = req.status {
            product.status = status;
        }
        if let Some(stock) = req.stock {
            product.stock = stock;
        }
        if let Some(category) = &req.category {
            product.category = category.clone();
        }
        if let Some(thumbnails) = &req.thumbnails {
            product.thumbnails = thumbnails.clone();
        }

        let updated = product.clone();
        self.store.write_all(&products).await?;

        Ok(updated)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting product ID: {id}");

        let _guard = self.store.write_guard().await;

        let mut products: Vec<ProductModel> = self.store.read_all().await?;

        if !products.iter().any(|p| p.id == id) {
            return Err(RepositoryError::NotFound);
        }

        // Removal is a filter: every record sharing the id goes, not just the
        // first match, since direct file edits can introduce duplicates.
        products.retain(|p| p.id != id);
        self.store.write_all(&products).await?;

        Ok(())
    }
}
