use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    repository::{ProductCommandRepository, ProductQueryRepository},
    service::{ProductCommandService, ProductQueryService},
};
use shared::{config::FileStore, utils::Metrics};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(store: FileStore, metrics: Metrics) -> Self {
        let product_query_repo = Arc::new(ProductQueryRepository::new(store.clone()));
        let product_command_repo = Arc::new(ProductCommandRepository::new(store));

        let product_query = Arc::new(ProductQueryService::new(
            product_query_repo,
            metrics.clone(),
        )) as DynProductQueryService;

        let product_command = Arc::new(ProductCommandService::new(
            product_command_repo,
            metrics,
        )) as DynProductCommandService;

        Self {
            product_query,
            product_command,
        }
    }
}
