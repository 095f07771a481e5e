use crate::di::DependenciesInject;
use anyhow::Result;
use prometheus_client::registry::Registry;
use shared::{
    config::{Config, FileStore},
    utils::Metrics,
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub store: FileStore,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Metrics,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("store", &self.store)
            .finish()
    }
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Metrics::new();

        let store = FileStore::new(config.products_file.clone());

        let di_container = DependenciesInject::new(store.clone(), metrics.clone());

        metrics.register(&mut *registry.lock().await);

        Ok(Self {
            di_container,
            store,
            registry,
            metrics,
        })
    }
}
