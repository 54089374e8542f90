use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    cart::CartStore,
    catalog::Catalog,
    checkout::CheckoutFlow,
    config::AppConfig,
    credentials::CredentialTable,
    session::SessionStore,
    storage::{FileStorage, MemoryStorage, Storage},
};

/// One browser profile: durable cart and identity, tab-scoped order draft.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub credentials: Arc<CredentialTable>,
    pub cart: Arc<Mutex<CartStore>>,
    pub session: Arc<Mutex<SessionStore>>,
    pub checkout: Arc<CheckoutFlow>,
    pub simulated_latency: Duration,
}

impl AppState {
    pub fn new(durable: Arc<dyn Storage>, session_storage: Arc<dyn Storage>) -> Self {
        Self {
            catalog: Arc::new(Catalog::builtin()),
            credentials: Arc::new(CredentialTable::builtin()),
            cart: Arc::new(Mutex::new(CartStore::load(durable.clone()))),
            session: Arc::new(Mutex::new(SessionStore::load(durable))),
            checkout: Arc::new(CheckoutFlow::new(session_storage)),
            simulated_latency: Duration::ZERO,
        }
    }

    /// Fresh in-memory profile.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), Arc::new(MemoryStorage::new()))
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let durable = FileStorage::open(&config.storage_dir)?;
        tracing::info!(dir = %durable.dir().display(), "durable storage opened");
        Ok(Self::new(Arc::new(durable), Arc::new(MemoryStorage::new()))
            .with_latency(config.simulated_latency))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// Id of the logged-in user, if any.
    pub async fn current_user_id(&self) -> Option<String> {
        self.session.lock().await.current().map(|user| user.id.clone())
    }

    pub async fn simulate_latency(&self) {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }
    }
}
