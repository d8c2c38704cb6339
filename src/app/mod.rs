use std::{net::SocketAddr, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::{AppConfig, StaticConfig},
    model::ActivityStore,
    Result,
};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    /// Seeds a fresh `ActivityStore` and binds the listener described by `config`.
    pub async fn build_from_config(config: AppConfig) -> Result<Self> {
        let store = ActivityStore::seeded()
            .with_capacity_enforcement(config.activity_config.enforce_capacity);
        let app_state = AppState::new(store, config.static_config);

        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener);
        Ok(app)
    }
}

pub struct InternalState {
    pub store: ActivityStore,
    pub static_config: StaticConfig,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(store: ActivityStore, static_config: StaticConfig) -> Self {
        AppState(Arc::new(InternalState {
            store,
            static_config,
        }))
    }
}
