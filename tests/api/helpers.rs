//! Spawns the application on a random port with its own activity store.
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::OnceLock,
};

use anyhow::Result;
use mergington::{
    config::get_or_init_config, init_dbg_tracing, model::ActivityStore, App, AppState,
};
use reqwest::Response;
use tokio::net::TcpListener;
use tracing::info;

pub const TEST_EMAIL: &str = "test@mergington.edu";

pub struct TestApp {
    pub addr: SocketAddr,
    pub http_client: reqwest::Client,
    pub store: ActivityStore,
}

/// Trying to bind port 0 will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

fn init_test_subscriber() {
    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        if std::env::var("TEST_LOG").is_ok() {
            init_dbg_tracing();
        }
    });
}

impl TestApp {
    /// Serves the app backed by the default seeded store.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_store(ActivityStore::seeded()).await
    }

    /// A helper function that tries to spawn a separate task to serve our app
    /// returning the *socket address* on which it is listening.
    pub async fn spawn_with_store(store: ActivityStore) -> Result<Self> {
        init_test_subscriber();

        let config = get_or_init_config();
        let app_state = AppState::new(store.clone(), config.static_config.clone());

        let listener = TcpListener::bind(TEST_SOCK_ADDR).await?;
        let addr = listener.local_addr()?;
        info!("Listening on {addr}");

        tokio::spawn(mergington::serve(App::new(app_state, listener)));

        Ok(TestApp {
            addr,
            http_client: reqwest::Client::new(),
            store,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    fn signup_url(&self, activity: &str) -> String {
        self.url(&format!(
            "/activities/{}/signup",
            activity.replace(' ', "%20")
        ))
    }

    pub async fn get_activities(&self) -> Result<serde_json::Value> {
        let res = self
            .http_client
            .get(self.url("/activities"))
            .send()
            .await?
            .error_for_status()?;

        Ok(res.json().await?)
    }

    pub async fn post_signup(&self, activity: &str, email: &str) -> Result<Response> {
        let res = self
            .http_client
            .post(self.signup_url(activity))
            .query(&[("email", email)])
            .send()
            .await?;

        Ok(res)
    }

    pub async fn delete_signup(&self, activity: &str, email: &str) -> Result<Response> {
        let res = self
            .http_client
            .delete(self.signup_url(activity))
            .query(&[("email", email)])
            .send()
            .await?;

        Ok(res)
    }
}

/// Collects the participants of `activity` out of a `GET /activities` body.
pub fn participants(activities: &serde_json::Value, activity: &str) -> Vec<String> {
    activities[activity]["participants"]
        .as_array()
        .map(|ps| {
            ps.iter()
                .filter_map(|p| p.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
