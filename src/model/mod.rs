//! The in-memory activity store.
//! `ActivityStore` is cheap to clone and is handed to the web layer as part of `AppState`.
//! All mutations go through a single `RwLock` so a membership check and the following
//! append/remove happen atomically.

mod activity;
mod error;
mod seed;

pub use activity::{Activities, Activity};
pub use error::{StoreError, StoreResult};
pub use seed::seed_activities;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct ActivityStore {
    activities: Arc<RwLock<Activities>>,
    seed: Arc<Activities>,
    enforce_capacity: bool,
}

impl ActivityStore {
    /// Creates a store owning `activities`; `reset` restores this initial state.
    pub fn new(activities: Activities) -> Self {
        info!(
            "{:<12} - Initializing the activity store with {} activities",
            "store_init",
            activities.len()
        );
        Self {
            seed: Arc::new(activities.clone()),
            activities: Arc::new(RwLock::new(activities)),
            enforce_capacity: false,
        }
    }

    /// A store holding the school's default activities.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn with_capacity_enforcement(mut self, enforce_capacity: bool) -> Self {
        self.enforce_capacity = enforce_capacity;
        self
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    /// A snapshot of every activity in seed order.
    pub async fn list(&self) -> Activities {
        self.activities.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> StoreResult<Activity> {
        self.activities
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::ActivityNotFound(name.to_string()))
    }

    pub async fn signup(&self, name: &str, email: &str) -> StoreResult<()> {
        self.activities
            .write()
            .await
            .signup(name, email, self.enforce_capacity)?;
        debug!("{:<12} - '{email}' -> '{name}'", "signup");

        Ok(())
    }

    pub async fn unregister(&self, name: &str, email: &str) -> StoreResult<()> {
        self.activities.write().await.unregister(name, email)?;
        debug!("{:<12} - '{email}' <- '{name}'", "unregister");

        Ok(())
    }

    /// Throws away every signup and unregistration since the store was created.
    pub async fn reset(&self) {
        let mut activities = self.activities.write().await;
        *activities = Activities::clone(&self.seed);
        info!("{:<12} - Activity store reset to its initial state", "store_reset");
    }
}
