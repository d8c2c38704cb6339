//! Request and response bodies of the activity API.

use serde::{Deserialize, Serialize};

/// `?email=...` query of the signup routes.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Body of a successful signup or unregistration.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Signed up {email} for {activity}"),
        }
    }

    pub fn unregistered(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Unregistered {email} from {activity}"),
        }
    }
}
