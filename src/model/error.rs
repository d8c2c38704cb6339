use strum_macros::AsRefStr;

pub type StoreResult<T> = core::result::Result<T, StoreError>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum StoreError {
    #[error("activity not found: {0}")]
    ActivityNotFound(String),
    #[error("'{email}' is already signed up for '{activity}'")]
    AlreadySignedUp { activity: String, email: String },
    #[error("'{email}' is not signed up for '{activity}'")]
    NotSignedUp { activity: String, email: String },
    #[error("'{activity}' reached its capacity of {capacity} participants")]
    ActivityFull { activity: String, capacity: u32 },
}
