use thiserror::Error;

/// Failure talking to the remote catalog.
///
/// The feed flattens all of these into one display string; the variants
/// exist so the log records which stage failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(String),

    #[error("catalog responded with status {0}")]
    Status(u16),

    #[error("malformed catalog payload: {0}")]
    Decode(String),

    #[error("catalog request ended without a response")]
    Disconnected,
}

impl FeedError {
    /// Message stored in `FeedState::error` and shown to the user.
    pub fn user_message(&self) -> String {
        format!("Failed to load products: {}", self)
    }
}

/// Rejected contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email address must contain '@'")]
    InvalidEmail,

    #[error("a message is already being sent")]
    AlreadySubmitting,
}
