use thiserror::Error;

/// Failures crossing the UI/host bridge.
///
/// `Clone` because a single pending unlisten result is handed to every caller of a
/// [`DeferredUnlisten`](crate::unlisten::DeferredUnlisten).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command {command} expects a string argument `{name}`")]
    InvalidArgument { command: String, name: String },

    #[error("Invalid event name: {0:?}")]
    InvalidEvent(String),

    #[error("Command failed: {0}")]
    Handler(String),

    #[error("Failed to listen: {0}")]
    Listen(String),

    #[error("No Tokio runtime available")]
    NoRuntime,
}

impl From<BridgeError> for String {
    fn from(err: BridgeError) -> Self {
        err.to_string()
    }
}
