use crate::error::BridgeError;

/// Run a synchronous command handler on Tokio's blocking pool and fold
/// join/cancellation errors into [`BridgeError::Handler`].
pub async fn spawn_blocking_result<F, T>(task: F) -> Result<T, BridgeError>
where
    F: FnOnce() -> Result<T, BridgeError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| BridgeError::Handler(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_result_through() {
        assert_eq!(spawn_blocking_result(|| Ok(7)).await, Ok(7));
        assert_eq!(
            spawn_blocking_result::<_, ()>(|| Err(BridgeError::NoRuntime)).await,
            Err(BridgeError::NoRuntime)
        );
    }

    #[tokio::test]
    async fn panic_becomes_handler_error() {
        let result = spawn_blocking_result::<_, ()>(|| panic!("handler crashed")).await;
        assert!(matches!(result, Err(BridgeError::Handler(_))));
    }
}
