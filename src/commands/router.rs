use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{self, FutureExt};
use parking_lot::RwLock;
use serde_json::Value;

use super::popup::{error_popup, PopupSink};
use super::task::spawn_blocking_result;
use crate::error::BridgeError;
use crate::ipc::{Invoke, InvokeArgs, InvokeResponse};
use crate::models::{ERROR_POPUP_COMMAND, ERROR_POPUP_MSG_ARG};

type Handler = Arc<dyn Fn(InvokeArgs) -> InvokeResponse + Send + Sync>;

/// In-process command dispatcher. Stands in for the webview bridge when the UI and the
/// host share a process.
#[derive(Default)]
pub struct CommandRouter {
    handlers: RwLock<HashMap<String, Handler>>,
}

impl CommandRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous handler.
    pub fn register<F>(&self, name: impl Into<String>, handler: F)
    where
        F: Fn(InvokeArgs) -> InvokeResponse + Send + Sync + 'static,
    {
        self.handlers.write().insert(name.into(), Arc::new(handler));
    }

    /// Register a synchronous handler that runs on the blocking pool.
    pub fn register_blocking<F>(&self, name: impl Into<String>, handler: F)
    where
        F: Fn(InvokeArgs) -> Result<Value, BridgeError> + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        self.register(name, move |args| {
            let handler = handler.clone();
            spawn_blocking_result(move || handler(args)).boxed()
        });
    }

    pub fn with_error_popup(self, sink: Arc<dyn PopupSink>) -> Self {
        self.register(ERROR_POPUP_COMMAND, move |args| {
            let result = match args.get_str(ERROR_POPUP_MSG_ARG) {
                Some(msg) => {
                    error_popup(sink.as_ref(), msg.to_string());
                    Ok(Value::Null)
                }
                None => Err(BridgeError::InvalidArgument {
                    command: ERROR_POPUP_COMMAND.to_string(),
                    name: ERROR_POPUP_MSG_ARG.to_string(),
                }),
            };
            future::ready(result).boxed()
        });
        self
    }

    pub fn commands(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Invoke for CommandRouter {
    fn invoke(&self, command: &str, args: InvokeArgs) -> InvokeResponse {
        // Clone the handler out so the lock is not held while it runs.
        let handler = self.handlers.read().get(command).cloned();
        match handler {
            Some(handler) => handler(args),
            None => future::ready(Err(BridgeError::UnknownCommand(command.to_string()))).boxed(),
        }
    }
}
