use log::debug;
use tokio::runtime::Handle;

use crate::error::BridgeError;
use crate::ipc::{Invoke, InvokeArgs};
use crate::models::{ERROR_POPUP_COMMAND, ERROR_POPUP_MSG_ARG};

/// Forwards error messages to the host's `error_popup` command.
pub struct ErrorReporter<I> {
    invoker: I,
    runtime: Handle,
}

impl<I: Invoke> ErrorReporter<I> {
    pub fn new(invoker: I, runtime: Handle) -> Self {
        Self { invoker, runtime }
    }

    /// Build a reporter bound to the runtime the caller is running on.
    pub fn current(invoker: I) -> Result<Self, BridgeError> {
        let runtime = Handle::try_current().map_err(|_| BridgeError::NoRuntime)?;
        Ok(Self::new(invoker, runtime))
    }

    /// Fire-and-forget; see [`report_error`].
    pub fn report_error(&self, message: impl Into<String>) {
        report_error(&self.invoker, &self.runtime, message);
    }
}

/// Issue exactly one `error_popup` invocation carrying `message` and return immediately.
///
/// The response is observed on `runtime` and discarded, failures included.
pub fn report_error(invoker: &dyn Invoke, runtime: &Handle, message: impl Into<String>) {
    let args = InvokeArgs::new().with(ERROR_POPUP_MSG_ARG, message.into());
    let response = invoker.invoke(ERROR_POPUP_COMMAND, args);
    runtime.spawn(async move {
        if let Err(e) = response.await {
            debug!("error_popup not delivered: {e}");
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::future::{self, FutureExt};
    use parking_lot::Mutex;
    use serde_json::Value;

    use super::*;
    use crate::ipc::InvokeResponse;

    enum Response {
        Ok,
        Fail,
        Never,
    }

    struct RecordingInvoker {
        calls: Mutex<Vec<(String, InvokeArgs)>>,
        response: Response,
    }

    impl RecordingInvoker {
        fn new(response: Response) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response,
            })
        }

        fn calls(&self) -> Vec<(String, InvokeArgs)> {
            self.calls.lock().clone()
        }
    }

    impl Invoke for RecordingInvoker {
        fn invoke(&self, command: &str, args: InvokeArgs) -> InvokeResponse {
            self.calls.lock().push((command.to_string(), args));
            match self.response {
                Response::Ok => future::ready(Ok(Value::Null)).boxed(),
                Response::Fail => {
                    future::ready(Err(BridgeError::Handler("host gone".into()))).boxed()
                }
                Response::Never => future::pending().boxed(),
            }
        }
    }

    fn assert_single_popup(invoker: &RecordingInvoker, msg: &str) {
        let calls = invoker.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "error_popup");
        assert_eq!(calls[0].1, InvokeArgs::new().with("msg", msg));
    }

    #[tokio::test]
    async fn sends_one_error_popup() {
        let invoker = RecordingInvoker::new(Response::Ok);
        let reporter = ErrorReporter::current(invoker.clone()).unwrap();
        reporter.report_error("disk full");
        assert_single_popup(&invoker, "disk full");
    }

    #[tokio::test]
    async fn returns_without_waiting_for_host() {
        let invoker = RecordingInvoker::new(Response::Never);
        let reporter = ErrorReporter::current(invoker.clone()).unwrap();
        reporter.report_error("still here");
        assert_single_popup(&invoker, "still here");
    }

    #[tokio::test]
    async fn host_failure_is_dropped() {
        let invoker = RecordingInvoker::new(Response::Fail);
        let reporter = ErrorReporter::current(invoker.clone()).unwrap();
        reporter.report_error("boom");
        tokio::task::yield_now().await;
        assert_single_popup(&invoker, "boom");
    }

    #[tokio::test]
    async fn forwards_any_string_verbatim() {
        for msg in ["", "quote \" and \\ slash", "naïve 🎵\n\ttab", "\u{0}"] {
            let invoker = RecordingInvoker::new(Response::Ok);
            report_error(invoker.as_ref(), &Handle::current(), msg);
            assert_single_popup(&invoker, msg);
        }
    }

    #[tokio::test]
    async fn one_call_per_report() {
        let invoker = RecordingInvoker::new(Response::Ok);
        let reporter = ErrorReporter::current(invoker.clone()).unwrap();
        reporter.report_error("a");
        reporter.report_error("a");
        assert_eq!(invoker.calls().len(), 2);
    }

    #[test]
    fn current_requires_runtime() {
        let invoker = RecordingInvoker::new(Response::Ok);
        assert!(matches!(
            ErrorReporter::current(invoker),
            Err(BridgeError::NoRuntime)
        ));
    }
}
