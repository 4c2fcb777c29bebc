//! Glue between the tagger UI and its host process.
//!
//! [`report_error`] forwards messages to the host's `error_popup` command through an
//! injected [`Invoke`] bridge without waiting for it. [`make_deferred_unlisten`] turns a
//! pending event unsubscription into a callable that can be fired later, any number of
//! times.

pub mod commands;
pub mod error;
pub mod events;
pub mod ipc;
pub mod models;
pub mod reporter;
pub mod unlisten;

#[cfg(feature = "desktop")]
pub mod desktop;

pub use commands::popup::{LogPopupSink, PopupSink};
pub use commands::router::CommandRouter;
pub use error::BridgeError;
pub use events::EventBus;
pub use ipc::{Invoke, InvokeArgs};
pub use reporter::{report_error, ErrorReporter};
pub use unlisten::{extract_unlistener, make_deferred_unlisten, DeferredUnlisten, UnlistenFn};
