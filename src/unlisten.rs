//! Deferred unlisten handles.
//!
//! Subscribing to an event yields its unlisten capability asynchronously. UI code usually
//! wants a plain callable it can stash and fire later, so [`make_deferred_unlisten`] wraps
//! the pending capability into one.

use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::error::BridgeError;

/// Cancels one event subscription when called.
pub type UnlistenFn = Arc<dyn Fn() + Send + Sync>;

type PendingUnlisten = Shared<BoxFuture<'static, Result<UnlistenFn, BridgeError>>>;

/// A pending [`UnlistenFn`] that can be invoked before or after it resolves.
///
/// The wrapped future is resolved once and shared by every clone. Each call to
/// [`unlisten`](Self::unlisten) invokes the resolved capability again; overlapping calls
/// made before resolution are not deduplicated.
#[derive(Clone)]
pub struct DeferredUnlisten {
    pending: PendingUnlisten,
}

impl DeferredUnlisten {
    /// Wait for the capability, then call it once.
    pub fn unlisten(&self) -> impl Future<Output = Result<(), BridgeError>> + Send + 'static {
        let pending = self.pending.clone();
        async move {
            let unlisten = pending.await?;
            unlisten();
            Ok(())
        }
    }

    /// Whether the underlying future has already produced a capability or an error.
    pub fn is_resolved(&self) -> bool {
        self.pending.peek().is_some()
    }

    /// The zero-argument callable form.
    pub fn into_fn(
        self,
    ) -> impl Fn() -> BoxFuture<'static, Result<(), BridgeError>> + Send + Sync + Clone {
        move || self.unlisten().boxed()
    }
}

pub fn make_deferred_unlisten<F>(pending: F) -> DeferredUnlisten
where
    F: Future<Output = Result<UnlistenFn, BridgeError>> + Send + 'static,
{
    DeferredUnlisten {
        pending: pending.boxed().shared(),
    }
}

/// Same as [`make_deferred_unlisten`] for subscriptions that cannot fail.
pub fn make_deferred_unlisten_infallible<F>(pending: F) -> DeferredUnlisten
where
    F: Future<Output = UnlistenFn> + Send + 'static,
{
    make_deferred_unlisten(pending.map(Ok))
}

pub use self::make_deferred_unlisten as extract_unlistener;
