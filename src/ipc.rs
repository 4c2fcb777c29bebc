use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::{Map, Value};

use crate::error::BridgeError;

/// Named arguments of one command invocation, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvokeArgs(Map<String, Value>);

impl InvokeArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for InvokeArgs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A dispatcher of named commands living on the other side of the process boundary.
///
/// The request is issued when `invoke` is called. The returned future only observes the
/// response, so dropping it does not cancel the command.
pub trait Invoke: Send + Sync {
    fn invoke(&self, command: &str, args: InvokeArgs) -> InvokeResponse;
}

/// Pending response of one [`Invoke::invoke`] call.
pub type InvokeResponse = BoxFuture<'static, Result<Value, BridgeError>>;

impl<T: Invoke + ?Sized> Invoke for Arc<T> {
    fn invoke(&self, command: &str, args: InvokeArgs) -> InvokeResponse {
        (**self).invoke(command, args)
    }
}

impl<T: Invoke + ?Sized> Invoke for Box<T> {
    fn invoke(&self, command: &str, args: InvokeArgs) -> InvokeResponse {
        (**self).invoke(command, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_keep_insertion_values() {
        let args = InvokeArgs::new().with("msg", "hello").with("count", 3);
        assert_eq!(args.len(), 2);
        assert_eq!(args.get_str("msg"), Some("hello"));
        assert_eq!(args.get_str("count"), None);
        assert_eq!(args.get("count"), Some(&Value::from(3)));
    }

    #[test]
    fn args_serialize_as_object() {
        let args = InvokeArgs::new().with("msg", "");
        assert_eq!(args.into_value(), serde_json::json!({ "msg": "" }));
    }

    #[test]
    fn empty_args() {
        assert!(InvokeArgs::new().is_empty());
    }
}
