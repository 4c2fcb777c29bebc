use serde::{Deserialize, Serialize};

/// Host command that shows an error dialog.
pub const ERROR_POPUP_COMMAND: &str = "error_popup";
/// Name of the single argument carried by [`ERROR_POPUP_COMMAND`].
pub const ERROR_POPUP_MSG_ARG: &str = "msg";
pub const ERROR_POPUP_TITLE: &str = "Error";

/// Emitted by the host once per menu item click, payload is the item id.
pub const MENU_EVENT: &str = "menu";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPopupArgs {
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Popup {
    pub title: String,
    pub message: String,
}

// --- Event models ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub payload: serde_json::Value,
}
