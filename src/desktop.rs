use std::sync::Arc;

use futures::future;
use tauri::{AppHandle, Listener, Wry};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::commands::popup::{self, PopupSink};
use crate::events::validate_event_name;
use crate::models::Popup;
use crate::unlisten::{make_deferred_unlisten, DeferredUnlisten, UnlistenFn};

/// Shows popups as native message dialogs. The dialog is shown asynchronously so
/// the invoking command returns straight away.
pub struct DialogPopupSink {
    app: AppHandle,
    title: Option<String>,
}

impl DialogPopupSink {
    pub fn new(app: AppHandle) -> Self {
        Self { app, title: None }
    }

    /// Override the title of every dialog shown through this sink.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl PopupSink for DialogPopupSink {
    fn show(&self, popup: Popup) {
        let title = self.title.clone().unwrap_or(popup.title);
        self.app
            .dialog()
            .message(popup.message)
            .title(title)
            .kind(MessageDialogKind::Error)
            .show(|_| {});
    }
}

#[tauri::command]
pub fn error_popup(msg: String, app: AppHandle) {
    popup::error_popup(&DialogPopupSink::new(app), msg);
}

/// Install the dialog plugin and the `error_popup` command.
///
/// `invoke_handler` replaces any handler set earlier; apps with their own commands
/// should list `desktop::error_popup` in their `generate_handler!` instead.
pub fn register(builder: tauri::Builder<Wry>) -> tauri::Builder<Wry> {
    builder
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![error_popup])
}

/// Listen on the app's global event channel and return the subscription as a
/// [`DeferredUnlisten`]. `handler` receives the raw JSON payload.
pub fn listen_deferred<F>(app: &AppHandle, event: &str, handler: F) -> DeferredUnlisten
where
    F: Fn(String) + Send + 'static,
{
    let subscription = validate_event_name(event).map(|()| {
        let id = app.listen(event.to_string(), move |e| handler(e.payload().to_string()));
        let app = app.clone();
        let unlisten: UnlistenFn = Arc::new(move || app.unlisten(id));
        unlisten
    });
    make_deferred_unlisten(future::ready(subscription))
}
