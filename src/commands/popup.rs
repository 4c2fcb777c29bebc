use log::{error, info};

use crate::models::{Popup, ERROR_POPUP_TITLE};

/// Displays popups to the user. Implementations must not block the caller.
pub trait PopupSink: Send + Sync {
    fn show(&self, popup: Popup);
}

/// Sink for hosts without a window: the popup only reaches the log.
#[derive(Debug, Default)]
pub struct LogPopupSink;

impl PopupSink for LogPopupSink {
    fn show(&self, popup: Popup) {
        error!("{}: {}", popup.title, popup.message);
    }
}

/// Host side of the `error_popup` command.
pub fn error_popup(sink: &dyn PopupSink, msg: String) {
    info!("Error popup: {msg}");
    sink.show(Popup {
        title: ERROR_POPUP_TITLE.to_string(),
        message: msg,
    });
}

#[cfg(test)]
pub(crate) mod tests {
    use parking_lot::Mutex;

    use super::*;

    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub(crate) shown: Mutex<Vec<Popup>>,
    }

    impl PopupSink for RecordingSink {
        fn show(&self, popup: Popup) {
            self.shown.lock().push(popup);
        }
    }

    #[test]
    fn shows_error_titled_popup() {
        let sink = RecordingSink::default();
        error_popup(&sink, "disk full".into());
        assert_eq!(
            *sink.shown.lock(),
            vec![Popup {
                title: "Error".into(),
                message: "disk full".into(),
            }]
        );
    }

    #[test]
    fn empty_message_still_shown() {
        let sink = RecordingSink::default();
        error_popup(&sink, String::new());
        assert_eq!(sink.shown.lock()[0].message, "");
    }

    #[test]
    fn log_sink_accepts_popup() {
        LogPopupSink.show(Popup {
            title: "Error".into(),
            message: "logged".into(),
        });
    }
}
