//! Blocking user-facing notifications.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Shows a message the user has to acknowledge.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert` in the browser; a log line anywhere else.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::warn!("alert: {message}");
        }
    }
}
