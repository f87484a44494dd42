//! One-shot blocking acknowledgments shown to the user

/// Show a browser alert; falls back to the log when there is no window
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(win) => {
            if let Err(e) = win.alert_with_message(message) {
                log::warn!("Failed to show alert {:?}: {:?}", message, e);
            }
        }
        None => log::warn!("No window to show alert: {}", message),
    }
}
