//! Native browser dialogs used by conversation rename and delete.
//!
//! Outside the browser every prompt is dismissed: `prompt` yields `None`,
//! `confirm` yields `false`, and `alert` only logs.

/// Ask for text, pre-filled with `default`. `None` when cancelled.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.prompt_with_message_and_default(message, default).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, default);
        None
    }
}

pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

pub fn alert(message: &str) {
    log::warn!("alert: {message}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }
}
