//! Back-to-home navigation with a browser-history-aware fallback.
//!
//! The decision logic is a pure function of the current path and the
//! history depth; the browser side is gated behind `hydrate`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// What the Back to Home control should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackAction {
    /// Already on the root route: smooth-scroll to the top.
    ScrollToTop,
    /// Enough history to step back within the app.
    HistoryBack,
    /// Shallow history (direct entry): navigate to the root route.
    GoHome,
}

/// Decide the back-home behavior from the current path and history depth.
pub fn back_action(pathname: &str, history_len: u32) -> BackAction {
    if pathname == "/" {
        return BackAction::ScrollToTop;
    }
    if history_len > 2 {
        BackAction::HistoryBack
    } else {
        BackAction::GoHome
    }
}

/// Run the back-home behavior in the browser.
pub fn back_home() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pathname = window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_owned());
        let history_len = window
            .history()
            .ok()
            .and_then(|h| h.length().ok())
            .unwrap_or(0);

        match back_action(&pathname, history_len) {
            BackAction::ScrollToTop => {
                let opts = web_sys::ScrollToOptions::new();
                opts.set_top(0.0);
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&opts);
            }
            BackAction::HistoryBack => {
                if let Ok(history) = window.history() {
                    let _ = history.back();
                }
            }
            BackAction::GoHome => {
                let _ = window.location().set_href("/");
            }
        }
    }
}
