pub mod download;
pub mod storage;
pub mod time;

pub use download::trigger_csv_download;

/// Full-page navigation, used for auth redirects so no stale reactive state
/// survives the transition.
pub fn redirect_to(path: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_href(path) {
            log::error!("Failed to redirect to {path}: {err:?}");
        }
    }
}
