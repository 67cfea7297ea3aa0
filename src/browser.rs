//! Browser Window Helpers
//!
//! Blocking alert for action notices and the print dialog for reports.

use crate::actions::{Notice, NoticeKind};

pub fn alert(notice: &Notice) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window to alert: {}", notice.message);
        return;
    };
    if notice.kind == NoticeKind::Error {
        log::warn!("Showing error notice: {}", notice.message);
    }
    if let Err(e) = window.alert_with_message(&notice.message) {
        log::error!("window.alert failed: {:?}", e);
    }
}

pub fn print_page() {
    match web_sys::window().map(|window| window.print()) {
        Some(Ok(())) => {}
        Some(Err(e)) => log::error!("window.print failed: {:?}", e),
        None => log::warn!("No window to print"),
    }
}
