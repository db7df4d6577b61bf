use log::{Level, LevelFilter};
use std::sync::OnceLock;

static INSTALLED: OnceLock<()> = OnceLock::new();

// Later calls only move the max level.
pub fn init(level: LevelFilter) {
    INSTALLED.get_or_init(|| {
        if let Err(err) = console_log::init_with_level(Level::Trace) {
            log::warn!("console logger not installed: {err}");
        }
    });
    log::set_max_level(level);
}
