//! Application constants and configuration

pub const APP_NAME: &str = "Click Counter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_NAME: &str = "click-counter.log";
pub const DEFAULT_LOG_FILTER: &str = "info,click_counter=debug";

pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [420.0, 320.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [340.0, 260.0];
pub const ICON_SIZE: u32 = 64;
