pub mod effects;
pub mod fragments;
pub mod storage;
pub mod style;
pub mod theme;

use chrono::Local;

// wall clock stamp for the viewer status line
pub fn local_time_stamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
