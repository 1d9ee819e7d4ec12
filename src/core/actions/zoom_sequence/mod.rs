pub mod ports;
pub mod run_zoom_sequence;
pub mod zoom_schedule;
