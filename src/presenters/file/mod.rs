pub mod frame_path;
pub mod png;
pub mod ppm;
