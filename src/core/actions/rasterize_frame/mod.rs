pub mod ports;
pub mod rasterize_frame;
pub mod supersample;
