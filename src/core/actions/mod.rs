pub mod rasterize_frame;
pub mod zoom_sequence;
