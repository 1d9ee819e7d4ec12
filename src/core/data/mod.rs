pub mod canvas;
pub mod colour;
pub mod complex;
pub mod frame_buffer;
pub mod viewport;
