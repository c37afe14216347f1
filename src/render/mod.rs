/// CPU rasterization of a view into RGBA8 frames.
pub mod cpu;
