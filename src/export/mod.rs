pub mod ppm;
pub mod scale;
