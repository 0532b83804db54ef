//! 工具
mod crop;
pub use crop::crop_to_aspect_range;
