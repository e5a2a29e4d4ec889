/// Core memory image logic for memkit
///
/// This module contains the frontend-independent pieces:
/// - Parameter validation and image geometry
/// - Random image generation
/// - Image serialization (hex, coe, mif)
/// - Program image conversion
pub mod convert;
pub mod generator;
pub mod image;
pub mod params;

pub use generator::gen_random_data;
pub use image::{ImageFormat, ImageWriter, PadAlign};
pub use params::MemParams;
