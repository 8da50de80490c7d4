//! Models are structs that represent a color in a specified color space or
//! notation. They are a type safe way to convert between the spaces the
//! mixer and the harmony generator work in.
//!
//! Every model converts through sRGB, which is also what hex notation
//! encodes. CIE-Lab and CIE-Lch additionally pass through CIE-XYZ.
//!
//! ```rust
//! use tincture::models::{Model, Rgb};
//! let lch = Rgb::new(0.0, 0.0, 255.0).to_lab().to_polar();
//! let back = lch.to_rectangular().to_rgb();
//! assert_eq!(back.to_hex().to_string(), "#0000FF");
//! ```

use crate::{color::Components, hex::Hex};

mod hsl;
mod hsv;
mod lab;
mod rgb;
mod xyz;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::{Lab, Lch};
pub use rgb::Rgb;
pub use xyz::{ToXyz, Xyz, D65};

/// A trait implemented for color models that can be converted to and from
/// sRGB, and through it to and from hex notation.
pub trait Model: Copy + From<Components> + Into<Components> {
    /// Convert an sRGB color to this model.
    fn from_rgb(rgb: &Rgb) -> Self;

    /// Convert this model to sRGB. The result may lie outside [0, 255].
    fn to_rgb(&self) -> Rgb;

    /// Convert this model to hex notation, clamping to the display range.
    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }
}
