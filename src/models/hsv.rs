//! Model a color with the HSV notation in the sRGB color space.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation in the
    /// sRGB color space.
    pub struct Hsv {
        /// The hue component of the color in degrees, in [0, 360).
        hue: Component,
        /// The saturation component of the color as a percentage.
        saturation: Component,
        /// The value component of the color as a percentage.
        value: Component,
    }
}
