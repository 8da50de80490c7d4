//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color in degrees, in [0, 360).
        hue: Component,
        /// The saturation component of the color as a percentage.
        saturation: Component,
        /// The lightness component of the color as a percentage.
        lightness: Component,
    }
}

impl Hsl {
    /// The same color with a different hue.
    pub fn with_hue(&self, hue: Component) -> Self {
        Self { hue, ..*self }
    }

    /// The same color with a different lightness.
    pub fn with_lightness(&self, lightness: Component) -> Self {
        Self { lightness, ..*self }
    }
}
