//! Each color space/notation is modeled with its own type. Conversions are
//! only implemented between neighbouring models and everything meets in
//! sRGB, which is what hex notation encodes:
//!
//! ```text
//! Hex <-> Rgb <-> Hsl
//!          |  <-> Hsv
//!          +  <-> Xyz <-> Lab <-> Lch
//! ```
//!
//! Hue is undefined for achromatic colors; the cylindrical conversions
//! report it as 0 degrees with 0 saturation.

use crate::{
    color::{Component, Components},
    models::{Hsl, Hsv, Lab, Lch, Model, Rgb, ToXyz, Xyz},
    math::normalize_hue,
};

impl Rgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }

    /// Convert a color specified in the sRGB color space to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(&self.to_components()).into()
    }

    /// Convert a color specified in the sRGB color space to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        Lab::from(self.to_xyz())
    }
}

impl Model for Rgb {
    fn from_rgb(rgb: &Rgb) -> Self {
        *rgb
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }
}

impl Model for Hsl {
    fn from_rgb(rgb: &Rgb) -> Self {
        rgb.to_hsl()
    }

    fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }
}

impl Model for Hsv {
    fn from_rgb(rgb: &Rgb) -> Self {
        rgb.to_hsv()
    }

    fn to_rgb(&self) -> Rgb {
        util::hsv_to_rgb(&self.to_components()).into()
    }
}

impl Model for Xyz {
    fn from_rgb(rgb: &Rgb) -> Self {
        rgb.to_xyz()
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(*self)
    }
}

impl Model for Lab {
    fn from_rgb(rgb: &Rgb) -> Self {
        rgb.to_lab()
    }

    /// Colors outside of sRGB are clipped to the display range.
    fn to_rgb(&self) -> Rgb {
        Rgb::from(self.to_xyz()).clip()
    }
}

impl Model for Lch {
    fn from_rgb(rgb: &Rgb) -> Self {
        rgb.to_lab().to_polar()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_rectangular().to_rgb()
    }
}

mod util {
    use super::*;

    /// Calculate the hue in degrees from RGB components in [0, 1] and return
    /// it along with the min and max RGB values.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Place `chroma` and the secondary component `x` into the channels
    /// belonging to the 60 degree sextant of `hue`.
    fn sextant(hue: Component, chroma: Component, x: Component) -> Components {
        match (hue / 60.0) as u8 {
            0 => Components(chroma, x, 0.0),
            1 => Components(x, chroma, 0.0),
            2 => Components(0.0, chroma, x),
            3 => Components(0.0, x, chroma),
            4 => Components(x, 0.0, chroma),
            _ => Components(chroma, 0.0, x),
        }
    }

    fn secondary(hue: Component, chroma: Component) -> Component {
        chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs())
    }

    /// Convert from RGB in [0, 255] to HSL.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(&from.map(|v| v / 255.0));

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        Components(hue, saturation * 100.0, lightness * 100.0)
    }

    /// Convert from HSL to RGB in [0, 255].
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0);
        let saturation = from.1 / 100.0;
        let lightness = from.2 / 100.0;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let m = lightness - chroma / 2.0;

        sextant(hue, chroma, secondary(hue, chroma)).map(|v| (v + m) * 255.0)
    }

    /// Convert from RGB in [0, 255] to HSV.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(&from.map(|v| v / 255.0));

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        Components(hue, saturation * 100.0, max * 100.0)
    }

    /// Convert from HSV to RGB in [0, 255].
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0);
        let saturation = from.1 / 100.0;
        let value = from.2 / 100.0;

        let chroma = value * saturation;
        let m = value - chroma;

        sextant(hue, chroma, secondary(hue, chroma)).map(|v| (v + m) * 255.0)
    }
}
