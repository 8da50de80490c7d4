//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    hex::Hex,
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz},
};

mod gamma {
    use crate::color::Component;

    /// Remove the sRGB transfer curve from a channel in [0, 1].
    pub fn to_linear_light(value: Component) -> Component {
        if value > 0.04045 {
            ((value + 0.055) / 1.055).powf(2.4)
        } else {
            value / 12.92
        }
    }

    /// Apply the sRGB transfer curve to a linear channel.
    pub fn to_gamma_encoded(value: Component) -> Component {
        if value > 0.0031308 {
            1.055 * value.powf(1.0 / 2.4) - 0.055
        } else {
            12.92 * value
        }
    }
}

tincture_macros::gen_model! {
    /// A color specified in the sRGB color space with channels in [0, 255].
    ///
    /// Channels are real numbers and may leave the display range while a
    /// color is being computed; they are only clamped when encoded as hex.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Rgb {
    /// Encode as `#RRGGBB`. Each channel is clamped to [0, 255] and rounded
    /// to the nearest integer.
    pub fn to_hex(&self) -> Hex {
        let channel = |v: Component| v.clamp(0.0, 255.0).round() as u8;
        Hex::from_bytes(channel(self.red), channel(self.green), channel(self.blue))
    }

    /// Return a color with each of the components clipped (clamped to
    /// [0, 255]).
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Self {
        self.to_components().map(|v| v.clamp(0.0, 255.0)).into()
    }

    /// Returns true if every channel is inside [0, 255].
    pub fn in_gamut(&self) -> bool {
        let range = 0.0..=255.0;
        range.contains(&self.red) && range.contains(&self.green) && range.contains(&self.blue)
    }

    /// The channels scaled to [0, 1] with the transfer curve removed.
    pub(crate) fn to_linear_light(&self) -> Components {
        self.to_components()
            .map(|v| gamma::to_linear_light(v / 255.0))
    }

    /// Build a color from linear light channels in [0, 1].
    pub(crate) fn from_linear_light(linear: Components) -> Self {
        linear
            .map(|v| gamma::to_gamma_encoded(v) * 255.0)
            .into()
    }
}

impl ToXyz for Rgb {
    fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        transform(&TO_XYZ, self.to_linear_light()).into()
    }
}

impl From<Xyz> for Rgb {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        Self::from_linear_light(transform(&FROM_XYZ, value.to_components()))
    }
}
