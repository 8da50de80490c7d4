//! Mixing two colors by interpolating their channels in one of several
//! spaces.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    color::{Component, Components},
    error::{Error, Result},
    hex::{Hex, IntoHex},
    math::{lerp, normalize_hue, quadratic_bezier, shortest_hue_path},
    models::{Hsl, Hsv, Lab, Lch, Model, Rgb},
};

/// The space, or metric, two colors are mixed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MixMode {
    /// Linear in sRGB.
    #[default]
    Rgb,
    /// Linear in HSL, taking the shorter way around the hue circle.
    Hsl,
    /// Linear in HSV, taking the shorter way around the hue circle.
    Hsv,
    /// Linear in CIE-Lab.
    Lab,
    /// Linear in CIE-Lch, taking the shorter way around the hue circle.
    Lch,
    /// Linear over `ln(channel + 1)` of each sRGB channel.
    Log,
    /// Linear over the square root of each sRGB channel.
    Parabolic,
    /// A quadratic Bezier curve in sRGB whose control point is pulled away
    /// from the midpoint by the aperture.
    Quadratic,
}

impl MixMode {
    /// Every mode, in presentation order.
    pub const ALL: [MixMode; 8] = [
        MixMode::Rgb,
        MixMode::Hsl,
        MixMode::Hsv,
        MixMode::Lab,
        MixMode::Lch,
        MixMode::Log,
        MixMode::Parabolic,
        MixMode::Quadratic,
    ];

    /// The lower case name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            MixMode::Rgb => "rgb",
            MixMode::Hsl => "hsl",
            MixMode::Hsv => "hsv",
            MixMode::Lab => "lab",
            MixMode::Lch => "lch",
            MixMode::Log => "log",
            MixMode::Parabolic => "parabolic",
            MixMode::Quadratic => "quadratic",
        }
    }

    /// Returns true if the mode interpolates over a hue angle.
    pub fn has_hue(&self) -> bool {
        self.hue_channel().is_some()
    }

    /// The index of the hue channel in the vectors of this mode.
    fn hue_channel(&self) -> Option<usize> {
        match self {
            MixMode::Hsl | MixMode::Hsv => Some(0),
            MixMode::Lch => Some(2),
            _ => None,
        }
    }

    /// Transform a color into the channels this mode interpolates over.
    fn forward(self, hex: Hex) -> Components {
        let rgb = hex.to_rgb().to_components();

        match self {
            MixMode::Rgb | MixMode::Quadratic => rgb,
            MixMode::Hsl => hex.to_hsl().to_components(),
            MixMode::Hsv => hex.to_hsv().to_components(),
            MixMode::Lab => hex.to_lab().to_components(),
            MixMode::Lch => hex.to_lch().to_components(),
            MixMode::Log => rgb.map(|v| (v + 1.0).ln()),
            MixMode::Parabolic => rgb.map(|v| v.sqrt()),
        }
    }

    /// The inverse of [`MixMode::forward`].
    fn inverse(self, vector: Components) -> Hex {
        match self {
            MixMode::Rgb | MixMode::Quadratic => Rgb::from(vector).to_hex(),
            MixMode::Hsl => Hsl::from(vector).to_hex(),
            MixMode::Hsv => Hsv::from(vector).to_hex(),
            MixMode::Lab => Lab::from(vector).to_hex(),
            MixMode::Lch => Lch::from(vector).to_hex(),
            MixMode::Log => Rgb::from(vector.map(|v| v.exp() - 1.0)).to_hex(),
            MixMode::Parabolic => Rgb::from(vector.map(|v| v * v)).to_hex(),
        }
    }
}

impl fmt::Display for MixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MixMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MixMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownMixMode(s.to_owned()))
    }
}

/// An interpolation between two colors in a given [`MixMode`]. Both
/// endpoints are transformed once, so sampling many points along the way is
/// cheap.
#[derive(Clone, Debug)]
pub struct Interpolation {
    start: Components,
    end: Components,
    mode: MixMode,
    aperture: Component,
}

impl Interpolation {
    /// Create a new interpolation from `start` to `end` with an aperture of
    /// 0.5.
    pub fn new(start: Hex, end: Hex, mode: MixMode) -> Self {
        let mut start = mode.forward(start);
        let mut end = mode.forward(end);

        if let Some(hue) = mode.hue_channel() {
            (start[hue], end[hue]) = shortest_hue_path(start[hue], end[hue]);
        }

        Self {
            start,
            end,
            mode,
            aperture: 0.5,
        }
    }

    /// Set how far the control point of [`MixMode::Quadratic`] is pulled
    /// away from the midpoint. 0.5 leaves it on the straight line, 0 and 1
    /// move it by the full midpoint value down or up. Other modes ignore it.
    pub fn with_aperture(mut self, aperture: Component) -> Self {
        self.aperture = aperture;
        self
    }

    /// The mode this interpolation works in.
    pub fn mode(&self) -> MixMode {
        self.mode
    }

    /// Return the color at `t`, where 0 is the start and 1 the end.
    pub fn at(&self, t: Component) -> Hex {
        let mut vector = if self.mode == MixMode::Quadratic {
            let displacement = 1.0 + (self.aperture - 0.5) * 2.0;
            let control = ((self.start + self.end) * 0.5) * displacement;

            Components(
                quadratic_bezier(t, self.start.0, control.0, self.end.0),
                quadratic_bezier(t, self.start.1, control.1, self.end.1),
                quadratic_bezier(t, self.start.2, control.2, self.end.2),
            )
        } else {
            self.start.zip_with(&self.end, |a, b| lerp(a, b, t))
        };

        if let Some(hue) = self.mode.hue_channel() {
            vector[hue] = normalize_hue(vector[hue]);
        }

        self.mode.inverse(vector)
    }
}

/// Mix two colors, `ratio` 0 giving `start` and 1 giving `end`. `aperture`
/// only affects [`MixMode::Quadratic`]; pass 0.5 for a straight blend.
///
/// Ratios and apertures outside [0, 1] are accepted and extrapolate.
pub fn mix(
    start: impl IntoHex,
    end: impl IntoHex,
    ratio: Component,
    mode: MixMode,
    aperture: Component,
) -> Result<Hex> {
    let start = start.into_hex()?;
    let end = end.into_hex()?;

    if !(0.0..=1.0).contains(&ratio) || !(0.0..=1.0).contains(&aperture) {
        tracing::debug!(ratio, aperture, "mixing outside of [0, 1]");
    }

    let mixed = Interpolation::new(start, end, mode)
        .with_aperture(aperture)
        .at(ratio);

    tracing::trace!(%start, %end, ratio, %mode, %mixed, "mixed colors");

    Ok(mixed)
}
