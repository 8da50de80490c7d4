//! Sequences of evenly spaced colors between two endpoints.

use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    error::Result,
    hex::{Hex, IntoHex},
    interpolate::{Interpolation, MixMode},
};

/// The ratios `i / (n + 1)` for `i` in `1..=n`. The endpoints 0 and 1 are
/// never included and `n == 0` yields nothing.
pub fn step_ratios(n: usize) -> impl Iterator<Item = Component> {
    let divisor = n as Component + 1.0;
    (1..=n).map(move |i| i as Component / divisor)
}

/// How step ratios are remapped before they are used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Use the ratio as is.
    #[default]
    Linear,
    /// `ln(r * (e - 1) + 1)`, which maps [0, 1] onto itself but spends more
    /// of the range near 0.
    Log,
}

impl Scale {
    /// Remap `ratio`.
    pub fn apply(&self, ratio: Component) -> Component {
        match self {
            Scale::Linear => ratio,
            Scale::Log => (ratio * (std::f64::consts::E - 1.0) + 1.0).ln(),
        }
    }
}

/// Mix two colors linearly in sRGB. This is the default mixing function for
/// [`steps`].
pub fn rgb_mix(start: Hex, end: Hex, ratio: Component) -> Hex {
    Interpolation::new(start, end, MixMode::Rgb).at(ratio)
}

/// Generate `n` colors between `start` and `end`, excluding both, by calling
/// `mix` at each ratio from [`step_ratios`].
pub fn steps(
    start: impl IntoHex,
    end: impl IntoHex,
    n: usize,
    mix: impl Fn(Hex, Hex, Component) -> Hex,
) -> Result<Vec<Hex>> {
    let start = start.into_hex()?;
    let end = end.into_hex()?;

    let colors: Vec<Hex> = step_ratios(n).map(|ratio| mix(start, end, ratio)).collect();

    tracing::trace!(%start, %end, n, "generated steps");

    Ok(colors)
}

/// Like [`steps`], but bracketed by `start` and `end` themselves.
pub fn gradient(
    start: impl IntoHex,
    end: impl IntoHex,
    n: usize,
    mix: impl Fn(Hex, Hex, Component) -> Hex,
) -> Result<Vec<Hex>> {
    let start = start.into_hex()?;
    let end = end.into_hex()?;

    let inner = steps(start, end, n, mix)?;

    Ok(std::iter::once(start)
        .chain(inner)
        .chain(std::iter::once(end))
        .collect())
}
