//! Lighten a color toward white or darken it toward black by moving its HSL
//! lightness.

use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    error::Result,
    hex::{Hex, IntoHex},
    models::Model,
    steps::step_ratios,
};

fn log_unusual_ratio(ratio: Component) {
    if !(0.0..=1.0).contains(&ratio) {
        tracing::debug!(ratio, "brightness ratio outside of [0, 1]");
    }
}

impl Hex {
    /// Move the lightness `ratio` of the way toward 100%. Ratios outside
    /// [0, 1] overshoot and are clamped when encoded.
    pub fn lighten(&self, ratio: Component) -> Hex {
        log_unusual_ratio(ratio);
        let hsl = self.to_hsl();
        hsl.with_lightness(hsl.lightness + (100.0 - hsl.lightness) * ratio)
            .to_hex()
    }

    /// Move the lightness `ratio` of the way toward 0%.
    pub fn darken(&self, ratio: Component) -> Hex {
        log_unusual_ratio(ratio);
        let hsl = self.to_hsl();
        hsl.with_lightness(hsl.lightness * (1.0 - ratio)).to_hex()
    }
}

/// Lighten a color given in hex notation. See [`Hex::lighten`].
pub fn lighten(hex: impl IntoHex, ratio: Component) -> Result<Hex> {
    Ok(hex.into_hex()?.lighten(ratio))
}

/// Darken a color given in hex notation. See [`Hex::darken`].
pub fn darken(hex: impl IntoHex, ratio: Component) -> Result<Hex> {
    Ok(hex.into_hex()?.darken(ratio))
}

/// The direction a brightness adjustment moves in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    /// Toward white.
    #[default]
    Lighten,
    /// Toward black.
    Darken,
}

impl Brightness {
    /// Adjust `hex` by `ratio` in this direction.
    pub fn apply(&self, hex: Hex, ratio: Component) -> Hex {
        match self {
            Brightness::Lighten => hex.lighten(ratio),
            Brightness::Darken => hex.darken(ratio),
        }
    }

    /// The color reached at a ratio of 1.
    pub fn target(&self) -> Hex {
        match self {
            Brightness::Lighten => Hex::WHITE,
            Brightness::Darken => Hex::BLACK,
        }
    }
}

/// Generate `n` adjusted versions of `base` at the ratios `i / (n + 1)`,
/// each passed through `scale` first.
pub fn brightness_steps(
    base: impl IntoHex,
    n: usize,
    op: Brightness,
    scale: impl Fn(Component) -> Component,
) -> Result<Vec<Hex>> {
    let base = base.into_hex()?;

    let colors = step_ratios(n)
        .map(|ratio| op.apply(base, scale(ratio)))
        .collect();

    tracing::trace!(%base, n, ?op, "generated brightness steps");

    Ok(colors)
}

/// [`brightness_steps`] bracketed by `base` and the color the adjustment
/// moves toward.
pub fn brightness_ramp(
    base: impl IntoHex,
    n: usize,
    op: Brightness,
    scale: impl Fn(Component) -> Component,
) -> Result<Vec<Hex>> {
    let base = base.into_hex()?;

    let inner = brightness_steps(base, n, op, scale)?;

    Ok(std::iter::once(base)
        .chain(inner)
        .chain(std::iter::once(op.target()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, error::Error, steps::Scale};

    #[test]
    fn lighten_and_darken_halfway() {
        assert_eq!(lighten("#00A2FA", 0.5).unwrap(), "#7DD1FF");
        assert_eq!(darken("#00A2FA", 0.5).unwrap(), "#00517D");
    }

    #[test]
    fn zero_ratio_is_identity() {
        for hex in ["#00A2FA", "#123456", "#D2691E", "#808080", "#000000", "#FFFFFF"] {
            assert_eq!(lighten(hex, 0.0).unwrap(), hex);
            assert_eq!(darken(hex, 0.0).unwrap(), hex);
        }
    }

    #[test]
    fn full_ratio_reaches_the_extremes() {
        for hex in ["#00A2FA", "#123456", "#808080"] {
            let light = lighten(hex, 1.0).unwrap();
            assert_component_eq!(light.to_hsl().lightness, 100.0);
            assert_eq!(light, Hex::WHITE);

            let dark = darken(hex, 1.0).unwrap();
            assert_component_eq!(dark.to_hsl().lightness, 0.0);
            assert_eq!(dark, Hex::BLACK);
        }
    }

    #[test]
    fn overshooting_is_clamped() {
        assert_eq!(lighten("#00A2FA", 2.0).unwrap(), Hex::WHITE);
        assert_eq!(darken("#00A2FA", 2.0).unwrap(), Hex::BLACK);
    }

    #[test]
    fn lighten_steps() {
        let colors = brightness_steps("#00A2FA", 5, Brightness::Lighten, |r| r).unwrap();
        assert_eq!(colors, ["#26B3FF", "#52C2FF", "#7DD1FF", "#A8E0FF", "#D4F0FF"]);
    }

    #[test]
    fn darken_steps() {
        let colors = brightness_steps("#808080", 3, Brightness::Darken, |r| r).unwrap();
        assert_eq!(colors, ["#606060", "#404040", "#202020"]);
    }

    #[test]
    fn steps_are_remapped_by_the_scale() {
        let linear = brightness_steps("#808080", 3, Brightness::Darken, |r| Scale::Linear.apply(r));
        let log = brightness_steps("#808080", 3, Brightness::Darken, |r| Scale::Log.apply(r));
        // The log scale moves each step further along.
        for (linear, log) in linear.unwrap().iter().zip(log.unwrap()) {
            assert!(log.to_hsl().lightness < linear.to_hsl().lightness);
        }
    }

    #[test]
    fn ramp_includes_base_and_target() {
        let ramp = brightness_ramp("#808080", 3, Brightness::Darken, |r| r).unwrap();
        assert_eq!(ramp, ["#808080", "#606060", "#404040", "#202020", "#000000"]);

        let ramp = brightness_ramp("#808080", 0, Brightness::Lighten, |r| r).unwrap();
        assert_eq!(ramp, [Hex::parse("#808080").unwrap(), Hex::WHITE]);
    }

    #[test]
    fn no_steps_and_invalid_input() {
        assert!(brightness_steps("#808080", 0, Brightness::Lighten, |r| r)
            .unwrap()
            .is_empty());
        assert!(matches!(
            brightness_steps("808", 2, Brightness::Lighten, |r| r),
            Ok(colors) if colors.len() == 2
        ));
        assert!(matches!(
            lighten("#80808", 0.5),
            Err(Error::InvalidFormat { .. })
        ));
    }

    #[test]
    fn target_of_each_direction() {
        assert_eq!(Brightness::Lighten.target(), Hex::WHITE);
        assert_eq!(Brightness::Darken.target(), Hex::BLACK);
        assert_eq!(Brightness::Darken.apply(Hex::WHITE, 0.5), "#808080");
    }
}
