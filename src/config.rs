//! The settings a palette tool starts from and the palettes they produce.

use serde::{Deserialize, Serialize};

use crate::{
    brightness::{brightness_ramp, brightness_steps, Brightness},
    color::Component,
    error::{Error, Result},
    hex::{Hex, IntoHex},
    interpolate::{mix, Interpolation, MixMode},
    steps::{gradient, steps, Scale},
};

/// The largest number of steps a palette may ask for.
pub const MAX_STEPS: usize = 25;

/// Whether a palette shows a single adjusted color or a sequence of steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjustment {
    /// One color at the configured percentage.
    #[default]
    Amount,
    /// The configured number of evenly spaced steps.
    Steps,
}

/// How the base color is mixed with a second color.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct MixSettings {
    /// The color mixed into the base color.
    pub color: Hex,
    /// The space the colors are mixed in.
    pub mode: MixMode,
    /// The bend of the [`MixMode::Quadratic`] curve, in [0, 1].
    pub aperture: Component,
    /// How far toward `color` a single mix goes, in [0, 100].
    pub percentage: Component,
    /// The number of steps between the two colors.
    pub steps: usize,
    /// How ratios are remapped before mixing.
    pub scale: Scale,
    /// Produce one color or a sequence.
    #[serde(rename = "type")]
    pub kind: Adjustment,
}

impl Default for MixSettings {
    fn default() -> Self {
        Self {
            color: Hex::from_bytes(0xFA, 0x00, 0xA2),
            mode: MixMode::Rgb,
            aperture: 0.5,
            percentage: 50.0,
            steps: 5,
            scale: Scale::Linear,
            kind: Adjustment::Amount,
        }
    }
}

/// How the base color is lightened or darkened.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct BrightnessSettings {
    /// Toward white or toward black.
    pub mode: Brightness,
    /// How far a single adjustment goes, in [0, 100].
    pub percentage: Component,
    /// The number of steps toward the target.
    pub steps: usize,
    /// How ratios are remapped before adjusting.
    pub scale: Scale,
    /// Produce one color or a sequence.
    #[serde(rename = "type")]
    pub kind: Adjustment,
}

impl Default for BrightnessSettings {
    fn default() -> Self {
        Self {
            mode: Brightness::Lighten,
            percentage: 50.0,
            steps: 5,
            scale: Scale::Linear,
            kind: Adjustment::Amount,
        }
    }
}

/// Everything a palette tool needs besides the base color.
///
/// Every field is optional in the JSON form and falls back to its default:
/// ```rust
/// use tincture::{MixMode, Settings};
/// let settings = Settings::from_json(r#"{ "mix": { "mode": "lch" } }"#).unwrap();
/// assert_eq!(settings.mix.mode, MixMode::Lch);
/// assert_eq!(settings.mix.steps, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Settings {
    /// Mixing with a second color.
    pub mix: MixSettings,
    /// Lightening and darkening.
    pub brightness: BrightnessSettings,
    /// Bracket every palette with the colors it starts and ends at.
    pub show_originals: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mix: MixSettings::default(),
            brightness: BrightnessSettings::default(),
            show_originals: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every value is inside the range a palette tool offers.
    pub fn validate(&self) -> Result<()> {
        fn check(ok: bool, what: &str) -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(Error::Config(what.to_owned()))
            }
        }

        let percentage = 0.0..=100.0;
        let step_range = 1..=MAX_STEPS;

        check(
            (0.0..=1.0).contains(&self.mix.aperture),
            "mix.aperture must be in [0, 1]",
        )?;
        check(
            percentage.contains(&self.mix.percentage),
            "mix.percentage must be in [0, 100]",
        )?;
        check(
            step_range.contains(&self.mix.steps),
            "mix.steps must be in [1, 25]",
        )?;
        check(
            percentage.contains(&self.brightness.percentage),
            "brightness.percentage must be in [0, 100]",
        )?;
        check(
            step_range.contains(&self.brightness.steps),
            "brightness.steps must be in [1, 25]",
        )?;

        Ok(())
    }

    /// Mix `base` with the configured color.
    pub fn mix_palette(&self, base: impl IntoHex) -> Result<Vec<Hex>> {
        let base = base.into_hex()?;
        let MixSettings {
            color,
            mode,
            aperture,
            percentage,
            steps: n,
            scale,
            kind,
        } = self.mix;

        match kind {
            Adjustment::Amount => {
                let mixed = mix(base, color, scale.apply(percentage / 100.0), mode, aperture)?;
                Ok(if self.show_originals {
                    vec![base, mixed, color]
                } else {
                    vec![mixed]
                })
            }
            Adjustment::Steps => {
                let mix = |start, end, ratio| {
                    Interpolation::new(start, end, mode)
                        .with_aperture(aperture)
                        .at(scale.apply(ratio))
                };
                if self.show_originals {
                    gradient(base, color, n, mix)
                } else {
                    steps(base, color, n, mix)
                }
            }
        }
    }

    /// Lighten or darken `base` as configured.
    pub fn brightness_palette(&self, base: impl IntoHex) -> Result<Vec<Hex>> {
        let base = base.into_hex()?;
        let BrightnessSettings {
            mode,
            percentage,
            steps: n,
            scale,
            kind,
        } = self.brightness;
        let scale = |ratio| scale.apply(ratio);

        match kind {
            Adjustment::Amount => Ok(vec![mode.apply(base, scale(percentage / 100.0))]),
            Adjustment::Steps if self.show_originals => brightness_ramp(base, n, mode, scale),
            Adjustment::Steps => brightness_steps(base, n, mode, scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.mix.color, "#FA00A2");
        assert_eq!(settings.mix.mode, MixMode::Rgb);
        assert_eq!(settings.mix.aperture, 0.5);
        assert_eq!(settings.brightness.mode, Brightness::Lighten);
        assert!(settings.show_originals);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn partial_document() {
        let settings = Settings::from_json(
            r##"{
                "mix": { "color": "#0f0", "mode": "quadratic", "aperture": 0.75, "type": "steps" },
                "brightness": { "mode": "darken", "scale": "log" },
                "showOriginals": false
            }"##,
        )
        .unwrap();

        assert_eq!(settings.mix.color, Hex::from_bytes(0, 255, 0));
        assert_eq!(settings.mix.mode, MixMode::Quadratic);
        assert_eq!(settings.mix.kind, Adjustment::Steps);
        assert_eq!(settings.mix.percentage, 50.0);
        assert_eq!(settings.brightness.mode, Brightness::Darken);
        assert_eq!(settings.brightness.scale, Scale::Log);
        assert!(!settings.show_originals);
    }

    #[test]
    fn invalid_documents() {
        for json in [
            r##"{ "mix": { "color": "#12" } }"##,
            r#"{ "mix": { "mode": "cmyk" } }"#,
            r#"{ "mix": { "aperture": 1.5 } }"#,
            r#"{ "mix": { "steps": 0 } }"#,
            r#"{ "brightness": { "steps": 26 } }"#,
            r#"{ "brightness": { "percentage": -1 } }"#,
            r#"{ "colour": {} }"#,
            r#"{ "show_originals": false }"#,
            "not json",
        ] {
            assert!(
                matches!(Settings::from_json(json), Err(Error::Config(_))),
                "{json}"
            );
        }
    }

    #[test]
    fn round_trips_through_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"type\":\"amount\""));
        assert!(json.contains("\"showOriginals\":true"));
        assert!(!json.contains("show_originals"));
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn default_mix_palette() {
        let settings = Settings::default();
        let palette = settings.mix_palette("#00A2FA").unwrap();
        assert_eq!(palette, ["#00A2FA", "#7D51CE", "#FA00A2"]);

        let settings = Settings {
            show_originals: false,
            ..Settings::default()
        };
        assert_eq!(settings.mix_palette("#00A2FA").unwrap(), ["#7D51CE"]);
    }

    #[test]
    fn mix_steps_palette() {
        let mut settings = Settings::default();
        settings.mix.color = Hex::WHITE;
        settings.mix.steps = 3;
        settings.mix.kind = Adjustment::Steps;

        let palette = settings.mix_palette("#000").unwrap();
        assert_eq!(palette, ["#000000", "#404040", "#808080", "#BFBFBF", "#FFFFFF"]);

        settings.show_originals = false;
        assert_eq!(settings.mix_palette("#000").unwrap().len(), 3);
    }

    #[test]
    fn brightness_palettes() {
        let mut settings = Settings::default();
        assert_eq!(settings.brightness_palette("#00A2FA").unwrap(), ["#7DD1FF"]);

        settings.brightness.kind = Adjustment::Steps;
        let palette = settings.brightness_palette("#00A2FA").unwrap();
        assert_eq!(
            palette,
            ["#00A2FA", "#26B3FF", "#52C2FF", "#7DD1FF", "#A8E0FF", "#D4F0FF", "#FFFFFF"]
        );

        settings.show_originals = false;
        settings.brightness.mode = Brightness::Darken;
        settings.brightness.steps = 3;
        assert_eq!(
            settings.brightness_palette("#808080").unwrap(),
            ["#606060", "#404040", "#202020"]
        );
    }

    #[test]
    fn palettes_reject_invalid_base_colors() {
        let settings = Settings::default();
        assert!(matches!(
            settings.mix_palette("#zzz"),
            Err(Error::InvalidFormat { .. })
        ));
        assert!(settings.brightness_palette("").is_err());
    }
}
