//! tincture converts colors between hex notation, sRGB, HSL, HSV, CIE-Lab and
//! CIE-Lch, and builds palettes from them: hue harmonies, brightness ramps
//! and mixes between two colors in any of several spaces.
//!
//! Colors enter and leave as hex strings:
//! ```rust
//! use tincture::MixMode;
//! let harmonies = tincture::harmonies("#00A2FA").unwrap();
//! assert_eq!(harmonies.complementary[1].to_string(), "#FA5800");
//!
//! let mixed = tincture::mix("#000000", "#FFFFFF", 0.5, MixMode::Rgb, 0.5).unwrap();
//! assert_eq!(mixed.to_string(), "#808080");
//! ```

#![deny(missing_docs)]

mod brightness;
mod color;
mod config;
mod contrast;
mod convert;
mod error;
mod harmony;
mod hex;
mod interpolate;
mod math;
pub mod models;
mod steps;

#[cfg(test)]
mod test;

pub use brightness::{brightness_ramp, brightness_steps, darken, lighten, Brightness};
pub use color::{Component, Components};
pub use config::{Adjustment, BrightnessSettings, MixSettings, Settings, MAX_STEPS};
pub use contrast::{contrast_ratio, Conformance};
pub use error::{Error, Result};
pub use harmony::{harmonies, harmonies_or_empty, Families, Harmonies, Harmony};
pub use hex::{Hex, IntoHex};
pub use interpolate::{mix, Interpolation, MixMode};
pub use math::{shift_hue, shortest_hue_path};
pub use models::Model;
pub use steps::{gradient, rgb_mix, step_ratios, steps, Scale};
