//! WCAG 2 relative luminance and contrast ratios.

use crate::{color::Component, hex::Hex, models::Rgb};

impl Rgb {
    /// The relative luminance of the color as defined by WCAG 2, from 0 for
    /// black to 1 for white.
    pub fn relative_luminance(&self) -> Component {
        let linear = self.clip().to_components().map(|v| {
            let channel = v / 255.0;
            if channel <= 0.03928 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        });

        0.2126 * linear.0 + 0.7152 * linear.1 + 0.0722 * linear.2
    }
}

/// The contrast ratio between two colors, from 1 for identical luminance to
/// 21 for black on white. The order of the arguments does not matter.
pub fn contrast_ratio(a: Hex, b: Hex) -> Component {
    let a = a.to_rgb().relative_luminance();
    let b = b.to_rgb().relative_luminance();

    (a.max(b) + 0.05) / (a.min(b) + 0.05)
}

impl Hex {
    /// The contrast ratio of this color against black.
    pub fn contrast_against_black(&self) -> Component {
        contrast_ratio(*self, Hex::BLACK)
    }
}

/// WCAG conformance levels for normal sized text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conformance {
    /// Level AA, a ratio of at least 4.5.
    Aa,
    /// Level AAA, a ratio of at least 7.
    Aaa,
}

impl Conformance {
    /// The minimum contrast ratio for this level.
    pub fn threshold(&self) -> Component {
        match self {
            Conformance::Aa => 4.5,
            Conformance::Aaa => 7.0,
        }
    }

    /// Returns true if `ratio` meets this level.
    pub fn is_met_by(&self, ratio: Component) -> bool {
        ratio >= self.threshold()
    }
}
