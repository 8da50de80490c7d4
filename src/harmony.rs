//! Color harmonies are sets of colors whose hues sit at fixed angles from a
//! base color on the color wheel. Saturation and lightness are kept, only
//! the hue is rotated.

use std::collections::HashSet;

use bitflags::bitflags;
use serde::Serialize;

use crate::{
    color::Component,
    error::Result,
    hex::{Hex, IntoHex},
    math::shift_hue,
    models::Model,
};

/// A family of colors derived from a base color by rotating its hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// The neighbours on either side of the base.
    Analogous,
    /// Three hues evenly spaced around the wheel.
    Triad,
    /// The base and its opposite.
    Complementary,
    /// The base and the two neighbours of its opposite.
    SplitComplementary,
    /// Four hues evenly spaced around the wheel.
    Square,
    /// Two complementary pairs, 60 degrees apart.
    Tetradic,
}

impl Harmony {
    /// Every family, in the order they are presented and merged into the
    /// convergence set.
    pub const ALL: [Harmony; 6] = [
        Harmony::Analogous,
        Harmony::Triad,
        Harmony::Complementary,
        Harmony::SplitComplementary,
        Harmony::Square,
        Harmony::Tetradic,
    ];

    /// The hue offsets in degrees of each member of the family. An offset of
    /// 0 is the base color itself.
    pub fn offsets(&self) -> &'static [Component] {
        match self {
            Harmony::Analogous => &[-30.0, 0.0, 30.0],
            Harmony::Triad => &[0.0, 120.0, 240.0],
            Harmony::Complementary => &[0.0, 180.0],
            Harmony::SplitComplementary => &[0.0, 150.0, 210.0],
            Harmony::Square => &[0.0, 90.0, 180.0, 270.0],
            Harmony::Tetradic => &[0.0, 60.0, 180.0, 240.0],
        }
    }

    /// The flag selecting this family in a [`Families`] set.
    pub fn family(&self) -> Families {
        match self {
            Harmony::Analogous => Families::ANALOGOUS,
            Harmony::Triad => Families::TRIAD,
            Harmony::Complementary => Families::COMPLEMENTARY,
            Harmony::SplitComplementary => Families::SPLIT_COMPLEMENTARY,
            Harmony::Square => Families::SQUARE,
            Harmony::Tetradic => Families::TETRADIC,
        }
    }
}

bitflags! {
    /// A set of [`Harmony`] families.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Families : u8 {
        /// Select [`Harmony::Analogous`].
        const ANALOGOUS = 1 << 0;
        /// Select [`Harmony::Triad`].
        const TRIAD = 1 << 1;
        /// Select [`Harmony::Complementary`].
        const COMPLEMENTARY = 1 << 2;
        /// Select [`Harmony::SplitComplementary`].
        const SPLIT_COMPLEMENTARY = 1 << 3;
        /// Select [`Harmony::Square`].
        const SQUARE = 1 << 4;
        /// Select [`Harmony::Tetradic`].
        const TETRADIC = 1 << 5;
    }
}

/// Every harmony family of one base color.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Harmonies {
    /// Hues at -30, 0 and +30 degrees.
    pub analogous: Vec<Hex>,
    /// Hues at 0, +120 and +240 degrees.
    pub triad: Vec<Hex>,
    /// Hues at 0 and +180 degrees.
    pub complementary: Vec<Hex>,
    /// Hues at 0, +150 and +210 degrees.
    pub split_complementary: Vec<Hex>,
    /// Hues at 0, +90, +180 and +270 degrees.
    pub square: Vec<Hex>,
    /// Hues at 0, +60, +180 and +240 degrees.
    pub tetradic: Vec<Hex>,
    /// The union of all the families above without duplicates, in the
    /// order they were first seen.
    pub convergence: Vec<Hex>,
}

impl Harmonies {
    /// Generate every family for `base`.
    pub fn of(base: Hex) -> Self {
        let hsl = base.to_hsl();

        let family = |harmony: Harmony| -> Vec<Hex> {
            harmony
                .offsets()
                .iter()
                .map(|&offset| {
                    if offset == 0.0 {
                        base
                    } else {
                        hsl.with_hue(shift_hue(hsl.hue, offset)).to_hex()
                    }
                })
                .collect()
        };

        let mut harmonies = Self {
            analogous: family(Harmony::Analogous),
            triad: family(Harmony::Triad),
            complementary: family(Harmony::Complementary),
            split_complementary: family(Harmony::SplitComplementary),
            square: family(Harmony::Square),
            tetradic: family(Harmony::Tetradic),
            convergence: Vec::new(),
        };
        harmonies.convergence = harmonies.convergence_of(Families::all());

        tracing::trace!(
            %base,
            hue = hsl.hue,
            convergence = harmonies.convergence.len(),
            "generated harmonies"
        );

        harmonies
    }

    /// The colors of a single family.
    pub fn get(&self, harmony: Harmony) -> &[Hex] {
        match harmony {
            Harmony::Analogous => &self.analogous,
            Harmony::Triad => &self.triad,
            Harmony::Complementary => &self.complementary,
            Harmony::SplitComplementary => &self.split_complementary,
            Harmony::Square => &self.square,
            Harmony::Tetradic => &self.tetradic,
        }
    }

    /// Merge the selected families, dropping repeated colors and keeping the
    /// first occurrence of each.
    pub fn convergence_of(&self, families: Families) -> Vec<Hex> {
        let mut seen = HashSet::new();

        Harmony::ALL
            .iter()
            .filter(|harmony| families.contains(harmony.family()))
            .flat_map(|&harmony| self.get(harmony).iter().copied())
            .filter(|hex| seen.insert(*hex))
            .collect()
    }
}

/// Generate every harmony family for a color given in hex notation.
pub fn harmonies(base: impl IntoHex) -> Result<Harmonies> {
    Ok(Harmonies::of(base.into_hex()?))
}

/// Like [`harmonies`], but an unparsable color produces empty families
/// instead of an error. This is what a presentation layer wants while the
/// user is still typing.
pub fn harmonies_or_empty(base: impl IntoHex) -> Harmonies {
    harmonies(base).unwrap_or_else(|err| {
        tracing::debug!(%err, "no harmonies for invalid color");
        Harmonies::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, error::Error};

    fn hexes(list: &[&str]) -> Vec<Hex> {
        list.iter().map(|s| Hex::parse(s).unwrap()).collect()
    }

    #[test]
    fn families_of_a_saturated_blue() {
        let h = harmonies("#00A2FA").unwrap();

        assert_eq!(h.analogous, hexes(&["#00FAD5", "#00A2FA", "#0025FA"]));
        assert_eq!(h.triad, hexes(&["#00A2FA", "#FA00A2", "#A2FA00"]));
        assert_eq!(h.complementary, hexes(&["#00A2FA", "#FA5800"]));
        assert_eq!(h.split_complementary, hexes(&["#00A2FA", "#FA0025", "#FAD500"]));
        assert_eq!(h.square, hexes(&["#00A2FA", "#D500FA", "#FA5800", "#25FA00"]));
        assert_eq!(h.tetradic, hexes(&["#00A2FA", "#5800FA", "#FA5800", "#A2FA00"]));
    }

    #[test]
    fn complementary_is_half_a_turn_away() {
        let h = harmonies("#00A2FA").unwrap();
        assert_component_eq!(h.complementary[1].to_hsl().hue, 21.12, 0.5);
    }

    #[test]
    fn convergence_is_the_ordered_union() {
        let h = harmonies("#00A2FA").unwrap();
        assert_eq!(
            h.convergence,
            hexes(&[
                "#00FAD5", "#00A2FA", "#0025FA", "#FA00A2", "#A2FA00", "#FA5800", "#FA0025",
                "#FAD500", "#D500FA", "#25FA00", "#5800FA",
            ])
        );
    }

    #[test]
    fn family_sizes() {
        for base in ["#00A2FA", "#F00", "#123456", "#808080"] {
            let h = harmonies(base).unwrap();
            let sizes = Harmony::ALL.map(|harmony| h.get(harmony).len());
            assert_eq!(sizes, [3, 3, 2, 3, 4, 4]);
            assert!(h.convergence.len() <= 19);

            let unique: HashSet<_> = h.convergence.iter().collect();
            assert_eq!(unique.len(), h.convergence.len());
        }
    }

    #[test]
    fn base_is_kept_in_canonical_form() {
        let h = harmonies("#f00").unwrap();
        assert_eq!(h.triad, hexes(&["#FF0000", "#00FF00", "#0000FF"]));
        assert_eq!(h.analogous, hexes(&["#FF0080", "#FF0000", "#FF8000"]));
        assert_eq!(h.complementary[0].to_string(), "#FF0000");
    }

    #[test]
    fn gray_collapses_to_one_color() {
        let h = harmonies("#808080").unwrap();
        assert!(h.square.iter().all(|hex| *hex == "#808080"));
        assert_eq!(h.convergence, hexes(&["#808080"]));
    }

    #[test]
    fn convergence_of_a_subset() {
        let h = harmonies("#F00").unwrap();
        let subset = h.convergence_of(Families::TRIAD | Families::COMPLEMENTARY);
        assert_eq!(subset, hexes(&["#FF0000", "#00FF00", "#0000FF", "#00FFFF"]));
        assert!(h.convergence_of(Families::empty()).is_empty());
    }

    #[test]
    fn invalid_input() {
        assert!(matches!(
            harmonies("#12345"),
            Err(Error::InvalidFormat { .. })
        ));
        assert_eq!(harmonies_or_empty("nope"), Harmonies::default());
        assert!(harmonies_or_empty("nope").convergence.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let json = serde_json::to_value(harmonies("#F00").unwrap()).unwrap();
        assert_eq!(json["splitComplementary"][1], "#00FF80");
        assert_eq!(json["complementary"][1], "#00FFFF");
    }
}
