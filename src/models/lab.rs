//! Models for the rectangular and polar forms of CIE-Lab.

use crate::{
    color::{Component, Components},
    math::normalize_hue,
    models::xyz::{ToXyz, Xyz},
};

/// Relative luminance below which the Lab curve is linear.
const EPSILON: Component = 0.008856;

/// Slope of the linear part of the Lab curve.
const SLOPE: Component = 7.787;

const OFFSET: Component = 16.0 / 116.0;

tincture_macros::gen_model! {
    /// A color in the CIE-Lab color space (CIE 1976 L*a*b*, D65).
    pub struct Lab {
        /// The lightness component, in [0, 100].
        lightness: Component,
        /// The a component (green to red).
        a: Component,
        /// The b component (blue to yellow).
        b: Component,
    }
}

impl Lab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = normalize_hue(self.b.atan2(self.a).to_degrees());

        Lch::new(self.lightness, chroma, hue)
    }
}

impl ToXyz for Lab {
    fn to_xyz(&self) -> Xyz {
        let f1 = (self.lightness + 16.0) / 116.0;
        let f0 = self.a / 500.0 + f1;
        let f2 = f1 - self.b / 200.0;

        let relative = Components(f0, f1, f2).map(|f| {
            let cubed = f * f * f;
            if cubed > EPSILON {
                cubed
            } else {
                (f - OFFSET) / SLOPE
            }
        });

        Xyz::from_relative(relative)
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let Components(f0, f1, f2) = value.relative_to_white().map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                SLOPE * v + OFFSET
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

tincture_macros::gen_model! {
    /// A color in the CIE-Lab color space in the cylindrical polar form.
    pub struct Lch {
        /// The lightness component, in [0, 100].
        lightness: Component,
        /// The chroma component.
        chroma: Component,
        /// The hue component in degrees, in [0, 360).
        hue: Component,
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn polar_hue_is_positive() {
        let lch = Lab::new(50.0, 0.0, -10.0).to_polar();
        assert_component_eq!(lch.chroma, 10.0);
        assert_component_eq!(lch.hue, 270.0);
    }

    #[test]
    fn neutral_colors_have_zero_hue() {
        let lch = Lab::new(50.0, 0.0, 0.0).to_polar();
        assert_eq!(lch.chroma, 0.0);
        assert_eq!(lch.hue, 0.0);
    }

    #[test]
    fn polar_round_trip() {
        let lab = Lab::new(32.3, 79.19, -107.87);
        let back = lab.to_polar().to_rectangular();
        assert_component_eq!(back.lightness, lab.lightness, 1.0e-9);
        assert_component_eq!(back.a, lab.a, 1.0e-9);
        assert_component_eq!(back.b, lab.b, 1.0e-9);
    }

    #[test]
    fn xyz_round_trip() {
        for lab in [
            Lab::new(56.0, 37.0, 56.7),
            Lab::new(5.0, 1.0, -3.0),
            Lab::new(100.0, 0.0, 0.0),
        ] {
            let back = Lab::from(lab.to_xyz());
            assert_component_eq!(back.lightness, lab.lightness);
            assert_component_eq!(back.a, lab.a);
            assert_component_eq!(back.b, lab.b);
        }
    }

    #[test]
    fn reference_white_is_full_lightness() {
        let lab = Lab::from(Xyz::from(crate::models::D65));
        assert_component_eq!(lab.lightness, 100.0, 1.0e-9);
        assert_component_eq!(lab.a, 0.0, 1.0e-9);
        assert_component_eq!(lab.b, 0.0, 1.0e-9);
    }
}
