//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// The D65 reference white used to normalize CIE-XYZ into CIE-Lab.
pub const D65: Components = Components(0.95047, 1.0, 1.08883);

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz;
}

tincture_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space, relative to the D65
    /// white point with Y of white at 1.0.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl Xyz {
    /// Divide out the reference white.
    pub(crate) fn relative_to_white(&self) -> Components {
        self.to_components().zip_with(&D65, |v, white| v / white)
    }

    /// Scale components relative to the reference white back to absolute
    /// values.
    pub(crate) fn from_relative(relative: Components) -> Self {
        relative.zip_with(&D65, |v, white| v * white).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_relative_round_trip() {
        let xyz = Xyz::new(0.5, 0.25, 0.125);
        let relative = xyz.relative_to_white();
        assert_eq!(relative.1, 0.25);
        let back = Xyz::from_relative(relative);
        assert!((back.x - xyz.x).abs() < 1.0e-12);
        assert!((back.z - xyz.z).abs() < 1.0e-12);
    }

    #[test]
    fn white_point_is_unit_relative() {
        let white = Xyz::from(D65).relative_to_white();
        assert_eq!(white, Components(1.0, 1.0, 1.0));
    }
}
