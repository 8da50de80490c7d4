//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix. Vectors are multiplied as rows,
/// so each column of the arguments produces one output component.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0,
        m21, m22, m23, 0.0,
        m31, m32, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

/// Linear interpolation from `a` to `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// Evaluate the quadratic Bezier curve through `p0`, control point `p1` and
/// `p2` at `t`.
pub fn quadratic_bezier<T: Float>(t: T, p0: T, p1: T, p2: T) -> T {
    let two = T::one() + T::one();
    let u = T::one() - t;
    u * u * p0 + two * u * t * p1 + t * t * p2
}

/// Wrap a hue in degrees into [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Rotate a hue by `amount` degrees.
pub fn shift_hue(hue: Component, amount: Component) -> Component {
    normalize_hue(hue + amount + 360.0)
}

/// Adjust two hues so that interpolating linearly between them travels the
/// shorter arc. When the gap is more than half a turn the smaller hue is
/// rotated up by a full turn; the larger one is never moved.
pub fn shortest_hue_path(from: Component, to: Component) -> (Component, Component) {
    if (to - from).abs() <= 180.0 {
        (from, to)
    } else if from < to {
        (from + 360.0, to)
    } else {
        (from, to + 360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn transform_identity() {
        #[rustfmt::skip]
        const IDENTITY: Transform = transform_3x3(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        );

        let c = transform(&IDENTITY, Components(0.1, 0.2, 0.3));
        assert_eq!(c, Components(0.1, 0.2, 0.3));
    }

    #[test]
    fn transform_multiplies_rows() {
        #[rustfmt::skip]
        const SWAP: Transform = transform_3x3(
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 2.0,
        );

        let c = transform(&SWAP, Components(1.0, 2.0, 3.0));
        assert_eq!(c, Components(2.0, 1.0, 6.0));
    }

    #[test]
    fn bezier_hits_endpoints() {
        assert_component_eq!(quadratic_bezier(0.0, 10.0, 99.0, 20.0), 10.0);
        assert_component_eq!(quadratic_bezier(1.0, 10.0, 99.0, 20.0), 20.0);
        // A control point on the chord gives a straight line.
        assert_component_eq!(quadratic_bezier(0.25, 0.0, 50.0, 100.0), 25.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
        assert_eq!(lerp(3.0, 7.0, 0.5), 5.0);
    }

    #[test]
    fn hues_wrap_into_a_single_turn() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(shift_hue(350.0, 30.0), 20.0);
        assert_eq!(shift_hue(10.0, -30.0), 340.0);
    }

    #[test]
    fn shortest_path_rotates_the_smaller_hue() {
        assert_eq!(shortest_hue_path(10.0, 350.0), (370.0, 350.0));
        assert_eq!(shortest_hue_path(350.0, 10.0), (350.0, 370.0));
        assert_eq!(shortest_hue_path(100.0, 200.0), (100.0, 200.0));
        // Exactly half a turn is already a shortest path.
        assert_eq!(shortest_hue_path(0.0, 180.0), (0.0, 180.0));
    }
}
