//! The numeric building blocks shared by every color model.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three channel values that describe a color in any of the
/// supported models. This is the unit the mixer interpolates over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Combine these components channel by channel with `other`.
    pub fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(Component, Component) -> Component,
    ) -> Self {
        Self(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }
}

impl Index<usize> for Components {
    type Output = Component;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.0,
            1 => &self.1,
            2 => &self.2,
            _ => panic!("component index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Components {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.0,
            1 => &mut self.1,
            2 => &mut self.2,
            _ => panic!("component index out of range: {index}"),
        }
    }
}

impl Add for Components {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl Mul<Component> for Components {
    type Output = Self;

    fn mul(self, rhs: Component) -> Self::Output {
        self.map(|v| v * rhs)
    }
}

impl std::fmt::Display for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(1.0, 4.0, 9.0).map(Component::sqrt);
        assert_eq!(c, Components(1.0, 2.0, 3.0));
    }

    #[test]
    fn arithmetic_is_channel_wise() {
        let a = Components(1.0, 2.0, 3.0);
        let b = Components(0.5, 0.5, 0.5);
        assert_eq!(a + b, Components(1.5, 2.5, 3.5));
        assert_eq!(a - b, Components(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Components(2.0, 4.0, 6.0));
    }

    #[test]
    fn index_reaches_each_channel() {
        let mut c = Components(10.0, 20.0, 30.0);
        assert_eq!(c[0], 10.0);
        assert_eq!(c[2], 30.0);
        c[1] = 25.0;
        assert_eq!(c.1, 25.0);
    }

    #[test]
    #[should_panic]
    fn index_past_the_third_channel_panics() {
        let c = Components(0.0, 0.0, 0.0);
        let _ = c[3];
    }
}
