//! Hexadecimal color notation, the format colors enter and leave the crate
//! in.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{Error, Result},
    models::{Hsl, Hsv, Lab, Lch, Model, Rgb},
};

/// A color in `#RRGGBB` notation.
///
/// Parsing accepts upper or lower case digits and the `#RGB` shorthand;
/// formatting always produces the canonical 7 character uppercase form.
/// ```rust
/// use tincture::Hex;
/// let hex: Hex = "#0af".parse().unwrap();
/// assert_eq!(hex.to_string(), "#00AAFF");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hex {
    red: u8,
    green: u8,
    blue: u8,
}

impl Hex {
    /// `#FFFFFF`
    pub const WHITE: Self = Self::from_bytes(255, 255, 255);

    /// `#000000`
    pub const BLACK: Self = Self::from_bytes(0, 0, 0);

    /// Create a color from its three 8-bit channels.
    pub const fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#RRGGBB` or `#RGB`. The leading `#` is optional.
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let bytes = digits.as_bytes();

        let nibble = |c: u8| -> Result<u8> {
            char::from(c)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| Error::invalid_format(input))
        };

        match bytes.len() {
            // #RGB, each digit doubled.
            3 => Ok(Self::from_bytes(
                nibble(bytes[0])? * 17,
                nibble(bytes[1])? * 17,
                nibble(bytes[2])? * 17,
            )),
            6 => {
                let pair = |hi: u8, lo: u8| -> Result<u8> { Ok(nibble(hi)? << 4 | nibble(lo)?) };

                Ok(Self::from_bytes(
                    pair(bytes[0], bytes[1])?,
                    pair(bytes[2], bytes[3])?,
                    pair(bytes[4], bytes[5])?,
                ))
            }
            _ => Err(Error::invalid_format(input)),
        }
    }

    /// The red, green and blue channels.
    pub const fn bytes(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Convert to RGB with channels in [0, 255].
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(self.red.into(), self.green.into(), self.blue.into())
    }

    /// Convert to any of the color models.
    pub fn to_model<M: Model>(&self) -> M {
        M::from_rgb(&self.to_rgb())
    }

    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        self.to_model()
    }

    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        self.to_model()
    }

    /// Convert to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        self.to_model()
    }

    /// Convert to CIE-Lch.
    pub fn to_lch(&self) -> Lch {
        self.to_model()
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Hex {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl PartialEq<str> for Hex {
    fn eq(&self, other: &str) -> bool {
        Self::parse(other).is_ok_and(|other| *self == other)
    }
}

impl PartialEq<&str> for Hex {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Anything that can be turned into a [`Hex`], so operations can take either
/// text straight from the caller or an already parsed color.
pub trait IntoHex {
    /// Parse or pass through the color.
    fn into_hex(self) -> Result<Hex>;
}

impl IntoHex for Hex {
    fn into_hex(self) -> Result<Hex> {
        Ok(self)
    }
}

impl IntoHex for &Hex {
    fn into_hex(self) -> Result<Hex> {
        Ok(*self)
    }
}

impl IntoHex for &str {
    fn into_hex(self) -> Result<Hex> {
        Hex::parse(self)
    }
}

impl IntoHex for &String {
    fn into_hex(self) -> Result<Hex> {
        Hex::parse(self)
    }
}

impl IntoHex for String {
    fn into_hex(self) -> Result<Hex> {
        Hex::parse(&self)
    }
}
