use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::foundation::error::FramestepError;

/// One animated snapshot: property name to value.
pub type State = BTreeMap<String, Value>;

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// An RGB color.
///
/// Parsed colors always hold bytes. Interpolated channels are rounded half toward +∞ but not
/// clamped, so an overshooting easing curve can push a channel outside `0..=255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as i32,
            g: g as i32,
            b: b as i32,
        }
    }

    /// Channels clamped into bytes, for rasterizing.
    pub fn to_rgb8(self) -> [u8; 3] {
        fn byte(c: i32) -> u8 {
            c.clamp(0, 255) as u8
        }
        [byte(self.r), byte(self.g), byte(self.b)]
    }
}

impl Lerp for Rgb {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn channel(a: i32, b: i32, t: f64) -> i32 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t + 0.5).floor() as i32
        }

        Self {
            r: channel(a.r, b.r, t),
            g: channel(a.g, b.g, t),
            b: channel(a.b, b.b, t),
        }
    }
}

impl FromStr for Rgb {
    type Err = FramestepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FramestepError::validation(format!("color must be #RRGGBB, got \"{s}\""));
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn channel(f: &mut fmt::Formatter<'_>, c: i32) -> fmt::Result {
            if c < 0 {
                write!(f, "-{:x}", c.unsigned_abs())
            } else {
                write!(f, "{c:02x}")
            }
        }

        f.write_str("#")?;
        channel(f, self.r)?;
        channel(f, self.g)?;
        channel(f, self.b)
    }
}

impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single animated property value.
///
/// In JSON a number is a number and a color is a `"#RRGGBB"` string.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Color(Rgb),
}

impl Value {
    /// Interpolate two values of the same kind; `None` on a kind mismatch.
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Option<Self> {
        match (a, b) {
            (Self::Number(a), Self::Number(b)) => Some(Self::Number(f64::lerp(a, b, t))),
            (Self::Color(a), Self::Color(b)) => Some(Self::Color(Rgb::lerp(a, b, t))),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<Rgb> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Rgb> for Value {
    fn from(c: Rgb) -> Self {
        Self::Color(c)
    }
}

/// Build a [`State`] from `(key, value)` pairs.
pub fn state<K, V, I>(pairs: I) -> State
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
