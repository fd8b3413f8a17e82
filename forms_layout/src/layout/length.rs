use super::*;
use core::str::FromStr;

/// How a row or column is sized.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum TableLength {
    /// Sized to fit the largest visible content in the track.
    #[default]
    Auto,
    /// Exactly this many pixels, whatever the content or available space.
    Fixed(f64),
    /// This weight's share of the space left after Fixed and Auto tracks.
    Star(f64),
}

impl TableLength {
    /// A fixed length. Negative and non-finite values become 0.
    pub fn fixed(pixels: f64) -> Self {
        Self::Fixed(sanitize(pixels))
    }

    /// A proportional length. Negative and non-finite weights become 0.
    pub fn star(weight: f64) -> Self {
        Self::Star(sanitize(weight))
    }

    pub fn try_fixed(pixels: f64) -> Result<Self> {
        if pixels.is_finite() && pixels >= 0.0 {
            Ok(Self::Fixed(pixels))
        } else {
            Err(Error::InvalidFixed(pixels))
        }
    }

    pub fn try_star(weight: f64) -> Result<Self> {
        if weight.is_finite() && weight >= 0.0 {
            Ok(Self::Star(weight))
        } else {
            Err(Error::InvalidWeight(weight))
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    pub fn is_star(&self) -> bool {
        matches!(self, Self::Star(_))
    }

    /// Pixels for `Fixed`, weight for `Star`, 0 for `Auto`. Never negative.
    pub fn value(&self) -> f64 {
        match *self {
            Self::Auto => 0.0,
            Self::Fixed(v) | Self::Star(v) => sanitize(v),
        }
    }
}

// NaN.max(0.0) is 0.0.
fn sanitize(v: f64) -> f64 {
    if v.is_infinite() {
        0.0
    } else {
        v.max(0.0)
    }
}

impl FromStr for TableLength {
    type Err = Error;

    /// Accepts `auto`, `120`, `120px`, `*` and `2.5*`.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || Error::InvalidLength(s.to_string());

        if text.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }

        if let Some(weight) = text.strip_suffix('*') {
            let weight = weight.trim();
            if weight.is_empty() {
                return Ok(Self::Star(1.0));
            }
            let weight: f64 = weight.parse().map_err(|_| invalid())?;
            return Self::try_star(weight);
        }

        let pixels = text.strip_suffix("px").unwrap_or(text).trim();
        let pixels: f64 = pixels.parse().map_err(|_| invalid())?;
        Self::try_fixed(pixels)
    }
}

impl core::fmt::Display for TableLength {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Auto => write!(fmt, "auto"),
            Self::Fixed(v) => write!(fmt, "{}px", v),
            Self::Star(w) => write!(fmt, "{}*", w),
        }
    }
}
