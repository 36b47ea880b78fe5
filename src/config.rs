use std::{fmt, str::FromStr};

/// The active integer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitWidth {
    /// 8-bit values.
    W8,
    /// 16-bit values.
    W16,
    /// 32-bit values.
    W32,
    /// 64-bit values.
    #[default]
    W64,
}

impl BitWidth {
    /// The number of bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }
}

impl FromStr for BitWidth {
    type Err = String;

    /// Parses `8`, `16`, `32` or `64`.
    ///
    /// # Example
    /// ```
    /// use hd::config::BitWidth;
    ///
    /// assert_eq!("16".parse::<BitWidth>(), Ok(BitWidth::W16));
    /// assert!("12".parse::<BitWidth>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "8" => Ok(Self::W8),
            "16" => Ok(Self::W16),
            "32" => Ok(Self::W32),
            "64" => Ok(Self::W64),
            other => Err(format!("unsupported bit width '{other}', expected 8, 16, 32 or 64")),
        }
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Options for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Width of every value in the session.
    pub width:     BitWidth,
    /// Whether diagnostics are reported.
    pub verbose:   bool,
    /// Whether output is padded to the full width.
    pub long_form: bool,
}
