//! Rounding modes for scale conversion.

use serde::{Deserialize, Serialize};

/// Policy selecting how an inexact rescale resolves.
///
/// Examples below rescale to 0 fractional digits.
///
/// | input | Up | Down | Ceiling | Floor | HalfUp | HalfDown | HalfEven |
/// |-------|----|------|---------|-------|--------|----------|----------|
/// |  2.5  |  3 |   2  |    3    |   2   |    3   |     2    |     2    |
/// |  3.5  |  4 |   3  |    4    |   3   |    4   |     3    |     4    |
/// | -2.5  | -3 |  -2  |   -2    |  -3   |   -3   |    -2    |    -2    |
/// |  1.1  |  2 |   1  |    2    |   1   |    1   |     1    |     1    |
///
/// `Unnecessary` asserts the rescale is exact and fails otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero (truncate).
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// Nearest neighbour, ties away from zero.
    HalfUp,
    /// Nearest neighbour, ties towards zero.
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding).
    HalfEven,
    /// No rounding allowed.
    Unnecessary,
}

impl RoundingMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Down,
        Self::Ceiling,
        Self::Floor,
        Self::HalfUp,
        Self::HalfDown,
        Self::HalfEven,
        Self::Unnecessary,
    ];

    /// Returns the kebab-case name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Ceiling => "ceiling",
            Self::Floor => "floor",
            Self::HalfUp => "half-up",
            Self::HalfDown => "half-down",
            Self::HalfEven => "half-even",
            Self::Unnecessary => "unnecessary",
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| format!("Unknown rounding mode: {s}"))
    }
}
