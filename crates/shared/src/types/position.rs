//! Placement of the currency symbol relative to a formatted number.

use serde::{Deserialize, Serialize};

/// Prefix of the translation keys used for position labels.
pub const POSITION_LABEL_KEY_PREFIX: &str = "money.enums.currency-position";

/// Where the currency symbol goes when an amount is formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolPosition {
    /// `$100`
    #[default]
    Left,
    /// `$ 100`
    LeftWithSpace,
    /// `100$`
    Right,
    /// `100 $`
    RightWithSpace,
    /// `100`, symbol omitted.
    Hidden,
}

impl SymbolPosition {
    /// Every position, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Left,
        Self::LeftWithSpace,
        Self::Right,
        Self::RightWithSpace,
        Self::Hidden,
    ];

    /// Returns the stored value of this position.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::LeftWithSpace => "left-with-space",
            Self::Right => "right",
            Self::RightWithSpace => "right-with-space",
            Self::Hidden => "hidden",
        }
    }

    /// Returns the translation key for this position's label.
    #[must_use]
    pub fn label_key(self) -> String {
        format!("{POSITION_LABEL_KEY_PREFIX}.{}", self.as_str())
    }

    /// Lists `(value, label)` pairs for every position, e.g. for a select box.
    ///
    /// `translate` receives the label key and may return a localized label.
    /// When it returns `None` the raw value is used as the label.
    pub fn options<F>(translate: F) -> Vec<(&'static str, String)>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::ALL
            .into_iter()
            .map(|position| {
                let label =
                    translate(&position.label_key()).unwrap_or_else(|| position.as_str().to_string());
                (position.as_str(), label)
            })
            .collect()
    }
}

impl std::fmt::Display for SymbolPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SymbolPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == wanted)
            .ok_or_else(|| format!("Unknown symbol position: {s}"))
    }
}
