use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a range count is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Count over digit positions; cost depends only on the number of digits.
    #[default]
    DigitDp,
    /// Visit every number in the range.
    Scan,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DigitDp => "digit-dp",
            Self::Scan => "scan",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dp" | "digit-dp" => Ok(Self::DigitDp),
            "scan" | "exhaustive" => Ok(Self::Scan),
            other => Err(format!("Unknown strategy: {other}")),
        }
    }
}
