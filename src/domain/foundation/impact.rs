//! Impact value object: whether a criterion is a benefit or a cost.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TopsisError;

/// Preferred direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Higher raw values are preferable (`+`).
    Benefit,
    /// Lower raw values are preferable (`-`).
    Cost,
}

impl Impact {
    /// Parses an impact symbol. Only the exact tokens `+` and `-` are accepted.
    pub fn try_from_symbol(symbol: &str) -> Result<Self, TopsisError> {
        match symbol {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            other => Err(TopsisError::format(
                "impacts",
                format!("impacts must be either '+' or '-', got '{}'", other),
            )),
        }
    }

    /// Returns the symbol used on the command line.
    pub fn symbol(&self) -> char {
        match self {
            Impact::Benefit => '+',
            Impact::Cost => '-',
        }
    }

}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_parses_plus_and_minus() {
        assert_eq!(Impact::try_from_symbol("+").unwrap(), Impact::Benefit);
        assert_eq!(Impact::try_from_symbol("-").unwrap(), Impact::Cost);
    }

    #[test]
    fn impact_rejects_other_symbols() {
        for symbol in ["x", "", "++", " +", "benefit", "0"] {
            let err = Impact::try_from_symbol(symbol).unwrap_err();
            assert!(
                matches!(err, TopsisError::Format { .. }),
                "expected format error for {:?}",
                symbol
            );
        }
    }

    #[test]
    fn impact_displays_its_symbol() {
        assert_eq!(format!("{}", Impact::Benefit), "+");
        assert_eq!(format!("{}", Impact::Cost), "-");
    }

    #[test]
    fn impact_serializes_lowercase() {
        let json = serde_json::to_string(&Impact::Cost).unwrap();
        assert_eq!(json, "\"cost\"");
    }
}
