// File: crates/chart-data/src/mode.rs
// Summary: Chart rendering mode (simple category plot, linear or logarithmic value axis).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Simple,
    Linear,
    Logarithmic,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Simple, Mode::Linear, Mode::Logarithmic];

    /// Linear and logarithmic modes need numeric x values and allow grouping by site.
    pub fn is_numeric(self) -> bool {
        matches!(self, Mode::Linear | Mode::Logarithmic)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Simple => "Simple",
            Mode::Linear => "Linear",
            Mode::Logarithmic => "Logarithmic",
        })
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Mode::Simple),
            "linear" => Ok(Mode::Linear),
            "logarithmic" | "log" => Ok(Mode::Logarithmic),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}
