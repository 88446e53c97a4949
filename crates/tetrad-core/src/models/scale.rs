use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the four Dark Tetrad dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Scale {
    /// Machiavellianism: manipulativeness and strategic exploitation.
    Mach,
    /// Narcissism: grandiosity and entitled self-importance.
    Narc,
    /// Psychopathy: impulsivity and low empathy.
    Psyc,
    /// Sadism: enjoyment of others' pain.
    Sadi,
}

impl Scale {
    /// Fixed iteration order, used everywhere per-scale records are built.
    pub const ALL: [Scale; 4] = [Scale::Mach, Scale::Narc, Scale::Psyc, Scale::Sadi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Mach => "mach",
            Scale::Narc => "narc",
            Scale::Psyc => "psyc",
            Scale::Sadi => "sadi",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scale::Mach => "Machiavellianism",
            Scale::Narc => "Narcissism",
            Scale::Psyc => "Psychopathy",
            Scale::Sadi => "Sadism",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scale::Mach => "Tendency to manipulate and strategically exploit others",
            Scale::Narc => "Self-centeredness and a grandiose self-image",
            Scale::Psyc => "Impulsivity and low empathy",
            Scale::Sadi => "Tendency to take pleasure in the suffering of others",
        }
    }

    /// Number of inventory items belonging to this scale.
    pub fn item_count(&self) -> u32 {
        match self {
            Scale::Sadi => 5,
            _ => 6,
        }
    }

    /// Lowest and highest possible raw sums (`k` items, each rated 1–5).
    pub fn raw_range(&self) -> (u32, u32) {
        let k = self.item_count();
        (k, 5 * k)
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mach" => Ok(Scale::Mach),
            "narc" => Ok(Scale::Narc),
            "psyc" => Ok(Scale::Psyc),
            "sadi" => Ok(Scale::Sadi),
            other => Err(CoreError::UnknownScale(other.to_string())),
        }
    }
}
