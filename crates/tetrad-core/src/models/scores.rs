use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::scale::Scale;

/// Per-scale unweighted sums of item responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawScores {
    pub mach: u32,
    pub narc: u32,
    pub psyc: u32,
    pub sadi: u32,
}

/// Per-scale standardized scores (population mean 50, SD 10).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TScores {
    pub mach: f64,
    pub narc: f64,
    pub psyc: f64,
    pub sadi: f64,
}

/// Per-scale percentile ranks, integers in 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percentiles {
    pub mach: u8,
    pub narc: u8,
    pub psyc: u8,
    pub sadi: u8,
}

impl RawScores {
    pub fn get(&self, scale: Scale) -> u32 {
        match scale {
            Scale::Mach => self.mach,
            Scale::Narc => self.narc,
            Scale::Psyc => self.psyc,
            Scale::Sadi => self.sadi,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Scale) -> u32) -> Self {
        Self {
            mach: f(Scale::Mach),
            narc: f(Scale::Narc),
            psyc: f(Scale::Psyc),
            sadi: f(Scale::Sadi),
        }
    }
}

impl TScores {
    pub fn get(&self, scale: Scale) -> f64 {
        match scale {
            Scale::Mach => self.mach,
            Scale::Narc => self.narc,
            Scale::Psyc => self.psyc,
            Scale::Sadi => self.sadi,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Scale) -> f64) -> Self {
        Self {
            mach: f(Scale::Mach),
            narc: f(Scale::Narc),
            psyc: f(Scale::Psyc),
            sadi: f(Scale::Sadi),
        }
    }
}

impl Percentiles {
    pub fn get(&self, scale: Scale) -> u8 {
        match scale {
            Scale::Mach => self.mach,
            Scale::Narc => self.narc,
            Scale::Psyc => self.psyc,
            Scale::Sadi => self.sadi,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Scale) -> u8) -> Self {
        Self {
            mach: f(Scale::Mach),
            narc: f(Scale::Narc),
            psyc: f(Scale::Psyc),
            sadi: f(Scale::Sadi),
        }
    }
}
