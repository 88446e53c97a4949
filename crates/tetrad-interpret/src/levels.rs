//! Banding of T-scores and ages for rule-based interpretation.

use serde::{Deserialize, Serialize};

/// Five-band classification of a T-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TScoreLevel {
    VeryLow,
    Low,
    Average,
    High,
    VeryHigh,
}

impl TScoreLevel {
    /// Band boundaries: below 30 very low, below 40 low, up to 60 average,
    /// up to 70 high, above 70 very high.
    pub fn from_t(t_score: f64) -> Self {
        if t_score < 30.0 {
            TScoreLevel::VeryLow
        } else if t_score < 40.0 {
            TScoreLevel::Low
        } else if t_score <= 60.0 {
            TScoreLevel::Average
        } else if t_score <= 70.0 {
            TScoreLevel::High
        } else {
            TScoreLevel::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TScoreLevel::VeryLow => "very low",
            TScoreLevel::Low => "low",
            TScoreLevel::Average => "average",
            TScoreLevel::High => "high",
            TScoreLevel::VeryHigh => "very high",
        }
    }
}

/// Life-stage bands used to contextualize interpretation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Youth,
    YoungAdult,
    MiddleAge,
    Senior,
}

impl AgeGroup {
    /// Band boundaries: under 20 youth, under 30 young adult, under 60
    /// middle age, otherwise senior.
    pub fn from_age(age: u8) -> Self {
        if age < 20 {
            AgeGroup::Youth
        } else if age < 30 {
            AgeGroup::YoungAdult
        } else if age < 60 {
            AgeGroup::MiddleAge
        } else {
            AgeGroup::Senior
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Youth => "adolescence",
            AgeGroup::YoungAdult => "young adulthood",
            AgeGroup::MiddleAge => "middle adulthood",
            AgeGroup::Senior => "late adulthood",
        }
    }
}
