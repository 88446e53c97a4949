use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Examinee gender, serialized as the wire integers `1` (male) / `2`
/// (female) that the frontend and the reference dataset use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl From<Gender> for u8 {
    fn from(gender: Gender) -> u8 {
        match gender {
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }
}

impl TryFrom<u8> for Gender {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Gender::Male),
            2 => Ok(Gender::Female),
            other => Err(CoreError::InvalidGender(other)),
        }
    }
}

/// Questionnaire form rule: ages 10 through 100 are accepted.
pub fn validate_age(age: u8) -> Result<(), CoreError> {
    if !(10..=100).contains(&age) {
        return Err(CoreError::AgeOutOfRange(age));
    }
    Ok(())
}

/// Optional context the examinee can provide before interpretation.
///
/// All fields are free text and omitted from JSON when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdditionalInfo {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub my_personality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub childhood_event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comfortable_clients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub difficult_clients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recent_stress: Option<String>,
}

impl AdditionalInfo {
    pub fn is_empty(&self) -> bool {
        self.my_personality.is_none()
            && self.childhood_event.is_none()
            && self.comfortable_clients.is_none()
            && self.difficult_clients.is_none()
            && self.recent_stress.is_none()
    }
}
