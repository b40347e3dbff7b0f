use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Ordinal physical-assistance level for mobility tests. Codes run 1–7,
/// 7 = fully independent (FIM-style scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssistanceLevel {
    Dependent,
    MaximalAssistance,
    ModerateAssistance,
    MinimalAssistance,
    ContactGuard,
    Supervision,
    Independent,
}

impl AssistanceLevel {
    pub fn code(self) -> u8 {
        match self {
            AssistanceLevel::Dependent => 1,
            AssistanceLevel::MaximalAssistance => 2,
            AssistanceLevel::ModerateAssistance => 3,
            AssistanceLevel::MinimalAssistance => 4,
            AssistanceLevel::ContactGuard => 5,
            AssistanceLevel::Supervision => 6,
            AssistanceLevel::Independent => 7,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, CoreError> {
        match code {
            1 => Ok(AssistanceLevel::Dependent),
            2 => Ok(AssistanceLevel::MaximalAssistance),
            3 => Ok(AssistanceLevel::ModerateAssistance),
            4 => Ok(AssistanceLevel::MinimalAssistance),
            5 => Ok(AssistanceLevel::ContactGuard),
            6 => Ok(AssistanceLevel::Supervision),
            7 => Ok(AssistanceLevel::Independent),
            other => Err(CoreError::InvalidAssistanceCode(other)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssistanceLevel::Dependent => "Dependent",
            AssistanceLevel::MaximalAssistance => "Maximal assistance",
            AssistanceLevel::ModerateAssistance => "Moderate assistance",
            AssistanceLevel::MinimalAssistance => "Minimal assistance",
            AssistanceLevel::ContactGuard => "Contact guard assistance",
            AssistanceLevel::Supervision => "Supervision",
            AssistanceLevel::Independent => "Independent",
        }
    }
}
