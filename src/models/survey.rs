//! Grant finder models.

use serde::{Deserialize, Serialize};

/// Answers to the four grant finder questions.
///
/// Missing answers default to the form's initial state: an existing hawker
/// who answered "No" to everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyResponse {
    /// Currently running a hawker stall.
    pub is_existing_hawker: bool,
    /// Planning to start a hawker stall soon.
    pub is_aspiring_hawker: bool,
    /// Interested in a community or cultural project around hawker life.
    pub interested_in_culture: bool,
    /// Wants support to buy equipment or improve productivity.
    pub wants_productivity: bool,
}

impl Default for SurveyResponse {
    fn default() -> Self {
        Self {
            is_existing_hawker: true,
            is_aspiring_hawker: false,
            interested_in_culture: false,
            wants_productivity: false,
        }
    }
}

/// A grant programme the respondent appears eligible for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantMatch {
    /// Programme name.
    pub name: String,
    /// Short description of what the programme offers.
    pub description: String,
    /// Where to apply or learn more.
    pub link: String,
}
