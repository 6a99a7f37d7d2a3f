//! Grant eligibility rules.

use serde::Serialize;

use crate::models::{GrantMatch, SurveyResponse};

/// General listing of hawker programmes, offered when nothing matches.
pub const PROGRAMMES_LINK: &str =
    "https://www.nea.gov.sg/our-services/hawker-management/programmes-and-grants";

/// Shown when no rule matches.
pub const NO_MATCH_MESSAGE: &str = "No matching schemes found based on your answers.";

/// Shown alongside every result.
pub const DISCLAIMER: &str = "This is a simplified eligibility checker. Always check the \
official NEA pages for full criteria and application details.";

/// One row of the eligibility table.
#[derive(Debug, Clone, Copy)]
pub struct GrantRule {
    /// Stable identifier used in evaluation traces.
    pub id: &'static str,
    /// The condition in words, for traces.
    pub condition: &'static str,
    /// Predicate over the survey answers.
    pub applies: fn(&SurveyResponse) -> bool,
    /// Programme name.
    pub name: &'static str,
    /// Programme description.
    pub description: &'static str,
    /// Programme link.
    pub link: &'static str,
}

impl GrantRule {
    fn to_match(self) -> GrantMatch {
        GrantMatch {
            name: self.name.to_string(),
            description: self.description.to_string(),
            link: self.link.to_string(),
        }
    }
}

/// The eligibility table, in display order.
pub const GRANT_RULES: &[GrantRule] = &[
    GrantRule {
        id: "productivity_grant",
        condition: "existing hawker AND wants productivity support",
        applies: |r| r.is_existing_hawker && r.wants_productivity,
        name: "Hawkers' Productivity Grant",
        description: "Improve your kitchen efficiency with approved equipment like automatic \
rice cookers, fryers, or food warmers.",
        link: "https://www.nea.gov.sg/our-services/hawker-management/programmes-and-grants/hawkers-productivity-grant",
    },
    GrantRule {
        id: "incubation_stall_programme",
        condition: "aspiring hawker",
        applies: |r| r.is_aspiring_hawker,
        name: "Incubation Stall Programme (ISP)",
        description: "Get started as a hawker with subsidised stall rent, basic equipment, and \
mentoring for 6-12 months.",
        link: "https://www.nea.gov.sg/our-services/hawker-management/programmes-and-grants/isp",
    },
    GrantRule {
        id: "vibrant_hawker_culture",
        condition: "interested in hawker culture projects",
        applies: |r| r.interested_in_culture,
        name: "Vibrant Hawker Culture Programme",
        description: "Receive funding to organise projects or events that promote Singapore's \
rich hawker heritage.",
        link: "https://www.nea.gov.sg/our-services/hawker-management/programmes-and-grants/vibrant-hawker-culture",
    },
];

/// The record of evaluating one rule against a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleEvaluation {
    /// The rule identifier.
    pub rule_id: String,
    /// The programme the rule leads to.
    pub grant: String,
    /// Whether the rule matched.
    pub matched: bool,
    /// Human-readable explanation.
    pub reasoning: String,
}

/// Evaluates every rule against `response`, in table order.
pub fn evaluate_rules(response: &SurveyResponse) -> Vec<RuleEvaluation> {
    GRANT_RULES
        .iter()
        .map(|rule| {
            let matched = (rule.applies)(response);
            let reasoning = if matched {
                format!("Eligible: answers satisfy '{}'", rule.condition)
            } else {
                format!("Not eligible: requires '{}'", rule.condition)
            };
            RuleEvaluation {
                rule_id: rule.id.to_string(),
                grant: rule.name.to_string(),
                matched,
                reasoning,
            }
        })
        .collect()
}

/// Returns the grants whose rules match `response`, in table order.
///
/// # Examples
///
/// ```
/// use hawker_hub::grants::match_grants;
/// use hawker_hub::models::SurveyResponse;
///
/// let response = SurveyResponse {
///     is_existing_hawker: true,
///     is_aspiring_hawker: false,
///     interested_in_culture: false,
///     wants_productivity: true,
/// };
/// let matches = match_grants(&response);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].name, "Hawkers' Productivity Grant");
/// ```
pub fn match_grants(response: &SurveyResponse) -> Vec<GrantMatch> {
    GRANT_RULES
        .iter()
        .filter(|rule| (rule.applies)(response))
        .map(|rule| rule.to_match())
        .collect()
}

/// The result shown to the respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GrantOutcome {
    /// At least one grant matched.
    Matched {
        /// The matching grants, in table order.
        grants: Vec<GrantMatch>,
    },
    /// Nothing matched; point to the general listing instead.
    NoMatch {
        /// Explanation for the respondent.
        message: String,
        /// Link to all available programmes.
        fallback_link: String,
    },
}

/// Matches grants and turns an empty result into the no-match outcome.
pub fn find_grants(response: &SurveyResponse) -> GrantOutcome {
    let grants = match_grants(response);
    if grants.is_empty() {
        GrantOutcome::NoMatch {
            message: NO_MATCH_MESSAGE.to_string(),
            fallback_link: PROGRAMMES_LINK.to_string(),
        }
    } else {
        GrantOutcome::Matched { grants }
    }
}
