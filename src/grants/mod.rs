//! Grant finder.
//!
//! Matches survey answers against a static table of government grant
//! programmes. Each rule is evaluated independently and in declaration order.

mod rules;

pub use rules::{
    evaluate_rules, find_grants, match_grants, GrantOutcome, GrantRule, RuleEvaluation,
    DISCLAIMER, GRANT_RULES, NO_MATCH_MESSAGE, PROGRAMMES_LINK,
};
