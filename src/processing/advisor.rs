//! Career advice derived from extraction and matching results

use crate::processing::vocabulary::KeywordSet;
use serde::{Deserialize, Serialize};

const READY_MESSAGE: &str = "You are well-prepared for finance positions! \
Start applying and networking with professionals in your target field.";

const IMPROVE_PREFIX: &str =
    "We recommend improving the following skills to boost your job opportunities: ";

const BASICS_MESSAGE: &str = "Consider building basic finance skills such as \
Financial Modeling, Excel, and Valuation to increase your career options.";

/// Skills suggested to candidates that found no matching posting
pub fn default_recommended_skills() -> Vec<String> {
    ["Financial Modeling", "Valuation", "Investment Analysis", "Excel", "PowerPoint"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    /// At least one posting matched
    Ready,
    /// Some skills were found but no posting matched
    ImproveSkills,
    /// Nothing usable was found
    BuildBasics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub kind: AdviceKind,
    pub message: String,
}

pub fn generate_advice(skills: &KeywordSet, matched_jobs: &[String], recommended: &[String]) -> Advice {
    if !matched_jobs.is_empty() {
        return Advice {
            kind: AdviceKind::Ready,
            message: READY_MESSAGE.to_string(),
        };
    }

    if !skills.is_empty() {
        let missing: Vec<&str> = recommended
            .iter()
            .map(String::as_str)
            .filter(|skill| !skills.contains(skill))
            .collect();
        return Advice {
            kind: AdviceKind::ImproveSkills,
            message: format!("{}{}.", IMPROVE_PREFIX, missing.join(", ")),
        };
    }

    Advice {
        kind: AdviceKind::BuildBasics,
        message: BASICS_MESSAGE.to_string(),
    }
}
