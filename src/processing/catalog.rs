//! Job postings evaluated by the matcher

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub required_skills: Vec<String>,
    pub required_degree: String,
}

impl JobPosting {
    pub fn new(title: &str, required_skills: &[&str], required_degree: &str) -> Self {
        Self {
            title: title.to_string(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            required_degree: required_degree.to_string(),
        }
    }
}

/// The built-in finance catalog, in evaluation order
pub fn default_catalog() -> Vec<JobPosting> {
    vec![
        JobPosting::new(
            "Investment Analyst",
            &["Financial Modeling", "Valuation", "Investment Analysis"],
            "Master of Finance",
        ),
        JobPosting::new(
            "Financial Analyst",
            &["Excel", "Financial Modeling"],
            "Bachelor",
        ),
        JobPosting::new(
            "Investment Banking Associate",
            &["PowerPoint", "Valuation"],
            "Master of Finance",
        ),
    ]
}
