//! One analysis cycle: extract, match, advise and optionally write a letter

use crate::config::Config;
use crate::processing::advisor::{generate_advice, Advice};
use crate::processing::extractor::{extract_qualifications, Qualifications};
use crate::processing::letter::{generate_cover_letter, CoverLetter};
use crate::processing::matcher::match_jobs;
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    /// A cover letter is only written when a name is supplied
    pub applicant_name: Option<String>,
}

impl AnalysisRequest {
    pub fn new(resume_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            applicant_name: None,
        }
    }

    pub fn with_applicant_name(mut self, name: impl Into<String>) -> Self {
        self.applicant_name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub qualifications: Qualifications,
    pub matched_jobs: Vec<String>,
    pub advice: Advice,
    pub cover_letter: Option<CoverLetter>,
}

impl AnalysisReport {
    pub fn has_matches(&self) -> bool {
        !self.matched_jobs.is_empty()
    }
}

pub fn analyze(request: &AnalysisRequest, config: &Config) -> AnalysisReport {
    let qualifications = extract_qualifications(&request.resume_text, &config.vocabulary);
    let matched_jobs = match_jobs(&qualifications.skills, &qualifications.degrees, &config.catalog);
    let advice = generate_advice(&qualifications.skills, &matched_jobs, &config.advice.recommended_skills);

    let cover_letter = match (&request.applicant_name, matched_jobs.first()) {
        (Some(name), Some(title)) => Some(generate_cover_letter(name, title)),
        _ => None,
    };

    info!(
        "Analysis complete: {} matched jobs, advice {:?}, cover letter {}",
        matched_jobs.len(),
        advice.kind,
        if cover_letter.is_some() { "generated" } else { "skipped" }
    );

    AnalysisReport {
        qualifications,
        matched_jobs,
        advice,
        cover_letter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::advisor::AdviceKind;
    use crate::processing::catalog::JobPosting;

    #[test]
    fn test_bachelor_with_excel() {
        let request = AnalysisRequest::new("I have Excel and Financial Modeling skills. Bachelor degree.");
        let report = analyze(&request, &Config::default());

        assert!(report.qualifications.skills.contains("Excel"));
        assert!(report.qualifications.skills.contains("Financial Modeling"));
        assert!(report.qualifications.degrees.contains("Bachelor"));
        assert_eq!(report.matched_jobs, vec!["Financial Analyst"]);
        assert_eq!(report.advice.kind, AdviceKind::Ready);
        assert!(report.cover_letter.is_none());
    }

    #[test]
    fn test_empty_input() {
        let report = analyze(&AnalysisRequest::new(""), &Config::default());
        assert!(report.qualifications.is_empty());
        assert!(report.matched_jobs.is_empty());
        assert_eq!(report.advice.kind, AdviceKind::BuildBasics);
    }

    #[test]
    fn test_master_of_finance_lists_investment_analyst_first() {
        let request = AnalysisRequest::new("Master of Finance, Valuation, Investment Analysis");
        let report = analyze(&request, &Config::default());

        assert!(report.qualifications.degrees.contains("Master of Finance"));
        assert!(report.qualifications.skills.contains("Valuation"));
        assert!(report.qualifications.skills.contains("Investment Analysis"));
        assert_eq!(report.matched_jobs.first().map(String::as_str), Some("Investment Analyst"));
        assert!(!report.matched_jobs.contains(&"Financial Analyst".to_string()));
    }

    #[test]
    fn test_cover_letter_targets_first_match() {
        let request = AnalysisRequest::new("Master of Finance\nValuation and PowerPoint")
            .with_applicant_name("Jane Doe");
        let report = analyze(&request, &Config::default());

        let letter = report.cover_letter.expect("letter should be generated");
        assert_eq!(letter.job_title, "Investment Analyst");
        assert_eq!(letter.body.matches("Jane Doe").count(), 2);
    }

    #[test]
    fn test_no_letter_without_matches() {
        let request = AnalysisRequest::new("Excel only").with_applicant_name("Jane Doe");
        let report = analyze(&request, &Config::default());
        assert!(report.cover_letter.is_none());
        assert_eq!(report.advice.kind, AdviceKind::ImproveSkills);
    }

    #[test]
    fn test_injected_catalog() {
        let mut config = Config::default();
        config.catalog = vec![JobPosting::new("Data Analyst", &["Data Analysis"], "M.Sc")];

        let report = analyze(&AnalysisRequest::new("M.Sc Statistics\nData analysis in R"), &config);
        assert_eq!(report.matched_jobs, vec!["Data Analyst"]);
    }
}
