//! Rule-based job eligibility

use crate::processing::catalog::JobPosting;
use crate::processing::vocabulary::KeywordSet;
use log::debug;

/// A posting is eligible when at least one of its required skills was found
/// and its required degree was found.
pub fn is_eligible(job: &JobPosting, skills: &KeywordSet, degrees: &KeywordSet) -> bool {
    let skill_match = job.required_skills.iter().any(|s| skills.contains(s));
    let degree_match = degrees.contains(&job.required_degree);
    skill_match && degree_match
}

/// Titles of every eligible posting, in catalog order
pub fn match_jobs(skills: &KeywordSet, degrees: &KeywordSet, catalog: &[JobPosting]) -> Vec<String> {
    let matched: Vec<String> = catalog
        .iter()
        .filter(|job| is_eligible(job, skills, degrees))
        .map(|job| job.title.clone())
        .collect();

    debug!("Matched {} of {} postings", matched.len(), catalog.len());
    matched
}
