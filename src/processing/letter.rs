//! Cover letter generation

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverLetter {
    pub job_title: String,
    pub body: String,
}

impl CoverLetter {
    /// `Cover_Letter_<Job_Title>.txt`
    pub fn suggested_filename(&self) -> String {
        format!("Cover_Letter_{}.txt", self.job_title.replace(' ', "_"))
    }
}

/// Fill the fixed letter template. The name appears in the introduction and
/// the signature, the job title once in the introduction.
pub fn generate_cover_letter(name: &str, job_title: &str) -> CoverLetter {
    let body = format!(
        "Dear Hiring Manager,

My name is {name}, and I am excited to apply for the {job_title} position. With a strong background in finance, including expertise in Financial Modeling, Valuation, and Investment Analysis, I am confident in my ability to contribute effectively to your team.

My education in finance and hands-on internship experience have equipped me with the analytical skills, attention to detail, and strategic thinking required for success in this role.

I would welcome the opportunity to further discuss how I can add value to your organization.

Thank you for your time and consideration.

Sincerely,
{name}
"
    );

    CoverLetter {
        job_title: job_title.to_string(),
        body,
    }
}
