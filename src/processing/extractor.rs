//! Qualification extraction by literal keyword containment

use crate::processing::vocabulary::{KeywordSet, Vocabulary};
use log::debug;
use serde::{Deserialize, Serialize};

/// Keywords found in a CV, one set per vocabulary category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Qualifications {
    pub skills: KeywordSet,
    pub degrees: KeywordSet,
    pub experiences: KeywordSet,
}

impl Qualifications {
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.degrees.is_empty() && self.experiences.is_empty()
    }
}

/// Scan `text` line by line and record every vocabulary keyword that occurs,
/// case-insensitively, inside at least one line.
///
/// Keywords are tested independently, so overlapping terms such as
/// "Master" and "Master of Finance" are both recorded.
pub fn extract_qualifications(text: &str, vocabulary: &Vocabulary) -> Qualifications {
    let lines: Vec<String> = text.split('\n').map(str::to_lowercase).collect();

    let qualifications = Qualifications {
        skills: scan(&lines, &vocabulary.skills),
        degrees: scan(&lines, &vocabulary.degrees),
        experiences: scan(&lines, &vocabulary.experiences),
    };

    debug!(
        "Extracted {} skills, {} degrees, {} experiences from {} lines",
        qualifications.skills.len(),
        qualifications.degrees.len(),
        qualifications.experiences.len(),
        lines.len()
    );

    qualifications
}

fn scan(lines: &[String], keywords: &[String]) -> KeywordSet {
    let mut found = KeywordSet::new();
    for keyword in keywords {
        let needle = keyword.to_lowercase();
        if lines.iter().any(|line| line.contains(&needle)) {
            found.insert(keyword.clone());
        }
    }
    found
}
