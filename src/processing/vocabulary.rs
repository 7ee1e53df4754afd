//! Keyword vocabularies and the deduplicated keyword sets extracted with them

use serde::{Deserialize, Serialize};

/// The three fixed keyword lists a CV is scanned against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub skills: Vec<String>,
    pub degrees: Vec<String>,
    pub experiences: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            skills: owned_list(&[
                "Excel",
                "Financial Modeling",
                "Valuation",
                "Investment Analysis",
                "PowerPoint",
                "Data Analysis",
            ]),
            degrees: owned_list(&[
                "Bachelor",
                "Master",
                "PhD",
                "B.Sc",
                "M.Sc",
                "MBA",
                "Master of Finance",
            ]),
            experiences: owned_list(&[
                "Analyst",
                "Intern",
                "Investment Banking",
                "Consultant",
                "Manager",
                "Associate",
            ]),
        }
    }
}

impl Vocabulary {
    /// Iterate every keyword with the category it belongs to
    pub fn categories(&self) -> [(&'static str, &[String]); 3] {
        [
            ("skills", self.skills.as_slice()),
            ("degrees", self.degrees.as_slice()),
            ("experiences", self.experiences.as_slice()),
        ]
    }
}

fn owned_list(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}

/// Insertion-ordered set of canonical keywords.
///
/// Membership is exact string equality on the canonical spelling; the
/// case-insensitive part of matching happens during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the keyword was already present
    pub fn insert(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        if self.contains(&keyword) {
            return false;
        }
        self.keywords.push(keyword);
        true
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn join(&self, separator: &str) -> String {
        self.keywords.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.insert(keyword);
        }
        set
    }
}
