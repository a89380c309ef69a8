//! Static keyword tables shared by the rule engines.
//!
//! All entries are lower-case; callers lower-case the text they search.

/// Keywords that put a report in the critical tier
pub const CRITICAL_KEYWORDS: &[&str] = &[
    "severe",
    "intense",
    "unbearable",
    "emergency",
    "chest pain",
    "difficulty breathing",
    "loss of consciousness",
];

/// Keywords for the high tier. "severe" repeats the critical tier and can never
/// be reached here; it is kept so the table mirrors the deployed ruleset.
pub const HIGH_KEYWORDS: &[&str] = &[
    "severe",
    "persistent",
    "fever",
    "nausea",
    "vomiting",
    "dizziness",
];

pub const MEDIUM_KEYWORDS: &[&str] = &["moderate", "mild", "ache", "pain", "discomfort"];

/// Keyword that forces emergency urgency regardless of severity
pub const EMERGENCY_KEYWORD: &str = "emergency";

/// Keyword that raises routine urgency to urgent
pub const URGENT_KEYWORD: &str = "urgent";

pub const FEVER_KEYWORD: &str = "fever";

pub const PAIN_KEYWORD: &str = "pain";

/// How the keywords of a condition rule combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    All,
    Any,
}

/// A pattern rule that suggests a condition when it matches
#[derive(Debug, Clone, Copy)]
pub struct ConditionRule {
    pub keywords: &'static [&'static str],
    pub mode: Match,
    pub condition: &'static str,
    pub probability: f64,
    pub description: &'static str,
}

impl ConditionRule {
    /// Check whether the rule fires against a lower-cased search buffer
    pub fn matches(&self, text: &str) -> bool {
        match self.mode {
            Match::All => self.keywords.iter().all(|k| text.contains(k)),
            Match::Any => self.keywords.iter().any(|k| text.contains(k)),
        }
    }
}

/// Condition rules in evaluation order. Rules are independent; several may fire.
pub const CONDITION_RULES: &[ConditionRule] = &[
    ConditionRule {
        keywords: &["headache", "fever"],
        mode: Match::All,
        condition: "Viral Infection",
        probability: 0.7,
        description: "Common viral infection that may cause headache and fever",
    },
    ConditionRule {
        keywords: &["chest pain", "chest discomfort"],
        mode: Match::Any,
        condition: "Cardiovascular Issue",
        probability: 0.6,
        description: "Chest symptoms that require prompt medical evaluation",
    },
    ConditionRule {
        keywords: &["stomach", "nausea"],
        mode: Match::All,
        condition: "Gastrointestinal Issue",
        probability: 0.8,
        description: "Digestive upset affecting the stomach",
    },
    ConditionRule {
        keywords: &["cough", "cold"],
        mode: Match::All,
        condition: "Respiratory Infection",
        probability: 0.75,
        description: "Infection of the upper respiratory tract",
    },
];

pub const DEFAULT_CONDITION: &str = "General Health Concern";
pub const DEFAULT_CONDITION_PROBABILITY: f64 = 0.5;
pub const DEFAULT_CONDITION_DESCRIPTION: &str =
    "Symptoms that should be evaluated by a healthcare professional";

/// Check whether any keyword of a table appears in the search buffer
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rule_requires_every_keyword() {
        let viral = &CONDITION_RULES[0];
        assert!(viral.matches("headache and fever"));
        assert!(!viral.matches("headache only"));
    }

    #[test]
    fn test_any_rule_accepts_either_keyword() {
        let cardio = &CONDITION_RULES[1];
        assert!(cardio.matches("some chest discomfort"));
        assert!(cardio.matches("chest pain"));
        assert!(!cardio.matches("chest"));
    }

    #[test]
    fn test_tables_are_lower_case() {
        for table in [CRITICAL_KEYWORDS, HIGH_KEYWORDS, MEDIUM_KEYWORDS] {
            for keyword in table {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
