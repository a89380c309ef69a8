use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::vocabulary::{
    DEFAULT_CONDITION, DEFAULT_CONDITION_DESCRIPTION, DEFAULT_CONDITION_PROBABILITY,
};

/// Symptoms reported by a patient, with optional demographic context
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReport {
    pub symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl SymptomReport {
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            age: None,
            gender: None,
        }
    }

    /// Reject reports the classifier must never see
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.symptoms.iter().all(|s| s.trim().is_empty()) {
            return Err(CoreError::EmptySymptoms);
        }
        if let Some(0) = self.age {
            return Err(CoreError::InvalidAge(0));
        }
        Ok(())
    }

    /// All symptoms joined by spaces and lower-cased
    pub fn search_text(&self) -> String {
        self.symptoms.join(" ").to_lowercase()
    }
}

/// Ordinal assessment of symptom intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Recommended response speed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Routine,
    Urgent,
    Emergency,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestedCondition {
    pub condition: String,
    pub probability: f64,
    #[serde(default)]
    pub description: String,
}

impl SuggestedCondition {
    pub fn new(condition: &str, probability: f64, description: &str) -> Self {
        Self {
            condition: condition.to_string(),
            probability,
            description: description.to_string(),
        }
    }

    /// The entry used when no condition rule fired
    pub fn general_concern() -> Self {
        Self::new(
            DEFAULT_CONDITION,
            DEFAULT_CONDITION_PROBABILITY,
            DEFAULT_CONDITION_DESCRIPTION,
        )
    }
}

const SAFE_RECOMMENDATIONS: [&str; 2] = [
    "Consult with a healthcare professional for proper evaluation",
    "Monitor your symptoms and seek care if they worsen",
];

/// Structured result of a symptom analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    pub symptoms: Vec<String>,
    pub severity: Severity,
    pub suggested_conditions: Vec<SuggestedCondition>,
    pub recommendations: Vec<String>,
    pub urgency: Urgency,
}

impl SymptomAnalysis {
    /// Build an analysis, filling empty condition and recommendation lists
    /// so neither is ever empty.
    pub fn new(
        symptoms: Vec<String>,
        severity: Severity,
        mut suggested_conditions: Vec<SuggestedCondition>,
        mut recommendations: Vec<String>,
        urgency: Urgency,
    ) -> Self {
        if suggested_conditions.is_empty() {
            suggested_conditions.push(SuggestedCondition::general_concern());
        }
        if recommendations.is_empty() {
            recommendations = SAFE_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect();
        }
        Self {
            symptoms,
            severity,
            suggested_conditions,
            recommendations,
            urgency,
        }
    }

    /// Fixed analysis used when a remote answer could not be parsed
    pub fn safe_default(symptoms: Vec<String>) -> Self {
        Self::new(
            symptoms,
            Severity::Medium,
            Vec::new(),
            Vec::new(),
            Urgency::Routine,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_and_blank() {
        assert_eq!(
            SymptomReport::new(Vec::<String>::new()).validate(),
            Err(CoreError::EmptySymptoms)
        );
        assert_eq!(
            SymptomReport::new(["  ", ""]).validate(),
            Err(CoreError::EmptySymptoms)
        );
    }

    #[test]
    fn test_validate_rejects_zero_age() {
        let mut report = SymptomReport::new(["cough"]);
        report.age = Some(0);
        assert_eq!(report.validate(), Err(CoreError::InvalidAge(0)));
        report.age = Some(34);
        assert_eq!(report.validate(), Ok(()));
    }

    #[test]
    fn test_severity_total_order() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_safe_default_is_never_empty() {
        let analysis = SymptomAnalysis::safe_default(vec!["odd feeling".into()]);
        assert_eq!(analysis.severity, Severity::Medium);
        assert_eq!(analysis.urgency, Urgency::Routine);
        assert_eq!(analysis.suggested_conditions.len(), 1);
        assert_eq!(
            analysis.suggested_conditions[0].condition,
            "General Health Concern"
        );
        assert_eq!(analysis.recommendations.len(), 2);
        assert_eq!(analysis.symptoms, vec!["odd feeling".to_string()]);
    }

    #[test]
    fn test_report_accepts_camel_case_json() {
        let report: SymptomReport =
            serde_json::from_str(r#"{"symptoms":["Cough"],"age":41,"gender":"female"}"#).unwrap();
        assert_eq!(report.age, Some(41));
        assert_eq!(report.search_text(), "cough");
    }
}
