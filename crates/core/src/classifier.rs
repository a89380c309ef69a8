//! Rule-based symptom classifier.
//!
//! Severity comes from the first keyword tier that matches, conditions from
//! independent pattern rules, and urgency from severity plus two keyword
//! overrides. Matching is plain substring containment on the lower-cased,
//! space-joined symptom list.

use crate::symptom::{Severity, SuggestedCondition, SymptomAnalysis, SymptomReport, Urgency};
use crate::vocabulary::{
    CONDITION_RULES, CRITICAL_KEYWORDS, EMERGENCY_KEYWORD, FEVER_KEYWORD, HIGH_KEYWORDS,
    MEDIUM_KEYWORDS, PAIN_KEYWORD, URGENT_KEYWORD, contains_any,
};

/// Classify a report. Callers validate the report first; an empty symptom
/// list is a precondition violation, not an error here.
pub fn classify(report: &SymptomReport) -> SymptomAnalysis {
    let text = report.search_text();
    let severity = severity(&text);

    SymptomAnalysis::new(
        report.symptoms.clone(),
        severity,
        suggested_conditions(&text),
        recommendations(&text, severity),
        urgency(&text, severity),
    )
}

/// First matching tier wins
pub fn severity(text: &str) -> Severity {
    if contains_any(text, CRITICAL_KEYWORDS) {
        Severity::Critical
    } else if contains_any(text, HIGH_KEYWORDS) {
        Severity::High
    } else if contains_any(text, MEDIUM_KEYWORDS) {
        Severity::Medium
    } else {
        Severity::Low
    }
}

pub fn suggested_conditions(text: &str) -> Vec<SuggestedCondition> {
    let mut conditions: Vec<SuggestedCondition> = CONDITION_RULES
        .iter()
        .filter(|rule| rule.matches(text))
        .map(|rule| SuggestedCondition::new(rule.condition, rule.probability, rule.description))
        .collect();

    if conditions.is_empty() {
        conditions.push(SuggestedCondition::general_concern());
    }
    conditions
}

/// Baseline pair, then fever pair, then pain pair, then the closing pair
pub fn recommendations(text: &str, severity: Severity) -> Vec<String> {
    let baseline: [&str; 2] = match severity {
        Severity::Critical => [
            "Seek immediate medical attention",
            "Call emergency services if symptoms worsen",
        ],
        Severity::High => [
            "Schedule an urgent appointment with your doctor",
            "Monitor your symptoms closely",
        ],
        Severity::Medium | Severity::Low => [
            "Schedule a routine checkup with your healthcare provider",
            "Monitor your symptoms and note any changes",
        ],
    };

    let mut recommendations: Vec<&str> = baseline.to_vec();

    if text.contains(FEVER_KEYWORD) {
        recommendations.push("Stay hydrated and get plenty of rest");
        recommendations.push("Monitor your temperature regularly");
    }

    if text.contains(PAIN_KEYWORD) {
        recommendations.push("Apply appropriate pain relief measures");
        recommendations.push("Avoid activities that worsen the pain");
    }

    recommendations.push("Keep a symptom diary to track changes");
    recommendations.push("Don't self-diagnose - consult a healthcare professional");

    recommendations.into_iter().map(String::from).collect()
}

pub fn urgency(text: &str, severity: Severity) -> Urgency {
    if severity == Severity::Critical || text.contains(EMERGENCY_KEYWORD) {
        Urgency::Emergency
    } else if severity == Severity::High || text.contains(URGENT_KEYWORD) {
        Urgency::Urgent
    } else {
        Urgency::Routine
    }
}
