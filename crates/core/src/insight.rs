use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Trend,
    Alert,
    Recommendation,
    Achievement,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort weight: high=3, medium=2, low=1
    pub fn weight(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Vitals,
    Medication,
    Appointment,
    Lifestyle,
}

/// A discrete, typed observation derived from patient data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthInsight {
    pub id: String,
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: InsightCategory,
    pub timestamp: DateTime<Utc>,
    pub actionable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_text: Option<String>,
}

impl HealthInsight {
    /// Create a non-actionable insight with an id of the form `<prefix>-<uuid>`
    pub fn new(
        prefix: &str,
        insight_type: InsightType,
        priority: Priority,
        category: InsightCategory,
        title: &str,
        description: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("{}-{}", prefix, Uuid::new_v4()),
            insight_type,
            title: title.to_string(),
            description,
            priority,
            category,
            timestamp,
            actionable: false,
            action_text: None,
        }
    }

    /// Mark the insight actionable with the given call to action
    pub fn with_action(mut self, action_text: &str) -> Self {
        self.actionable = true;
        self.action_text = Some(action_text.to_string());
        self
    }

    /// Fixed insight used when a remote answer could not be parsed
    pub fn safe_default(now: DateTime<Utc>) -> Self {
        Self::new(
            "fallback",
            InsightType::Recommendation,
            Priority::Low,
            InsightCategory::Lifestyle,
            "Continue Health Monitoring",
            "Keep tracking your health data and attend your scheduled appointments.".to_string(),
            now,
        )
        .with_action("View Health Tips")
    }
}

/// Stable sort by descending priority weight
pub fn sort_by_priority(insights: &mut [HealthInsight]) {
    insights.sort_by_key(|i| std::cmp::Reverse(i.priority.weight()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let insight = HealthInsight::safe_default(Utc::now());
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["type"], "recommendation");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["category"], "lifestyle");
        assert_eq!(json["actionText"], "View Health Tips");
        assert!(json["id"].as_str().unwrap().starts_with("fallback-"));
    }

    #[test]
    fn test_sort_is_stable_and_descending() {
        let now = Utc::now();
        let make = |title: &str, priority| {
            HealthInsight::new(
                "t",
                InsightType::Alert,
                priority,
                InsightCategory::Vitals,
                title,
                String::new(),
                now,
            )
        };
        let mut insights = vec![
            make("low", Priority::Low),
            make("high-a", Priority::High),
            make("medium", Priority::Medium),
            make("high-b", Priority::High),
        ];
        sort_by_priority(&mut insights);
        let titles: Vec<_> = insights.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["high-a", "high-b", "medium", "low"]);
    }
}
