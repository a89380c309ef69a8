//! Remote variant: prompts the generative-language service and parses its answer

use chrono::{DateTime, Utc};
use migrantcare_core::{
    HealthInsight, InsightCategory, InsightType, PatientDataBundle, Priority, Severity,
    SuggestedCondition, SymptomAnalysis, SymptomReport, Urgency, sort_by_priority,
};
use serde::Deserialize;

use super::backend::AnalysisBackend;
use super::client::GeminiClient;
use super::error::AiError;
use super::extract::extract_json;

const SYMPTOM_SYSTEM_PROMPT: &str = r#"You are a careful health assistant helping migrant workers understand their symptoms. You do not diagnose; you help people decide how quickly to seek care.

Respond with ONLY a JSON object with this structure:
{
  "severity": "low|medium|high|critical",
  "suggestedConditions": [
    {"condition": "Name", "probability": 0.0-1.0, "description": "Short plain-language explanation"}
  ],
  "recommendations": ["Short actionable advice"],
  "urgency": "routine|urgent|emergency"
}

Always recommend consulting a healthcare professional. Use simple language."#;

const INSIGHT_SYSTEM_PROMPT: &str = r#"You are a health assistant reviewing a patient's recent vitals, appointments and medication adherence.

Respond with ONLY a JSON array of insights. Each insight has this structure:
{
  "type": "trend|alert|recommendation|achievement",
  "title": "Short title",
  "description": "One or two plain-language sentences",
  "priority": "low|medium|high",
  "category": "vitals|medication|appointment|lifestyle",
  "actionable": true|false,
  "actionText": "Optional short call to action"
}

Do not diagnose. Encourage follow-up with a healthcare provider where appropriate."#;

const CHAT_SYSTEM_PROMPT: &str = r#"You are MigrantCare's friendly health assistant for migrant workers. Answer briefly in simple language. You can explain symptoms, appointments, medications and healthy habits in general terms. Never diagnose or prescribe. For emergencies, tell the user to call their local emergency number immediately. Suggest consulting a healthcare professional for personal medical advice."#;

/// Symptom analysis as the model returns it; symptoms are echoed from the request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteAnalysis {
    severity: Severity,
    #[serde(default)]
    suggested_conditions: Vec<SuggestedCondition>,
    #[serde(default)]
    recommendations: Vec<String>,
    urgency: Urgency,
}

/// Insight as the model returns it; id and timestamp are assigned locally
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteInsight {
    #[serde(rename = "type")]
    insight_type: InsightType,
    title: String,
    description: String,
    priority: Priority,
    category: InsightCategory,
    #[serde(default)]
    actionable: bool,
    #[serde(default)]
    action_text: Option<String>,
}

/// Answers requests through the generative-language service
#[derive(Clone)]
pub struct RemoteBackend {
    client: GeminiClient,
}

impl RemoteBackend {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

impl AnalysisBackend for RemoteBackend {
    type Error = AiError;

    async fn analyze_symptoms(&self, report: &SymptomReport) -> Result<SymptomAnalysis, AiError> {
        let prompt = symptom_prompt(report);
        let response = self
            .client
            .generate(Some(SYMPTOM_SYSTEM_PROMPT), &prompt)
            .await?;
        parse_symptom_analysis(&response, report)
    }

    async fn generate_insights(
        &self,
        bundle: &PatientDataBundle,
        now: DateTime<Utc>,
    ) -> Result<Vec<HealthInsight>, AiError> {
        let prompt = insight_prompt(bundle, now);
        let response = self
            .client
            .generate(Some(INSIGHT_SYSTEM_PROMPT), &prompt)
            .await?;
        parse_insights(&response, now)
    }

    async fn chat(&self, message: &str) -> Result<String, AiError> {
        let response = self
            .client
            .generate(Some(CHAT_SYSTEM_PROMPT), message)
            .await?;
        Ok(response.trim().to_string())
    }
}

/// Build the user prompt for a symptom report; age and gender are context only
fn symptom_prompt(report: &SymptomReport) -> String {
    let mut prompt = format!("Analyze these symptoms: {}", report.symptoms.join(", "));
    if let Some(age) = report.age {
        prompt.push_str(&format!("\nPatient age: {age}"));
    }
    if let Some(gender) = report.gender.as_deref().filter(|g| !g.trim().is_empty()) {
        prompt.push_str(&format!("\nPatient gender: {gender}"));
    }
    prompt
}

fn insight_prompt(bundle: &PatientDataBundle, now: DateTime<Utc>) -> String {
    let data = serde_json::to_string_pretty(bundle).unwrap_or_else(|_| "{}".to_string());
    format!(
        "Today is {}. Generate health insights for this patient data \
         (vitals are listed most recent first):\n{}",
        now.format("%Y-%m-%d"),
        data
    )
}

fn parse_symptom_analysis(text: &str, report: &SymptomReport) -> Result<SymptomAnalysis, AiError> {
    let json = extract_json(text, '{')?;
    let remote: RemoteAnalysis =
        serde_json::from_str(json).map_err(|e| AiError::Malformed(e.to_string()))?;

    let conditions = remote
        .suggested_conditions
        .into_iter()
        .map(|mut c| {
            c.probability = c.probability.clamp(0.0, 1.0);
            c
        })
        .collect();

    Ok(SymptomAnalysis::new(
        report.symptoms.clone(),
        remote.severity,
        conditions,
        remote.recommendations,
        remote.urgency,
    ))
}

/// An empty array is treated as unusable so the caller never sees a blank list
fn parse_insights(text: &str, now: DateTime<Utc>) -> Result<Vec<HealthInsight>, AiError> {
    let json = extract_json(text, '[')?;
    let remote: Vec<RemoteInsight> =
        serde_json::from_str(json).map_err(|e| AiError::Malformed(e.to_string()))?;
    if remote.is_empty() {
        return Err(AiError::Malformed("Empty insight list".to_string()));
    }

    let mut insights: Vec<HealthInsight> = remote
        .into_iter()
        .map(|r| {
            let mut insight = HealthInsight::new(
                "ai-insight",
                r.insight_type,
                r.priority,
                r.category,
                &r.title,
                r.description,
                now,
            );
            insight.actionable = r.actionable;
            insight.action_text = r.action_text.filter(|_| r.actionable);
            insight
        })
        .collect();

    sort_by_priority(&mut insights);
    Ok(insights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_prompt_includes_context() {
        let mut report = SymptomReport::new(["headache", "fever"]);
        report.age = Some(29);
        report.gender = Some("male".to_string());
        let prompt = symptom_prompt(&report);
        assert!(prompt.contains("headache, fever"));
        assert!(prompt.contains("Patient age: 29"));
        assert!(prompt.contains("Patient gender: male"));

        let bare = symptom_prompt(&SymptomReport::new(["cough"]));
        assert!(!bare.contains("Patient age"));
    }

    #[test]
    fn test_parse_symptom_analysis_from_fenced_text() {
        let text = "Here is my assessment:\n```json\n{\"severity\":\"high\",\
                    \"suggestedConditions\":[{\"condition\":\"Flu\",\"probability\":1.4,\
                    \"description\":\"Seasonal flu\"}],\"recommendations\":[\"Rest\"],\
                    \"urgency\":\"urgent\"}\n```";
        let report = SymptomReport::new(["fever", "chills"]);
        let analysis = parse_symptom_analysis(text, &report).unwrap();
        assert_eq!(analysis.severity, Severity::High);
        assert_eq!(analysis.urgency, Urgency::Urgent);
        assert_eq!(analysis.symptoms, vec!["fever", "chills"]);
        assert_eq!(analysis.suggested_conditions[0].probability, 1.0);
    }

    #[test]
    fn test_parse_symptom_analysis_fills_empty_lists() {
        let text = r#"{"severity":"low","urgency":"routine"}"#;
        let analysis = parse_symptom_analysis(text, &SymptomReport::new(["itch"])).unwrap();
        assert_eq!(
            analysis.suggested_conditions[0].condition,
            "General Health Concern"
        );
        assert!(!analysis.recommendations.is_empty());
    }

    #[test]
    fn test_unknown_severity_is_malformed() {
        let text = r#"{"severity":"catastrophic","urgency":"routine"}"#;
        let err = parse_symptom_analysis(text, &SymptomReport::new(["itch"])).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_parse_insights_sorts_and_assigns_ids() {
        let text = r#"[
            {"type":"recommendation","title":"Walk daily","description":"Light exercise helps.",
             "priority":"low","category":"lifestyle","actionable":false,"actionText":"ignored"},
            {"type":"alert","title":"Missed doses","description":"Adherence is low.",
             "priority":"high","category":"medication","actionable":true,"actionText":"Set Reminders"}
        ]"#;
        let now = Utc::now();
        let insights = parse_insights(text, now).unwrap();
        assert_eq!(insights[0].title, "Missed doses");
        assert_eq!(insights[0].action_text.as_deref(), Some("Set Reminders"));
        assert_eq!(insights[1].action_text, None);
        assert!(insights.iter().all(|i| i.id.starts_with("ai-insight-")));
        assert!(insights.iter().all(|i| i.timestamp == now));
    }

    #[test]
    fn test_empty_insight_array_is_malformed() {
        assert!(parse_insights("[]", Utc::now()).unwrap_err().is_malformed());
    }
}
