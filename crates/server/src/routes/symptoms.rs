//! Symptom analysis endpoint

use axum::{Json, extract::State};
use migrantcare_core::{SymptomAnalysis, SymptomReport};

use crate::ai::Assistant;
use crate::error::AppError;

/// POST /api/symptoms/analyze - Classify reported symptoms
///
/// Tries the remote model first and falls back to the local classifier;
/// the response has the same shape either way.
pub async fn analyze(
    State(assistant): State<Assistant>,
    Json(report): Json<SymptomReport>,
) -> Result<Json<SymptomAnalysis>, AppError> {
    report.validate()?;

    tracing::info!(symptom_count = report.symptoms.len(), "Symptom analysis");

    let resolved = assistant.analyze_symptoms(&report).await;
    Ok(Json(resolved.value))
}
