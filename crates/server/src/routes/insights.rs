//! Health insight endpoint

use axum::{Json, extract::State};
use chrono::Utc;
use migrantcare_core::{HealthInsight, PatientDataBundle};

use crate::ai::Assistant;

/// POST /api/insights - Derive prioritized insights from patient data
///
/// Never fails for a well-formed body: missing sections simply contribute
/// nothing, and the lifestyle recommendation is always present.
pub async fn generate(
    State(assistant): State<Assistant>,
    Json(bundle): Json<PatientDataBundle>,
) -> Json<Vec<HealthInsight>> {
    tracing::info!(
        vitals = bundle.vitals.as_ref().map_or(0, Vec::len),
        appointments = bundle.appointments.as_ref().map_or(0, Vec::len),
        medications = bundle.medications.as_ref().map_or(0, Vec::len),
        "Insight generation"
    );

    let resolved = assistant.generate_insights(&bundle, Utc::now()).await;
    Json(resolved.value)
}
