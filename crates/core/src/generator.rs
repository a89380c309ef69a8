//! Rule-based health insight generator.
//!
//! Each sub-rule looks at one section of the bundle and appends zero or more
//! insights; the lifestyle rule always contributes. The wall clock is passed
//! in so the same bundle and instant always give the same titles, categories
//! and priorities.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::insight::{HealthInsight, InsightCategory, InsightType, Priority, sort_by_priority};
use crate::patient::{Appointment, Medication, PatientDataBundle, VitalsEntry};

const SYSTOLIC_LIMIT: u32 = 140;
const DIASTOLIC_LIMIT: u32 = 90;
const SYSTOLIC_IMPROVEMENT: u32 = 10;
const WEIGHT_CHANGE_KG: f64 = 2.0;
const RECENT_VISIT_DAYS: i64 = 30;
const FREQUENT_VISIT_COUNT: usize = 3;
const ADHERENCE_THRESHOLD: f64 = 80.0;
/// June through September, zero-based
const SUMMER_MONTHS0: std::ops::RangeInclusive<u32> = 5..=8;

pub fn generate(bundle: &PatientDataBundle, now: DateTime<Utc>) -> Vec<HealthInsight> {
    let mut insights = Vec::new();

    if let Some(vitals) = &bundle.vitals {
        vitals_insights(vitals, now, &mut insights);
    }
    if let Some(appointments) = &bundle.appointments {
        appointment_insights(appointments, now, &mut insights);
    }
    if let Some(medications) = &bundle.medications {
        medication_insights(medications, now, &mut insights);
    }
    lifestyle_insights(now, &mut insights);

    sort_by_priority(&mut insights);
    insights
}

fn vitals_insights(vitals: &[VitalsEntry], now: DateTime<Utc>, out: &mut Vec<HealthInsight>) {
    let [latest, previous, ..] = vitals else {
        return;
    };

    let latest_bp = latest.blood_pressure();
    let high = latest_bp.is_some_and(|(sys, dia)| sys > SYSTOLIC_LIMIT || dia > DIASTOLIC_LIMIT);

    if high {
        out.push(
            HealthInsight::new(
                "bp-alert",
                InsightType::Alert,
                Priority::High,
                InsightCategory::Vitals,
                "High Blood Pressure Detected",
                format!(
                    "Your latest blood pressure reading ({}) is above the normal range. \
                     Consider consulting your healthcare provider.",
                    latest.blood_pressure.as_deref().unwrap_or_default()
                ),
                now,
            )
            .with_action("Schedule BP Check"),
        );
    } else if let (Some((latest_sys, _)), Some((previous_sys, _))) =
        (latest_bp, previous.blood_pressure())
    {
        if latest_sys + SYSTOLIC_IMPROVEMENT < previous_sys {
            out.push(HealthInsight::new(
                "bp-improvement",
                InsightType::Achievement,
                Priority::Low,
                InsightCategory::Vitals,
                "Blood Pressure Improvement",
                "Your blood pressure has improved since your last reading. Keep up the good work!"
                    .to_string(),
                now,
            ));
        }
    }

    if let (Some(latest_weight), Some(previous_weight)) = (latest.weight, previous.weight) {
        let delta = latest_weight - previous_weight;
        if delta.abs() > WEIGHT_CHANGE_KG {
            out.push(
                HealthInsight::new(
                    "weight-change",
                    InsightType::Trend,
                    Priority::Medium,
                    InsightCategory::Vitals,
                    "Significant Weight Change",
                    format!(
                        "Your weight has changed by {:+.1}kg since your last reading. \
                         Consider discussing this with your doctor.",
                        delta
                    ),
                    now,
                )
                .with_action("Discuss with Doctor"),
            );
        }
    }
}

fn appointment_insights(
    appointments: &[Appointment],
    now: DateTime<Utc>,
    out: &mut Vec<HealthInsight>,
) {
    let cutoff = now - Duration::days(RECENT_VISIT_DAYS);
    let recent = appointments
        .iter()
        .filter_map(Appointment::date)
        .filter(|date| *date > cutoff)
        .count();

    if recent > FREQUENT_VISIT_COUNT {
        out.push(
            HealthInsight::new(
                "frequent-visits",
                InsightType::Trend,
                Priority::Medium,
                InsightCategory::Appointment,
                "Frequent Medical Visits",
                format!(
                    "You have had {} medical visits in the last {} days. \
                     Consider a comprehensive health review.",
                    recent, RECENT_VISIT_DAYS
                ),
                now,
            )
            .with_action("Schedule Review"),
        );
    }
}

fn medication_insights(
    medications: &[Medication],
    now: DateTime<Utc>,
    out: &mut Vec<HealthInsight>,
) {
    for medication in medications {
        let Some(adherence) = medication.adherence else {
            continue;
        };
        if adherence < ADHERENCE_THRESHOLD {
            out.push(
                HealthInsight::new(
                    &format!("med-adherence-{}", medication.id),
                    InsightType::Alert,
                    Priority::High,
                    InsightCategory::Medication,
                    "Medication Adherence Alert",
                    format!(
                        "Your adherence to {} is {}%. Taking medications as prescribed \
                         is important for your health.",
                        medication.name, adherence
                    ),
                    now,
                )
                .with_action("Set Reminders"),
            );
        }
    }
}

fn lifestyle_insights(now: DateTime<Utc>, out: &mut Vec<HealthInsight>) {
    out.push(
        HealthInsight::new(
            "lifestyle",
            InsightType::Recommendation,
            Priority::Low,
            InsightCategory::Lifestyle,
            "Maintain Healthy Lifestyle",
            "Regular exercise, a balanced diet and enough sleep support your overall health."
                .to_string(),
            now,
        )
        .with_action("View Health Tips"),
    );

    if SUMMER_MONTHS0.contains(&now.month0()) {
        out.push(
            HealthInsight::new(
                "summer-tips",
                InsightType::Recommendation,
                Priority::Low,
                InsightCategory::Lifestyle,
                "Summer Health Tips",
                "Stay hydrated, avoid prolonged sun exposure and take breaks when working outdoors."
                    .to_string(),
                now,
            )
            .with_action("Learn More"),
        );
    }
}
