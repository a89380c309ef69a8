use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Patient history handed to the insight generator. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientDataBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitals: Option<Vec<VitalsEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointments: Option<Vec<Appointment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<Medication>>,
}

/// One vitals reading; bundles list them most recent first
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VitalsEntry {
    /// "SYS/DIA", e.g. "120/80"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl VitalsEntry {
    /// Parse the blood pressure into (systolic, diastolic)
    pub fn blood_pressure(&self) -> Option<(u32, u32)> {
        let (systolic, diastolic) = self.blood_pressure.as_deref()?.split_once('/')?;
        Some((systolic.trim().parse().ok()?, diastolic.trim().parse().ok()?))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Appointment {
    pub fn date(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    /// Percentage of prescribed doses taken, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adherence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
}

/// Accept RFC 3339 timestamps or plain calendar dates (midnight UTC)
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
