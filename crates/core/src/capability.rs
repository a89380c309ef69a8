use serde::{Deserialize, Serialize};

/// Descriptor of the service and the operations it exposes (simplified)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub status: String,
    pub remote_ai_enabled: bool,
    pub operations: Vec<OperationInfo>,
}

impl ServiceInfo {
    /// Create the descriptor for this service
    pub fn new(remote_ai_enabled: bool) -> Self {
        Self {
            name: "MigrantCare Assistant".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "active".to_string(),
            remote_ai_enabled,
            operations: OperationInfo::all(),
        }
    }
}

/// A single exposed operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationInfo {
    pub name: String,
    pub method: String,
    pub path: String,
}

impl OperationInfo {
    fn post(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            method: "POST".to_string(),
            path: path.to_string(),
        }
    }

    fn all() -> Vec<Self> {
        vec![
            Self::post("analyze-symptoms", "/api/symptoms/analyze"),
            Self::post("generate-insights", "/api/insights"),
            Self::post("chat", "/api/chat"),
        ]
    }
}
