//! Remote-then-fallback adapter.
//!
//! Every request tries the remote variant once. Its outcome picks the answer:
//! a parsed remote result is returned as is, an unparseable answer is replaced
//! by a fixed safe default, and a failed call falls through to the local rule
//! engines. The response shape is the same in all three cases.

use std::convert::Infallible;
use std::future::Future;

use chrono::{DateTime, Utc};
use migrantcare_core::{
    HealthInsight, PatientDataBundle, SymptomAnalysis, SymptomReport, chat::SAFE_REPLY,
};

use super::backend::AnalysisBackend;
use super::error::AiError;
use super::local::LocalBackend;
use super::remote::RemoteBackend;
use crate::middleware::metrics::record_resolution;

/// Which branch produced an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    SafeDefault,
    Local,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Remote => "remote",
            Source::SafeDefault => "safe_default",
            Source::Local => "local",
        }
    }
}

/// An answer together with the branch that produced it
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

/// Answers assistant requests, preferring the remote variant when configured
#[derive(Clone)]
pub struct Assistant<R = RemoteBackend> {
    remote: Option<R>,
    local: LocalBackend,
}

impl<R> Assistant<R>
where
    R: AnalysisBackend<Error = AiError>,
{
    pub fn new(remote: Option<R>, local: LocalBackend) -> Self {
        Self { remote, local }
    }

    pub fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn analyze_symptoms(&self, report: &SymptomReport) -> Resolved<SymptomAnalysis> {
        let attempt = match &self.remote {
            Some(remote) => remote.analyze_symptoms(report).await,
            None => Err(AiError::NotConfigured),
        };
        resolve(
            "analyze_symptoms",
            attempt,
            || SymptomAnalysis::safe_default(report.symptoms.clone()),
            self.local.analyze_symptoms(report),
        )
        .await
    }

    pub async fn generate_insights(
        &self,
        bundle: &PatientDataBundle,
        now: DateTime<Utc>,
    ) -> Resolved<Vec<HealthInsight>> {
        let attempt = match &self.remote {
            Some(remote) => remote.generate_insights(bundle, now).await,
            None => Err(AiError::NotConfigured),
        };
        resolve(
            "generate_insights",
            attempt,
            || vec![HealthInsight::safe_default(now)],
            self.local.generate_insights(bundle, now),
        )
        .await
    }

    pub async fn chat(&self, message: &str) -> Resolved<String> {
        let attempt = match &self.remote {
            Some(remote) => remote.chat(message).await.and_then(|reply| {
                if reply.is_empty() {
                    Err(AiError::Malformed("Empty chat reply".to_string()))
                } else {
                    Ok(reply)
                }
            }),
            None => Err(AiError::NotConfigured),
        };
        resolve(
            "chat",
            attempt,
            || SAFE_REPLY.to_string(),
            self.local.chat(message),
        )
        .await
    }
}

/// Pick the answer for one remote attempt. `local` is only polled when the
/// remote call itself failed.
async fn resolve<T>(
    operation: &'static str,
    attempt: Result<T, AiError>,
    safe_default: impl FnOnce() -> T,
    local: impl Future<Output = Result<T, Infallible>>,
) -> Resolved<T> {
    let resolved = match attempt {
        Ok(value) => Resolved {
            value,
            source: Source::Remote,
        },
        Err(err) if err.is_malformed() => {
            tracing::warn!(operation, error = %err, "Unusable AI response, using safe default");
            Resolved {
                value: safe_default(),
                source: Source::SafeDefault,
            }
        }
        Err(err) => {
            match &err {
                AiError::NotConfigured => {
                    tracing::debug!(operation, "Remote AI not configured, using local engine")
                }
                _ => tracing::warn!(operation, error = %err, "AI request failed, using local engine"),
            }
            let value = match local.await {
                Ok(value) => value,
                Err(never) => match never {},
            };
            Resolved {
                value,
                source: Source::Local,
            }
        }
    };

    record_resolution(operation, resolved.source.as_str());
    tracing::info!(operation, source = resolved.source.as_str(), "Assistant request resolved");
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use migrantcare_core::{Priority, Severity, Urgency, chat::GENERIC_REPLIES};

    /// Remote stand-in that always answers the same way
    #[derive(Clone, Copy)]
    enum StubRemote {
        Answers,
        Garbled,
        Blocked,
        Down,
    }

    impl StubRemote {
        fn outcome<T>(self, value: T) -> Result<T, AiError> {
            match self {
                StubRemote::Answers => Ok(value),
                StubRemote::Garbled => Err(AiError::Malformed("not json".to_string())),
                StubRemote::Blocked => Err(AiError::InvalidResponse("no candidates".to_string())),
                StubRemote::Down => Err(AiError::Status {
                    status: 503,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    impl AnalysisBackend for StubRemote {
        type Error = AiError;

        async fn analyze_symptoms(
            &self,
            report: &SymptomReport,
        ) -> Result<SymptomAnalysis, AiError> {
            self.outcome(SymptomAnalysis::new(
                report.symptoms.clone(),
                Severity::Low,
                Vec::new(),
                vec!["Remote advice".to_string()],
                Urgency::Routine,
            ))
        }

        async fn generate_insights(
            &self,
            _bundle: &PatientDataBundle,
            now: DateTime<Utc>,
        ) -> Result<Vec<HealthInsight>, AiError> {
            let mut insight = HealthInsight::safe_default(now);
            insight.title = "Remote insight".to_string();
            self.outcome(vec![insight])
        }

        async fn chat(&self, _message: &str) -> Result<String, AiError> {
            self.outcome("Remote reply".to_string())
        }
    }

    fn assistant(remote: Option<StubRemote>) -> Assistant<StubRemote> {
        Assistant::new(remote, LocalBackend::new(Some(1)))
    }

    #[tokio::test]
    async fn test_remote_answer_is_used() {
        let assistant = assistant(Some(StubRemote::Answers));
        let resolved = assistant
            .analyze_symptoms(&SymptomReport::new(["severe chest pain"]))
            .await;
        assert_eq!(resolved.source, Source::Remote);
        assert_eq!(resolved.value.recommendations, vec!["Remote advice"]);

        let chat = assistant.chat("hello").await;
        assert_eq!(chat.source, Source::Remote);
        assert_eq!(chat.value, "Remote reply");
    }

    #[tokio::test]
    async fn test_garbled_answer_uses_safe_default_not_engine() {
        let assistant = assistant(Some(StubRemote::Garbled));
        let resolved = assistant
            .analyze_symptoms(&SymptomReport::new(["severe chest pain"]))
            .await;
        assert_eq!(resolved.source, Source::SafeDefault);
        // The rule engine would have said critical
        assert_eq!(resolved.value.severity, Severity::Medium);
        assert_eq!(resolved.value.urgency, Urgency::Routine);

        let insights = assistant
            .generate_insights(&PatientDataBundle::default(), Utc::now())
            .await;
        assert_eq!(insights.source, Source::SafeDefault);
        assert_eq!(insights.value.len(), 1);
        assert_eq!(insights.value[0].title, "Continue Health Monitoring");

        let chat = assistant.chat("what about the weather").await;
        assert_eq!(chat.value, SAFE_REPLY);
    }

    #[tokio::test]
    async fn test_failed_call_falls_back_to_rule_engine() {
        let assistant = assistant(Some(StubRemote::Down));
        let resolved = assistant
            .analyze_symptoms(&SymptomReport::new(["severe chest pain"]))
            .await;
        assert_eq!(resolved.source, Source::Local);
        assert_eq!(resolved.value.severity, Severity::Critical);
        assert_eq!(resolved.value.urgency, Urgency::Emergency);

        let insights = assistant
            .generate_insights(&PatientDataBundle::default(), Utc::now())
            .await;
        assert_eq!(insights.source, Source::Local);
        assert!(
            insights
                .value
                .iter()
                .any(|i| i.title == "Maintain Healthy Lifestyle" && i.priority == Priority::Low)
        );
    }

    #[tokio::test]
    async fn test_invalid_service_response_falls_back_to_rule_engine() {
        let assistant = assistant(Some(StubRemote::Blocked));
        let resolved = assistant
            .analyze_symptoms(&SymptomReport::new(["severe chest pain"]))
            .await;
        assert_eq!(resolved.source, Source::Local);
        assert_eq!(resolved.value.severity, Severity::Critical);

        let chat = assistant.chat("what about the weather").await;
        assert_eq!(chat.source, Source::Local);
        assert!(GENERIC_REPLIES.contains(&chat.value.as_str()));
    }

    #[tokio::test]
    async fn test_no_remote_goes_straight_to_local() {
        let assistant = assistant(None);
        assert!(!assistant.remote_enabled());

        let chat = assistant.chat("what about the weather").await;
        assert_eq!(chat.source, Source::Local);
        assert!(GENERIC_REPLIES.contains(&chat.value.as_str()));
    }
}
