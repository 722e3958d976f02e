//! Health probe types shared by the service and REST layers.

use async_trait::async_trait;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display};

/// A single downstream dependency that can be probed for liveness.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name of this health check.
    fn name(&self) -> &str;

    /// Performs the health check. Failures are reported, never raised.
    async fn check(&self) -> ProbeStatus;
}

/// Outcome of probing one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The dependency answered.
    Healthy,
    /// The dependency failed; carries the reason.
    Unhealthy(String),
}

impl ProbeStatus {
    /// Returns true if the status is healthy.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Builds a status from the result of a probe call.
    pub fn from_result<E: Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Healthy,
            Err(e) => Self::Unhealthy(e.to_string()),
        }
    }
}

impl Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => f.write_str("healthy"),
            Self::Unhealthy(reason) => write!(f, "unhealthy: {reason}"),
        }
    }
}

impl Serialize for ProbeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Composite status across all probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum OverallStatus {
    /// Every probe is healthy.
    Healthy,
    /// At least one probe failed.
    Degraded,
}

impl OverallStatus {
    /// Healthy only if every probe is healthy.
    pub fn aggregate<'a>(probes: impl IntoIterator<Item = &'a ProbeStatus>) -> Self {
        if probes.into_iter().all(ProbeStatus::is_healthy) {
            Self::Healthy
        } else {
            Self::Degraded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_status_rendering() {
        assert_eq!(ProbeStatus::Healthy.to_string(), "healthy");
        assert_eq!(
            ProbeStatus::Unhealthy("connection refused".to_string()).to_string(),
            "unhealthy: connection refused"
        );
    }

    #[test]
    fn test_probe_status_serializes_as_string() {
        let json = serde_json::to_value(ProbeStatus::Unhealthy("timeout".to_string())).unwrap();
        assert_eq!(json, serde_json::json!("unhealthy: timeout"));
    }

    #[test]
    fn test_from_result() {
        assert!(ProbeStatus::from_result::<String>(Ok(())).is_healthy());
        assert_eq!(
            ProbeStatus::from_result(Err("down")),
            ProbeStatus::Unhealthy("down".to_string())
        );
    }

    #[test]
    fn test_aggregate() {
        let healthy = ProbeStatus::Healthy;
        let failed = ProbeStatus::Unhealthy("x".to_string());

        assert_eq!(OverallStatus::aggregate([&healthy, &healthy]), OverallStatus::Healthy);
        assert_eq!(OverallStatus::aggregate([&healthy, &failed]), OverallStatus::Degraded);
        assert_eq!(OverallStatus::aggregate([&failed, &failed]), OverallStatus::Degraded);
    }

    #[test]
    fn test_overall_status_serialization() {
        assert_eq!(serde_json::to_string(&OverallStatus::Degraded).unwrap(), "\"degraded\"");
    }
}
