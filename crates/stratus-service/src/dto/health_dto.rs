//! Health report DTO.

use chrono::{DateTime, Utc};
use serde::Serialize;
use stratus_core::{OverallStatus, ProbeStatus};
use utoipa::ToSchema;

/// Per-dependency probe results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthChecks {
    /// `healthy` or `unhealthy: <reason>`
    #[schema(value_type = String, example = "healthy")]
    pub database: ProbeStatus,
    /// `healthy` or `unhealthy: <reason>`
    #[schema(value_type = String, example = "healthy")]
    pub redis: ProbeStatus,
}

/// Composite health of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthReport {
    pub status: OverallStatus,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

impl HealthReport {
    /// Builds the report, deriving the composite status from the checks.
    #[must_use]
    pub fn new(service: impl Into<String>, checks: HealthChecks) -> Self {
        Self {
            status: OverallStatus::aggregate([&checks.database, &checks.redis]),
            service: service.into(),
            timestamp: Utc::now(),
            checks,
        }
    }

    /// Returns true when every dependency is healthy.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == OverallStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shape() {
        let report = HealthReport::new(
            "backend",
            HealthChecks {
                database: ProbeStatus::Healthy,
                redis: ProbeStatus::Unhealthy("Connection refused".to_string()),
            },
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["service"], "backend");
        assert_eq!(json["checks"]["database"], "healthy");
        assert_eq!(json["checks"]["redis"], "unhealthy: Connection refused");
        assert!(json["timestamp"].is_string());
    }
}
