//! Configuration for tracing and telemetry

use serde::{Deserialize, Serialize};

const DEFAULT_SERVICE_NAME: &str = "rephrase";

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name attached to exported spans
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Service version (optional)
    #[serde(default)]
    pub service_version: Option<String>,

    /// OTLP endpoint for trace export (e.g., "http://localhost:4317")
    #[serde(default)]
    pub otlp_endpoint: Option<String>,

    /// Emit formatted events on stderr
    #[serde(default = "default_enable_console")]
    pub enable_console: bool,

    /// Filter directive (e.g., "info", "rephrase_runtime=debug").
    /// Falls back to `RUST_LOG`, then "warn".
    #[serde(default)]
    pub log_level: Option<String>,

    /// Additional resource attributes
    #[serde(default)]
    pub resource_attributes: Vec<(String, String)>,
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_enable_console() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            service_version: None,
            otlp_endpoint: None,
            enable_console: true,
            log_level: None,
            resource_attributes: Vec::new(),
        }
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_resource_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.resource_attributes.push((key.into(), value.into()));
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `OTEL_SERVICE_NAME` or `SERVICE_NAME` → service_name
    /// - `OTEL_SERVICE_VERSION` or `SERVICE_VERSION` → service_version
    /// - `OTEL_EXPORTER_OTLP_ENDPOINT` → otlp_endpoint
    /// - `OTEL_LOG_LEVEL` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        let service_name = std::env::var("OTEL_SERVICE_NAME")
            .or_else(|_| std::env::var("SERVICE_NAME"))
            .unwrap_or_else(|_| default_service_name());

        let service_version = std::env::var("OTEL_SERVICE_VERSION")
            .or_else(|_| std::env::var("SERVICE_VERSION"))
            .ok();

        // OTLP only when explicitly set; otherwise console-only.
        let otlp_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();

        let log_level = std::env::var("OTEL_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        Self {
            service_name,
            service_version,
            otlp_endpoint,
            enable_console: true,
            log_level,
            resource_attributes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_console_only() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.service_name, "rephrase");
        assert!(config.enable_console);
        assert!(config.otlp_endpoint.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::new("svc")
            .with_version("1.2.3")
            .with_otlp_endpoint("http://localhost:4317")
            .with_console(false)
            .with_log_level("debug")
            .with_resource_attribute("deployment", "test");

        assert_eq!(config.service_name, "svc");
        assert_eq!(config.service_version.as_deref(), Some("1.2.3"));
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
        assert!(!config.enable_console);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.resource_attributes.len(), 1);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ObservabilityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.service_name, "rephrase");
        assert!(config.enable_console);
        assert!(config.log_level.is_none());
    }
}
