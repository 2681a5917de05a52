//! Tracing setup shared by the rephraser crates.
//!
//! Installs a `tracing-subscriber` registry with an env filter, a console
//! layer writing to stderr, and an optional OTLP export layer.
//!
//! # Quick Start
//!
//! ```no_run
//! use rephrase_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("rephrase")
//!     .with_log_level("debug");
//! init(config)?;
//!
//! tracing::info!("Service started");
//! # Ok::<(), rephrase_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME` or `SERVICE_NAME` - Service name
//! - `OTEL_SERVICE_VERSION` or `SERVICE_VERSION` - Service version
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP endpoint
//! - `OTEL_LOG_LEVEL` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env, shutdown};
pub use tracing::{record_duration, record_error};
