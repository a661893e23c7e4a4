//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → RotatingFile
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `~/.local/share/zellij/zroster/zroster-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB into `.1`, `.2` and `.3` backups
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON, one batch per line
//! - **Request Correlation**: The directory request carries the issuing span's
//!   trace id in its context map
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` plugin option (an `EnvFilter`
//! directive such as `debug` or `zroster=trace`), defaulting to `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`exporter`]: OTLP JSON span exporter and tracer provider
//! - [`rotating`]: Rotating file writer with numbered backups

pub mod exporter;
mod init;
pub mod rotating;

pub use init::{init_tracing, TRACE_FILE_NAME};
