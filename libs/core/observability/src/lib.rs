//! Observability utilities for the quiz platform.
//!
//! This crate provides:
//! - Prometheus metrics recording and export
//! - Custom metrics for quiz difficulty assessments
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, render_metrics, DifficultyMetrics};
//!
//! // Initialize metrics recorder
//! init_metrics();
//!
//! DifficultyMetrics::record_assessment("EASY", Some(72.5));
//!
//! // Serve the exposition text from whatever endpoint the app exposes
//! let body = render_metrics();
//! ```

pub mod difficulty;

pub use difficulty::DifficultyMetrics;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize the Prometheus metrics recorder.
///
/// This should be called once at application startup. If another global
/// recorder is already installed the returned handle renders nothing.
pub fn init_metrics() -> &'static PrometheusHandle {
    METRICS_HANDLE.get_or_init(|| {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        if metrics::set_global_recorder(recorder).is_ok() {
            info!("Prometheus metrics recorder initialized");
            register_metric_descriptions();
        } else {
            warn!("A global metrics recorder is already installed; Prometheus handle will stay empty");
        }

        handle
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Render the Prometheus exposition text
pub fn render_metrics() -> String {
    match get_metrics_handle() {
        Some(handle) => {
            handle.run_upkeep();
            handle.render()
        }
        None => "# Metrics not initialized\n".to_string(),
    }
}

/// Register metric descriptions for documentation
fn register_metric_descriptions() {
    use metrics::describe_counter;
    use metrics::describe_histogram;

    describe_counter!(
        "quiz_difficulty_assessments_total",
        "Total question difficulty assessments by resulting difficulty"
    );
    describe_counter!(
        "quiz_difficulty_insufficient_data_total",
        "Assessments that had too few answers to classify"
    );
    describe_histogram!(
        "quiz_difficulty_correct_rate_percent",
        "Correct-answer rate of assessed questions, in percent"
    );
}
