//! Quiz difficulty metrics.

use metrics::{counter, histogram};

/// Difficulty assessment metrics recorder
pub struct DifficultyMetrics;

impl DifficultyMetrics {
    /// Record a completed assessment and, when known, the correct-answer rate behind it
    pub fn record_assessment(difficulty: &str, correct_rate: Option<f64>) {
        counter!(
            "quiz_difficulty_assessments_total",
            "difficulty" => difficulty.to_string()
        )
        .increment(1);

        if let Some(rate) = correct_rate {
            histogram!("quiz_difficulty_correct_rate_percent").record(rate);
        }
    }

    /// Record an assessment that fell back to the unknown level for lack of answers
    pub fn record_insufficient_data(attempts: u64, min_attempts: u64) {
        counter!("quiz_difficulty_insufficient_data_total").increment(1);

        tracing::debug!(
            attempts = attempts,
            min_attempts = min_attempts,
            "Not enough answers to assess difficulty"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_record_assessment_labels_by_difficulty() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            DifficultyMetrics::record_assessment("EASY", Some(72.0));
            DifficultyMetrics::record_assessment("EASY", Some(65.0));
            DifficultyMetrics::record_assessment("UNKNOWN", None);
        });

        let rendered = handle.render();
        assert!(rendered.contains("quiz_difficulty_assessments_total{difficulty=\"EASY\"} 2"));
        assert!(rendered.contains("quiz_difficulty_assessments_total{difficulty=\"UNKNOWN\"} 1"));
    }

    #[test]
    fn test_record_insufficient_data() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            DifficultyMetrics::record_insufficient_data(0, 5);
        });

        assert!(handle.render().contains("quiz_difficulty_insufficient_data_total 1"));
    }
}
