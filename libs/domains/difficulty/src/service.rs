use observability::DifficultyMetrics;
use tracing::{debug, info, instrument};

use crate::classifier::{classify, is_lenienter_than, is_stricter_than, levels};
use crate::config::DifficultyConfig;
use crate::error::DifficultyResult;
use crate::models::{AnswerStats, Difficulty, DifficultyAssessment, DifficultyInfo};
use core_config::FromEnv;

/// Service layer turning answer statistics into difficulty assessments
#[derive(Clone, Debug, Default)]
pub struct DifficultyService {
    config: DifficultyConfig,
}

impl DifficultyService {
    pub fn new(config: DifficultyConfig) -> DifficultyResult<Self> {
        config.validate()?;
        info!(min_attempts = config.min_attempts, "Difficulty service configured");
        Ok(Self { config })
    }

    /// Build the service from `QUIZ_DIFFICULTY_MIN_ATTEMPTS`
    pub fn from_env() -> DifficultyResult<Self> {
        Self::new(DifficultyConfig::from_env()?)
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    /// Assess a question from its answer counters
    #[instrument(skip(self), fields(attempts = stats.attempts()))]
    pub fn assess(&self, stats: &AnswerStats) -> DifficultyAssessment {
        let attempts = stats.attempts();
        let correct_rate = stats.correct_rate(self.config.min_attempts);
        let difficulty = classify(correct_rate);

        if correct_rate.is_none() {
            DifficultyMetrics::record_insufficient_data(attempts, self.config.min_attempts);
        }
        let level: &'static str = difficulty.into();
        DifficultyMetrics::record_assessment(level, correct_rate);

        debug!(?correct_rate, %difficulty, "Assessed question difficulty");

        DifficultyAssessment {
            difficulty,
            correct_rate,
            attempts,
        }
    }

    /// Difficulty for the given counters without recording an assessment
    pub fn difficulty_of(&self, stats: &AnswerStats) -> Difficulty {
        classify(stats.correct_rate(self.config.min_attempts))
    }

    /// Whether question `a` is harder than question `b`. `false` when either lacks data.
    pub fn is_harder(&self, a: &AnswerStats, b: &AnswerStats) -> bool {
        is_stricter_than(self.difficulty_of(a), self.difficulty_of(b))
    }

    /// Whether question `a` is easier than question `b`. `false` when either lacks data.
    pub fn is_easier(&self, a: &AnswerStats, b: &AnswerStats) -> bool {
        is_lenienter_than(self.difficulty_of(a), self.difficulty_of(b))
    }

    /// All difficulty levels for display, most lenient first, `Unknown` last
    pub fn catalog(&self) -> Vec<DifficultyInfo> {
        levels().iter().map(DifficultyInfo::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    fn service(min_attempts: u64) -> DifficultyService {
        DifficultyService::new(DifficultyConfig::new(min_attempts)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(DifficultyService::new(DifficultyConfig::new(0)).is_err());
    }

    #[test]
    fn test_assess_boundaries() {
        let service = DifficultyService::default();

        let assessment = service.assess(&AnswerStats::new(4, 1));
        assert_eq!(assessment.difficulty, Difficulty::VeryEasy);
        assert_eq!(assessment.correct_rate, Some(80.0));
        assert_eq!(assessment.attempts, 5);

        // 79/100 correct truncates to 79
        assert_eq!(
            service.assess(&AnswerStats::new(79, 21)).difficulty,
            Difficulty::Easy
        );
        assert_eq!(
            service.assess(&AnswerStats::new(0, 9)).difficulty,
            Difficulty::VeryHard
        );
    }

    #[test]
    fn test_assess_without_answers_is_unknown() {
        let assessment = DifficultyService::default().assess(&AnswerStats::default());
        assert_eq!(assessment.difficulty, Difficulty::Unknown);
        assert_eq!(assessment.correct_rate, None);
        assert_eq!(assessment.attempts, 0);
    }

    #[test]
    fn test_assess_respects_min_attempts() {
        let service = service(10);
        assert_eq!(
            service.assess(&AnswerStats::new(1, 8)).difficulty,
            Difficulty::Unknown
        );
        assert_eq!(
            service.assess(&AnswerStats::new(1, 9)).difficulty,
            Difficulty::VeryHard
        );
    }

    #[test]
    fn test_is_harder_and_is_easier() {
        let service = DifficultyService::default();
        let hard = AnswerStats::new(1, 3);
        let easy = AnswerStats::new(3, 1);
        let unanswered = AnswerStats::default();

        assert!(service.is_harder(&hard, &easy));
        assert!(!service.is_harder(&easy, &hard));
        assert!(service.is_easier(&easy, &hard));
        assert!(!service.is_harder(&hard, &hard));
        assert!(!service.is_harder(&unanswered, &easy));
        assert!(!service.is_easier(&easy, &unanswered));
    }

    #[test]
    fn test_comparisons_record_no_assessments() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let service = DifficultyService::default();

        metrics::with_local_recorder(&recorder, || {
            assert!(service.is_harder(&AnswerStats::new(1, 3), &AnswerStats::new(3, 1)));
            assert!(!service.is_easier(&AnswerStats::new(3, 1), &AnswerStats::default()));
        });

        let rendered = handle.render();
        assert!(!rendered.contains("quiz_difficulty_assessments_total"));
        assert!(!rendered.contains("quiz_difficulty_insufficient_data_total"));
        assert!(!rendered.contains("quiz_difficulty_correct_rate_percent"));
    }

    #[test]
    fn test_difficulty_of_matches_assess() {
        let service = service(3);
        for stats in [
            AnswerStats::new(0, 0),
            AnswerStats::new(1, 1),
            AnswerStats::new(2, 1),
            AnswerStats::new(1, 9),
            AnswerStats::new(u64::MAX, u64::MAX),
        ] {
            assert_eq!(service.difficulty_of(&stats), service.assess(&stats).difficulty);
        }
    }

    #[test]
    fn test_assess_huge_counters() {
        let assessment = DifficultyService::default().assess(&AnswerStats::new(u64::MAX, u64::MAX));
        assert_eq!(assessment.correct_rate, Some(50.0));
        assert_eq!(assessment.difficulty, Difficulty::Medium);
        assert_eq!(assessment.attempts, u64::MAX);
    }

    #[test]
    fn test_catalog_order() {
        let catalog = DifficultyService::default().catalog();
        let order: Vec<Difficulty> = catalog.iter().map(|info| info.level).collect();
        assert_eq!(order, Difficulty::ALL.to_vec());
        assert_eq!(catalog[0].rank, Some(80));
        assert_eq!(catalog[4].rank, Some(0));
        assert_eq!(catalog[5].rank, None);
        assert_eq!(catalog[5].label, "Unknown");
    }
}
