use crate::types::WorkoutSummary;
use std::fmt;

/// Human-readable report for one workout.
///
/// Every figure is printed with exactly three decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfoMessage {
    summary: WorkoutSummary,
}

impl InfoMessage {
    pub const fn new(summary: WorkoutSummary) -> Self {
        Self { summary }
    }

    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl From<WorkoutSummary> for InfoMessage {
    fn from(summary: WorkoutSummary) -> Self {
        Self::new(summary)
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            s.kind, s.duration, s.distance, s.mean_speed, s.calories
        )
    }
}
