use serde::Serialize;

use crate::{ActionCount, Hours, Kilograms, Summary, WorkoutType};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Distance covered per step in metres.
pub const LEN_STEP: f64 = 0.65;

/// Common interface of all workout kinds.
///
/// Every kind has to provide its own calorie formula. Distance and mean speed
/// are derived from the action count and the step length unless a kind knows
/// better.
pub trait Workout {
    fn workout_type(&self) -> WorkoutType;
    fn action(&self) -> ActionCount;
    fn duration(&self) -> Hours;
    fn weight(&self) -> Kilograms;

    /// Spent energy in kcal.
    fn spent_calories(&self) -> f64;

    /// Distance covered per action in metres.
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.action()) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / f64::from(self.duration())
    }

    fn metrics(&self) -> Metrics {
        Metrics {
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }

    fn summary(&self) -> Summary {
        Summary {
            training_type: self.workout_type().name(),
            duration: self.duration().into(),
            metrics: self.metrics(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}
