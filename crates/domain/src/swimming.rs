use crate::{
    ActionCount, Hours, Kilograms, Meters, WorkoutType,
    workout::{M_IN_KM, Workout},
};

/// Distance covered per stroke in metres.
pub const LEN_STROKE: f64 = 1.38;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    action: ActionCount,
    duration: Hours,
    weight: Kilograms,
    length_pool: Meters,
    count_pool: ActionCount,
}

impl Swimming {
    #[must_use]
    pub fn new(
        action: ActionCount,
        duration: Hours,
        weight: Kilograms,
        length_pool: Meters,
        count_pool: ActionCount,
    ) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }

    #[must_use]
    pub fn length_pool(&self) -> Meters {
        self.length_pool
    }

    #[must_use]
    pub fn count_pool(&self) -> ActionCount {
        self.count_pool
    }
}

impl Workout for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn action(&self) -> ActionCount {
        self.action
    }

    fn duration(&self) -> Hours {
        self.duration
    }

    fn weight(&self) -> Kilograms {
        self.weight
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    /// Mean speed in km/h, based on the swum pool lengths instead of strokes.
    fn mean_speed(&self) -> f64 {
        f64::from(self.length_pool) * f64::from(self.count_pool)
            / M_IN_KM
            / f64::from(self.duration)
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * f64::from(self.weight)
    }
}
