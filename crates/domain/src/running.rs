use crate::{
    ActionCount, Hours, Kilograms, WorkoutType,
    workout::{M_IN_KM, Workout},
};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    action: ActionCount,
    duration: Hours,
    weight: Kilograms,
}

impl Running {
    #[must_use]
    pub fn new(action: ActionCount, duration: Hours, weight: Kilograms) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Workout for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
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

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * f64::from(self.weight)
            / M_IN_KM
            * self.duration.minutes()
    }
}
