use crate::{ActionCount, Centimeters, Hours, Kilograms, WorkoutType, workout::Workout};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    action: ActionCount,
    duration: Hours,
    weight: Kilograms,
    height: Centimeters,
}

impl SportsWalking {
    #[must_use]
    pub fn new(
        action: ActionCount,
        duration: Hours,
        weight: Kilograms,
        height: Centimeters,
    ) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }

    #[must_use]
    pub fn height(&self) -> Centimeters {
        self.height
    }
}

impl Workout for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Walking
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

    /// `(0.035 * weight + (speed^2 // height) * 0.029 * weight) * minutes`
    fn spent_calories(&self) -> f64 {
        let weight = f64::from(self.weight);
        let speed_height_ratio = floor_div(self.mean_speed().powi(2), f64::from(self.height));
        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height_ratio * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.duration.minutes()
    }
}

/// Floored quotient of `a` and `b`, derived from the floating-point remainder.
///
/// Near integral quotients this can differ by one from `(a / b).floor()`, as
/// the remainder is computed exactly while the division rounds.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}
