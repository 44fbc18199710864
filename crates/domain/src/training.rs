use std::str::FromStr;

use derive_more::From;
use log::{debug, warn};
use strum::{Display, EnumIter, EnumString};

use crate::{
    ActionCount, Centimeters, Hours, Kilograms, Meters, Running, SportsWalking, Swimming,
    WorkoutError, workout::Workout,
};

/// Workout kinds as identified by the sensor package codes.
#[derive(Debug, Clone, Copy, Display, EnumIter, EnumString, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    #[strum(serialize = "SWM")]
    Swimming,
    #[strum(serialize = "RUN")]
    Running,
    #[strum(serialize = "WLK")]
    Walking,
}

impl WorkoutType {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Running => "Running",
            WorkoutType::Walking => "SportsWalking",
        }
    }

    /// Number of values a sensor package of this kind consists of.
    #[must_use]
    pub fn parameter_count(self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::Walking => 4,
            WorkoutType::Swimming => 5,
        }
    }
}

#[derive(Debug, Clone, From, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    /// Construct a workout from the raw values of a sensor package.
    ///
    /// The values are expected in the order action count, duration in h,
    /// weight in kg, followed by the height in cm for walking or the pool
    /// length in m and the number of swum pool lengths for swimming.
    pub fn new(workout_type: WorkoutType, data: &[f64]) -> Result<Self, WorkoutError> {
        match (workout_type, data) {
            (WorkoutType::Running, &[action, duration, weight]) => {
                let (action, duration, weight) = common_parameters(action, duration, weight)?;
                Ok(Running::new(action, duration, weight).into())
            }
            (WorkoutType::Walking, &[action, duration, weight, height]) => {
                let (action, duration, weight) = common_parameters(action, duration, weight)?;
                let height =
                    Centimeters::new(height).map_err(|err| WorkoutError::invalid("height", err))?;
                Ok(SportsWalking::new(action, duration, weight, height).into())
            }
            (WorkoutType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
                let (action, duration, weight) = common_parameters(action, duration, weight)?;
                let length_pool = Meters::new(length_pool)
                    .map_err(|err| WorkoutError::invalid("pool length", err))?;
                let count_pool = ActionCount::try_from(count_pool)
                    .map_err(|err| WorkoutError::invalid("pool count", err))?;
                Ok(Swimming::new(action, duration, weight, length_pool, count_pool).into())
            }
            _ => Err(WorkoutError::InvalidParameterCount {
                workout_type,
                expected: workout_type.parameter_count(),
                actual: data.len(),
            }),
        }
    }

    fn as_workout(&self) -> &dyn Workout {
        match self {
            Training::Running(running) => running,
            Training::SportsWalking(walking) => walking,
            Training::Swimming(swimming) => swimming,
        }
    }
}

fn common_parameters(
    action: f64,
    duration: f64,
    weight: f64,
) -> Result<(ActionCount, Hours, Kilograms), WorkoutError> {
    Ok((
        ActionCount::try_from(action).map_err(|err| WorkoutError::invalid("action", err))?,
        Hours::new(duration).map_err(|err| WorkoutError::invalid("duration", err))?,
        Kilograms::new(weight).map_err(|err| WorkoutError::invalid("weight", err))?,
    ))
}

impl Workout for Training {
    fn workout_type(&self) -> WorkoutType {
        self.as_workout().workout_type()
    }

    fn action(&self) -> ActionCount {
        self.as_workout().action()
    }

    fn duration(&self) -> Hours {
        self.as_workout().duration()
    }

    fn weight(&self) -> Kilograms {
        self.as_workout().weight()
    }

    fn spent_calories(&self) -> f64 {
        self.as_workout().spent_calories()
    }

    fn step_length(&self) -> f64 {
        self.as_workout().step_length()
    }

    fn distance(&self) -> f64 {
        self.as_workout().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_workout().mean_speed()
    }
}

/// Read the data of a sensor package.
///
/// `code` selects the workout kind (`SWM`, `RUN` or `WLK`) and `data` has to
/// contain exactly the values that kind expects.
pub fn read_package(code: &str, data: &[f64]) -> Result<Training, WorkoutError> {
    let Ok(workout_type) = WorkoutType::from_str(code) else {
        warn!("unrecognized workout type {code:?}");
        return Err(WorkoutError::UnknownWorkoutType(code.to_string()));
    };

    match Training::new(workout_type, data) {
        Ok(training) => {
            debug!("read {workout_type} package: {training:?}");
            Ok(training)
        }
        Err(err) => {
            warn!("failed to read {workout_type} package {data:?}: {err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{HoursError, MetersError, ParameterError};

    #[rstest]
    #[case("SWM", Ok(WorkoutType::Swimming))]
    #[case("RUN", Ok(WorkoutType::Running))]
    #[case("WLK", Ok(WorkoutType::Walking))]
    #[case("run", Err(strum::ParseError::VariantNotFound))]
    #[case("XYZ", Err(strum::ParseError::VariantNotFound))]
    fn test_workout_type_from_str(
        #[case] code: &str,
        #[case] expected: Result<WorkoutType, strum::ParseError>,
    ) {
        assert_eq!(WorkoutType::from_str(code), expected);
    }

    #[test]
    fn test_workout_type_code_round_trip() {
        for workout_type in WorkoutType::iter() {
            assert_eq!(
                WorkoutType::from_str(&workout_type.to_string()),
                Ok(workout_type)
            );
        }
    }

    #[rstest]
    #[case::running("RUN", vec![15000.0, 1.0, 75.0], "Running")]
    #[case::walking("WLK", vec![9000.0, 1.0, 75.0, 180.0], "SportsWalking")]
    #[case::swimming("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0], "Swimming")]
    fn test_read_package(#[case] code: &str, #[case] data: Vec<f64>, #[case] name: &str) {
        let training = read_package(code, &data).unwrap();
        assert_eq!(training.workout_type().to_string(), code);
        assert_eq!(training.summary().training_type, name);
    }

    #[test]
    fn test_read_package_variant() {
        assert_eq!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            Ok(Training::SportsWalking(SportsWalking::new(
                ActionCount::new(9000),
                Hours::new(1.0).unwrap(),
                Kilograms::new(75.0).unwrap(),
                Centimeters::new(180.0).unwrap(),
            )))
        );
    }

    #[test]
    fn test_read_package_unknown_type() {
        assert_eq!(
            read_package("XYZ", &[1.0, 1.0, 1.0]),
            Err(WorkoutError::UnknownWorkoutType("XYZ".to_string()))
        );
    }

    #[rstest]
    #[case::running_too_few("RUN", vec![15000.0, 1.0], WorkoutType::Running, 3, 2)]
    #[case::running_too_many("RUN", vec![15000.0, 1.0, 75.0, 180.0], WorkoutType::Running, 3, 4)]
    #[case::walking_too_few("WLK", vec![9000.0, 1.0, 75.0], WorkoutType::Walking, 4, 3)]
    #[case::swimming_too_few("SWM", vec![720.0, 1.0, 80.0, 25.0], WorkoutType::Swimming, 5, 4)]
    #[case::empty("SWM", vec![], WorkoutType::Swimming, 5, 0)]
    fn test_read_package_invalid_parameter_count(
        #[case] code: &str,
        #[case] data: Vec<f64>,
        #[case] workout_type: WorkoutType,
        #[case] expected: usize,
        #[case] actual: usize,
    ) {
        assert_eq!(
            read_package(code, &data),
            Err(WorkoutError::InvalidParameterCount {
                workout_type,
                expected,
                actual
            })
        );
    }

    #[rstest]
    #[case::zero_duration(
        "RUN",
        vec![15000.0, 0.0, 75.0],
        WorkoutError::invalid("duration", HoursError::NotPositive)
    )]
    #[case::zero_pool_length(
        "SWM",
        vec![720.0, 1.0, 80.0, 0.0, 40.0],
        WorkoutError::InvalidParameter {
            name: "pool length",
            source: ParameterError::Meters(MetersError::NotPositive)
        }
    )]
    fn test_read_package_invalid_parameter(
        #[case] code: &str,
        #[case] data: Vec<f64>,
        #[case] expected: WorkoutError,
    ) {
        assert_eq!(read_package(code, &data), Err(expected));
    }

    #[test]
    fn test_training_delegates_overrides() {
        let training = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_approx_eq!(training.step_length(), 1.38);
        assert_approx_eq!(training.distance(), 0.9936);
        assert_approx_eq!(training.mean_speed(), 1.0);
        assert_approx_eq!(training.spent_calories(), 336.0);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let training = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(training.summary(), training.summary());
    }
}
