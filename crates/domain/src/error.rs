use crate::{
    ActionCountError, CentimetersError, HoursError, KilogramsError, MetersError, WorkoutType,
};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutError {
    #[error("unrecognized workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("invalid argument count for {workout_type}: expected {expected}, got {actual}")]
    InvalidParameterCount {
        workout_type: WorkoutType,
        expected: usize,
        actual: usize,
    },
    #[error("invalid {name}: {source}")]
    InvalidParameter {
        name: &'static str,
        source: ParameterError,
    },
}

impl WorkoutError {
    pub(crate) fn invalid(name: &'static str, source: impl Into<ParameterError>) -> Self {
        WorkoutError::InvalidParameter {
            name,
            source: source.into(),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParameterError {
    #[error(transparent)]
    ActionCount(#[from] ActionCountError),
    #[error(transparent)]
    Hours(#[from] HoursError),
    #[error(transparent)]
    Kilograms(#[from] KilogramsError),
    #[error(transparent)]
    Centimeters(#[from] CentimetersError),
    #[error(transparent)]
    Meters(#[from] MetersError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_workout_error_display() {
        assert_eq!(
            WorkoutError::UnknownWorkoutType("XYZ".to_string()).to_string(),
            "unrecognized workout type: XYZ"
        );
        assert_eq!(
            WorkoutError::InvalidParameterCount {
                workout_type: WorkoutType::Walking,
                expected: 4,
                actual: 3
            }
            .to_string(),
            "invalid argument count for WLK: expected 4, got 3"
        );
        assert_eq!(
            WorkoutError::invalid("duration", HoursError::NotPositive).to_string(),
            "invalid duration: Duration must be greater than 0 h"
        );
    }

    #[test]
    fn test_parameter_error_source() {
        use std::error::Error;

        let error = WorkoutError::invalid("weight", KilogramsError::NotPositive);
        assert!(matches!(
            error.source().and_then(|e| e.downcast_ref::<ParameterError>()),
            Some(ParameterError::Kilograms(KilogramsError::NotPositive))
        ));
    }
}
