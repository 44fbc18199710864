use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct ActionCount(u32);

impl ActionCount {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl From<ActionCount> for f64 {
    fn from(value: ActionCount) -> Self {
        f64::from(value.0)
    }
}

impl TryFrom<f64> for ActionCount {
    type Error = ActionCountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ActionCountError::NotWholeNumber);
        }

        if !(0.0..=f64::from(u32::MAX)).contains(&value) {
            return Err(ActionCountError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = value as u32;

        Ok(Self(count))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ActionCountError {
    #[error("Count must be a whole number")]
    NotWholeNumber,
    #[error("Count must not be negative")]
    OutOfRange,
}

/// Duration of a workout.
///
/// Always strictly positive, so speeds derived from it are finite.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Hours(f64);

impl Hours {
    pub fn new(value: f64) -> Result<Self, HoursError> {
        if !value.is_finite() {
            return Err(HoursError::NotFinite);
        }

        if value <= 0.0 {
            return Err(HoursError::NotPositive);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn minutes(self) -> f64 {
        self.0 * crate::workout::MIN_IN_H
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HoursError {
    #[error("Duration must be a finite number")]
    NotFinite,
    #[error("Duration must be greater than 0 h")]
    NotPositive,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Kilograms(f64);

impl Kilograms {
    pub fn new(value: f64) -> Result<Self, KilogramsError> {
        if !value.is_finite() {
            return Err(KilogramsError::NotFinite);
        }

        if value <= 0.0 {
            return Err(KilogramsError::NotPositive);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum KilogramsError {
    #[error("Weight must be a finite number")]
    NotFinite,
    #[error("Weight must be greater than 0 kg")]
    NotPositive,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Centimeters(f64);

impl Centimeters {
    pub fn new(value: f64) -> Result<Self, CentimetersError> {
        if !value.is_finite() {
            return Err(CentimetersError::NotFinite);
        }

        if value <= 0.0 {
            return Err(CentimetersError::NotPositive);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CentimetersError {
    #[error("Height must be a finite number")]
    NotFinite,
    #[error("Height must be greater than 0 cm")]
    NotPositive,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Meters(f64);

impl Meters {
    pub fn new(value: f64) -> Result<Self, MetersError> {
        if !value.is_finite() {
            return Err(MetersError::NotFinite);
        }

        if value <= 0.0 {
            return Err(MetersError::NotPositive);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MetersError {
    #[error("Length must be a finite number")]
    NotFinite,
    #[error("Length must be greater than 0 m")]
    NotPositive,
}
