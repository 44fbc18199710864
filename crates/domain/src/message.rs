use std::fmt;

use serde::Serialize;
use strum::{Display, EnumString};

use crate::workout::Metrics;

/// Result of a workout: its kind, its duration in h and the derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub training_type: &'static str,
    pub duration: f64,
    #[serde(flatten)]
    pub metrics: Metrics,
}

impl Summary {
    #[must_use]
    pub fn message(&self, language: Language) -> InfoMessage<'_> {
        InfoMessage {
            summary: self,
            language,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// Human-readable rendering of a [`Summary`].
///
/// All numbers are printed with three decimal places.
pub struct InfoMessage<'a> {
    summary: &'a Summary,
    language: Language,
}

impl fmt::Display for InfoMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Summary {
            training_type,
            duration,
            metrics:
                Metrics {
                    distance,
                    speed,
                    calories,
                },
        } = self.summary;
        match self.language {
            Language::En => write!(
                f,
                "{training_type}; duration={duration:.3}h; distance={distance:.3}km; \
                 speed={speed:.3}km/h; calories={calories:.3}"
            ),
            Language::Ru => write!(
                f,
                "Тип тренировки: {training_type}; Длительность: {duration:.3} ч.; \
                 Дистанция: {distance:.3} км; Ср. скорость: {speed:.3} км/ч; \
                 Потрачено ккал: {calories:.3}."
            ),
        }
    }
}
