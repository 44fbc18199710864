use std::str::FromStr;

use log::warn;
use pace_domain::Language;
use strum::{Display, EnumString};

pub const LANGUAGE_VAR: &str = "PACE_LANGUAGE";
pub const OUTPUT_VAR: &str = "PACE_OUTPUT";

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Settings {
    pub language: Language,
    pub output: OutputFormat,
}

impl Settings {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build the settings from variables provided by `lookup`.
    ///
    /// Missing variables keep their default. Invalid values are reported and
    /// ignored.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            language: parse_var(&lookup, LANGUAGE_VAR).unwrap_or(default.language),
            output: parse_var(&lookup, OUTPUT_VAR).unwrap_or(default.output),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let value = lookup(name)?;
    match value.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("ignoring invalid value {value:?} of {name}");
            None
        }
    }
}

#[derive(Debug, Default, Clone, Copy, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
