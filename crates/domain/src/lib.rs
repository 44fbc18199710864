#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod message;
mod running;
mod swimming;
mod training;
mod value;
mod walking;
pub mod workout;

pub use error::*;
pub use message::*;
pub use running::*;
pub use swimming::*;
pub use training::*;
pub use value::*;
pub use walking::*;
pub use workout::{Metrics, Workout};
