//! Workout statistics for running, sports walking and swimming: distance,
//! mean speed and calories computed from raw tracker packages.

pub mod cli;
pub mod error;
pub mod message;
pub mod package;
pub mod training;
pub mod types;
pub mod utils;

pub use error::WorkoutError;
pub use message::InfoMessage;
pub use package::{Package, read_package};
pub use training::{Running, SportsWalking, Swimming, Training, Workout};
pub use types::{WorkoutKind, WorkoutSummary};
