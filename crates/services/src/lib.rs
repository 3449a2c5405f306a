#![forbid(unsafe_code)]

pub mod command;
pub mod console;
pub mod error;
pub mod play;
pub mod prompt;
pub mod trainer;

pub use command::Command;
pub use console::{Console, ConsoleError, Tone};
pub use error::TrainerError;
pub use play::{PlaySession, RoundEnd, RoundSummary, SessionPhase, Verdict};
pub use trainer::{Flow, Trainer};
