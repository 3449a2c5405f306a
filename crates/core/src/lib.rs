#![forbid(unsafe_code)]

pub mod answer;
pub mod model;
pub mod time;
pub mod validate;

pub use answer::matches;
pub use time::Clock;
pub use validate::{InputError, validate_id};
