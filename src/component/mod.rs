//! UI-independent component logic: the bounded counter and the welcome card.

pub mod counter;
pub mod error;
pub mod profile;

pub use counter::{BoundedCounter, CounterConfig, Step, Tone};
pub use error::ConfigError;
pub use profile::{Avatar, ProfileCard, ProfileConfig};
