use thiserror::Error;

/// Configuration that components accept but that is probably a mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("counter \"{title}\": min {min} is greater than max {max}")]
    InvertedBounds { title: String, min: i64, max: i64 },

    #[error("counter \"{title}\": step is 0, the buttons will not move the value")]
    ZeroStep { title: String },

    #[error("counter \"{title}\": start value {value} lies outside its bounds")]
    StartOutOfBounds { title: String, value: i64 },

    #[error("profile #{index}: name is empty")]
    EmptyName { index: usize },
}
