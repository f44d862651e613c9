//! Bounded counter component.
//!
//! A counter owns a single integer that moves by a fixed step and is clamped
//! to optional inclusive bounds. The configuration is never rejected: a
//! counter whose start value lies outside its bounds shows that value until
//! the next clamped step.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Construction parameters for a [`BoundedCounter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub initial_value: i64,
    #[serde(default = "default_step")]
    pub step: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            initial_value: 0,
            step: default_step(),
            min: None,
            max: None,
        }
    }
}

impl CounterConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn initial_value(mut self, value: i64) -> Self {
        self.initial_value = value;
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Report configuration that is accepted but probably unintended.
    ///
    /// Nothing here is enforced; callers log the problems and build the
    /// counter anyway.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut problems = Vec::new();
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                problems.push(ConfigError::InvertedBounds {
                    title: self.title.clone(),
                    min,
                    max,
                });
            }
        }
        if self.step == 0 {
            problems.push(ConfigError::ZeroStep {
                title: self.title.clone(),
            });
        }
        let below = self.min.is_some_and(|min| self.initial_value < min);
        let above = self.max.is_some_and(|max| self.initial_value > max);
        if below || above {
            problems.push(ConfigError::StartOutOfBounds {
                title: self.title.clone(),
                value: self.initial_value,
            });
        }
        problems
    }
}

fn default_title() -> String {
    "Counter".to_string()
}
fn default_step() -> i64 {
    1
}

/// Color classification of a counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Zero,
}

impl Tone {
    pub fn of(value: i64) -> Self {
        match value.signum() {
            1 => Tone::Positive,
            -1 => Tone::Negative,
            _ => Tone::Zero,
        }
    }
}

/// Result of an increment or decrement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The value moved by the full step.
    Moved,
    /// The value moved but was clamped to a bound.
    Clamped,
    /// The control is disabled; the value did not change.
    Blocked,
}

#[derive(Debug, Clone)]
pub struct BoundedCounter {
    config: CounterConfig,
    value: i64,
}

impl BoundedCounter {
    pub fn new(config: CounterConfig) -> Self {
        let value = config.initial_value;
        Self { config, value }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn can_increment(&self) -> bool {
        !self.config.max.is_some_and(|max| self.value >= max)
    }

    pub fn can_decrement(&self) -> bool {
        !self.config.min.is_some_and(|min| self.value <= min)
    }

    pub fn increment(&mut self) -> Step {
        if !self.can_increment() {
            return Step::Blocked;
        }
        let next = self.value.saturating_add(self.config.step);
        match self.config.max {
            Some(max) if next > max => {
                self.value = max;
                Step::Clamped
            }
            _ => {
                self.value = next;
                Step::Moved
            }
        }
    }

    pub fn decrement(&mut self) -> Step {
        if !self.can_decrement() {
            return Step::Blocked;
        }
        let next = self.value.saturating_sub(self.config.step);
        match self.config.min {
            Some(min) if next < min => {
                self.value = min;
                Step::Clamped
            }
            _ => {
                self.value = next;
                Step::Moved
            }
        }
    }

    /// Restore the start value. Bounds are not consulted.
    pub fn reset(&mut self) {
        self.value = self.config.initial_value;
    }

    pub fn delta(&self) -> i64 {
        self.value.saturating_sub(self.config.initial_value)
    }

    /// Signed distance from the start value, `None` while unchanged.
    pub fn delta_label(&self) -> Option<String> {
        match self.delta() {
            0 => None,
            d => Some(format!("{:+}", d)),
        }
    }

    pub fn tone(&self) -> Tone {
        Tone::of(self.value)
    }
}
