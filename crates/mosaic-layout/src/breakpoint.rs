//! Width breakpoints for column count and gap.
//!
//! A breakpoint table maps a container width to a discrete layout parameter.
//! Each table has a base value used below the first step, and a list of steps
//! whose thresholds are lower-bound inclusive:
//!
//! | width range        | columns | gap |
//! |--------------------|---------|-----|
//! | `< 640`            | 2       | 8   |
//! | `640 ..< 1024`     | 3       | 12  |
//! | `1024 ..< 1440`    | 4       | 16  |
//! | `>= 1440`          | 5       | 16  |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column count below the first breakpoint.
pub const DEFAULT_BASE_COLUMNS: usize = 2;
/// Gap in pixels below the first breakpoint.
pub const DEFAULT_BASE_GAP: u32 = 8;

const DEFAULT_COLUMN_STEPS: [(f32, usize); 3] = [(640.0, 3), (1024.0, 4), (1440.0, 5)];
const DEFAULT_GAP_STEPS: [(f32, u32); 2] = [(640.0, 12), (1024.0, 16)];

/// Errors raised when validating breakpoint tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakpointError {
    /// A step threshold is not a finite positive width.
    #[error("breakpoint {index}: min_width must be a finite positive number, got {min_width}")]
    InvalidThreshold {
        /// Step index
        index: usize,
        /// Offending threshold
        min_width: f32,
    },

    /// Step thresholds are not strictly ascending.
    #[error("breakpoint {index}: min_width {min_width} must be greater than {previous}")]
    Unordered {
        /// Step index
        index: usize,
        /// Offending threshold
        min_width: f32,
        /// Threshold of the step before it
        previous: f32,
    },

    /// A column table yields zero columns.
    #[error("column count must be at least 1 (at {location})")]
    ZeroColumns {
        /// `base` or `step N`
        location: String,
    },

    /// A column table would drop columns as width grows.
    #[error("column count must not decrease as width grows: step {index} has {value}, previous is {previous}")]
    DecreasingColumns {
        /// Step index
        index: usize,
        /// Column count at this step
        value: usize,
        /// Column count before this step
        previous: usize,
    },
}

/// A single breakpoint: `value` applies from `min_width` (inclusive) up to
/// the next step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakpointStep<T> {
    /// Lowest container width this step applies to
    pub min_width: f32,
    /// Parameter value
    pub value: T,
}

impl<T> BreakpointStep<T> {
    /// Create a new step.
    #[must_use]
    pub const fn new(min_width: f32, value: T) -> Self {
        Self { min_width, value }
    }
}

/// A width-indexed table of layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Breakpoints<T> {
    /// Value used below the first step
    pub base: T,
    /// Steps in ascending `min_width` order
    #[serde(default)]
    pub steps: Vec<BreakpointStep<T>>,
}

impl<T: Copy> Breakpoints<T> {
    /// Create a table with only a base value.
    #[must_use]
    pub const fn new(base: T) -> Self {
        Self {
            base,
            steps: Vec::new(),
        }
    }

    /// Append a step.
    #[must_use]
    pub fn with_step(mut self, min_width: f32, value: T) -> Self {
        self.steps.push(BreakpointStep::new(min_width, value));
        self
    }

    /// Resolve the value for a container width.
    ///
    /// Widths that compare below every threshold (including NaN) resolve to
    /// the base value.
    #[must_use]
    pub fn resolve(&self, width: f32) -> T {
        self.steps
            .iter()
            .rev()
            .find(|step| width >= step.min_width)
            .map_or(self.base, |step| step.value)
    }

    /// Check that thresholds are finite, positive and strictly ascending.
    pub fn validate_thresholds(&self) -> Result<(), BreakpointError> {
        let mut previous: Option<f32> = None;
        for (index, step) in self.steps.iter().enumerate() {
            if !step.min_width.is_finite() || step.min_width <= 0.0 {
                return Err(BreakpointError::InvalidThreshold {
                    index,
                    min_width: step.min_width,
                });
            }
            if let Some(previous) = previous {
                if step.min_width <= previous {
                    return Err(BreakpointError::Unordered {
                        index,
                        min_width: step.min_width,
                        previous,
                    });
                }
            }
            previous = Some(step.min_width);
        }
        Ok(())
    }
}

impl Breakpoints<usize> {
    /// Default column table.
    #[must_use]
    pub fn default_columns() -> Self {
        DEFAULT_COLUMN_STEPS
            .iter()
            .fold(Self::new(DEFAULT_BASE_COLUMNS), |table, &(w, v)| {
                table.with_step(w, v)
            })
    }

    /// Validate a column table: ordered thresholds, at least one column
    /// everywhere, and a count that never decreases as width grows.
    pub fn validate_columns(&self) -> Result<(), BreakpointError> {
        self.validate_thresholds()?;

        if self.base == 0 {
            return Err(BreakpointError::ZeroColumns {
                location: "base".to_string(),
            });
        }

        let mut previous = self.base;
        for (index, step) in self.steps.iter().enumerate() {
            if step.value == 0 {
                return Err(BreakpointError::ZeroColumns {
                    location: format!("step {index}"),
                });
            }
            if step.value < previous {
                return Err(BreakpointError::DecreasingColumns {
                    index,
                    value: step.value,
                    previous,
                });
            }
            previous = step.value;
        }
        Ok(())
    }
}

impl Breakpoints<u32> {
    /// Default gap table.
    #[must_use]
    pub fn default_gaps() -> Self {
        DEFAULT_GAP_STEPS
            .iter()
            .fold(Self::new(DEFAULT_BASE_GAP), |table, &(w, v)| {
                table.with_step(w, v)
            })
    }
}

/// Column and gap tables driving a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Column count by container width
    #[serde(default = "default_columns")]
    pub columns: Breakpoints<usize>,
    /// Gap in pixels by container width
    #[serde(default = "default_gaps")]
    pub gaps: Breakpoints<u32>,
}

fn default_columns() -> Breakpoints<usize> {
    Breakpoints::default_columns()
}

fn default_gaps() -> Breakpoints<u32> {
    Breakpoints::default_gaps()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: Breakpoints::default_columns(),
            gaps: Breakpoints::default_gaps(),
        }
    }
}

impl LayoutConfig {
    /// Validate both tables.
    pub fn validate(&self) -> Result<(), BreakpointError> {
        self.columns.validate_columns()?;
        self.gaps.validate_thresholds()
    }

    /// Column count for a container width.
    #[must_use]
    pub fn column_count(&self, width: f32) -> usize {
        self.columns.resolve(width)
    }

    /// Gap in pixels for a container width.
    #[must_use]
    pub fn gap(&self, width: f32) -> u32 {
        self.gaps.resolve(width)
    }
}

/// Column count for a container width using the default table.
#[must_use]
pub fn resolve_column_count(width: f32) -> usize {
    resolve_default(DEFAULT_BASE_COLUMNS, &DEFAULT_COLUMN_STEPS, width)
}

/// Gap in pixels for a container width using the default table.
#[must_use]
pub fn resolve_gap(width: f32) -> u32 {
    resolve_default(DEFAULT_BASE_GAP, &DEFAULT_GAP_STEPS, width)
}

fn resolve_default<T: Copy>(base: T, steps: &[(f32, T)], width: f32) -> T {
    steps
        .iter()
        .rev()
        .find(|&&(min_width, _)| width >= min_width)
        .map_or(base, |&(_, value)| value)
}
