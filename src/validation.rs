//! Field validation for board input.
//!
//! A [`Validatable`] pairs a raw value with optional [`Constraints`]. Every
//! constraint is checked; text-only and number-only bounds are skipped for
//! values of the other kind.

use serde::{Deserialize, Serialize};

/// A value collected from an input field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(value.into())
    }
}

/// Optional constraints for a single field. Unset bounds always pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl Constraints {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

/// A constraint that a value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    BelowMinimum { min: i64, actual: i64 },
    AboveMaximum { max: i64, actual: i64 },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Required => write!(f, "a value is required"),
            Violation::TooShort { min, actual } => {
                write!(f, "at least {} characters needed, got {}", min, actual)
            }
            Violation::TooLong { max, actual } => {
                write!(f, "at most {} characters allowed, got {}", max, actual)
            }
            Violation::BelowMinimum { min, actual } => {
                write!(f, "must be at least {}, got {}", min, actual)
            }
            Violation::AboveMaximum { max, actual } => {
                write!(f, "must be at most {}, got {}", max, actual)
            }
        }
    }
}

/// A value together with the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub constraints: Constraints,
}

impl Validatable {
    pub fn new(value: impl Into<FieldValue>, constraints: Constraints) -> Self {
        Self {
            value: value.into(),
            constraints,
        }
    }

    /// Every constraint this value fails, in declaration order.
    ///
    /// Length bounds are measured in characters and only apply to text;
    /// numeric bounds only apply to numbers.
    pub fn violations(&self) -> Vec<Violation> {
        let c = &self.constraints;
        let mut violations = Vec::new();

        if c.required && self.value.as_text().trim().is_empty() {
            violations.push(Violation::Required);
        }

        if let FieldValue::Text(text) = &self.value {
            let actual = text.chars().count();
            if let Some(min) = c.min_length {
                if actual < min {
                    violations.push(Violation::TooShort { min, actual });
                }
            }
            if let Some(max) = c.max_length {
                if actual > max {
                    violations.push(Violation::TooLong { max, actual });
                }
            }
        }

        if let FieldValue::Number(actual) = self.value {
            if let Some(min) = c.min {
                if actual < min {
                    violations.push(Violation::BelowMinimum { min, actual });
                }
            }
            if let Some(max) = c.max {
                if actual > max {
                    violations.push(Violation::AboveMaximum { max, actual });
                }
            }
        }

        violations
    }
}

/// Returns true when `input` satisfies all of its applicable constraints.
pub fn validate(input: &Validatable) -> bool {
    input.violations().is_empty()
}
