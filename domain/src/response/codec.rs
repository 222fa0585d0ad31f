//! Response codec - the wire format for answers.
//!
//! Every answer is persisted as a single raw string. Scalar types store
//! the value itself; multi-valued types store the selected option values
//! joined with [`VALUE_SEPARATOR`], in stored order, no deduplication.
//!
//! Round-trip law: `decode(t, Some(&encode(t, &v))) == v` for every type
//! `t` and every value `v` whose elements do not contain the separator.
//! Option values containing `;` are a documented precondition violation,
//! not something the codec detects.

use crate::question::taxonomy::QuestionType;
use serde::{Deserialize, Serialize};

/// Separator between values of a multi-valued answer. The only place the
/// wire separator appears.
pub const VALUE_SEPARATOR: char = ';';

/// A UI-level answer value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseValue {
    /// One scalar value. `None` means no answer was ever stored, which is
    /// distinguishable from an explicitly stored empty string.
    Scalar(Option<String>),
    /// Ordered selected values of a multi-valued question.
    Multi(Vec<String>),
}

impl ResponseValue {
    /// Whether this value counts as unanswered for required-field
    /// validation.
    pub fn is_empty(&self) -> bool {
        match self {
            ResponseValue::Scalar(value) => value.as_deref().is_none_or(str::is_empty),
            ResponseValue::Multi(values) => values.is_empty(),
        }
    }

    /// The value as a list regardless of shape: a scalar becomes a
    /// singleton, an absent scalar becomes empty.
    pub fn into_values(self) -> Vec<String> {
        match self {
            ResponseValue::Scalar(value) => value.into_iter().collect(),
            ResponseValue::Multi(values) => values,
        }
    }
}

/// Encode a UI-level value into its single transportable string.
pub fn encode(question_type: &QuestionType, value: &ResponseValue) -> String {
    match value {
        ResponseValue::Scalar(scalar) => scalar.clone().unwrap_or_default(),
        ResponseValue::Multi(values) => {
            debug_assert!(question_type.is_multi_valued() || values.len() <= 1);
            values.join(&VALUE_SEPARATOR.to_string())
        }
    }
}

/// Decode a stored raw string back into a UI-level value.
///
/// Multi-valued types: absent or empty raw decodes to an empty sequence;
/// otherwise split on the separator, preserving stored order. Scalar
/// types: raw passes through unchanged, absent stays `None`.
pub fn decode(question_type: &QuestionType, raw: Option<&str>) -> ResponseValue {
    if question_type.is_multi_valued() {
        match raw {
            None | Some("") => ResponseValue::Multi(Vec::new()),
            Some(raw) => ResponseValue::Multi(
                raw.split(VALUE_SEPARATOR).map(str::to_string).collect(),
            ),
        }
    } else {
        ResponseValue::Scalar(raw.map(str::to_string))
    }
}
