//! Identifier newtypes (Value Objects)
//!
//! Persistence assigns these; the engine treats them as opaque strings.
//! Newtypes keep a question id from being passed where a template id is
//! expected.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Identifier of a question template (the reusable catalog).
    TemplateId
);
string_id!(
    /// Identifier of a persisted question.
    QuestionId
);
string_id!(
    /// Identifier of a persisted option.
    OptionId
);
string_id!(
    /// Identifier of one answering session against one record.
    InstanceId
);
string_id!(
    /// Identifier of the business record an assessment is attached to.
    RecordId
);
