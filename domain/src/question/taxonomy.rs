//! Question type taxonomy - the single authoritative classification table.
//!
//! Every component that needs to know how a question behaves (which input
//! widget it renders as, whether it owns authored options, whether its
//! answer is multi-valued) consults [`QuestionType`] here. No other module
//! may compare type labels directly.
//!
//! Unrecognized labels are carried through untouched and classify
//! permissively as single-line text with no options: a catalog authored
//! against a newer taxonomy still renders instead of failing.

use serde::{Deserialize, Serialize};

/// The eight closed question types, plus a carrier for labels outside the
/// closed set (Value Object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    SingleLineText,
    ParagraphText,
    PicklistSingleSelect,
    MultiSelectPicklist,
    Checkboxes,
    RadioButtons,
    Date,
    Number,
    /// Any label not in the closed set. Preserved verbatim so it survives
    /// a load/save round trip.
    Unrecognized(String),
}

/// The input widget kind a question renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    SingleLine,
    MultiLine,
    SingleSelect,
    MultiSelect,
    CheckboxSet,
    RadioSet,
    Date,
    Number,
}

impl QuestionType {
    /// All members of the closed set, in authoring-tool display order.
    pub const CLOSED_SET: [QuestionType; 8] = [
        QuestionType::SingleLineText,
        QuestionType::ParagraphText,
        QuestionType::PicklistSingleSelect,
        QuestionType::MultiSelectPicklist,
        QuestionType::Checkboxes,
        QuestionType::RadioButtons,
        QuestionType::Date,
        QuestionType::Number,
    ];

    /// Parse a wire label. Labels outside the closed set are preserved as
    /// [`QuestionType::Unrecognized`]; this never fails.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        match label.as_str() {
            "Single Line Text" => QuestionType::SingleLineText,
            "Paragraph Text" => QuestionType::ParagraphText,
            "Picklist (Single Select)" => QuestionType::PicklistSingleSelect,
            "Multi-Select Picklist" => QuestionType::MultiSelectPicklist,
            "Checkboxes" => QuestionType::Checkboxes,
            "Radio Buttons" => QuestionType::RadioButtons,
            "Date" => QuestionType::Date,
            "Number" => QuestionType::Number,
            _ => QuestionType::Unrecognized(label),
        }
    }

    /// The wire label for this type.
    pub fn label(&self) -> &str {
        match self {
            QuestionType::SingleLineText => "Single Line Text",
            QuestionType::ParagraphText => "Paragraph Text",
            QuestionType::PicklistSingleSelect => "Picklist (Single Select)",
            QuestionType::MultiSelectPicklist => "Multi-Select Picklist",
            QuestionType::Checkboxes => "Checkboxes",
            QuestionType::RadioButtons => "Radio Buttons",
            QuestionType::Date => "Date",
            QuestionType::Number => "Number",
            QuestionType::Unrecognized(label) => label,
        }
    }

    /// The input widget this type renders as. Unrecognized types fall
    /// back to a single-line text input.
    pub fn input_kind(&self) -> InputKind {
        match self {
            QuestionType::SingleLineText => InputKind::SingleLine,
            QuestionType::ParagraphText => InputKind::MultiLine,
            QuestionType::PicklistSingleSelect => InputKind::SingleSelect,
            QuestionType::MultiSelectPicklist => InputKind::MultiSelect,
            QuestionType::Checkboxes => InputKind::CheckboxSet,
            QuestionType::RadioButtons => InputKind::RadioSet,
            QuestionType::Date => InputKind::Date,
            QuestionType::Number => InputKind::Number,
            QuestionType::Unrecognized(_) => InputKind::SingleLine,
        }
    }

    /// Whether answers are chosen from an authored set of options.
    pub fn carries_options(&self) -> bool {
        matches!(
            self,
            QuestionType::PicklistSingleSelect
                | QuestionType::MultiSelectPicklist
                | QuestionType::Checkboxes
                | QuestionType::RadioButtons
        )
    }

    /// Whether the answer is an ordered set of values rather than one
    /// scalar.
    pub fn is_multi_valued(&self) -> bool {
        matches!(
            self,
            QuestionType::MultiSelectPicklist | QuestionType::Checkboxes
        )
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for QuestionType {
    fn from(label: String) -> Self {
        QuestionType::from_label(label)
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        question_type.label().to_string()
    }
}
