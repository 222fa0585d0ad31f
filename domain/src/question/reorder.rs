//! Question reordering.
//!
//! Pure splice-and-renumber used when an author drags a question to a new
//! position. The full renumbered list is the unit handed back to
//! persistence, not a diff.

use crate::core::error::DomainError;
use crate::question::entities::QuestionDefinition;

/// Move the element at `from` to position `to` (interpreted against the
/// list after removal, standard splice semantics), then renumber every
/// sequence to its new 1-based position.
///
/// Relative order of all unmoved elements is preserved. Out-of-range
/// indices are an error rather than a truncation.
pub fn reorder(
    mut questions: Vec<QuestionDefinition>,
    from: usize,
    to: usize,
) -> Result<Vec<QuestionDefinition>, DomainError> {
    let len = questions.len();
    if from >= len {
        return Err(DomainError::IndexOutOfBounds { index: from, len });
    }
    if to >= len {
        return Err(DomainError::IndexOutOfBounds { index: to, len });
    }
    let moved = questions.remove(from);
    questions.insert(to, moved);
    Ok(renumber(questions))
}

/// Assign every question's sequence number to its 1-based position,
/// overwriting any prior value. Applied on catalog load as well, so a
/// list with stale or gapped sequences self-heals.
pub fn renumber(mut questions: Vec<QuestionDefinition>) -> Vec<QuestionDefinition> {
    for (index, question) in questions.iter_mut().enumerate() {
        question.sequence = index as u32 + 1;
    }
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::{QuestionId, TemplateId};
    use crate::question::taxonomy::QuestionType;

    fn question(id: &str, sequence: u32) -> QuestionDefinition {
        QuestionDefinition {
            id: Some(QuestionId::new(id)),
            template: TemplateId::new("T-1"),
            text: format!("Question {id}"),
            question_type: QuestionType::SingleLineText,
            required: false,
            sequence,
            options: Vec::new(),
        }
    }

    fn ids(questions: &[QuestionDefinition]) -> Vec<&str> {
        questions
            .iter()
            .map(|q| q.id.as_ref().unwrap().as_str())
            .collect()
    }

    #[test]
    fn test_move_first_to_last() {
        let list = vec![question("Q1", 1), question("Q2", 2), question("Q3", 3)];
        let result = reorder(list, 0, 2).unwrap();
        assert_eq!(ids(&result), vec!["Q2", "Q3", "Q1"]);
        let sequences: Vec<_> = result.iter().map(|q| q.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn test_move_last_to_first() {
        let list = vec![question("Q1", 1), question("Q2", 2), question("Q3", 3)];
        let result = reorder(list, 2, 0).unwrap();
        assert_eq!(ids(&result), vec!["Q3", "Q1", "Q2"]);
    }

    #[test]
    fn test_move_to_same_position_is_identity() {
        let list = vec![question("Q1", 1), question("Q2", 2)];
        let result = reorder(list.clone(), 1, 1).unwrap();
        assert_eq!(ids(&result), ids(&list));
    }

    #[test]
    fn test_sequences_are_contiguous_for_every_valid_move() {
        let list: Vec<_> = (1..=5).map(|i| question(&format!("Q{i}"), i)).collect();
        for from in 0..5 {
            for to in 0..5 {
                let result = reorder(list.clone(), from, to).unwrap();
                assert_eq!(result.len(), 5);
                let mut sequences: Vec<_> = result.iter().map(|q| q.sequence).collect();
                sequences.sort_unstable();
                assert_eq!(sequences, vec![1, 2, 3, 4, 5]);
            }
        }
    }

    #[test]
    fn test_unmoved_elements_keep_relative_order() {
        let list: Vec<_> = (1..=5).map(|i| question(&format!("Q{i}"), i)).collect();
        let result = reorder(list, 1, 3).unwrap();
        let rest: Vec<_> = ids(&result)
            .into_iter()
            .filter(|id| *id != "Q2")
            .collect();
        assert_eq!(rest, vec!["Q1", "Q3", "Q4", "Q5"]);
    }

    #[test]
    fn test_out_of_range_indices_are_errors() {
        let list = vec![question("Q1", 1), question("Q2", 2)];
        assert!(matches!(
            reorder(list.clone(), 2, 0),
            Err(DomainError::IndexOutOfBounds { index: 2, len: 2 })
        ));
        assert!(matches!(
            reorder(list, 0, 5),
            Err(DomainError::IndexOutOfBounds { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_renumber_overwrites_stale_sequences() {
        let list = vec![question("Q1", 7), question("Q2", 7), question("Q3", 2)];
        let result = renumber(list);
        let sequences: Vec<_> = result.iter().map(|q| q.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }
}
