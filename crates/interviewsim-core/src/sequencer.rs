//! Decides which scripted question to ask next.
//!
//! The sequencer never signals completion: once every remaining question has
//! been asked it keeps returning the last question of the bank as a closing
//! prompt. Ending the interview is the session's job, based on the number of
//! questions asked.

use std::collections::BTreeSet;

use crate::model::Role;
use crate::questions::questions_for;

/// Index of the first question at or after `proposed` that is not in `asked`.
///
/// Returns `None` when every index from `proposed` to the end of the bank has
/// been asked, or when `proposed` is past the end.
pub fn next_unasked_index(proposed: usize, role: Role, asked: &BTreeSet<usize>) -> Option<usize> {
    (proposed..questions_for(role).len()).find(|index| !asked.contains(index))
}

/// Text of the next question to ask.
///
/// Scans forward from `proposed` for an unasked question and falls back to the
/// last question of the bank when there is none. Never fails, whatever the
/// value of `proposed`.
pub fn next_question(proposed: usize, role: Role, asked: &BTreeSet<usize>) -> &'static str {
    let questions = questions_for(role);
    match next_unasked_index(proposed, role, asked) {
        Some(index) => questions[index],
        None => questions[questions.len() - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asked(indices: impl IntoIterator<Item = usize>) -> BTreeSet<usize> {
        indices.into_iter().collect()
    }

    #[test]
    fn returns_proposed_question_when_unasked() {
        let questions = questions_for(Role::DataScientist);
        assert_eq!(
            next_question(1, Role::DataScientist, &asked([0])),
            questions[1]
        );
    }

    #[test]
    fn skips_already_asked_questions() {
        let questions = questions_for(Role::DataEngineer);
        let text = next_question(2, Role::DataEngineer, &asked([0, 1, 2, 3]));
        assert_eq!(text, questions[4]);
        assert_eq!(
            next_unasked_index(2, Role::DataEngineer, &asked([0, 1, 2, 3])),
            Some(4)
        );
    }

    #[test]
    fn falls_back_to_last_question_when_exhausted() {
        let questions = questions_for(Role::DataScientist);
        let last = questions[questions.len() - 1];
        let all_but_last = asked(0..questions.len() - 1);

        // The last question is still unasked, so it is returned normally.
        assert_eq!(next_question(3, Role::DataScientist, &all_but_last), last);

        let everything = asked(0..questions.len());
        for _ in 0..3 {
            assert_eq!(next_question(3, Role::DataScientist, &everything), last);
        }
    }

    #[test]
    fn never_goes_out_of_range() {
        for role in Role::ALL {
            let questions = questions_for(role);
            let last = questions[questions.len() - 1];
            for proposed in [questions.len(), questions.len() + 1, 100, usize::MAX] {
                assert_eq!(next_question(proposed, role, &BTreeSet::new()), last);
                assert_eq!(next_unasked_index(proposed, role, &BTreeSet::new()), None);
            }
        }
    }
}
