//! The reference assessment catalog.
//!
//! Two questions per saboteur, eighteen in total. This is versioned data:
//! editing prompts or category tags changes scoring semantics for every
//! future session and has to be treated as a migration.

use crate::bank::QuestionBank;
use crate::model::{Question, QuestionId, Saboteur};

/// The reference question list in presentation order.
#[must_use]
pub fn reference_questions() -> Vec<Question> {
    let q = |id: u32, text: &str, saboteur: Saboteur| {
        Question::new(QuestionId::new(id), text, saboteur)
    };

    vec![
        q(
            1,
            "I am often harsh and critical with myself when I make a mistake.",
            Saboteur::Judge,
        ),
        q(
            2,
            "I find myself frequently judging others' actions or motives.",
            Saboteur::Judge,
        ),
        q(
            3,
            "I get frustrated when things are not done exactly the 'right' way.",
            Saboteur::Stickler,
        ),
        q(
            4,
            "I am often told I am too much of a perfectionist.",
            Saboteur::Stickler,
        ),
        q(
            5,
            "I often say 'yes' to help others even when I don't have the time or energy.",
            Saboteur::Pleaser,
        ),
        q(
            6,
            "I worry a lot about whether people like me.",
            Saboteur::Pleaser,
        ),
        q(
            7,
            "My self-worth is largely tied to my professional or personal successes.",
            Saboteur::HyperAchiever,
        ),
        q(
            8,
            "I often neglect my feelings to focus on getting things done.",
            Saboteur::HyperAchiever,
        ),
        q(
            9,
            "I often feel misunderstood or that things are harder for me than others.",
            Saboteur::Victim,
        ),
        q(
            10,
            "I tend to withdraw and pout when I feel hurt.",
            Saboteur::Victim,
        ),
        q(
            11,
            "I prefer to analyze situations with logic rather than getting involved in emotions.",
            Saboteur::HyperRational,
        ),
        q(
            12,
            "Others sometimes perceive me as cold or intellectually arrogant.",
            Saboteur::HyperRational,
        ),
        q(
            13,
            "I am constantly scanning my environment for potential dangers or problems.",
            Saboteur::HyperVigilant,
        ),
        q(
            14,
            "I have a hard time relaxing because I feel I need to stay alert.",
            Saboteur::HyperVigilant,
        ),
        q(
            15,
            "I get bored easily and am always looking for the next exciting thing.",
            Saboteur::Restless,
        ),
        q(
            16,
            "I have trouble sticking with a task once the initial excitement wears off.",
            Saboteur::Restless,
        ),
        q(
            17,
            "I feel anxious when I am not in control of a situation.",
            Saboteur::Controller,
        ),
        q(
            18,
            "I push people to do things my way because I know it's the best way.",
            Saboteur::Controller,
        ),
    ]
}

/// The validated reference bank.
///
/// # Panics
///
/// Panics if the reference catalog violates the bank invariants; the
/// catalog is static and covered by tests, so this cannot happen at
/// runtime.
#[must_use]
pub fn reference_bank() -> QuestionBank {
    QuestionBank::new(reference_questions()).expect("reference catalog should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_is_valid() {
        let bank = reference_bank();
        assert_eq!(bank.len(), 18);
    }

    #[test]
    fn reference_catalog_has_two_questions_per_saboteur() {
        let bank = reference_bank();
        for saboteur in Saboteur::ALL {
            let count = bank
                .questions()
                .iter()
                .filter(|q| q.saboteur() == saboteur)
                .count();
            assert_eq!(count, 2, "{saboteur} should have exactly two questions");
        }
    }

    #[test]
    fn reference_ids_are_sequential() {
        let bank = reference_bank();
        for (index, question) in bank.questions().iter().enumerate() {
            assert_eq!(question.id().value() as usize, index + 1);
        }
    }
}
