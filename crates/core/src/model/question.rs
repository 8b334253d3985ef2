use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;
use crate::model::saboteur::Saboteur;

/// A single assessment item.
///
/// Each question carries exactly one saboteur tag; the prompt text is
/// opaque to scoring and is never interpreted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    saboteur: Saboteur,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, text: impl Into<String>, saboteur: Saboteur) -> Self {
        Self {
            id,
            text: text.into(),
            saboteur,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn saboteur(&self) -> Saboteur {
        self.saboteur
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_exposes_its_parts() {
        let q = Question::new(QuestionId::new(3), "I plan everything.", Saboteur::Stickler);
        assert_eq!(q.id(), QuestionId::new(3));
        assert_eq!(q.text(), "I plan everything.");
        assert_eq!(q.saboteur(), Saboteur::Stickler);
    }
}
