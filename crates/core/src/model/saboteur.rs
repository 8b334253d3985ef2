use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── SABOTEUR ─────────────────────────────────────────────────────────────────
//

/// The nine saboteur types that partition assessment questions into
/// scoring buckets.
///
/// Variant order is catalog order. It drives `Ord`, map iteration, and the
/// tie-break in top-N extraction, so reordering variants is a scoring
/// migration, not a cosmetic change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Saboteur {
    Judge,
    Stickler,
    Pleaser,
    #[serde(rename = "Hyper-Achiever")]
    HyperAchiever,
    Victim,
    #[serde(rename = "Hyper-Rational")]
    HyperRational,
    #[serde(rename = "Hyper-Vigilant")]
    HyperVigilant,
    Restless,
    Controller,
}

impl Saboteur {
    /// All saboteurs in catalog order.
    pub const ALL: [Saboteur; 9] = [
        Saboteur::Judge,
        Saboteur::Stickler,
        Saboteur::Pleaser,
        Saboteur::HyperAchiever,
        Saboteur::Victim,
        Saboteur::HyperRational,
        Saboteur::HyperVigilant,
        Saboteur::Restless,
        Saboteur::Controller,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Saboteur::Judge => "Judge",
            Saboteur::Stickler => "Stickler",
            Saboteur::Pleaser => "Pleaser",
            Saboteur::HyperAchiever => "Hyper-Achiever",
            Saboteur::Victim => "Victim",
            Saboteur::HyperRational => "Hyper-Rational",
            Saboteur::HyperVigilant => "Hyper-Vigilant",
            Saboteur::Restless => "Restless",
            Saboteur::Controller => "Controller",
        }
    }

    /// Static educational content for this saboteur.
    #[must_use]
    pub fn profile(&self) -> &'static SaboteurProfile {
        match self {
            Saboteur::Judge => &JUDGE,
            Saboteur::Stickler => &STICKLER,
            Saboteur::Pleaser => &PLEASER,
            Saboteur::HyperAchiever => &HYPER_ACHIEVER,
            Saboteur::Victim => &VICTIM,
            Saboteur::HyperRational => &HYPER_RATIONAL,
            Saboteur::HyperVigilant => &HYPER_VIGILANT,
            Saboteur::Restless => &RESTLESS,
            Saboteur::Controller => &CONTROLLER,
        }
    }
}

impl fmt::Display for Saboteur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── PROFILE ──────────────────────────────────────────────────────────────────
//

/// Educational content shown alongside a saboteur: what it is, how it
/// shows up, and the justifications it whispers.
///
/// Presentation-agnostic by design: no colors, no icons, no formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaboteurProfile {
    pub description: &'static str,
    pub characteristics: [&'static str; 3],
    pub lies: [&'static str; 3],
}

static JUDGE: SaboteurProfile = SaboteurProfile {
    description: "The universal saboteur that beats you up over mistakes and obsessively searches for what is wrong with you, others, and the situation.",
    characteristics: [
        "Finds faults with self, others, and circumstances.",
        "Causes much of our anxiety, stress, and unhappiness.",
        "Fixated on what is wrong rather than appreciation.",
    ],
    lies: [
        "Without me, you'll turn lazy and unambitious.",
        "If I don't punish you, you won't learn.",
        "Everyone else is better than you.",
    ],
};

static STICKLER: SaboteurProfile = SaboteurProfile {
    description: "Perfectionism and a need for order and organization taken too far.",
    characteristics: [
        "Punctual, methodical, and perfectionist.",
        "Highly critical of self and others for sloppiness.",
        "Strong need for order and clear rules.",
    ],
    lies: [
        "It is up to me to fix the mess others create.",
        "Perfection is the only standard worth having.",
        "There is a right way and a wrong way to do everything.",
    ],
};

static PLEASER: SaboteurProfile = SaboteurProfile {
    description: "Indirectly tries to gain acceptance and affection by helping, pleasing, rescuing, or flattering others.",
    characteristics: [
        "Needs to be liked by everyone.",
        "Has difficulty expressing own needs.",
        "Resents being taken for granted, but doesn't say it.",
    ],
    lies: [
        "I help others selflessly (but I expect appreciation).",
        "If I don't rescue them, who will?",
        "To be a good person, I must put others' needs first.",
    ],
};

static HYPER_ACHIEVER: SaboteurProfile = SaboteurProfile {
    description: "Dependent on constant performance and achievement for self-respect and self-validation.",
    characteristics: [
        "Competitive, image-conscious, and hard-working.",
        "Good at covering up insecurities.",
        "Adapts personality to fit what is impressive to others.",
    ],
    lies: [
        "Life is about achieving and producing results.",
        "Feelings are a distraction and get in the way.",
        "You are worthy only as long as you are successful.",
    ],
};

static VICTIM: SaboteurProfile = SaboteurProfile {
    description: "Emotional and temperamental as a way to gain attention and affection.",
    characteristics: [
        "Focuses on painful feelings.",
        "Feels misunderstood and alone.",
        "Uses moodiness to test others' commitment.",
    ],
    lies: [
        "I am the most unfortunate person I know.",
        "No one understands how hard I have it.",
        "If I suffer enough, maybe someone will rescue me.",
    ],
};

static HYPER_RATIONAL: SaboteurProfile = SaboteurProfile {
    description: "Intense and exclusive focus on the rational processing of everything, including relationships.",
    characteristics: [
        "Intellectual, analyzing, and secretive.",
        "Perceived as cold, distant, or arrogant.",
        "Discomfort with strong emotions in self and others.",
    ],
    lies: [
        "The rational mind is the most important thing.",
        "Emotions are messy and irrational.",
        "I am smarter than everyone else.",
    ],
};

static HYPER_VIGILANT: SaboteurProfile = SaboteurProfile {
    description: "Continuous intense anxiety about all the dangers and what could go wrong.",
    characteristics: [
        "Always anxious about what could go wrong.",
        "Suspicious of others' motives.",
        "Seeks reassurance and safety in rules and procedures.",
    ],
    lies: [
        "Life is full of dangers.",
        "If I don't stay alert, something terrible will happen.",
        "I can never rest.",
    ],
};

static RESTLESS: SaboteurProfile = SaboteurProfile {
    description: "Constantly in search of greater excitement in the next activity or constant busyness.",
    characteristics: [
        "Easily distracted and scattered.",
        "Stays busy to avoid dealing with unpleasant feelings.",
        "Seeks variety and excitement over depth.",
    ],
    lies: [
        "Life is too short to be slow.",
        "You are missing out on something better.",
        "Why be content when you can be excited?",
    ],
};

static CONTROLLER: SaboteurProfile = SaboteurProfile {
    description: "Anxiety-based need to take charge and control situations and people's actions to one's own will.",
    characteristics: [
        "High anxiety when things are not going their way.",
        "Connects with others through competition or conflict.",
        "Willful, confrontational, and straight-talking.",
    ],
    lies: [
        "Without me, you can't get anything done.",
        "Others want you to take control.",
        "You are either in control or out of control.",
    ],
};

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_saboteur_once() {
        let mut seen = std::collections::HashSet::new();
        for saboteur in Saboteur::ALL {
            assert!(seen.insert(saboteur));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn ord_follows_catalog_order() {
        for pair in Saboteur::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn labels_round_trip_through_serde() {
        let json = serde_json::to_string(&Saboteur::HyperAchiever).unwrap();
        assert_eq!(json, "\"Hyper-Achiever\"");
        let back: Saboteur = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Saboteur::HyperAchiever);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Saboteur::HyperVigilant.to_string(), "Hyper-Vigilant");
        assert_eq!(Saboteur::Judge.to_string(), "Judge");
    }

    #[test]
    fn every_profile_has_content() {
        for saboteur in Saboteur::ALL {
            let profile = saboteur.profile();
            assert!(!profile.description.is_empty());
            assert!(profile.characteristics.iter().all(|c| !c.is_empty()));
            assert!(profile.lies.iter().all(|l| !l.is_empty()));
        }
    }
}
