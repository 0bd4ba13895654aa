//! Human-readable trait descriptions
//!
//! Presentation data for results and the trait reference page. The order of
//! [`DESCRIPTIONS`] matches [`Trait::ORDER`].

use crate::scoring::Trait;
use serde::Serialize;

/// Display metadata for one trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraitDescription {
    /// The trait described
    #[serde(rename = "trait")]
    pub trait_: Trait,
    /// Icon shown next to the label
    pub emoji: &'static str,
    /// Theme color as `#rrggbb`
    pub color: &'static str,
    /// One-line summary
    pub summary: &'static str,
    /// What a high score indicates
    pub high: &'static str,
    /// What a low score indicates
    pub low: &'static str,
}

impl TraitDescription {
    /// Full trait name.
    pub fn label(&self) -> &'static str {
        self.trait_.label()
    }

    /// Theme color as an `(r, g, b)` triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.color.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .unwrap_or(0)
        };
        (channel(0), channel(2), channel(4))
    }
}

/// Descriptions in evaluation order `[O, C, E, A, N]`.
pub static DESCRIPTIONS: [TraitDescription; 5] = [
    TraitDescription {
        trait_: Trait::Openness,
        emoji: "💡",
        color: "#9b59b6",
        summary: "Creativity, curiosity, and open-mindedness.",
        high: "High scorers are imaginative, curious, and open to new experiences.",
        low: "Low scorers prefer tradition, routine, and familiarity.",
    },
    TraitDescription {
        trait_: Trait::Conscientiousness,
        emoji: "🛠️",
        color: "#3498db",
        summary: "Organization, responsibility, and dependability.",
        high: "High scorers are disciplined, organized, and goal-oriented.",
        low: "Low scorers may be spontaneous, flexible, and sometimes careless.",
    },
    TraitDescription {
        trait_: Trait::Extraversion,
        emoji: "🥳",
        color: "#f39c12",
        summary: "Sociability, assertiveness, and energy.",
        high: "High scorers are outgoing, talkative, and thrive in social settings.",
        low: "Low scorers (introverts) are reserved, reflective, and enjoy solitude.",
    },
    TraitDescription {
        trait_: Trait::Agreeableness,
        emoji: "🤝",
        color: "#2ecc71",
        summary: "Compassion, cooperation, and kindness.",
        high: "High scorers are empathetic, cooperative, and value harmony.",
        low: "Low scorers may be skeptical, competitive, or blunt.",
    },
    TraitDescription {
        trait_: Trait::Neuroticism,
        emoji: "😥",
        color: "#e74c3c",
        summary: "Emotional reactivity and sensitivity to stress.",
        high: "High scorers are more prone to stress, worry, and mood swings.",
        low: "Low scorers are calm, emotionally stable, and resilient.",
    },
];

/// Description for one trait.
pub fn describe(t: Trait) -> &'static TraitDescription {
    // DESCRIPTIONS is indexed in Trait::ORDER
    let idx = Trait::ORDER.iter().position(|o| *o == t).unwrap_or(0);
    &DESCRIPTIONS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions_follow_evaluation_order() {
        for (d, t) in DESCRIPTIONS.iter().zip(Trait::ORDER) {
            assert_eq!(d.trait_, t);
            assert_eq!(describe(t).trait_, t);
        }
    }

    #[test]
    fn test_colors() {
        assert_eq!(describe(Trait::Openness).rgb(), (0x9b, 0x59, 0xb6));
        assert_eq!(describe(Trait::Neuroticism).color, "#e74c3c");
    }

    #[test]
    fn test_label_matches_trait() {
        assert_eq!(describe(Trait::Agreeableness).label(), "Agreeableness");
    }
}
