//! The fixed 50-item inventory
//!
//! The scoring key in [`crate::scoring`] is positional: index `i` of an
//! answer vector is the answer to `QUESTIONS[i]`. The set must never be
//! reordered or resized.

use serde::Serialize;

/// Number of items in the inventory.
pub const QUESTION_COUNT: usize = 50;

/// One inventory statement. Each reads as "I ...".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based position in the inventory
    pub id: u32,
    /// Statement text
    pub text: &'static str,
}

impl Question {
    const fn new(id: u32, text: &'static str) -> Self {
        Self { id, text }
    }

    /// 0-based index into an answer vector.
    #[inline]
    pub const fn index(&self) -> usize {
        self.id as usize - 1
    }
}

/// The inventory, in scoring order.
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question::new(1, "Am the life of the party."),
    Question::new(2, "Feel little concern for others."),
    Question::new(3, "Am always prepared."),
    Question::new(4, "Get stressed out easily."),
    Question::new(5, "Have a rich vocabulary."),
    Question::new(6, "Don't talk a lot."),
    Question::new(7, "Am interested in people."),
    Question::new(8, "Leave my belongings around."),
    Question::new(9, "Am relaxed most of the time."),
    Question::new(10, "Have difficulty understanding abstract ideas."),
    Question::new(11, "Feel comfortable around people."),
    Question::new(12, "Insult people."),
    Question::new(13, "Pay attention to details."),
    Question::new(14, "Worry about things."),
    Question::new(15, "Have a vivid imagination."),
    Question::new(16, "Keep in the background."),
    Question::new(17, "Sympathize with others' feelings."),
    Question::new(18, "Make a mess of things."),
    Question::new(19, "Seldom feel blue."),
    Question::new(20, "Am not interested in abstract ideas."),
    Question::new(21, "Start conversations."),
    Question::new(22, "Am not interested in other people's problems."),
    Question::new(23, "Get chores done right away."),
    Question::new(24, "Am easily disturbed."),
    Question::new(25, "Have excellent ideas."),
    Question::new(26, "Have little to say."),
    Question::new(27, "Have a soft heart."),
    Question::new(28, "Often forget to put things back in their proper place."),
    Question::new(29, "Get upset easily."),
    Question::new(30, "Do not have a good imagination."),
    Question::new(31, "Talk to a lot of different people at parties."),
    Question::new(32, "Am not really interested in others."),
    Question::new(33, "Like order."),
    Question::new(34, "Change my mood a lot."),
    Question::new(35, "Am quick to understand things."),
    Question::new(36, "Don't like to draw attention to myself."),
    Question::new(37, "Take time out for others."),
    Question::new(38, "Shirk my duties."),
    Question::new(39, "Have frequent mood swings."),
    Question::new(40, "Use difficult words."),
    Question::new(41, "Don't mind being the center of attention."),
    Question::new(42, "Feel others' emotions."),
    Question::new(43, "Follow a schedule."),
    Question::new(44, "Get irritated easily."),
    Question::new(45, "Spend time reflecting on things."),
    Question::new(46, "Am quiet around strangers."),
    Question::new(47, "Make people feel at ease."),
    Question::new(48, "Am exacting in my work."),
    Question::new(49, "Often feel blue."),
    Question::new(50, "Am full of ideas."),
];

/// Look up a question by 0-based index.
pub fn question(index: usize) -> Option<&'static Question> {
    QUESTIONS.get(index)
}
