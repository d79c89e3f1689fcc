//! Question generation and grading
//!
//! A question is a color word drawn by the roulette, painted in a
//! random ink on a random, different background. Which of the two
//! paints the player has to name is decided once, when the question is
//! generated, so grading and the on-screen prompt always agree.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::palette::PALETTE_SIZE;

/// Which paint of the word the player has to name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// The color of the letters themselves
    Ink,
    /// The color behind the letters
    Background,
}

impl Attribute {
    /// Prompt line shown above the quiz word
    pub fn prompt(&self) -> &'static str {
        match self {
            Attribute::Ink => "What color are the letters?",
            Attribute::Background => "What color is the background?",
        }
    }

    /// Short label for the settings overlay
    pub fn description(&self) -> &'static str {
        match self {
            Attribute::Ink => "Letters (ink)",
            Attribute::Background => "Background",
        }
    }

    /// The other attribute
    pub fn toggled(&self) -> Attribute {
        match self {
            Attribute::Ink => Attribute::Background,
            Attribute::Background => Attribute::Ink,
        }
    }
}

/// One quiz round: word, paints and the graded attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Palette index of the letter color
    pub ink_index: usize,
    /// Palette index of the color behind the word
    pub background_index: usize,
    /// Palette index of the word text itself
    pub word_index: usize,
    /// Attribute the player is asked about
    pub target: Attribute,
}

impl Question {
    /// Generate a question for the given word with random, distinct
    /// ink and background paints
    pub fn generate(word_index: usize, target: Attribute, rng: &mut impl Rng) -> Self {
        let ink_index = rng.gen_range(0..PALETTE_SIZE);
        let mut background_index = rng.gen_range(0..PALETTE_SIZE);
        // Rejection sampling keeps ink and background readable apart
        while background_index == ink_index {
            background_index = rng.gen_range(0..PALETTE_SIZE);
        }
        Self {
            ink_index,
            background_index,
            word_index,
            target,
        }
    }

    /// Palette index of the correct answer for this question
    pub fn target_index(&self) -> usize {
        match self.target {
            Attribute::Ink => self.ink_index,
            Attribute::Background => self.background_index,
        }
    }

    /// Grade a palette-index answer
    pub fn grade(&self, choice: usize) -> bool {
        choice == self.target_index()
    }
}
