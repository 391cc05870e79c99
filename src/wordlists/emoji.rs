//! Emoji clues for themed games

use crate::core::Word;

/// Shown when a word has no themed emoji
pub const UNKNOWN_EMOJI: &str = "❓";

const THEMES: &[(&str, &str)] = &[
    ("APPLE", "🍎"),
    ("BEACH", "🏖️"),
    ("CANDY", "🍬"),
    ("CHAIR", "🪑"),
    ("CLOCK", "🕐"),
    ("CLOUD", "☁️"),
    ("DANCE", "💃"),
    ("EAGLE", "🦅"),
    ("FLAME", "🔥"),
    ("GLOBE", "🌍"),
    ("GRAPE", "🍇"),
    ("HORSE", "🐴"),
    ("HOUSE", "🏠"),
    ("JUICE", "🧃"),
    ("LEMON", "🍋"),
    ("MOUSE", "🐭"),
    ("OCEAN", "🌊"),
    ("PIANO", "🎹"),
    ("ROBOT", "🤖"),
    ("TRUCK", "🚚"),
];

/// Emoji clue for `word`, or [`UNKNOWN_EMOJI`]
#[must_use]
pub fn emoji_for(word: &Word) -> &'static str {
    THEMES
        .iter()
        .find(|(text, _)| *text == word.text())
        .map_or(UNKNOWN_EMOJI, |&(_, emoji)| emoji)
}

/// Whether `word` has a themed emoji
#[must_use]
pub fn has_theme(word: &Word) -> bool {
    THEMES.iter().any(|(text, _)| *text == word.text())
}
