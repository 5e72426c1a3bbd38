//! Static message and emoji pools, and the emoji decorator.
//!
//! Both pools are process-wide immutable tables, safely shared across
//! connection handlers without synchronization. The decorator produces a new
//! string; the source sentence is never modified.

use rand::Rng;

use crate::config::{EMOJI_COUNT_MAX, EMOJI_COUNT_MIN};

/// Pool of template sentences to stream
pub static MESSAGES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog",
    "Python is an amazing programming language",
    "FastAPI makes building APIs incredibly easy",
    "Streaming data in real-time is powerful",
    "uvicorn is a lightning-fast ASGI server",
    "Random messages can be quite entertaining",
    "Server-Sent Events enable real-time communication",
    "HTTP streaming opens up many possibilities",
    "This message was generated randomly",
    "Welcome to the random message stream!",
    "Did you know octopuses have three hearts?",
    "The mitochondria is the powerhouse of the cell",
    "Coffee is the fuel of programmers",
    "Code never lies, comments sometimes do",
    "There are only 10 types of people in the world: those who understand binary and those who don't",
];

/// Pool of emoji glyphs for decoration
pub static EMOJI: &[&str] = &[
    "😀", "😃", "😄", "😁", "😆", "😅", "😂", "🤣", "😊", "😇",
    "🙂", "🙃", "😉", "😌", "😍", "🥰", "😘", "😗", "😙", "😚",
    "😋", "😛", "😝", "😜", "🤪", "🤨", "🧐", "🤓", "😎", "🤩",
    "🥳", "😏", "😒", "😞", "😔", "😟", "😕", "🙁", "☹️", "😣",
    "😖", "😫", "😩", "🥺", "😢", "😭", "😤", "😠", "😡", "🤬",
    "🤯", "😳", "🥵", "🥶", "😱", "😨", "😰", "😥", "😓", "🤗",
    "🤔", "🤭", "🤫", "🤥", "😶", "😐", "😑", "😬", "🙄", "😯",
    "🚀", "🌟", "⭐", "🔥", "💯", "✨", "🎉", "🎊", "🎈", "🎁",
    "🏆", "🥇", "🥈", "🥉", "🏅", "🎖️", "🏵️", "🎗️", "🎟️", "🎫",
    "🎪", "🎭", "🎨", "🎬", "🎤", "🎧", "🎼", "🎵", "🎶", "🎹",
];

/// Pick a sentence from the message pool uniformly at random.
pub fn pick_message<R: Rng>(rng: &mut R) -> &'static str {
    MESSAGES[rng.random_range(0..MESSAGES.len())]
}

/// Whether `text` is one of the pool sentences.
pub fn is_pool_message(text: &str) -> bool {
    MESSAGES.iter().any(|&m| m == text)
}

/// Whether `token` is a member of the emoji pool.
pub fn is_emoji(token: &str) -> bool {
    EMOJI.iter().any(|&e| e == token)
}

/// Insert 1-3 random emoji at random word-boundary positions.
///
/// The sentence is split on whitespace; each emoji is inserted as a
/// standalone token at a uniformly chosen index in `[0, token count]`
/// (inclusive, so insertion may land before the first or after the last
/// word), shifting later tokens right. Tokens are rejoined with single
/// spaces.
pub fn decorate<R: Rng>(message: &str, rng: &mut R) -> String {
    let mut words: Vec<&str> = message.split_whitespace().collect();

    let count = rng.random_range(EMOJI_COUNT_MIN..=EMOJI_COUNT_MAX);
    for _ in 0..count {
        let emoji = EMOJI[rng.random_range(0..EMOJI.len())];
        let position = rng.random_range(0..=words.len());
        words.insert(position, emoji);
    }

    words.join(" ")
}
