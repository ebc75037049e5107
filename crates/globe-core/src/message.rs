use rand::seq::SliceRandom;
use rand::Rng;

pub const MAX_MESSAGE_CHARS: usize = 140;

pub const DEFAULT_MESSAGES: [&str; 8] = [
    "You are loved ❤️",
    "You've got this!",
    "Someone is thinking of you",
    "You make the world better",
    "Keep shining ✨",
    "You are enough",
    "Sending you strength",
    "Tomorrow will be beautiful",
];

/// Turn raw input into the text that actually flies.
///
/// Whitespace-only input picks a random default message; anything longer than
/// [`MAX_MESSAGE_CHARS`] characters is cut at a char boundary.
pub fn compose_message<R: Rng + ?Sized>(input: &str, rng: &mut R) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_MESSAGES
            .choose(rng)
            .copied()
            .unwrap_or(DEFAULT_MESSAGES[0])
            .to_string();
    }
    match trimmed.char_indices().nth(MAX_MESSAGE_CHARS) {
        Some((cut, _)) => trimmed[..cut].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}
