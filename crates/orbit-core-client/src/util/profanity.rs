// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Words rejected by the pre-send screen.
const BANNED: &[&str] = &[
    "fuck",
    "shit",
    "ass",
    "bitch",
    "bastard",
    "crap",
    "piss",
    "dick",
    "cock",
    "pussy",
    "whore",
    "slut",
    "cunt",
    "motherfucker",
    "asshole",
    "douchebag",
    "bullshit",
    "wanker",
    "twat",
];

/// Whole-word match against the banned list, case-insensitive. Substrings
/// inside longer words ("classic", "assistant") pass.
pub fn contains_profanity(text: &str) -> bool {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| BANNED.contains(&word))
}
