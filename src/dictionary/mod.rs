
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Editor identifier substituted for any token missing from the dictionary.
pub const FALLBACK: &str = "EMPTY";

// Left: identifiers used in the game's level tables.
// Right: object names understood by the level editor.
const BUILTIN_TABLE: &[(&str, &str)] = &[
    // Physical objects
    ("EMPTY", "EMPTY"),
    ("BABA", "BABA"),
    ("WALL", "WALL"),
    ("ROCK", "ROCK"),
    ("FLAG", "FLAG"),
    ("LAVA", "LAVA"),
    ("GOOP", "GOOP"),
    ("LOVE", "LOVE"),
    ("KEY", "KEY"),
    ("DOOR", "DOOR"),
    ("WATER", "WATER"),
    ("ICE", "ICE"),
    ("BOX", "BOX"),
    // Nouns
    ("W_BABA", "TEXT_BABA"),
    ("W_WALL", "TEXT_WALL"),
    ("W_ROCK", "TEXT_ROCK"),
    ("W_FLAG", "TEXT_FLAG"),
    ("W_LAVA", "TEXT_LAVA"),
    ("W_GOOP", "TEXT_GOOP"),
    ("W_LOVE", "TEXT_LOVE"),
    ("W_EMPTY", "TEXT_EMPTY"),
    ("W_KEY", "TEXT_KEY"),
    ("W_DOOR", "TEXT_DOOR"),
    ("W_WATER", "TEXT_WATER"),
    ("W_ICE", "TEXT_ICE"),
    ("W_BOX", "TEXT_BOX"),
    // Operators and properties
    ("W_IS", "TEXT_IS"),
    ("W_PUSH", "TEXT_PUSH"),
    ("W_STOP", "TEXT_STOP"),
    ("W_WIN", "TEXT_WIN"),
    ("W_YOU", "TEXT_YOU"),
    ("W_SINK", "TEXT_SINK"),
    ("W_KILL", "TEXT_KILL"),
    ("W_SWAP", "TEXT_SWAP"),
    ("W_HOT", "TEXT_HOT"),
    ("W_MELT", "TEXT_MELT"),
    ("W_MOVE", "TEXT_MOVE"),
    ("W_OPEN", "TEXT_OPEN"),
    ("W_SHUT", "TEXT_SHUT"),
    ("W_FLOAT", "TEXT_FLOAT"),
    ("W_PULL", "TEXT_PULL"),
];

static BUILTIN: Lazy<TokenDictionary> = Lazy::new(|| TokenDictionary {
    entries: BUILTIN_TABLE
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect(),
});

/// Source token -> editor identifier mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDictionary {
    entries: HashMap<String, String>,
}

/// Result of translating one level's raw tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    /// Same length and order as the input.
    pub tokens: Vec<String>,
    /// Distinct tokens that fell back to [`FALLBACK`], in first-seen order.
    pub unknown: Vec<String>,
}

impl TokenDictionary {
    /// The built-in table, built on first use and shared afterwards.
    pub fn builtin() -> &'static TokenDictionary {
        &BUILTIN
    }

    /// Built-in table with extra or replacement entries layered on top.
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut dictionary = Self::builtin().clone();
        dictionary.entries.extend(
            overrides
                .into_iter()
                .map(|(from, to)| (from.into(), to.into())),
        );
        dictionary
    }

    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn fallback(&self) -> &'static str {
        FALLBACK
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn translate<S: AsRef<str>>(&self, raw: &[S]) -> Translation {
        let mut seen = HashSet::new();
        let mut unknown = Vec::new();
        let tokens = raw
            .iter()
            .map(|token| {
                let token = token.as_ref();
                match self.lookup(token) {
                    Some(mapped) => mapped.to_string(),
                    None => {
                        if seen.insert(token) {
                            unknown.push(token.to_string());
                        }
                        FALLBACK.to_string()
                    }
                }
            })
            .collect();
        Translation { tokens, unknown }
    }
}
