//! Word tokens and the closed vocabularies they are classified against

use serde::{Deserialize, Serialize};

/// Token text of a line break
pub const LINE_BREAK: &str = "\n";

/// Line break as it appears in flat display text (backslash + n)
pub const LINE_BREAK_ESCAPE: &str = "\\n";

/// Non-breaking space joining two-word units such as "no one"
pub const WORD_JOINER: char = '\u{00A0}';

/// Connector ("mortar") words that may be inserted between content words
pub const MORTAR_WORDS: [&str; 24] = [
    "the", "of", "and", "to", "a", "in", "is", "was", "for", "on", "are", "with", "at", "by",
    "an", "but", "from", "or", "were", "so", "than", "am", "yet", "around",
];

pub const PUNCTUATION_MARKS: [&str; 5] = [".", ",", "?", "!", "…"];

pub fn is_mortar(text: &str) -> bool {
    let normalized = normalize(text);
    MORTAR_WORDS.contains(&normalized.as_str())
}

pub fn is_punctuation(text: &str) -> bool {
    let normalized = normalize(text);
    PUNCTUATION_MARKS.contains(&normalized.as_str())
}

pub fn is_line_break(text: &str) -> bool {
    text == LINE_BREAK || text == LINE_BREAK_ESCAPE
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// One unit of a poem: a word, a punctuation mark or a line break
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordToken {
    pub text: String,
    /// False when the token is the dictionary word for its pictogram position
    pub inserted: bool,
}

impl WordToken {
    pub fn primary(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            inserted: false,
        }
    }

    pub fn inserted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            inserted: true,
        }
    }

    pub fn line_break() -> Self {
        Self::inserted(LINE_BREAK)
    }

    pub fn is_line_break(&self) -> bool {
        self.text == LINE_BREAK
    }

    pub fn is_mortar(&self) -> bool {
        is_mortar(&self.text)
    }

    pub fn is_punctuation(&self) -> bool {
        is_punctuation(&self.text)
    }
}

/// Poem text as handed around by the application: either a flat display
/// string or an already structured token list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoemText {
    Flat(String),
    Tokens(Vec<WordToken>),
}

impl PoemText {
    pub fn is_empty(&self) -> bool {
        match self {
            PoemText::Flat(s) => s.is_empty(),
            PoemText::Tokens(t) => t.is_empty(),
        }
    }
}

impl From<&str> for PoemText {
    fn from(s: &str) -> Self {
        PoemText::Flat(s.to_string())
    }
}

impl From<String> for PoemText {
    fn from(s: String) -> Self {
        PoemText::Flat(s)
    }
}

impl From<Vec<WordToken>> for PoemText {
    fn from(tokens: Vec<WordToken>) -> Self {
        PoemText::Tokens(tokens)
    }
}

/// Split flat display text into raw tokens.
///
/// Splits on whitespace except the word joiner, so "no\u{00A0}one" stays whole.
pub fn split_tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() && c != WORD_JOINER)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Flatten tokens into display text, line breaks encoded as `\n` escapes
pub fn flatten(words: &[WordToken]) -> String {
    words
        .iter()
        .map(|w| if w.is_line_break() { LINE_BREAK_ESCAPE } else { w.text.as_str() })
        .collect::<Vec<_>>()
        .join(" ")
}
