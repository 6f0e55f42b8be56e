use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use anyhow::{Result, anyhow};

// @module: Subtitle line model and display tokenization

// @const: Non-whitespace run plus its trailing separator
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+\s*").unwrap()
});

/// Punctuation stripped from both ends of a token before matching it
/// against a line's annotated words.
pub const MATCH_PUNCTUATION: &[char] = &['.', ',', '!', '?', '\'', '"'];

// @struct: Word annotation attached to a subtitle line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedWord {
    // @field: Surface form as it appears in the source text
    pub surface: String,

    // @field: Translation into the learner's language
    pub translation: String,

    // @field: Part-of-speech tag (e.g. "n", "v", "adj")
    pub part_of_speech: String,
}

impl AnnotatedWord {
    /// Creates a new word annotation
    pub fn new(surface: &str, translation: &str, part_of_speech: &str) -> Self {
        AnnotatedWord {
            surface: surface.to_string(),
            translation: translation.to_string(),
            part_of_speech: part_of_speech.to_string(),
        }
    }
}

// @struct: Single subtitle line with its word annotations
#[derive(Debug, Clone)]
pub struct SubtitleLine {
    // @field: Sequence number within the track
    pub seq_num: usize,

    // @field: Start time in seconds
    pub start_s: u32,

    // @field: End time in seconds
    pub end_s: u32,

    // @field: Raw subtitle text
    pub text: String,

    // @field: Annotated words for this line
    pub words: Vec<AnnotatedWord>,
}

impl SubtitleLine {
    /// Creates a new subtitle line
    pub fn new(seq_num: usize, start_s: u32, end_s: u32, text: &str, words: Vec<AnnotatedWord>) -> Self {
        SubtitleLine {
            seq_num,
            start_s,
            end_s,
            text: text.to_string(),
            words,
        }
    }

    // @creates: Validated subtitle line
    // @validates: Time range and non-empty text
    pub fn new_validated(seq_num: usize, start_s: u32, end_s: u32, text: &str, words: Vec<AnnotatedWord>) -> Result<Self> {
        if end_s <= start_s {
            return Err(anyhow!(
                "Invalid time range: end time {} <= start time {}",
                end_s, start_s
            ));
        }

        let trimmed_text = text.trim();
        if trimmed_text.is_empty() {
            return Err(anyhow!("Empty subtitle text for line {}", seq_num));
        }

        Ok(SubtitleLine {
            seq_num,
            start_s,
            end_s,
            text: trimmed_text.to_string(),
            words,
        })
    }

    /// Convert start time to a mm:ss display timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_s)
    }

    /// Convert end time to a mm:ss display timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_s)
    }

    /// Format a timestamp in seconds to mm:ss
    pub fn format_timestamp(seconds: u32) -> String {
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }

    /// Tokenize this line's text against its own annotated words.
    ///
    /// The returned iterator is lazy and restartable; calling this again
    /// yields an identical sequence.
    pub fn tokens(&self) -> impl Iterator<Item = SubtitleToken<'_>> + '_ {
        tokenize(&self.text, &self.words)
    }
}

impl fmt::Display for SubtitleLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{} --> {}] {}",
            self.format_start_time(),
            self.format_end_time(),
            self.text
        )
    }
}

/// A display token produced by tokenizing a subtitle line.
///
/// Word tokens carry the annotation they matched; plain tokens are rendered
/// as-is. Both preserve the original surface casing and the trailing
/// separator so the line can be reconstructed for display.
#[derive(Debug, Clone, PartialEq)]
pub enum SubtitleToken<'a> {
    /// Text with no matching annotation
    Plain {
        /// Token text as it appears in the source
        surface: &'a str,
        /// Whitespace that followed the token
        trailing: &'a str,
    },
    /// Text that matched one of the line's annotated words
    Word {
        /// Token text as it appears in the source
        surface: &'a str,
        /// Whitespace that followed the token
        trailing: &'a str,
        /// The matched annotation
        word: &'a AnnotatedWord,
    },
}

impl<'a> SubtitleToken<'a> {
    /// Token text as it appears in the source
    pub fn surface(&self) -> &'a str {
        match *self {
            SubtitleToken::Plain { surface, .. } => surface,
            SubtitleToken::Word { surface, .. } => surface,
        }
    }

    /// Whitespace that followed the token
    pub fn trailing(&self) -> &'a str {
        match *self {
            SubtitleToken::Plain { trailing, .. } => trailing,
            SubtitleToken::Word { trailing, .. } => trailing,
        }
    }

    /// The matched annotation, if this is a word token
    pub fn annotation(&self) -> Option<&'a AnnotatedWord> {
        match *self {
            SubtitleToken::Plain { .. } => None,
            SubtitleToken::Word { word, .. } => Some(word),
        }
    }
}

/// Tokenize subtitle text against a list of annotated words.
///
/// Splits on whitespace; each token is stripped of the fixed punctuation
/// set at both ends, lowercased, and looked up against the annotated words
/// (also lowercased). First match wins; there is no partial matching.
/// Pure function of its inputs.
pub fn tokenize<'a>(
    text: &'a str,
    words: &'a [AnnotatedWord],
) -> impl Iterator<Item = SubtitleToken<'a>> + 'a {
    TOKEN_REGEX.find_iter(text).map(move |m| {
        let chunk = m.as_str();
        let (surface, trailing) = chunk.split_at(chunk.trim_end().len());

        match match_annotation(surface, words) {
            Some(word) => SubtitleToken::Word { surface, trailing, word },
            None => SubtitleToken::Plain { surface, trailing },
        }
    })
}

/// Look up a single display token among a line's annotated words
fn match_annotation<'a>(token: &str, words: &'a [AnnotatedWord]) -> Option<&'a AnnotatedWord> {
    let stripped = token.trim_matches(MATCH_PUNCTUATION).to_lowercase();
    if stripped.is_empty() {
        return None;
    }

    words.iter().find(|w| w.surface.to_lowercase() == stripped)
}
