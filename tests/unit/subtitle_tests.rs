/*!
 * Tests for subtitle tokenization
 */

use movielingo::subtitle::{AnnotatedWord, SubtitleToken, tokenize};
use crate::common;

/// Tokenizing the same line twice must yield identical sequences
#[test]
fn test_tokenize_twice_shouldBeDeterministic() {
    let line = common::caged_line();

    let first: Vec<SubtitleToken> = line.tokens().collect();
    let second: Vec<SubtitleToken> = line.tokens().collect();

    assert_eq!(first, second);
}

/// Every word token, re-tokenized alone, must match the same annotation
/// it matched as part of the full line
#[test]
fn test_wordToken_retokenizedAlone_shouldMatchSameAnnotation() {
    let line = common::caged_line();

    for token in line.tokens() {
        if let Some(annotation) = token.annotation() {
            let alone: Vec<SubtitleToken> = tokenize(token.surface(), &line.words).collect();

            assert_eq!(alone.len(), 1);
            assert_eq!(alone[0].annotation(), Some(annotation));
        }
    }
}

#[test]
fn test_tokenize_shouldReconstructOriginalText() {
    let line = common::caged_line();

    let rebuilt: String = line
        .tokens()
        .map(|t| format!("{}{}", t.surface(), t.trailing()))
        .collect();

    assert_eq!(rebuilt, line.text);
}

#[test]
fn test_tokenize_firstMatchWins_withDuplicateSurfaces() {
    let words = vec![
        AnnotatedWord::new("hope", "надежда", "n"),
        AnnotatedWord::new("hope", "надеяться", "v"),
    ];

    let tokens: Vec<SubtitleToken> = tokenize("hope springs", &words).collect();

    assert_eq!(tokens[0].annotation().unwrap().translation, "надежда");
}

#[test]
fn test_tokenize_withNoAnnotations_shouldYieldOnlyPlainTokens() {
    let tokens: Vec<SubtitleToken> = tokenize("Their feathers are just too bright.", &[]).collect();

    assert_eq!(tokens.len(), 6);
    assert!(tokens.iter().all(|t| t.annotation().is_none()));
}

#[test]
fn test_tokenize_withEmptyText_shouldYieldNothing() {
    let words = vec![AnnotatedWord::new("hope", "надежда", "n")];
    assert_eq!(tokenize("", &words).count(), 0);
}

#[test]
fn test_tokenize_withPunctuationOnlyToken_shouldStayPlain() {
    let words = vec![AnnotatedWord::new("hope", "надежда", "n")];
    let tokens: Vec<SubtitleToken> = tokenize("hope ...", &words).collect();

    assert!(tokens[0].annotation().is_some());
    assert!(tokens[1].annotation().is_none());
}

#[test]
fn test_tokenize_withQuotedWord_shouldStripQuotesForMatching() {
    let words = vec![AnnotatedWord::new("hope", "надежда", "n")];
    let tokens: Vec<SubtitleToken> = tokenize("\"Hope\" endures", &words).collect();

    assert_eq!(tokens[0].surface(), "\"Hope\"");
    assert!(tokens[0].annotation().is_some());
}
