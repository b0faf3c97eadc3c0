use pretty_assertions::assert_eq;
use word_counter_core::{next_span, spans, words, SeparatorSet, Span, SpanKind, TokenizeError};

const SAMPLES: &[&str] = &[
    "The cat sat. The cat ran!",
    "a",
    ".",
    "  leading and trailing  ",
    "four score and seven years ago, our fathers brought forth",
    "it's--well; maybe: no?\tyes/no",
    "naïve café, déjà-vu",
    "!!!",
];

#[test]
fn word_span_runs_to_next_separator() {
    let seps = SeparatorSet::default();
    let span = next_span("The cat sat.", 0, &seps).unwrap();
    assert_eq!(
        span,
        Span {
            kind: SpanKind::Word,
            text: "The",
            start: 0,
        }
    );
}

#[test]
fn separator_span_runs_to_next_word() {
    let seps = SeparatorSet::default();
    let span = next_span("sat. The", 3, &seps).unwrap();
    assert_eq!(span.kind, SpanKind::Separator);
    assert_eq!(span.text, ". ");
    assert_eq!(span.end(), 5);
}

#[test]
fn span_may_be_a_single_character() {
    let seps = SeparatorSet::default();
    assert_eq!(next_span("a,b", 0, &seps).unwrap().text, "a");
    assert_eq!(next_span("a,b", 1, &seps).unwrap().text, ",");
    assert_eq!(next_span("a,b", 2, &seps).unwrap().text, "b");
}

#[test]
fn span_reaches_end_of_text() {
    let seps = SeparatorSet::default();
    let span = next_span("hello world", 6, &seps).unwrap();
    assert_eq!(span.text, "world");
    assert_eq!(span.end(), 11);
}

#[test]
fn precondition_violations_are_errors() {
    let seps = SeparatorSet::default();
    assert_eq!(next_span("", 0, &seps), Err(TokenizeError::EmptyText));
    assert_eq!(
        next_span("abc", 3, &seps),
        Err(TokenizeError::PositionOutOfRange {
            position: 3,
            len: 3
        })
    );
    assert_eq!(
        next_span("é", 1, &seps),
        Err(TokenizeError::NotCharBoundary { position: 1 })
    );
}

#[test]
fn custom_separators_change_the_split() {
    let seps: SeparatorSet = "|".parse().unwrap();
    let collected: Vec<&str> = words("a b|c d||e", &seps).collect();
    assert_eq!(collected, vec!["a b", "c d", "e"]);
}

#[test]
fn repeated_spans_reconstruct_the_text() {
    let seps = SeparatorSet::default();
    for text in SAMPLES {
        let mut position = 0;
        let mut rebuilt = String::new();
        while position < text.len() {
            let span = next_span(text, position, &seps).unwrap();
            assert_eq!(span.start, position);
            assert!(!span.text.is_empty());
            rebuilt.push_str(span.text);
            position = span.end();
        }
        assert_eq!(&rebuilt, text);
    }
}

#[test]
fn spans_are_uniform_and_alternate() {
    let seps = SeparatorSet::default();
    for text in SAMPLES {
        let all: Vec<Span<'_>> = spans(text, &seps).collect();
        for span in &all {
            let expected = span.kind == SpanKind::Separator;
            assert!(
                span.text.chars().all(|c| seps.contains(c) == expected),
                "mixed span {:?} in {:?}",
                span.text,
                text
            );
        }
        for pair in all.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind, "adjacent spans in {text:?}");
        }
    }
}

#[test]
fn empty_line_has_no_spans() {
    let seps = SeparatorSet::default();
    assert_eq!(spans("", &seps).count(), 0);
}

#[test]
fn multibyte_words_are_kept_whole() {
    let seps = SeparatorSet::default();
    let collected: Vec<&str> = words("naïve café, déjà-vu", &seps).collect();
    assert_eq!(collected, vec!["naïve", "café", "déjà", "vu"]);
}
