use wer_diff::{align, tokenize, EditOp, OpKind::*, WordErrorRate};

fn rate(reference: &[&str], hypothesis: &[&str]) -> WordErrorRate {
    align(reference, hypothesis)
        .report(reference, hypothesis)
        .unwrap()
        .word_error_rate()
}

#[test]
fn identical_sentences() {
    let words = ["the", "cat", "sat"];
    let alignment = align(&words, &words);
    assert_eq!(alignment.distance, 0);
    assert_eq!(alignment.script.kinds(), vec![Equal, Equal, Equal]);
    let report = alignment.report(&words, &words).unwrap();
    assert_eq!(
        (report.insertions, report.deletions, report.substitutions),
        (0, 0, 0)
    );
    assert_eq!(report.word_error_rate(), WordErrorRate::Defined(0.0));
    assert_eq!(report.word_error_rate().to_string(), "0%");
}

#[test]
fn one_substituted_word() {
    let reference = ["the", "cat", "sat"];
    let hypothesis = ["the", "dog", "sat"];
    let alignment = align(&reference, &hypothesis);
    assert_eq!(alignment.distance, 1);
    assert_eq!(alignment.script.kinds(), vec![Equal, Substitution, Equal]);
    let report = alignment.report(&reference, &hypothesis).unwrap();
    assert_eq!(
        (report.insertions, report.deletions, report.substitutions),
        (0, 0, 1)
    );
    let percent = report.error_rate_percent().unwrap();
    assert!((percent - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(report.word_error_rate().to_string(), "33.33%");
}

#[test]
fn trailing_word_dropped() {
    let reference = ["a", "b", "c"];
    let hypothesis = ["a", "b"];
    let alignment = align(&reference, &hypothesis);
    assert_eq!(alignment.distance, 1);
    assert_eq!(alignment.script.kinds(), vec![Equal, Equal, Deletion]);
    let report = alignment.report(&reference, &hypothesis).unwrap();
    assert_eq!(report.deletions, 1);
    assert_eq!(rate(&reference, &hypothesis).to_string(), "33.33%");
}

#[test]
fn trailing_word_added() {
    let reference = ["a", "b"];
    let hypothesis = ["a", "b", "c"];
    let alignment = align(&reference, &hypothesis);
    assert_eq!(alignment.distance, 1);
    assert_eq!(alignment.script.kinds(), vec![Equal, Equal, Insertion]);
    let report = alignment.report(&reference, &hypothesis).unwrap();
    assert_eq!(report.insertions, 1);
    assert_eq!(rate(&reference, &hypothesis), WordErrorRate::Defined(50.0));
}

#[test]
fn empty_reference() {
    let reference: [&str; 0] = [];
    let hypothesis = ["x"];
    let alignment = align(&reference, &hypothesis);
    assert_eq!(alignment.distance, 1);
    assert_eq!(alignment.script.kinds(), vec![Insertion]);
    assert_eq!(rate(&reference, &hypothesis), WordErrorRate::Undefined);
}

#[test]
fn repeated_word_tie_break() {
    let alignment = align(&["a", "a"], &["a"]);
    assert_eq!(alignment.distance, 1);
    assert_eq!(
        alignment.script.ops(),
        &[
            EditOp::Equal {
                reference: 0,
                hypothesis: 0
            },
            EditOp::Deletion { reference: 1 },
        ]
    );
}

#[test]
fn tokenized_transcripts() {
    let truth = "the quick brown fox jumps over the lazy dog";
    let transcript = "the quick brown fox jumped over a lazy dog today";
    let reference = tokenize(truth);
    let hypothesis = tokenize(transcript);
    let alignment = align(&reference, &hypothesis);
    let report = alignment.report(&reference, &hypothesis).unwrap();
    assert_eq!(report.substitutions, 2);
    assert_eq!(report.insertions, 1);
    assert_eq!(report.deletions, 0);
    assert_eq!(report.word_error_rate().to_string(), "33.33%");
}
