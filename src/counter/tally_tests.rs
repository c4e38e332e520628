use super::*;

#[test]
fn tally_default_is_zero() {
    let tally = Tally::default();
    assert_eq!(tally, Tally::new());
}

#[test]
fn record_code_changes_nothing() {
    let mut tally = Tally::new();
    tally.record(LineKind::Code);
    assert_eq!(tally, Tally::new());
}

#[test]
fn record_single_line_comment() {
    let mut tally = Tally::new();
    tally.record(LineKind::SingleLineComment);

    assert_eq!(tally.comments, 1);
    assert_eq!(tally.single_line_comments, 1);
    assert_eq!(tally.comments_in_blocks, 0);
}

#[test]
fn record_block_comment_line() {
    let mut tally = Tally::new();
    tally.record(LineKind::BlockCommentLine);
    tally.record(LineKind::BlockCommentLine);

    assert_eq!(tally.comments, 2);
    assert_eq!(tally.single_line_comments, 0);
    assert_eq!(tally.comments_in_blocks, 2);
    assert_eq!(tally.blocks, 0);
}

#[test]
fn add_assign_sums_every_counter() {
    let mut total = Tally {
        lines: 10,
        comments: 4,
        single_line_comments: 1,
        comments_in_blocks: 3,
        blocks: 1,
        todos: 2,
    };
    total += Tally {
        lines: 5,
        comments: 2,
        single_line_comments: 2,
        comments_in_blocks: 0,
        blocks: 0,
        todos: 1,
    };

    assert_eq!(
        total,
        Tally {
            lines: 15,
            comments: 6,
            single_line_comments: 3,
            comments_in_blocks: 3,
            blocks: 1,
            todos: 3,
        }
    );
}

#[test]
fn sum_of_empty_iterator_is_zero() {
    let total: Tally = std::iter::empty().sum();
    assert_eq!(total, Tally::new());
}

#[test]
fn tally_serializes_with_snake_case_fields() {
    let json = serde_json::to_string(&Tally::new()).unwrap();
    assert!(json.contains("\"single_line_comments\":0"));
    assert!(json.contains("\"comments_in_blocks\":0"));
}
