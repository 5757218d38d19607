//! Edge case tests for chatchunk.
//!
//! Malformed dumps, odd timestamps, unusual reply shapes and partition limits.

use serde_json::json;

use chatchunk::config::{ChunkConfig, FormatOptions, SplitMode};
use chatchunk::core::{Chunk, Formatter, Repository, Topic, partition};
use chatchunk::message::{Message, parse_timestamp};
use chatchunk::parsing::RawExport;

fn msg(id: i64, ts: &str, author: &str, text: &str) -> Message {
    Message::new(id, parse_timestamp(ts).unwrap(), author, text)
}

fn load_str(content: &str) -> chatchunk::Result<Repository> {
    Repository::load(RawExport::from_str(content)?)
}

// =========================================================================
// Malformed dumps
// =========================================================================

#[test]
fn test_non_integer_topic_key() {
    let err = load_str(r#"{"messages": {"general": []}}"#).unwrap_err();
    assert!(err.is_malformed_input());
    assert!(err.to_string().contains("general"));
}

#[test]
fn test_topic_value_not_a_list() {
    let err = load_str(r#"{"messages": {"1": {"id": 1}}}"#).unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn test_record_wrong_arity() {
    let err = load_str(r#"{"messages": {"1": [[1, "2024-01-01 00:00:00", "x", "A"]]}}"#)
        .unwrap_err();
    assert!(err.is_malformed_input());
    assert!(err.to_string().contains("7 fields"));
}

#[test]
fn test_record_not_an_array() {
    let err = load_str(r#"{"messages": {"1": ["just text"]}}"#).unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn test_record_with_string_id() {
    let err = load_str(
        r#"{"messages": {"1": [["1", "2024-01-01 00:00:00", "x", "A", null, null, null]]}}"#,
    )
    .unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn test_record_with_numeric_text() {
    let err = load_str(
        r#"{"messages": {"1": [[1, "2024-01-01 00:00:00", 42, "A", null, null, null]]}}"#,
    )
    .unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn test_record_with_bad_forward_timestamp() {
    let err = load_str(
        r#"{"messages": {"1": [[1, "2024-01-01 00:00:00", "x", "A", "soon", "Src", null]]}}"#,
    )
    .unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn test_duplicate_id_within_topic() {
    let raw = RawExport::default().with_topic(
        1,
        vec![
            json!([1, "2024-01-01 00:00:00", "a", "A", null, null, null]),
            json!([1, "2024-01-01 00:01:00", "b", "B", null, null, null]),
        ],
    );
    let err = Repository::load(raw).unwrap_err();
    assert!(err.is_malformed_input());
    assert!(err.to_string().contains("record #1"));
}

#[test]
fn test_missing_messages_key_is_parse_error() {
    let err = RawExport::from_str(r#"{"topics": []}"#).unwrap_err();
    assert!(err.is_parse());
}

// =========================================================================
// Unusual but valid dumps
// =========================================================================

#[test]
fn test_empty_dump() {
    let repo = load_str(r#"{"messages": {}}"#).unwrap();
    assert!(repo.is_empty());
    assert!(repo.gather(&[]).is_empty());
    assert!(partition(&repo.gather(&[]), &ChunkConfig::default()).unwrap().is_empty());
}

#[test]
fn test_negative_and_padded_topic_keys() {
    let repo = load_str(
        r#"{"messages": {
            " 3 ": [[1, "2024-01-01 00:00:00", "x", "A", null, null, null]],
            "-1":  [[2, "2024-01-01 00:00:00", "y", "B", null, null, null]]
        }}"#,
    )
    .unwrap();
    assert_eq!(repo.topic_ids(), vec![-1, 3]);
}

#[test]
fn test_iso_t_separator_and_fractional_seconds() {
    let repo = load_str(
        r#"{"messages": {"1": [
            [1, "2024-01-01T08:00:00", "x", "A", null, null, null],
            [2, "2024-01-01 08:00:01.250", "y", "B", null, null, null]
        ]}}"#,
    )
    .unwrap();
    assert_eq!(repo.lookup_by_id(1).unwrap().timestamp_display(), "2024-01-01 08:00:00");
    assert_eq!(repo.lookup_by_id(2).unwrap().timestamp_display(), "2024-01-01 08:00:01");
}

#[test]
fn test_unicode_content_roundtrips_through_repository() {
    let text = "Привет 👋 مرحبا 你好\n\nsecond paragraph";
    let raw = RawExport::default()
        .with_topic(1, vec![json!([1, "2024-01-01 00:00:00", text, "Иван", null, null, null])]);
    let repo = Repository::load(raw).unwrap();
    assert_eq!(repo.lookup_by_id(1).unwrap().text(), text);
}

// =========================================================================
// Replies
// =========================================================================

#[test]
fn test_reply_to_self() {
    let repo = Repository::from_topics([Topic::new(
        1,
        vec![msg(1, "2024-01-01 00:00:00", "A", "loop").with_reply_to(1)],
    )])
    .unwrap();
    let out = Formatter::new(&repo)
        .format_message(repo.lookup_by_id(1).unwrap(), &FormatOptions::default());
    assert_eq!(out, "[2024-01-01 00:00:00 from A]\n> [2024-01-01 00:00:00 from A]\n> loop\nloop\n");
}

#[test]
fn test_reply_target_outside_gathered_topics_still_resolves() {
    let repo = Repository::from_topics([
        Topic::new(1, vec![msg(1, "2024-01-01 00:00:00", "A", "origin")]),
        Topic::new(2, vec![msg(2, "2024-01-01 00:01:00", "B", "answer").with_reply_to(1)]),
    ])
    .unwrap();

    let only_topic_2 = repo.gather(&[2]);
    let out = Formatter::new(&repo).format_all(&only_topic_2, &FormatOptions::default());
    assert!(out.contains("> origin\n"));
}

#[test]
fn test_quote_keeps_blank_lines() {
    let repo = Repository::from_topics([Topic::new(
        1,
        vec![
            msg(1, "2024-01-01 00:00:00", "A", "one\n\nthree"),
            msg(2, "2024-01-01 00:01:00", "B", "ok").with_reply_to(1),
        ],
    )])
    .unwrap();
    let out = Formatter::new(&repo)
        .format_message(repo.lookup_by_id(2).unwrap(), &FormatOptions::default());
    assert!(out.contains("> one\n> \n> three\n"));
}

#[test]
fn test_quote_of_lone_carriage_return_text() {
    let repo = Repository::from_topics([Topic::new(
        1,
        vec![
            msg(1, "2024-01-01 00:00:00", "A", "one\rtwo"),
            msg(2, "2024-01-01 00:01:00", "B", ""),
            msg(3, "2024-01-01 00:02:00", "C", "re").with_reply_to(1),
            msg(4, "2024-01-01 00:03:00", "D", "re").with_reply_to(2),
        ],
    )])
    .unwrap();
    let formatter = Formatter::new(&repo);
    let opts = FormatOptions::default();

    let out = formatter.format_message(repo.lookup_by_id(3).unwrap(), &opts);
    assert!(out.contains("> one\n> two\n"));
    assert!(!out.contains('\r'));

    let out = formatter.format_message(repo.lookup_by_id(4).unwrap(), &opts);
    assert_eq!(out, "[2024-01-01 00:03:00 from D]\n> [2024-01-01 00:01:00 from B]\n> \nre\n");
}

#[test]
fn test_forward_without_source_has_no_annotation() {
    let repo = Repository::default();
    let mut m = msg(1, "2024-01-01 00:00:00", "A", "x");
    m.forward_timestamp = Some(parse_timestamp("2023-12-31 00:00:00").unwrap());
    let out = Formatter::new(&repo).format_message(&m, &FormatOptions::default());
    assert_eq!(out, "[2024-01-01 00:00:00 from A]\nx\n");
}

// =========================================================================
// Partition limits
// =========================================================================

fn daily(count: usize) -> Vec<Message> {
    // One message per day starting Monday 2024-01-01
    (0..count)
        .map(|i| {
            let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                + chrono::Duration::days(i as i64);
            Message::new(i as i64, day.and_hms_opt(12, 0, 0).unwrap(), "A", "x")
        })
        .collect()
}

#[test]
fn test_count_mode_one_over_max() {
    let messages = daily(201);
    let chunks = partition(&messages, &ChunkConfig::default()).unwrap();
    let sizes: Vec<_> = chunks.iter().map(Chunk::len).collect();
    assert_eq!(sizes, vec![101, 100]);
}

#[test]
fn test_count_mode_exactly_max_is_one_chunk() {
    let messages = daily(200);
    let chunks = partition(&messages, &ChunkConfig::default()).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].title(), "");
}

#[test]
fn test_week_mode_min_zero_gives_one_chunk_per_week() {
    let messages = daily(21);
    let config = ChunkConfig::new()
        .with_mode(SplitMode::Week)
        .with_max_chunk_size(5)
        .with_min_chunk_size(0);
    let chunks = partition(&messages, &config).unwrap();
    let titles: Vec<_> = chunks.iter().map(Chunk::title).collect();
    assert_eq!(titles, vec!["W1", "W2", "W3"]);
    assert!(chunks.iter().all(|c| c.len() == 7));
}

#[test]
fn test_week_mode_unsorted_input_is_grouped_by_week() {
    let mut messages = daily(14);
    messages.reverse();
    let config = ChunkConfig::new()
        .with_mode(SplitMode::Week)
        .with_max_chunk_size(5)
        .with_min_chunk_size(1);
    let chunks = partition(&messages, &config).unwrap();

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].title(), "W1");
    // Within a week the input order is kept
    let ids: Vec<_> = chunks[0].messages().iter().map(Message::id).collect();
    assert_eq!(ids, vec![6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_week_mode_year_boundary_orders_by_iso_year() {
    let messages = vec![
        msg(1, "2024-12-23 10:00:00", "A", "W52 of 2024"),
        msg(2, "2024-12-31 10:00:00", "A", "W1 of 2025"),
        msg(3, "2025-01-07 10:00:00", "A", "W2 of 2025"),
    ];
    let config = ChunkConfig::new()
        .with_mode(SplitMode::Week)
        .with_max_chunk_size(1)
        .with_min_chunk_size(1);
    let chunks = partition(&messages, &config).unwrap();
    let titles: Vec<_> = chunks.iter().map(Chunk::title).collect();
    assert_eq!(titles, vec!["W52", "W1", "W2"]);
}

#[test]
fn test_split_mode_parse_errors() {
    let err = "fortnight".parse::<SplitMode>().unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains("fortnight"));
}
