mod common;

use common::{sample, Other, Sample};
use kb_columns::{text, CodecError, ColumnOrdering, Delimiter, Orderings, Row, TextOptions};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;
use std::io::Cursor;

#[test]
fn subset_ordering_leaves_other_columns_na() {
    let mut columns = Sample::columns().clone();
    columns.set_required(&["value"], false).expect("known column");
    let input = ColumnOrdering::for_input(&columns, &["name", "id"]).expect("input ordering");

    let row: Sample = text::decode_line("abc 7", &input).expect("decode");
    assert_eq!(row, Sample::new(7, "abc", Sample::VALUE_NA));
}

#[test]
fn decode_errors_name_the_table_and_input() {
    let orderings = Orderings::for_row::<Sample>();

    match text::decode_line::<Sample>("7 abc", orderings.input()) {
        Err(CodecError::MalformedLine {
            table,
            expected,
            found,
            ..
        }) => {
            assert_eq!((table.as_str(), expected, found), ("sample", 3, 2));
        }
        other => panic!("expected MalformedLine, got {other:?}"),
    }

    match text::decode_line::<Sample>("seven abc 1.5", orderings.input()) {
        Err(CodecError::FieldParseError { field, raw, .. }) => {
            assert_eq!((field.as_str(), raw.as_str()), ("id", "seven"));
        }
        other => panic!("expected FieldParseError, got {other:?}"),
    }

    let other = Orderings::for_row::<Other>();
    assert!(matches!(
        text::decode_line::<Sample>("7 abc 1.5", other.input()),
        Err(CodecError::OrderingMismatch { .. })
    ));
    assert!(matches!(
        text::encode_line(&sample(), other.output()),
        Err(CodecError::OrderingMismatch { .. })
    ));
}

#[test]
fn decode_does_not_apply_setter_limits() {
    let orderings = Orderings::for_row::<Sample>();
    let row: Sample =
        text::decode_line("1000000000 abcdefghijk 0", orderings.input()).expect("decode");
    assert_eq!(row.id(), 1_000_000_000);
    assert_eq!(row.name(), "abcdefghijk");
}

#[test]
fn text_with_spaces_and_empty_text_survive() {
    let orderings = Orderings::for_row::<Sample>();
    for (row, line) in [
        (Sample::new(1, "a b", 0.25), r#"1 "a b" 0.25"#),
        (Sample::new(2, "", -1.0), "2 null -1.00"),
    ] {
        let encoded = text::encode_line(&row, orderings.output()).expect("encode");
        assert_eq!(encoded, line);
        let decoded: Sample = text::decode_line(&encoded, orderings.input()).expect("decode");
        assert_eq!(decoded, row);
    }
}

#[test]
fn header_overrides_input_order_for_one_read() {
    let input = "#name, id value\nabc 7 1.50\n\n# comment\n  xyz 8 2.00  \n";
    let mut orderings = Orderings::for_row::<Sample>();
    let before = orderings.clone();

    let rows: Vec<Sample> = text::read_all::<Sample, _>(Cursor::new(input), &mut orderings)
        .expect("read with header");
    assert_eq!(rows, vec![sample(), Sample::new(8, "xyz", 2.0)]);
    assert_eq!(orderings, before);
}

#[test]
fn failed_read_still_restores_orderings() {
    let mut orderings = Orderings::for_row::<Sample>();
    let before = orderings.clone();

    let input = Cursor::new("#value name id\n1.5 abc 7\nbad abc 7\n");
    let result: Result<Vec<Sample>, _> = text::read_all::<Sample, _>(input, &mut orderings);
    assert!(matches!(result, Err(CodecError::FieldParseError { .. })));
    assert_eq!(orderings, before);

    let result: Result<Vec<Sample>, _> =
        text::read_all::<Sample, _>(Cursor::new("#id name bogus\n"), &mut orderings);
    assert!(matches!(result, Err(CodecError::InvalidColumnSet { .. })));
    assert_eq!(orderings, before);
}

#[test]
fn read_into_a_set_drops_duplicates() {
    let input = Cursor::new("7 abc 1.5\n7 abc 1.50\n8 abc 1.5\n");
    let rows: HashSet<Sample> = text::read_all_canonical::<Sample, _>(input).expect("read");
    assert_eq!(rows.len(), 2);
    assert!(rows.contains(&sample()));
}

#[test]
fn write_all_emits_header_then_rows() {
    let orderings = Orderings::for_row::<Sample>();
    let rows = vec![sample(), Sample::new(8, "xyz", 2.0)];
    let mut out = Vec::new();
    text::write_all(&mut out, &rows, orderings.output()).expect("write");
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "#id name value\n7 abc 1.50\n8 xyz 2.00\n"
    );
}

#[test]
fn file_round_trip_with_reordered_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sample.txt");
    let rows = vec![sample(), Sample::new(8, "two words", -3.5)];

    let output = ColumnOrdering::for_output(Sample::columns(), &["value", "name", "id"])
        .expect("output ordering");
    text::write_file(&path, &rows, &output).expect("write file");

    let contents = std::fs::read_to_string(&path).expect("read back");
    assert!(contents.starts_with("#value name id\n1.50 abc 7\n"));

    let mut orderings = Orderings::for_row::<Sample>();
    let read: Vec<Sample> =
        text::read_file::<Sample, _>(&path, &mut orderings).expect("read file");
    assert_eq!(read, rows);
}

#[test]
fn text_that_looks_like_a_comment_is_quoted() {
    let output = ColumnOrdering::for_output(Sample::columns(), &["name", "id", "value"])
        .expect("output ordering");
    let rows = vec![Sample::new(1, "#a", 1.0), Sample::new(2, "b", 2.0)];
    let mut out = Vec::new();
    text::write_all(&mut out, &rows, &output).expect("write");
    assert_eq!(
        String::from_utf8(out.clone()).expect("utf8"),
        "#name id value\n\"#a\" 1 1.00\nb 2 2.00\n"
    );

    let mut orderings = Orderings::for_row::<Sample>();
    let read: Vec<Sample> =
        text::read_all::<Sample, _>(Cursor::new(out), &mut orderings).expect("read");
    assert_eq!(read, rows);
}

#[test]
fn literal_null_text_is_not_the_empty_marker() {
    let orderings = Orderings::for_row::<Sample>();
    let row = Sample::new(3, "null", 0.5);
    let line = text::encode_line(&row, orderings.output()).expect("encode");
    assert_eq!(line, r#"3 "null" 0.50"#);
    let decoded: Sample = text::decode_line(&line, orderings.input()).expect("decode");
    assert_eq!(decoded.name(), "null");
}

#[test]
fn unreadable_text_is_refused_on_write() {
    let orderings = Orderings::for_row::<Sample>();
    for name in ["it's \"x\"", "two\nlines"] {
        match text::encode_line(&Sample::new(1, name, 1.0), orderings.output()) {
            Err(CodecError::UnencodableText { table, field, value, .. }) => {
                assert_eq!((table.as_str(), field.as_str()), ("sample", "name"));
                assert_eq!(value, name);
            }
            other => panic!("expected UnencodableText, got {other:?}"),
        }
    }

    let mut out = Vec::new();
    let rows = [sample(), Sample::new(2, "it's \"x\"", 1.0)];
    assert!(text::write_all(&mut out, &rows, orderings.output()).is_err());

    let line = text::encode_line(&Sample::new(1, "it's\"x\"", 1.0), orderings.output())
        .expect("no whitespace, no quotes needed");
    let decoded: Sample = text::decode_line(&line, orderings.input()).expect("decode");
    assert_eq!(decoded.name(), "it's\"x\"");
}

#[test]
fn tab_delimited_lines_keep_spaces_in_text() {
    let options = TextOptions::tab_delimited();
    let orderings = Orderings::for_row::<Sample>();
    let row = Sample::new(4, "two words", 0.25);

    let line = text::encode_line_with(&row, orderings.output(), &options).expect("encode");
    assert_eq!(line, "4\ttwo words\t0.25");
    let decoded: Sample =
        text::decode_line_with(&line, orderings.input(), &options).expect("decode");
    assert_eq!(decoded, row);
    assert_eq!(
        text::header_line_with(orderings.output(), &options),
        "id\tname\tvalue"
    );

    assert!(matches!(
        text::encode_line_with(&Sample::new(5, "a\tb", 0.0), orderings.output(), &options),
        Err(CodecError::UnencodableText { .. })
    ));
}

#[test]
fn tab_delimited_file_with_header() {
    let options = TextOptions {
        delimiter: "tab".parse().expect("delimiter names"),
    };
    let input = "#name\tid\tvalue\nan old remark\t7\t1.50\n\n  x y \t8\t2.00\n";
    let mut orderings = Orderings::for_row::<Sample>();
    let before = orderings.clone();

    let rows: Vec<Sample> =
        text::read_all_with::<Sample, _>(Cursor::new(input), &mut orderings, &options)
            .expect("read");
    assert_eq!(
        rows,
        vec![Sample::new(7, "an old remark", 1.5), Sample::new(8, "x y", 2.0)]
    );
    assert_eq!(orderings, before);

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sample.tsv");
    text::write_file_with(&path, &rows, orderings.output(), &options).expect("write file");
    assert_eq!(
        std::fs::read_to_string(&path).expect("read back"),
        "#id\tname\tvalue\n7\tan old remark\t1.50\n8\tx y\t2.00\n"
    );
    let read: Vec<Sample> =
        text::read_file_with::<Sample, _>(&path, &mut orderings, &options).expect("read file");
    assert_eq!(read, rows);
}

#[test]
fn text_options_deserialize_with_defaults() {
    let options: TextOptions =
        serde_json::from_str(r#"{"delimiter": {"separator": "|"}}"#).expect("parse");
    assert_eq!(options.delimiter, Delimiter::Separator("|".to_string()));
    let options: TextOptions = serde_json::from_str("{}").expect("parse");
    assert_eq!(options, TextOptions::default());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn text_lines_round_trip(
        id in 0i64..1_000_000_000,
        name in "[a-c#,'\" \t]{0,6}|null",
        quarters in -4_000i64..4_000,
    ) {
        let orderings = Orderings::for_row::<Sample>();
        let row = Sample::new(id, name.clone(), quarters as f64 / 4.0);
        match text::encode_line(&row, orderings.output()) {
            Ok(line) => {
                let decoded: Sample = text::decode_line(&line, orderings.input()).unwrap();
                prop_assert_eq!(decoded, row);
            }
            Err(CodecError::UnencodableText { .. }) => {
                prop_assert!(name.contains('"') && name.contains('\''));
            }
            Err(err) => prop_assert!(false, "unexpected error: {}", err),
        }
    }

    #[test]
    fn written_files_read_back_whole(
        names in proptest::collection::vec("[a-c# ]{0,4}", 1..6),
        tab in any::<bool>(),
    ) {
        let options = if tab { TextOptions::tab_delimited() } else { TextOptions::default() };
        let rows: Vec<Sample> = names
            .iter()
            .enumerate()
            .map(|(index, name)| Sample::new(index as i64, name.trim(), 0.5))
            .collect();
        // A separator line never quotes, so `#` text cannot lead it.
        let order = if tab { ["id", "name", "value"] } else { ["name", "id", "value"] };
        let output = ColumnOrdering::for_output(Sample::columns(), &order).unwrap();
        let mut out = Vec::new();
        text::write_all_with(&mut out, &rows, &output, &options).unwrap();

        let mut orderings = Orderings::for_row::<Sample>();
        let read: Vec<Sample> =
            text::read_all_with::<Sample, _>(Cursor::new(out), &mut orderings, &options).unwrap();
        prop_assert_eq!(read, rows);
    }
}
