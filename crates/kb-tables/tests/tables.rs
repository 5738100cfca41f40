use kb_columns::{binary, text, CodecError, FieldKind, Limit, Orderings, Row};
use kb_tables::{
    Amplitude, Arrival, Assoc, Origerr, Origin, Remark, Sensor, Stamag, Wfdisc, SCHEMA_NAME,
};
use pretty_assertions::assert_eq;

/// Worst-case binary size implied by the column declarations.
fn declared_bytes<R: Row>() -> usize {
    R::columns()
        .iter()
        .map(|column| match (column.kind(), column.limit()) {
            (FieldKind::Text, Limit::MaxLen(len)) => 4 + len,
            (FieldKind::Text, _) => panic!("{} has unbounded text", column.name()),
            _ => 8,
        })
        .sum()
}

fn check_shape<R: Row>(table: &str, columns: usize, max_bytes: usize) {
    assert_eq!(R::table_name(), table);
    assert_eq!(R::columns().len(), columns, "{table}");
    assert_eq!(R::max_bytes(), max_bytes, "{table}");
    assert_eq!(declared_bytes::<R>(), max_bytes, "{table}");
}

#[test]
fn table_shapes() {
    assert_eq!(SCHEMA_NAME, "NNSA KB Core");
    check_shape::<Amplitude>("amplitude", 16, 157);
    check_shape::<Arrival>("arrival", 25, 215);
    check_shape::<Assoc>("assoc", 18, 152);
    check_shape::<Origerr>("origerr", 19, 152);
    check_shape::<Origin>("origin", 25, 219);
    check_shape::<Remark>("remark", 3, 100);
    check_shape::<Sensor>("sensor", 11, 91);
    check_shape::<Stamag>("stamag", 16, 160);
    check_shape::<Wfdisc>("wfdisc", 19, 240);
}

#[test]
fn keys() {
    assert_eq!(Remark::schema().primary_key(), vec!["commid", "lineno"]);
    assert_eq!(
        Amplitude::schema().unique_key(),
        vec!["arid", "chan", "per", "amptime", "time", "duration", "deltaf", "amptype", "auth"]
    );
    assert_eq!(
        Arrival::schema().unique_key(),
        vec!["sta", "time", "chan", "iphase", "auth"]
    );
    assert_eq!(Sensor::schema().primary_key(), vec!["sta", "chan", "time"]);
    assert_eq!(
        Stamag::schema().primary_key(),
        vec!["magid", "ampid", "sta", "arid", "phase", "auth"]
    );
    assert_eq!(Wfdisc::schema().unique_key(), vec!["sta", "chan", "time"]);
    assert!(Assoc::schema().unique_key().is_empty());
}

#[test]
fn na_defaults() {
    let arrival = Arrival::default();
    assert_eq!(arrival.sta(), "-");
    assert_eq!(arrival.time(), -9_999_999_999.999);
    assert_eq!(arrival.arid(), i64::MIN);
    assert_eq!(arrival.logat(), -999.0);

    let wfdisc = Wfdisc::default();
    assert!(wfdisc.time().is_nan());
    assert!(wfdisc.samprate().is_nan());
    assert_eq!(wfdisc.endtime(), 9_999_999_999.999);
    assert_eq!(wfdisc.dir(), "");

    let sensor = Sensor::default();
    assert_eq!(sensor.calratio(), 1.0);
    assert!(sensor.tshift().is_nan());

    assert_eq!(Amplitude::default().units(), Amplitude::UNITS_NA);
    assert_eq!(Origerr::default().sxx(), Origerr::SXX_NA);
    assert_eq!(Stamag::default().magtype(), "");
}

#[test]
fn setter_bounds() {
    let mut origin = Origin::default();
    origin.set_nass(9_999).expect("below ceiling");
    assert!(matches!(
        origin.set_nass(10_000),
        Err(CodecError::OutOfRange { .. })
    ));
    assert_eq!(origin.nass(), 9_999);
    assert!(origin.set_etype("too long").is_err());

    let mut wfdisc = Wfdisc::default();
    wfdisc.set_foff(9_999_999_999).expect("below ceiling");
    assert!(wfdisc.set_foff(10_000_000_000).is_err());
    assert!(wfdisc.set_nsamp(100_000_000).is_err());

    let mut arrival = Arrival::default();
    arrival.set_arid(5_000_000_000).expect("arid is unbounded");
    let mut origerr = Origerr::default();
    origerr.set_orid(i64::MAX).expect("orid is unbounded");

    let mut remark = Remark::default();
    let err = remark.set_remark("x".repeat(81)).expect_err("too long");
    assert_eq!(
        err.to_string(),
        "remark: remark=".to_string() + &"x".repeat(81) + " but cannot be longer than 80 characters"
    );
}

fn sample_origin(orid: i64) -> Origin {
    let mut origin = Origin::default();
    origin
        .set_lat(35.5)
        .and_then(|o| o.set_lon(-106.25))
        .and_then(|o| o.set_depth(10.0))
        .and_then(|o| o.set_time(1_262_304_000.5))
        .and_then(|o| o.set_orid(orid))
        .and_then(|o| o.set_ndef(12))
        .and_then(|o| o.set_mb(4.5))
        .and_then(|o| o.set_algorithm("locsat"))
        .and_then(|o| o.set_auth("analyst one"))
        .expect("valid origin");
    origin
}

#[test]
fn origin_text_line() {
    let origin = sample_origin(42);
    assert_eq!(
        origin.to_string(),
        "35.500000 -106.250000 10.0000 1262304000.50000 42 -1 -1 -1 12 -1 -1 -1 - -999.0000 - \
         4.50 -1 -999.00 -1 -999.00 -1 locsat \"analyst one\" -1"
    );

    let orderings = Orderings::for_row::<Origin>();
    let decoded: Origin =
        text::decode_line(&origin.to_string(), orderings.input()).expect("decode");
    assert_eq!(decoded, origin);
}

#[test]
fn remark_text_and_binary() {
    let remark = Remark::new(7, 1, "it's a comment");
    assert_eq!(remark.to_string(), "7 1 \"it's a comment\"");

    let bytes = binary::encode(&remark).expect("encode");
    assert_eq!(bytes.len(), 8 + 8 + 4 + 14);
    let decoded: Remark = binary::decode(&mut bytes.as_slice()).expect("decode");
    assert_eq!(decoded, remark);
}

fn binary_round_trip<R: Row + std::fmt::Debug + PartialEq>() {
    let row = R::default();
    let bytes = binary::encode(&row).expect("encode");
    assert!(bytes.len() <= R::max_bytes(), "{}", R::table_name());
    let decoded: R = binary::decode(&mut bytes.as_slice()).expect("decode");
    assert_eq!(decoded, row);
}

#[test]
fn default_rows_fit_their_byte_budget() {
    binary_round_trip::<Amplitude>();
    binary_round_trip::<Arrival>();
    binary_round_trip::<Assoc>();
    binary_round_trip::<Origerr>();
    binary_round_trip::<Origin>();
    binary_round_trip::<Remark>();
    binary_round_trip::<Sensor>();
    binary_round_trip::<Stamag>();
    binary_round_trip::<Wfdisc>();
}

#[test]
fn default_rows_survive_text() {
    fn check<R: Row + std::fmt::Debug + PartialEq>() {
        let orderings = Orderings::for_row::<R>();
        let row = R::default();
        let line = text::encode_line(&row, orderings.output()).expect("encode");
        let decoded: R = text::decode_line(&line, orderings.input()).expect("decode");
        assert_eq!(decoded, row, "{line}");
    }
    check::<Amplitude>();
    check::<Arrival>();
    check::<Assoc>();
    check::<Origerr>();
    check::<Origin>();
    check::<Remark>();
    check::<Sensor>();
    check::<Stamag>();
    check::<Wfdisc>();
}

#[test]
fn arrival_keys() {
    let mut a = Arrival::default();
    a.set_sta("ANMO")
        .and_then(|a| a.set_time(1_262_304_123.25))
        .and_then(|a| a.set_arid(1))
        .and_then(|a| a.set_chan("BHZ"))
        .and_then(|a| a.set_iphase("P"))
        .expect("valid arrival");
    let mut b = a.clone();
    b.set_arid(2).expect("valid arid");
    b.set_snr(12.5).expect("valid snr");

    assert!(!a.equal_primary_key(&b));
    assert!(a.equal_unique_key(&b));
    assert_ne!(a, b);
    assert!(!a.equal_unique_key(&Origin::default()));
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("origin.txt");
    let rows = vec![sample_origin(1), sample_origin(2)];
    let mut orderings = Orderings::for_row::<Origin>();
    text::write_file(&path, &rows, orderings.output()).expect("write");
    let read: Vec<Origin> = text::read_file::<Origin, _>(&path, &mut orderings).expect("read");
    assert_eq!(read, rows);
}
