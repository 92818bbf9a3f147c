//! Unit tests for the name command codec.

use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::params::ParamKind;

fn raw(method: &str, params: &[Value]) -> RawCommand {
    match RawCommand::from_values(json!(1), method, params) {
        Ok(raw) => raw,
        Err(error) => panic!("failed to build raw command: {error}"),
    }
}

fn round_trip<C: NameCommand>(command: &C) -> C {
    let bytes = command.to_json().expect("encode");
    C::from_json(&bytes).expect("decode")
}

// ---------------------------------------------------------------------------
// Serialisation
// ---------------------------------------------------------------------------

#[test]
fn name_new_serialises_name() {
    assert_eq!(
        NewName::new(json!(1), "example").params(),
        vec![json!("example")]
    );
}

#[test]
fn name_update_omits_unset_address() {
    assert_eq!(
        UpdateName::new(json!(1), "example", "v1").params(),
        vec![json!("example"), json!("v1")]
    );
    assert_eq!(
        UpdateName::new(json!(1), "example", "v1")
            .with_to_address("NTyZvE")
            .params(),
        vec![json!("example"), json!("v1"), json!("NTyZvE")]
    );
}

#[test]
fn name_firstupdate_orders_value_before_txid() {
    let command = FirstUpdateName::new(json!(1), "d/x", "salt", "{}").with_txid("ab12");
    assert_eq!(
        command.params(),
        vec![json!("d/x"), json!("salt"), json!("{}"), json!("ab12")]
    );
}

#[test]
fn name_filter_without_arguments_is_empty() {
    assert!(FilterNames::new(json!(1)).params().is_empty());
}

#[test]
fn name_filter_pads_defaults_ahead_of_set_field() {
    let command = FilterNames::new(json!(1)).with_offset(20);
    assert_eq!(command.params(), vec![json!(""), json!(0), json!(20)]);
}

#[test]
fn name_list_with_identifier() {
    let command = ListNames::new(json!(1)).with_identifier("d/mine");
    assert_eq!(command.params(), vec![json!("d/mine")]);
    assert!(ListNames::new(json!(1)).params().is_empty());
}

#[test]
fn request_envelope_carries_method_and_id() {
    let request = ShowName::new(json!("req-7"), "d/x").to_request();
    assert_eq!(request.method(), "name_show");
    assert_eq!(request.id(), &json!("req-7"));
    assert_eq!(request.params(), [json!("d/x")].as_slice());
}

#[test]
fn command_enum_serialises_as_request_object() {
    let command = Command::from(NameHistory::new(json!(4), "d/x"));
    let value = serde_json::to_value(&command).expect("encode");
    assert_eq!(
        value,
        json!({"jsonrpc": "1.0", "method": "name_history", "params": ["d/x"], "id": 4})
    );
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn name_update_rejects_six_parameters() {
    let params: Vec<Value> = ["a", "b", "c", "d", "e", "f"].iter().map(|s| json!(s)).collect();
    let err = UpdateName::from_raw(&raw("name_update", &params)).expect_err("too many");
    assert!(matches!(
        err,
        CommandError::Arity {
            method: "name_update",
            min: 2,
            max: 3,
            actual: 6,
        }
    ));
}

#[test]
fn name_show_rejects_number() {
    let err = ShowName::from_raw(&raw("name_show", &[json!(1)])).expect_err("number");
    assert!(matches!(
        err,
        CommandError::TypeMismatch {
            method: "name_show",
            position: 0,
            expected: ParamKind::String,
        }
    ));
}

#[rstest]
#[case::name_new(NewName::METHOD, NewName::ARITY)]
#[case::name_update(UpdateName::METHOD, UpdateName::ARITY)]
#[case::name_firstupdate(FirstUpdateName::METHOD, FirstUpdateName::ARITY)]
#[case::name_show(ShowName::METHOD, ShowName::ARITY)]
#[case::name_history(NameHistory::METHOD, NameHistory::ARITY)]
fn short_arrays_fail_with_arity(#[case] method: &'static str, #[case] arity: Arity) {
    let params: Vec<Value> = (1..arity.required()).map(|_| json!("x")).collect();
    let err = crate::registry::name_command_table()
        .expect("table")
        .parse(&raw(method, &params))
        .expect_err("short array");
    assert_eq!(err.rpc_code(), crate::error::INVALID_PARAMS);
}

#[rstest]
#[case::name_list(ListNames::METHOD, 2)]
#[case::name_scan(ScanNames::METHOD, 3)]
#[case::name_filter(FilterNames::METHOD, 6)]
fn long_arrays_fail_with_arity(#[case] method: &'static str, #[case] len: usize) {
    let params: Vec<Value> = (0..len).map(|_| json!("")).collect();
    let err = crate::registry::name_command_table()
        .expect("table")
        .parse(&raw(method, &params))
        .expect_err("long array");
    assert!(matches!(
        err,
        crate::error::DispatchError::Command(CommandError::Arity { actual, .. }) if actual == len
    ));
}

#[test]
fn name_scan_rejects_string_count() {
    let err = ScanNames::from_raw(&raw("name_scan", &[json!("d/a"), json!("10")]))
        .expect_err("string count");
    assert!(matches!(
        err,
        CommandError::TypeMismatch {
            position: 1,
            expected: ParamKind::Integer,
            ..
        }
    ));
}

#[test]
fn from_raw_rejects_other_method() {
    let err = NewName::from_raw(&raw("name_show", &[json!("d/x")])).expect_err("mismatch");
    assert!(matches!(
        err,
        CommandError::MethodMismatch { expected: "name_new", ref actual } if actual == "name_show"
    ));
}

#[test]
fn from_json_rejects_malformed_bytes() {
    let err = ShowName::from_json(b"{\"method\":").expect_err("truncated");
    assert!(matches!(err, CommandError::MalformedRequest { .. }));
}

#[test]
fn parsing_defaults_missing_optionals() {
    let command = ScanNames::from_raw(&raw("name_scan", &[json!("d/m")])).expect("decode");
    assert_eq!(command.start_name(), "d/m");
    assert_eq!(command.max_returned(), 0);
    assert_eq!(command.id(), &json!(1));
}

#[test]
fn decoding_twice_yields_equal_commands() {
    let bytes = br#"{"method":"name_filter","params":["^d/",100,0,5],"id":"x"}"#;
    let first = FilterNames::from_json(bytes).expect("first");
    let second = FilterNames::from_json(bytes).expect("second");
    assert_eq!(first, second);
    assert_eq!(first.nb(), 5);
    assert_eq!(first.max_age(), 100);
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[rstest]
#[case::new(NewName::new(json!(1), "d/x").into(), 1)]
#[case::update_required(UpdateName::new(json!(2), "d/x", "v").into(), 2)]
#[case::update_to_address(UpdateName::new(json!(2), "d/x", "v").with_to_address("N1").into(), 3)]
#[case::update_empty_value(UpdateName::new(json!(2), "d/x", "").into(), 2)]
#[case::firstupdate_required(FirstUpdateName::new(json!(3), "d/x", "salt", "{}").into(), 3)]
#[case::firstupdate_txid(
    FirstUpdateName::new(json!(3), "d/x", "salt", "{}").with_txid("ab").into(),
    4
)]
#[case::firstupdate_txid_to_address(
    FirstUpdateName::new(json!(3), "d/x", "salt", "{}")
        .with_txid("ab")
        .with_to_address("N1")
        .into(),
    5
)]
#[case::firstupdate_to_address_only(
    FirstUpdateName::new(json!(3), "d/x", "salt", "{}").with_to_address("N1").into(),
    5
)]
#[case::show(ShowName::new(json!("s"), "d/x").into(), 1)]
#[case::list_all(ListNames::new(json!(4)).into(), 0)]
#[case::list_identifier(ListNames::new(json!(4)).with_identifier("d/x").into(), 1)]
#[case::history(NameHistory::new(json!(5), "d/x").into(), 1)]
#[case::scan_defaults(ScanNames::new(json!(null)).into(), 0)]
#[case::scan_start(ScanNames::new(json!(null)).with_start_name("d/a").into(), 1)]
#[case::scan_start_max(
    ScanNames::new(json!(null)).with_start_name("d/a").with_max_returned(500).into(),
    2
)]
#[case::filter_defaults(FilterNames::new(json!(6)).into(), 0)]
#[case::filter_regexp(FilterNames::new(json!(6)).with_regexp("^id/").into(), 1)]
#[case::filter_regexp_max_age(
    FilterNames::new(json!(6)).with_regexp("^id/").with_max_age(36_000).into(),
    2
)]
#[case::filter_through_offset(
    FilterNames::new(json!(6))
        .with_regexp("^id/")
        .with_max_age(36_000)
        .with_offset(10)
        .into(),
    3
)]
#[case::filter_through_nb(
    FilterNames::new(json!(6))
        .with_regexp("^id/")
        .with_max_age(36_000)
        .with_offset(10)
        .with_nb(50)
        .into(),
    4
)]
#[case::filter_all(
    FilterNames::new(json!(6))
        .with_regexp("^id/")
        .with_max_age(36_000)
        .with_offset(10)
        .with_nb(50)
        .with_stat(1)
        .into(),
    5
)]
fn commands_survive_round_trip(#[case] command: Command, #[case] expected_len: usize) {
    let params = command.params();
    assert_eq!(params.len(), expected_len);

    let bytes = command.to_json().expect("encode");
    let table = crate::registry::name_command_table().expect("registration");
    let raw = RawCommand::from_slice(&bytes).expect("request object");
    let decoded = table.parse(&raw).expect("decode");

    assert_eq!(decoded, command);
    assert_eq!(decoded.params(), params);
}

#[test]
fn typed_round_trip_preserves_the_struct() {
    let first_update = FirstUpdateName::new(json!(2), "d/x", "salt", "{}")
        .with_txid("ab")
        .with_to_address("NAddr");
    assert_eq!(round_trip(&first_update), first_update);
}

#[test]
fn reply_decoding_uses_command_reply_type() {
    let reply = NewName::decode_reply(br#"["txid123","randABC"]"#).expect("decode");
    assert_eq!(reply.txid, "txid123");
    assert_eq!(reply.rand, "randABC");
}
