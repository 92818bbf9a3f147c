//! Behaviour-driven tests for registration and dispatch.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;

use crate::commands::Command;
use crate::error::{CommandError, DispatchError, RegistryError};
use crate::registry::{NameCommandTable, register_name_commands};
use crate::replies::NameReply;
use crate::rpc::RawCommand;

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    table: NameCommandTable,
    registration: Option<Result<(), RegistryError>>,
    parsed: Option<Result<Command, DispatchError>>,
    reply: Option<Result<NameReply, DispatchError>>,
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_json(text: &str) -> Value {
    serde_json::from_str(text.trim_matches('\'')).expect("valid JSON in feature file")
}

fn parsed_command(world: &TestWorld) -> &Command {
    world
        .parsed
        .as_ref()
        .expect("no request parsed")
        .as_ref()
        .expect("expected a parsed command")
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("an empty command table")]
fn given_empty_table(world: &mut TestWorld) {
    world.table = NameCommandTable::new();
}

#[given("a table with the name commands registered")]
fn given_registered_table(world: &mut TestWorld) {
    register_name_commands(&mut world.table).expect("initial registration");
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the name commands are registered")]
fn when_registered(world: &mut TestWorld) {
    world.registration = Some(register_name_commands(&mut world.table));
}

#[when("the request {request} is parsed")]
fn when_request_parsed(world: &mut TestWorld, request: String) {
    let bytes = request.trim_matches('\'').as_bytes().to_vec();
    let result = RawCommand::from_slice(&bytes)
        .map_err(DispatchError::from)
        .and_then(|raw| world.table.parse(&raw));
    world.parsed = Some(result);
}

#[when("the {method} reply {payload} is decoded")]
fn when_reply_decoded(world: &mut TestWorld, method: String, payload: String) {
    let method_name = method.trim_matches('"');
    let bytes = payload.trim_matches('\'').as_bytes().to_vec();
    world.reply = Some(world.table.decode_reply(method_name, &bytes));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("registration succeeds")]
fn then_registration_succeeds(world: &mut TestWorld) {
    let outcome = world.registration.as_ref().expect("registration attempted");
    assert!(outcome.is_ok(), "registration failed: {outcome:?}");
}

#[then("{count} methods are bound")]
fn then_methods_bound(world: &mut TestWorld, count: usize) {
    assert_eq!(world.table.len(), count);
}

#[then("registration fails with a duplicate for {name}")]
fn then_registration_duplicate(world: &mut TestWorld, name: String) {
    let expected = name.trim_matches('"');
    let outcome = world.registration.as_ref().expect("registration attempted");
    assert!(
        matches!(outcome, Err(RegistryError::Duplicate { name: actual }) if actual == expected),
        "expected duplicate for '{expected}', got {outcome:?}"
    );
}

#[then("the parsed command is {method}")]
fn then_parsed_method(world: &mut TestWorld, method: String) {
    assert_eq!(parsed_command(world).method(), method.trim_matches('"'));
}

#[then("the parsed command re-encodes to params {params}")]
fn then_parsed_params(world: &mut TestWorld, params: String) {
    let expected = parse_json(&params);
    assert_eq!(Value::Array(parsed_command(world).params()), expected);
}

#[then("dispatch fails with {kind}")]
fn then_dispatch_fails(world: &mut TestWorld, kind: String) {
    let err = world
        .parsed
        .as_ref()
        .expect("no request parsed")
        .as_ref()
        .expect_err("expected a dispatch failure");
    match kind.trim_matches('"') {
        "arity" => assert!(
            matches!(err, DispatchError::Command(CommandError::Arity { .. })),
            "expected Arity, got: {err}"
        ),
        "type_mismatch" => assert!(
            matches!(err, DispatchError::Command(CommandError::TypeMismatch { .. })),
            "expected TypeMismatch, got: {err}"
        ),
        "unknown_method" => assert!(
            matches!(err, DispatchError::Registry(RegistryError::UnknownMethod { .. })),
            "expected UnknownMethod, got: {err}"
        ),
        other => panic!(
            "unsupported error kind: '{other}' (supported: arity, type_mismatch, unknown_method)"
        ),
    }
}

#[then("the decoded reply is {expected}")]
fn then_decoded_reply(world: &mut TestWorld, expected: String) {
    let reply = world
        .reply
        .as_ref()
        .expect("no reply decoded")
        .as_ref()
        .expect("expected a decoded reply");
    let encoded = serde_json::to_value(reply).expect("encode reply");
    assert_eq!(encoded, parse_json(&expected));
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/name_commands.feature",
    name = "Registering the name commands binds every method"
)]
fn registration_binds_every_method(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/name_commands.feature",
    name = "Registering the name commands twice is rejected"
)]
fn registration_twice_is_rejected(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/name_commands.feature",
    name = "A name_update request is parsed and re-encoded"
)]
fn name_update_round_trip(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/name_commands.feature",
    name = "A name_filter request without parameters stays empty"
)]
fn name_filter_without_parameters(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/name_commands.feature",
    name = "Too many parameters are rejected"
)]
fn too_many_parameters(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/name_commands.feature",
    name = "A number where a name is expected is rejected"
)]
fn number_for_name(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/name_commands.feature",
    name = "An unregistered method is rejected"
)]
fn unregistered_method(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/name_commands.feature",
    name = "A name_new reply is decoded"
)]
fn name_new_reply(world: TestWorld) {
    let _ = world;
}
