//! Crate-level integration and BDD tests.

use serde_json::json;

use crate::commands::{Command, FirstUpdateName, NameCommand};
use crate::registry::name_command_table;
use crate::rpc::RawCommand;

mod behaviour;

#[test]
fn request_bytes_survive_dispatch_and_re_encoding() {
    let table = name_command_table().expect("registration succeeds");
    let original = FirstUpdateName::new(json!("abc"), "d/example", "salt", r#"{"ip":"1.2.3.4"}"#)
        .with_to_address("NAddr");
    let bytes = original.to_json().expect("encode");

    let raw = RawCommand::from_slice(&bytes).expect("raw");
    let command = table.parse(&raw).expect("dispatch");
    assert_eq!(command, Command::FirstUpdate(original.clone()));
    assert_eq!(command.to_json().expect("re-encode"), bytes);
}
