//! Usage text bound to each name command.

/// Help for `name_new`.
pub const NAME_NEW: &str = r#"name_new "name"
Reserve a name by publishing a salted commitment.
Returns [txid, rand]; keep rand for name_firstupdate."#;

/// Help for `name_update`.
pub const NAME_UPDATE: &str = r#"name_update "name" "value" [toaddress]
Update the value of a registered name, optionally transferring it to toaddress."#;

/// Help for `name_firstupdate`.
pub const NAME_FIRSTUPDATE: &str = r#"name_firstupdate "name" "rand" "value" [txid] [toaddress]
Perform a first update after a name_new reservation.
Note that the first update will go into a block 12 blocks after the name_new, at the soonest."#;

/// Help for `name_show`.
pub const NAME_SHOW: &str = r#"name_show "identifier"
    Show values of a name"#;

/// Help for `name_list`.
pub const NAME_LIST: &str = "name_list [name]
    List my own names";

/// Help for `name_history`.
pub const NAME_HISTORY: &str = r#"name_history "identifier"
    List all name values of a name."#;

/// Help for `name_scan`.
pub const NAME_SCAN: &str = "name_scan [start-identifier] [max-return=500]
    Scan all identifiers, starting at start-identifier and returning a maximum number of entries";

/// Help for `name_filter`.
pub const NAME_FILTER: &str = "name_filter [regexp] [maxage=36000] [from=0] [nb=0] [stat]
Scan and filter names
[regexp] : apply [regexp] on names, empty means all names
[maxage] : look in last [maxage] blocks
[from] : show results from number [from]
[nb] : show [nb] results, 0 means all
[stat] : show some stats instead of results";
