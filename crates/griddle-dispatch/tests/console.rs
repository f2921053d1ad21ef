//! End-to-end properties of the console engine.
//!
//! Drives a dispatcher with the built-in commands over an in-memory source
//! the way the surrounding shell would: one input line per call, asserting
//! on the structured replies.

use std::cell::RefCell;
use std::rc::Rc;

use griddle_dispatch::{
    DataSource, Dispatcher, Grid, MemorySource, Outcome, Reply, UNKNOWN_COMMAND,
};

fn grid(rows: &[&[&str]]) -> Grid {
    Grid::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
}

fn dataset1() -> Grid {
    grid(&[
        &["ID", "Address", "City", "State", "Zip", "Price"],
        &["1", "123 Main St", "Anytown", "StateA", "12345", "200000"],
        &["2", "456 Pine St", "Laketown", "StateB", "67890", "250000"],
        &["3", "789 Oak Ave", "Forest City", "StateC", "24680", "300000"],
    ])
}

fn dataset2() -> Grid {
    grid(&[
        &["ID", "Address", "City", "State", "Zip", "Price"],
        &["4", "101 Elm St", "Hilltown", "StateA", "54321", "180000"],
    ])
}

fn sample_source() -> MemorySource {
    let mut source = MemorySource::new();
    source.insert("/data/dataset1.csv", dataset1());
    source.insert("/data/dataset2.csv", dataset2());
    source
}

fn console() -> Dispatcher {
    Dispatcher::with_builtins(Box::new(sample_source()))
}

fn message(reply: &Reply) -> &str {
    reply
        .outcome()
        .as_message()
        .expect("expected a message outcome")
}

#[test]
fn unregistered_commands_return_unknown() {
    let mut console = console();
    for line in ["bogus", "loadfile /data/dataset1.csv", "Mode", "x y z"] {
        assert_eq!(message(&console.process(line)), UNKNOWN_COMMAND);
    }
}

#[test]
fn load_then_view_round_trips_the_grid() {
    let mut console = console();
    assert_eq!(
        message(&console.process("load_file /data/dataset1.csv")),
        "Dataset loaded from /data/dataset1.csv"
    );
    let reply = console.process("view");
    assert_eq!(reply.outcome().as_table(), Some(&dataset1()));
}

#[test]
fn last_load_wins() {
    let mut console = console();
    console.process("load_file /data/dataset1.csv");
    console.process("load_file /data/dataset2.csv");
    let reply = console.process("view");
    assert_eq!(reply.outcome().as_table(), Some(&dataset2()));
}

#[test]
fn failed_load_keeps_the_current_dataset() {
    let mut console = console();
    console.process("load_file /data/dataset1.csv");
    assert_eq!(
        message(&console.process("load_file /data/dataset9.csv")),
        "File path does not exist."
    );
    let reply = console.process("view");
    assert_eq!(reply.outcome().as_table(), Some(&dataset1()));
}

#[test]
fn view_and_search_demand_a_dataset() {
    let mut console = console();
    let expected = "No dataset loaded. Use 'load_file' command to load a dataset.";
    assert_eq!(message(&console.process("view")), expected);
    assert_eq!(message(&console.process("search Zip 12345")), expected);
}

#[test]
fn search_returns_full_rows_in_source_order() {
    let mut console = console();
    console.process("load_file /data/dataset1.csv");
    let reply = console.process("search City town");
    let grid = reply.outcome().as_table().expect("expected matches");
    assert_eq!(
        grid.rows(),
        &[
            vec![
                "1".to_string(),
                "123 Main St".into(),
                "Anytown".into(),
                "StateA".into(),
                "12345".into(),
                "200000".into(),
            ],
            vec![
                "2".to_string(),
                "456 Pine St".into(),
                "Laketown".into(),
                "StateB".into(),
                "67890".into(),
                "250000".into(),
            ],
        ]
    );
}

#[test]
fn search_misses_are_messages_not_empty_tables() {
    let mut console = console();
    console.process("load_file /data/dataset1.csv");

    let reply = console.process("search Zip 99999");
    assert!(reply.outcome().is_message());
    assert_eq!(
        message(&reply),
        "No records found matching '99999' in column 'Zip'."
    );

    assert_eq!(
        message(&console.process("search Country USA")),
        "Column 'Country' does not exist in the dataset."
    );
}

#[test]
fn search_value_may_contain_spaces() {
    let mut console = console();
    console.process("load_file /data/dataset1.csv");
    let reply = console.process("search Address 123 Main St");
    let grid = reply.outcome().as_table().expect("expected matches");
    assert_eq!(grid.rows().len(), 1);
    assert_eq!(grid.rows()[0][0], "1");
}

#[test]
fn mode_parity() {
    let mut console = console();

    // odd number of toggles: verbose
    console.process("mode");
    assert!(console.process("view").is_verbose());

    // an argument never changes the mode
    assert_eq!(
        message(&console.process("mode john")),
        "Usage: 'mode' to toggle between brief and verbose output."
    );
    assert!(console.process("view").is_verbose());

    // even number of toggles: back to brief
    console.process("mode");
    assert!(!console.process("view").is_verbose());
}

#[test]
fn verbose_replies_carry_the_input_line() {
    let mut console = console();
    console.process("mode");
    let reply = console.process("load_file /data/dataset1.csv");
    assert_eq!(reply.echo(), Some("load_file /data/dataset1.csv"));
    assert_eq!(message(&reply), "Dataset loaded from /data/dataset1.csv");

    // brief replies carry only the outcome
    console.process("mode");
    let reply = console.process("load_file /data/dataset1.csv");
    assert_eq!(reply.echo(), None);
}

#[test]
fn single_listing_walkthrough() {
    let mut source = MemorySource::new();
    source.insert(
        "/data/dataset1.csv",
        grid(&[
            &["ID", "Address", "City", "State", "Zip", "Price"],
            &["1", "123 Main St", "Anytown", "StateA", "12345", "200000"],
        ]),
    );
    let mut console = Dispatcher::with_builtins(Box::new(source));

    assert_eq!(
        message(&console.process("load_file /data/dataset1.csv")),
        "Dataset loaded from /data/dataset1.csv"
    );

    let reply = console.process("view");
    assert_eq!(reply.outcome().as_table().map(Grid::len), Some(2));

    let reply = console.process("search Zip 12345");
    let matches = reply.outcome().as_table().expect("expected one match");
    assert_eq!(
        matches.rows(),
        &[vec![
            "1".to_string(),
            "123 Main St".into(),
            "Anytown".into(),
            "StateA".into(),
            "12345".into(),
            "200000".into(),
        ]]
    );

    assert_eq!(
        message(&console.process("search Zip 99999")),
        "No records found matching '99999' in column 'Zip'."
    );
    assert_eq!(
        message(&console.process("search Country USA")),
        "Column 'Country' does not exist in the dataset."
    );
}

/// A source the test can mutate after the dispatcher takes its handle,
/// standing in for backends whose contents change between commands.
#[derive(Clone, Default)]
struct SharedSource(Rc<RefCell<MemorySource>>);

impl DataSource for SharedSource {
    fn lookup(&self, key: &str) -> Option<Grid> {
        self.0.borrow().lookup(key)
    }
}

#[test]
fn view_rereads_instead_of_trusting_the_cache() {
    let shared = SharedSource::default();
    shared.0.borrow_mut().insert("/data/live.csv", dataset1());
    let mut console = Dispatcher::with_builtins(Box::new(shared.clone()));

    console.process("load_file /data/live.csv");

    // the source changes behind the session's back
    shared.0.borrow_mut().insert("/data/live.csv", dataset2());
    let reply = console.process("view");
    assert_eq!(reply.outcome().as_table(), Some(&dataset2()));

    // and can vanish outright
    shared.0.borrow_mut().remove("/data/live.csv");
    assert_eq!(
        message(&console.process("view")),
        "File path does not exist."
    );
}

#[test]
fn every_line_yields_a_reply() {
    let mut console = console();
    for line in ["", "   ", "\t", "search", "load_file", "mode mode mode"] {
        let reply = console.process(line);
        match reply.outcome() {
            Outcome::Message(text) => assert!(!text.is_empty()),
            Outcome::Table(_) => panic!("malformed input should not produce tables"),
        }
    }
}
