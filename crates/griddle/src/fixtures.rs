//! The built-in sample datasets.
//!
//! Three small real-estate listings, keyed like the CSV files they stand
//! in for. This is what the console serves when no `--data-dir` is given,
//! and what the documentation examples assume.

use griddle_dispatch::{Grid, MemorySource};

fn grid(rows: &[&[&str]]) -> Grid {
    Grid::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
}

/// The sample datasets the console ships with.
pub fn sample_datasets() -> MemorySource {
    let mut source = MemorySource::new();
    source.insert(
        "/data/dataset1.csv",
        grid(&[
            &["ID", "Address", "City", "State", "Zip", "Price"],
            &["1", "123 Main St", "Anytown", "StateA", "12345", "200000"],
            &["2", "456 Pine St", "Laketown", "StateB", "67890", "250000"],
            &["3", "789 Oak Ave", "Forest City", "StateC", "24680", "300000"],
        ]),
    );
    source.insert(
        "/data/dataset2.csv",
        grid(&[
            &["ID", "Address", "City", "State", "Zip", "Price"],
            &["4", "101 Elm St", "Hilltown", "StateA", "54321", "180000"],
            &["5", "202 Maple Ave", "Rivertown", "StateB", "98760", "220000"],
            &["6", "303 Birch Blvd", "Mountain City", "StateC", "13579", "260000"],
        ]),
    );
    source.insert(
        "/data/dataset3.csv",
        grid(&[
            &["ID", "Address", "City", "State", "Zip", "Price"],
            &["7", "135 Ninth St", "Palo Alto", "CA", "94303", "160000"],
        ]),
    );
    source
}
