//! `search` - single-column substring match over the current dataset.

use crate::grid::Grid;
use crate::handler::CommandContext;
use crate::outcome::Outcome;

use super::NO_DATASET;

/// Filters the current dataset's rows by a substring match in one column.
///
/// The first token names the column (resolved against the header row by
/// exact equality, first match winning); the remaining tokens are rejoined
/// with single spaces to form the search value, so values may contain
/// spaces. A row matches when its cell at the resolved column contains the
/// value as a case-sensitive substring.
///
/// Matches come back as a table of the full original rows in source order,
/// header excluded. Zero matches is a message naming the value and column,
/// never an empty table. Searching reads the session's cached dataset and
/// mutates nothing.
pub fn search(ctx: &mut CommandContext<'_>, args: &[String]) -> Outcome {
    if !ctx.session.has_dataset() {
        return Outcome::message(NO_DATASET);
    }
    let column = args.first().map(String::as_str).unwrap_or("");
    let value = args.get(1..).unwrap_or(&[]).join(" ");

    let dataset = &ctx.session.dataset;
    let index = match dataset.column_index(column) {
        Some(index) => index,
        None => {
            return Outcome::message(format!(
                "Column '{}' does not exist in the dataset.",
                column
            ))
        }
    };

    let matches: Vec<Vec<String>> = dataset
        .records()
        .filter(|row| {
            row.get(index)
                .map(|cell| cell.contains(value.as_str()))
                .unwrap_or(false)
        })
        .map(|row| row.to_vec())
        .collect();

    if matches.is_empty() {
        return Outcome::message(format!(
            "No records found matching '{}' in column '{}'.",
            value, column
        ));
    }
    Outcome::table(Grid::from_rows(matches))
}
