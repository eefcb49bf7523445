//! List command handler.
//!
//! Displays recorded fill-ups in canonical order, optionally filtered.

use fueltrack_core::FuelRecord;

use crate::bootstrap::CliContext;
use crate::presentation::{format_record_row, print_record_header};

/// Records to show for an optional search term and row limit.
pub fn select<'a>(
    records: &'a [FuelRecord],
    search: Option<&str>,
    limit: Option<usize>,
) -> Vec<&'a FuelRecord> {
    let term = search.unwrap_or("");
    records
        .iter()
        .filter(|r| r.matches_search(term))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Execute the list command.
pub fn execute(ctx: &CliContext, search: Option<&str>, limit: Option<usize>) {
    let store = ctx.store();

    if store.is_empty() {
        println!("No fill-ups recorded yet.");
        println!("Use 'fueltrack add --amount <A> --cost <C> --distance <D>' to add one.");
        return;
    }

    let rows = select(store.records(), search, limit);
    if rows.is_empty() {
        println!("No fill-ups match '{}'.", search.unwrap_or_default());
        return;
    }

    println!(
        "{} of {} fill-up(s) for {}:\n",
        rows.len(),
        store.len(),
        store.profile().display_name()
    );
    print_record_header(&store.profile().units.labels());
    for record in rows {
        println!("{}", format_record_row(record));
    }
}
