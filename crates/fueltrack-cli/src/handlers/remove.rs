//! Remove command handler.

use anyhow::Result;

use fueltrack_core::RecordId;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_record_summary;
use crate::utils::input;

/// Execute the remove command.
///
/// Shows the record and asks for confirmation unless `force` is set.
///
/// # Errors
///
/// Returns an error if reading the confirmation fails or the snapshot cannot
/// be written.
pub async fn execute(ctx: &mut CliContext, id: &str, force: bool) -> Result<()> {
    let id = RecordId::from(id);
    let Some(record) = ctx.store().get(&id) else {
        println!("No fill-up found with id '{id}'.");
        println!("Use 'fueltrack list' to see recorded fill-ups.");
        return Ok(());
    };

    if !force {
        display_record_summary(record, &ctx.store().profile().units.labels());
        println!();

        let confirm = input::prompt_confirmation("Are you sure you want to remove this fill-up?")?;
        if !confirm {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    ctx.store_mut()
        .delete_record(&id)
        .await
        .map_err(CliError::from)?;

    println!("Removed fill-up {id}.");
    Ok(())
}
