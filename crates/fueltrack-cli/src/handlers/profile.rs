//! Profile command handler.
//!
//! Shows the vehicle profile or merges field changes into it.

use anyhow::Result;

use fueltrack_core::VehicleProfile;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::profile_commands::ProfileCommand;

/// Execute a profile subcommand.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be written.
pub async fn execute(ctx: &mut CliContext, command: ProfileCommand) -> Result<()> {
    let Some(update) = command.into_update() else {
        display_profile(ctx.store().profile());
        return Ok(());
    };

    if update.is_empty() {
        println!("Nothing to change. Pass --make, --model, --year, --fuel-type or --units.");
        return Ok(());
    }

    let mut profile = ctx.store().profile().clone();
    profile.merge(&update);
    ctx.store_mut()
        .update_profile(profile)
        .await
        .map_err(CliError::from)?;

    println!("Updated vehicle profile:\n");
    display_profile(ctx.store().profile());
    Ok(())
}

fn display_profile(profile: &VehicleProfile) {
    println!("Vehicle:   {}", profile.display_name());
    println!("Fuel type: {}", profile.fuel_type);
    println!("Units:     {}", profile.units.display_name());
}
