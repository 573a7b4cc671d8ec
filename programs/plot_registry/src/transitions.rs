use anchor_lang::prelude::*;

use crate::errors::PlotError;
use crate::events::{MaxPlotsPerPersonChanged, PlotClaimed, PlotReset};
use crate::state::{OwnerRecord, PlotMap, PlotRegistry, MAX_PLOTS};

// Every transition checks all of its preconditions before writing anything.

/// Validates the deployment parameters passed to `initialize`
pub fn validate_config(total_plots: u32, max_plots_per_person: u32) -> Result<()> {
    require!(total_plots > 0, PlotError::InvalidConfiguration);
    require!(max_plots_per_person > 0, PlotError::InvalidConfiguration);
    require!(
        (total_plots as usize) <= MAX_PLOTS,
        PlotError::InvalidConfiguration
    );
    Ok(())
}

/// Assigns an unclaimed plot to `claimer`.
///
/// Checks run in order: plot range, availability, claimer's limit.
pub fn claim(
    registry: &mut PlotRegistry,
    plot_map: &mut PlotMap,
    claimer_record: &mut OwnerRecord,
    plot: u32,
    claimer: Pubkey,
) -> Result<PlotClaimed> {
    registry.require_in_range(plot)?;
    require!(plot_map.is_available(plot), PlotError::PlotAlreadyClaimed);
    require!(
        registry.has_capacity(claimer_record.plot_count),
        PlotError::OwnerLimitReached
    );
    require_keys_eq!(claimer_record.owner, claimer, PlotError::OwnerMismatch);

    let claimed_plots = registry
        .claimed_plots
        .checked_add(1)
        .ok_or(PlotError::Overflow)?;

    claimer_record.increment()?;
    registry.claimed_plots = claimed_plots;
    plot_map.set_owner(plot, claimer);

    Ok(PlotClaimed { plot, owner: claimer })
}

/// Returns a claimed plot to the unclaimed state. Manager only.
pub fn reset(
    registry: &mut PlotRegistry,
    plot_map: &mut PlotMap,
    previous_record: &mut OwnerRecord,
    plot: u32,
    caller: Pubkey,
) -> Result<PlotReset> {
    registry.require_manager(&caller)?;
    registry.require_in_range(plot)?;

    let previous_owner = plot_map.owner(plot);
    require!(previous_owner != Pubkey::default(), PlotError::PlotNotClaimed);
    require_keys_eq!(previous_record.owner, previous_owner, PlotError::OwnerMismatch);

    let claimed_plots = registry
        .claimed_plots
        .checked_sub(1)
        .ok_or(PlotError::Overflow)?;

    previous_record.decrement()?;
    registry.claimed_plots = claimed_plots;
    plot_map.clear(plot);

    Ok(PlotReset { plot, previous_owner })
}

/// Replaces the per-owner cap. Owners above the new cap keep their plots.
pub fn change_max_plots_per_person(
    registry: &mut PlotRegistry,
    new_max: u32,
    caller: Pubkey,
) -> Result<MaxPlotsPerPersonChanged> {
    registry.require_manager(&caller)?;

    let previous = registry.max_plots_per_person;
    registry.max_plots_per_person = new_max;

    Ok(MaxPlotsPerPersonChanged { previous, new: new_max })
}

/// Moves a plot to `new_owner`. Callable by the plot's owner or the
/// manager; the manager may also hand out an unclaimed plot, in which case
/// `previous_record` is `None`. The manager's own plots are counted like
/// anyone else's, and a transfer to the current owner changes no counts.
///
/// Checks run in order: authorization, plot range, new owner, records,
/// new owner's limit.
pub fn transfer(
    registry: &mut PlotRegistry,
    plot_map: &mut PlotMap,
    previous_record: Option<&mut OwnerRecord>,
    new_owner_record: &mut OwnerRecord,
    plot: u32,
    new_owner: Pubkey,
    caller: Pubkey,
) -> Result<PlotClaimed> {
    // Out-of-range plots have no owner, so only the manager gets past authorization
    let previous_owner = if plot < registry.total_plots {
        plot_map.owner(plot)
    } else {
        Pubkey::default()
    };
    let is_owner = previous_owner != Pubkey::default() && caller == previous_owner;
    require!(
        is_owner || caller == registry.manager,
        PlotError::NotAuthorized
    );
    registry.require_in_range(plot)?;
    require!(new_owner != Pubkey::default(), PlotError::InvalidOwner);

    let previous_record = match previous_record {
        Some(record) => {
            require_keys_eq!(record.owner, previous_owner, PlotError::OwnerMismatch);
            Some(record)
        }
        None => {
            require!(previous_owner == Pubkey::default(), PlotError::OwnerMismatch);
            None
        }
    };
    require_keys_eq!(new_owner_record.owner, new_owner, PlotError::OwnerMismatch);
    require!(
        registry.has_capacity(new_owner_record.plot_count),
        PlotError::OwnerLimitReached
    );

    if new_owner == previous_owner {
        return Ok(PlotClaimed { plot, owner: new_owner });
    }

    let claimed_plots = match previous_record {
        Some(_) => registry.claimed_plots,
        None => registry
            .claimed_plots
            .checked_add(1)
            .ok_or(PlotError::Overflow)?,
    };

    if let Some(record) = previous_record {
        record.decrement()?;
    }
    new_owner_record.increment()?;
    registry.claimed_plots = claimed_plots;
    plot_map.set_owner(plot, new_owner);

    Ok(PlotClaimed { plot, owner: new_owner })
}

/// Owner of `plot`, `Pubkey::default()` when unclaimed
pub fn plot_owner(registry: &PlotRegistry, plot_map: &PlotMap, plot: u32) -> Result<Pubkey> {
    registry.require_in_range(plot)?;
    Ok(plot_map.owner(plot))
}

pub fn plot_available(registry: &PlotRegistry, plot_map: &PlotMap, plot: u32) -> Result<bool> {
    registry.require_in_range(plot)?;
    Ok(plot_map.is_available(plot))
}
