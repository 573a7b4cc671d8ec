use anchor_lang::prelude::*;
use crate::state::{OwnerRecord, PlotMap, PlotRegistry};
use crate::errors::PlotError;
use crate::transitions;

#[derive(Accounts)]
pub struct ResetPlot<'info> {
    #[account(
        constraint = manager.key() == plot_registry.manager @ PlotError::NotAuthorized
    )]
    pub manager: Signer<'info>,

    #[account(
        mut,
        seeds = [PlotRegistry::SEED],
        bump = plot_registry.bump
    )]
    pub plot_registry: Account<'info, PlotRegistry>,

    #[account(
        mut,
        constraint = plot_map.key() == plot_registry.plot_map @ PlotError::InvalidPlotMap
    )]
    pub plot_map: AccountLoader<'info, PlotMap>,

    /// Count record of the plot's current owner; checked against the plot map in the handler
    #[account(
        mut,
        seeds = [OwnerRecord::SEED, previous_owner_record.owner.as_ref()],
        bump = previous_owner_record.bump
    )]
    pub previous_owner_record: Account<'info, OwnerRecord>,
}

pub fn handler(ctx: Context<ResetPlot>, plot: u32) -> Result<()> {
    let event = {
        let mut plot_map = ctx.accounts.plot_map.load_mut()?;
        transitions::reset(
            &mut ctx.accounts.plot_registry,
            &mut plot_map,
            &mut ctx.accounts.previous_owner_record,
            plot,
            ctx.accounts.manager.key(),
        )?
    };

    msg!("Plot {} reset, previously owned by {}", plot, event.previous_owner);
    emit!(event);

    Ok(())
}
