use anchor_lang::prelude::*;
use crate::state::{OwnerRecord, PlotMap, PlotRegistry};
use crate::errors::PlotError;
use crate::transitions;

#[derive(Accounts)]
pub struct ClaimPlot<'info> {
    #[account(mut)]
    pub claimer: Signer<'info>,

    #[account(
        mut,
        seeds = [PlotRegistry::SEED],
        bump = plot_registry.bump
    )]
    pub plot_registry: Account<'info, PlotRegistry>,

    /// PlotMap address must match the one stored in plot_registry
    #[account(
        mut,
        constraint = plot_map.key() == plot_registry.plot_map @ PlotError::InvalidPlotMap
    )]
    pub plot_map: AccountLoader<'info, PlotMap>,

    /// Created on the claimer's first claim
    #[account(
        init_if_needed,
        payer = claimer,
        space = 8 + OwnerRecord::INIT_SPACE,
        seeds = [OwnerRecord::SEED, claimer.key().as_ref()],
        bump
    )]
    pub claimer_record: Account<'info, OwnerRecord>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimPlot>, plot: u32) -> Result<()> {
    let claimer = ctx.accounts.claimer.key();
    let claimer_record = &mut ctx.accounts.claimer_record;
    claimer_record.bind(claimer, ctx.bumps.claimer_record);

    let event = {
        let mut plot_map = ctx.accounts.plot_map.load_mut()?;
        transitions::claim(
            &mut ctx.accounts.plot_registry,
            &mut plot_map,
            claimer_record,
            plot,
            claimer,
        )?
    };

    msg!(
        "Plot {} claimed by {} ({} plots held)",
        plot,
        claimer,
        claimer_record.plot_count
    );
    emit!(event);

    Ok(())
}
