use anchor_lang::prelude::*;
use crate::state::{PlotMap, PlotRegistry};
use crate::errors::PlotError;
use crate::transitions;

/// Read-only view over a single plot. Results are returned as transaction return data.
#[derive(Accounts)]
pub struct ReadPlot<'info> {
    #[account(
        seeds = [PlotRegistry::SEED],
        bump = plot_registry.bump
    )]
    pub plot_registry: Account<'info, PlotRegistry>,

    #[account(
        constraint = plot_map.key() == plot_registry.plot_map @ PlotError::InvalidPlotMap
    )]
    pub plot_map: AccountLoader<'info, PlotMap>,
}

pub fn get_plot_owner_handler(ctx: Context<ReadPlot>, plot: u32) -> Result<Pubkey> {
    let plot_map = ctx.accounts.plot_map.load()?;
    transitions::plot_owner(&ctx.accounts.plot_registry, &plot_map, plot)
}

pub fn is_plot_available_handler(ctx: Context<ReadPlot>, plot: u32) -> Result<bool> {
    let plot_map = ctx.accounts.plot_map.load()?;
    transitions::plot_available(&ctx.accounts.plot_registry, &plot_map, plot)
}
