use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod state;
pub mod transitions;
pub mod instructions;

use instructions::*;

declare_id!("8YFUm76D23JAmAxkxLm2sbZp5b5DM2vQ2kmKgxBMYuzP");

#[program]
pub mod plot_registry {
    use super::*;

    pub fn create_plot_map(ctx: Context<CreatePlotMap>) -> Result<()> {
        instructions::create_plot_map::handler(ctx)
    }

    pub fn initialize(
        ctx: Context<Initialize>,
        total_plots: u32,
        max_plots_per_person: u32,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, total_plots, max_plots_per_person)
    }

    pub fn claim_plot(ctx: Context<ClaimPlot>, plot: u32) -> Result<()> {
        instructions::claim_plot::handler(ctx, plot)
    }

    pub fn get_plot_owner(ctx: Context<ReadPlot>, plot: u32) -> Result<Pubkey> {
        instructions::read_plot::get_plot_owner_handler(ctx, plot)
    }

    pub fn reset_plot(ctx: Context<ResetPlot>, plot: u32) -> Result<()> {
        instructions::reset_plot::handler(ctx, plot)
    }

    pub fn change_max_plots_per_person(
        ctx: Context<ChangeMaxPlotsPerPerson>,
        new_max: u32,
    ) -> Result<()> {
        instructions::change_max_plots_per_person::handler(ctx, new_max)
    }

    pub fn transfer_plot(
        ctx: Context<TransferPlot>,
        plot: u32,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_plot::handler(ctx, plot, new_owner)
    }

    pub fn is_plot_available(ctx: Context<ReadPlot>, plot: u32) -> Result<bool> {
        instructions::read_plot::is_plot_available_handler(ctx, plot)
    }

    pub fn get_owner_plot_count(
        ctx: Context<GetOwnerPlotCount>,
        owner: Pubkey,
    ) -> Result<u32> {
        instructions::get_owner_plot_count::handler(ctx, owner)
    }
}
