use anchor_lang::prelude::*;
use crate::state::{PlotMap, PlotRegistry};
use crate::transitions::validate_config;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the registry manager
    #[account(mut)]
    pub manager: Signer<'info>,

    #[account(
        init,
        payer = manager,
        space = 8 + PlotRegistry::INIT_SPACE,
        seeds = [PlotRegistry::SEED],
        bump
    )]
    pub plot_registry: Account<'info, PlotRegistry>,

    /// PlotMap must be created first via create_plot_map instruction.
    pub plot_map: AccountLoader<'info, PlotMap>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    total_plots: u32,
    max_plots_per_person: u32,
) -> Result<()> {
    validate_config(total_plots, max_plots_per_person)?;

    let registry = &mut ctx.accounts.plot_registry;

    registry.manager = ctx.accounts.manager.key();
    registry.plot_map = ctx.accounts.plot_map.key();
    registry.total_plots = total_plots;
    registry.max_plots_per_person = max_plots_per_person;
    registry.claimed_plots = 0;
    registry.bump = ctx.bumps.plot_registry;
    registry._padding = [0u8; 64];

    msg!(
        "Registry initialized with {} plots, max {} per person, manager {}",
        total_plots,
        max_plots_per_person,
        registry.manager
    );
    Ok(())
}
