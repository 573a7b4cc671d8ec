use anchor_lang::prelude::*;
use crate::state::PlotRegistry;
use crate::errors::PlotError;
use crate::transitions;

#[derive(Accounts)]
pub struct ChangeMaxPlotsPerPerson<'info> {
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
}

pub fn handler(ctx: Context<ChangeMaxPlotsPerPerson>, new_max: u32) -> Result<()> {
    let event = transitions::change_max_plots_per_person(
        &mut ctx.accounts.plot_registry,
        new_max,
        ctx.accounts.manager.key(),
    )?;

    msg!(
        "Updated max_plots_per_person from {} to {}",
        event.previous,
        event.new
    );
    emit!(event);

    Ok(())
}
