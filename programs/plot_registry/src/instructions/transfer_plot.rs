use anchor_lang::prelude::*;
use crate::state::{OwnerRecord, PlotMap, PlotRegistry};
use crate::errors::PlotError;
use crate::transitions;

#[derive(Accounts)]
#[instruction(plot: u32, new_owner: Pubkey)]
pub struct TransferPlot<'info> {
    /// Current owner of the plot or the registry manager
    #[account(mut)]
    pub caller: Signer<'info>,

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

    /// Count record of the plot's current owner, omitted when the manager hands
    /// out an unclaimed plot. Checked against the plot map in the handler.
    #[account(
        mut,
        seeds = [OwnerRecord::SEED, previous_owner_record.owner.as_ref()],
        bump = previous_owner_record.bump
    )]
    pub previous_owner_record: Option<Account<'info, OwnerRecord>>,

    /// Created on the new owner's first plot, paid for by the caller
    #[account(
        init_if_needed,
        payer = caller,
        space = 8 + OwnerRecord::INIT_SPACE,
        seeds = [OwnerRecord::SEED, new_owner.as_ref()],
        bump
    )]
    pub new_owner_record: Account<'info, OwnerRecord>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<TransferPlot>, plot: u32, new_owner: Pubkey) -> Result<()> {
    let previous_owner = ctx
        .accounts
        .previous_owner_record
        .as_ref()
        .map(|record| record.owner)
        .unwrap_or_default();
    ctx.accounts
        .new_owner_record
        .bind(new_owner, ctx.bumps.new_owner_record);

    // On a transfer to self both records are the same account; the transition writes neither
    let event = {
        let mut plot_map = ctx.accounts.plot_map.load_mut()?;
        transitions::transfer(
            &mut ctx.accounts.plot_registry,
            &mut plot_map,
            ctx.accounts.previous_owner_record.as_deref_mut(),
            &mut ctx.accounts.new_owner_record,
            plot,
            new_owner,
            ctx.accounts.caller.key(),
        )?
    };

    if previous_owner == Pubkey::default() {
        msg!("Unclaimed plot {} assigned to {} by manager", plot, new_owner);
    } else {
        msg!(
            "Plot {} transferred from {} to {} by {}",
            plot,
            previous_owner,
            new_owner,
            ctx.accounts.caller.key()
        );
    }
    emit!(event);

    Ok(())
}
