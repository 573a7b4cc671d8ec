use anchor_lang::prelude::*;
use crate::state::{PlotMap, MAX_PLOTS};

/// Tags a client-allocated account as the plot ownership table.
///
/// One owner slot per plot up to `MAX_PLOTS` puts the table at
/// `PlotMap::SIZE` bytes, more than `init` can allocate from inside the
/// program, so the client funds a zero-filled program-owned account of that
/// size in the same transaction and this instruction only writes the
/// discriminator.
#[derive(Accounts)]
pub struct CreatePlotMap<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Zero-filled, owned by this program, `PlotMap::SIZE` bytes
    #[account(zero)]
    pub plot_map: AccountLoader<'info, PlotMap>,
}

pub fn handler(ctx: Context<CreatePlotMap>) -> Result<()> {
    // All-zero owner slots already mean every plot is unclaimed
    let _plot_map = ctx.accounts.plot_map.load_init()?;
    msg!(
        "PlotMap created at {} with room for {} plots",
        ctx.accounts.plot_map.key(),
        MAX_PLOTS
    );
    Ok(())
}
