use anchor_lang::prelude::*;
use crate::state::OwnerRecord;

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetOwnerPlotCount<'info> {
    /// May not exist yet if the owner never held a plot
    /// CHECK: Address is derived from the owner; data is only read when owned by this program
    #[account(
        seeds = [OwnerRecord::SEED, owner.as_ref()],
        bump
    )]
    pub owner_record: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<GetOwnerPlotCount>, _owner: Pubkey) -> Result<u32> {
    let owner_record = &ctx.accounts.owner_record;
    let data = owner_record.try_borrow_data()?;
    OwnerRecord::count_from(owner_record.owner, &data[..])
}
