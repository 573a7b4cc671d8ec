use anchor_lang::prelude::*;

/// Emitted on claim and on transfer (with the new owner)
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct PlotClaimed {
    pub plot: u32,
    pub owner: Pubkey,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct PlotReset {
    pub plot: u32,
    pub previous_owner: Pubkey,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct MaxPlotsPerPersonChanged {
    pub previous: u32,
    pub new: u32,
}
