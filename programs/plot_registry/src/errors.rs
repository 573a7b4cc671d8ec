use anchor_lang::prelude::*;

#[error_code]
pub enum PlotError {
    #[msg("Invalid registry configuration")]
    InvalidConfiguration,

    #[msg("Plot index out of range")]
    InvalidPlot,

    #[msg("Plot is already claimed")]
    PlotAlreadyClaimed,

    #[msg("Owner already holds the maximum number of plots")]
    OwnerLimitReached,

    #[msg("Not authorized")]
    NotAuthorized,

    #[msg("Plot is not claimed")]
    PlotNotClaimed,

    #[msg("Invalid new owner")]
    InvalidOwner,

    #[msg("Owner account does not match plot owner")]
    OwnerMismatch,

    #[msg("Plot map does not belong to this registry")]
    InvalidPlotMap,

    #[msg("Arithmetic overflow")]
    Overflow,
}
