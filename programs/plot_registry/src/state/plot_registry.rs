use anchor_lang::prelude::*;

use crate::errors::PlotError;

#[account]
#[derive(InitSpace)]
pub struct PlotRegistry {
    pub manager: Pubkey,
    pub plot_map: Pubkey, // Address of the PlotMap account (not a PDA due to 10KB CPI limit)
    pub total_plots: u32,
    pub max_plots_per_person: u32,
    /// Number of plots currently owned by someone
    pub claimed_plots: u32,
    pub bump: u8,
    pub _padding: [u8; 64],
}

impl PlotRegistry {
    pub const SEED: &'static [u8] = b"plot_registry";

    pub fn require_manager(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.manager, PlotError::NotAuthorized);
        Ok(())
    }

    pub fn require_in_range(&self, plot: u32) -> Result<()> {
        require!(plot < self.total_plots, PlotError::InvalidPlot);
        Ok(())
    }

    /// Whether `plot_count` leaves room for one more plot under the current cap
    pub fn has_capacity(&self, plot_count: u32) -> bool {
        plot_count < self.max_plots_per_person
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn registry(manager: Pubkey) -> PlotRegistry {
        PlotRegistry {
            manager,
            plot_map: Pubkey::new_unique(),
            total_plots: 10,
            max_plots_per_person: 2,
            claimed_plots: 0,
            bump: 255,
            _padding: [0u8; 64],
        }
    }

    #[test]
    fn test_require_manager() {
        let manager = Pubkey::new_unique();
        let registry = registry(manager);
        assert!(registry.require_manager(&manager).is_ok());
        assert_eq!(
            registry.require_manager(&Pubkey::new_unique()).unwrap_err(),
            Error::from(PlotError::NotAuthorized)
        );
    }

    #[test]
    fn test_require_in_range_boundaries() {
        let registry = registry(Pubkey::new_unique());
        assert!(registry.require_in_range(0).is_ok());
        assert!(registry.require_in_range(9).is_ok());
        assert_eq!(
            registry.require_in_range(10).unwrap_err(),
            Error::from(PlotError::InvalidPlot)
        );
    }

    #[test]
    fn test_has_capacity() {
        let registry = registry(Pubkey::new_unique());
        assert!(registry.has_capacity(0));
        assert!(registry.has_capacity(1));
        assert!(!registry.has_capacity(2));
        assert!(!registry.has_capacity(3)); // grandfathered owners stay blocked
    }
}
