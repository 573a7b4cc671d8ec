use anchor_lang::prelude::*;

pub const MAX_PLOTS: usize = 1000;

#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct PlotMap {
    /// Owner of each plot, `Pubkey::default()` when unclaimed
    pub owners: [Pubkey; MAX_PLOTS],
}

/// Accessors index the array directly: callers range-check `plot` against
/// `PlotRegistry::total_plots`, which `initialize` caps at `MAX_PLOTS`.
impl PlotMap {
    pub const SIZE: usize = 8 + (32 * MAX_PLOTS); // 32008 bytes

    pub fn owner(&self, plot: u32) -> Pubkey {
        debug_assert!((plot as usize) < MAX_PLOTS);
        self.owners[plot as usize]
    }

    pub fn is_available(&self, plot: u32) -> bool {
        self.owner(plot) == Pubkey::default()
    }

    pub fn set_owner(&mut self, plot: u32, owner: Pubkey) {
        debug_assert!((plot as usize) < MAX_PLOTS);
        self.owners[plot as usize] = owner;
    }

    pub fn clear(&mut self, plot: u32) {
        self.set_owner(plot, Pubkey::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_owner() {
        let mut map = PlotMap { owners: [Pubkey::default(); MAX_PLOTS] };
        let owner = Pubkey::new_unique();

        assert!(map.is_available(7));
        map.set_owner(7, owner);
        assert_eq!(map.owner(7), owner);
        assert!(!map.is_available(7));
        assert!(map.is_available(6));

        map.clear(7);
        assert!(map.is_available(7));
        assert_eq!(map.owner(7), Pubkey::default());
    }

    #[test]
    fn test_last_slot_is_addressable() {
        let mut map = PlotMap { owners: [Pubkey::default(); MAX_PLOTS] };
        let owner = Pubkey::new_unique();
        let last = MAX_PLOTS as u32 - 1;

        map.set_owner(last, owner);
        assert_eq!(map.owner(last), owner);
    }

    #[test]
    #[should_panic]
    fn test_slot_past_capacity_panics() {
        let map = PlotMap { owners: [Pubkey::default(); MAX_PLOTS] };
        let _ = map.owner(MAX_PLOTS as u32);
    }
}
