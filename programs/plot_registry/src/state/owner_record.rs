use anchor_lang::prelude::*;

use crate::errors::PlotError;

/// Per-owner plot count. A missing record reads as zero plots.
#[account]
#[derive(InitSpace)]
pub struct OwnerRecord {
    pub owner: Pubkey,
    pub plot_count: u32,
    pub bump: u8,
}

impl OwnerRecord {
    pub const SEED: &'static [u8] = b"owner";

    /// Fills in a record created by `init_if_needed`; no-op on an existing one
    pub fn bind(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.plot_count = 0;
            self.bump = bump;
        }
    }

    pub fn increment(&mut self) -> Result<()> {
        self.plot_count = self.plot_count.checked_add(1).ok_or(PlotError::Overflow)?;
        Ok(())
    }

    pub fn decrement(&mut self) -> Result<()> {
        self.plot_count = self.plot_count.checked_sub(1).ok_or(PlotError::Overflow)?;
        Ok(())
    }

    /// Plot count stored in a raw record account. An account that was never
    /// created (empty, or still owned by the system program) counts as zero.
    pub fn count_from(account_owner: &Pubkey, data: &[u8]) -> Result<u32> {
        if account_owner != &crate::ID || data.is_empty() {
            return Ok(0);
        }
        let record = OwnerRecord::try_deserialize(&mut &data[..])?;
        Ok(record.plot_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn test_bind_only_once() {
        let mut record = OwnerRecord { owner: Pubkey::default(), plot_count: 0, bump: 0 };
        let owner = Pubkey::new_unique();
        record.bind(owner, 254);
        record.increment().unwrap();

        record.bind(Pubkey::new_unique(), 1);
        assert_eq!(record.owner, owner);
        assert_eq!(record.plot_count, 1);
        assert_eq!(record.bump, 254);
    }

    fn serialized(record: &OwnerRecord) -> Vec<u8> {
        let mut data = Vec::new();
        record.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn test_count_from_missing_account() {
        assert_eq!(OwnerRecord::count_from(&crate::ID, &[]).unwrap(), 0);
        assert_eq!(OwnerRecord::count_from(&Pubkey::default(), &[]).unwrap(), 0);
    }

    #[test]
    fn test_count_from_foreign_account() {
        let record = OwnerRecord { owner: Pubkey::new_unique(), plot_count: 3, bump: 250 };
        let data = serialized(&record);
        assert_eq!(OwnerRecord::count_from(&Pubkey::new_unique(), &data).unwrap(), 0);
    }

    #[test]
    fn test_count_from_record() {
        let record = OwnerRecord { owner: Pubkey::new_unique(), plot_count: 3, bump: 250 };
        let data = serialized(&record);
        assert_eq!(OwnerRecord::count_from(&crate::ID, &data).unwrap(), 3);
    }

    #[test]
    fn test_count_from_garbage_fails() {
        assert!(OwnerRecord::count_from(&crate::ID, &[1, 2, 3]).is_err());
    }

    #[test]
    fn test_decrement_below_zero_fails() {
        let mut record = OwnerRecord { owner: Pubkey::new_unique(), plot_count: 0, bump: 0 };
        assert_eq!(record.decrement().unwrap_err(), Error::from(PlotError::Overflow));
        assert_eq!(record.plot_count, 0);
    }
}
