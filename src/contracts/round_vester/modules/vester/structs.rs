use pendzl::traits::{AccountId, Balance, Timestamp};

pub type RoundId = u32;

/// Fixed-point denominator of `VestingRound::vesting_percent`.
pub const SCALE: u128 = 100_000_000_000_000_000_000; // 10^20

/// Unlock schedule shared by every participant enrolled into the round.
/// Never modified once created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct VestingRound {
    /// Claims are rejected at or before this moment.
    pub unlock_start: Timestamp,
    /// Release begins here. Always greater than `unlock_start`.
    pub unlock_cliff_end: Timestamp,
    /// Length of the linear window that starts at the cliff.
    pub vesting_period: Timestamp,
    /// Share of the allotment, scaled by `SCALE`, that vests linearly over
    /// `vesting_period`. The complement is released at the cliff.
    pub vesting_percent: u128,
}

impl VestingRound {
    pub fn vesting_end(&self) -> Option<Timestamp> {
        self.unlock_cliff_end.checked_add(self.vesting_period)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct ParticipantRecord {
    pub allotted: Balance,
    pub claimed: Balance,
    pub round_index: RoundId,
}

impl ParticipantRecord {
    pub fn is_enrolled(&self) -> bool {
        self.allotted != 0 || self.claimed != 0
    }

    pub fn remaining(&self) -> Balance {
        self.allotted.saturating_sub(self.claimed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct EnrollmentEntry {
    pub account: AccountId,
    pub amount: Balance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum VestingState {
    /// Not enrolled, or the cliff has not been reached.
    Unvested,
    PartiallyVested,
    FullyVested,
}

/// A release whose ledger effect has been written but whose token transfer
/// has not happened yet. Either settled or rolled back, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRelease {
    pub account: AccountId,
    pub amount: Balance,
    pub claimed_before: Balance,
}
