pub use ink::{prelude::vec::Vec, primitives::AccountId};
use pendzl::traits::{Balance, Timestamp};

use super::structs::{EnrollmentEntry, RoundId};

#[ink::event]
pub struct RoundCreated {
    #[ink(topic)]
    pub round_id: RoundId,
    pub unlock_start: Timestamp,
    pub unlock_cliff_end: Timestamp,
    pub vesting_period: Timestamp,
    pub vesting_percent: u128,
    pub timestamp: Timestamp,
}

#[ink::event]
pub struct ParticipantsEnrolled {
    #[ink(topic)]
    pub round_id: RoundId,
    pub entries: Vec<EnrollmentEntry>,
    pub timestamp: Timestamp,
}

#[ink::event]
pub struct Claimed {
    #[ink(topic)]
    pub account: AccountId,
    pub amount: Balance,
    pub timestamp: Timestamp,
}

#[ink::event]
pub struct PoolDeposited {
    #[ink(topic)]
    pub from: AccountId,
    pub amount: Balance,
}

#[ink::event]
pub struct PoolWithdrawn {
    #[ink(topic)]
    pub to: AccountId,
    #[ink(topic)]
    pub token: AccountId,
    pub amount: Balance,
}
