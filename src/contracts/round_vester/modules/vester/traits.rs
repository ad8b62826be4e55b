use super::{
    errors::RoundVesterError,
    structs::{EnrollmentEntry, ParticipantRecord, RoundId, VestingRound, VestingState},
};
use ink::prelude::vec::Vec;
use pendzl::traits::{AccountId, Balance, Timestamp};

#[ink::trait_definition]
/// Messages available to enrolled participants.
pub trait RoundVester {
    /// Transfers to the caller everything vested for them and not yet claimed.
    ///
    /// On success emits `Claimed` and returns the amount sent.
    ///
    /// # Errors
    ///
    /// Returns `TooEarly` if the caller's round has not passed its unlock start.
    /// Returns `NothingToClaim` if the caller is not enrolled or nothing new has vested.
    /// Returns `TransferFailed` if the token transfer failed. The claim is not booked then.
    /// Returns `ReentrantCall` if invoked from within another protected call.
    #[ink(message)]
    fn claim(&mut self) -> Result<Balance, RoundVesterError>;
}

#[ink::trait_definition]
/// Messages restricted to holders of the `ROUND_ADMIN` role.
pub trait RoundVesterManage {
    /// Appends a new vesting round and returns its id.
    ///
    /// `vesting_percent` (scaled by `SCALE`) is the share of each allotment that
    /// vests linearly over `vesting_period` after `unlock_cliff_end`. The rest,
    /// `SCALE - vesting_percent`, is released at once when the cliff ends. It is
    /// not the immediately unlocked fraction: `SCALE / 4` releases 75% at the cliff.
    ///
    /// On success emits `RoundCreated`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchedule` if `unlock_start >= unlock_cliff_end` or `vesting_percent > SCALE`.
    /// Returns `InvalidSchedule` if `unlock_cliff_end + vesting_period` overflows `Timestamp`.
    #[ink(message)]
    fn create_round(
        &mut self,
        unlock_start: Timestamp,
        unlock_cliff_end: Timestamp,
        vesting_period: Timestamp,
        vesting_percent: u128,
    ) -> Result<RoundId, RoundVesterError>;

    /// Assigns allotments in `round_id` to every account in `entries`.
    /// Either all entries are enrolled or none is.
    ///
    /// On success emits `ParticipantsEnrolled`.
    ///
    /// # Errors
    ///
    /// Returns `RoundNotFound` if the round does not exist.
    /// Returns `AlreadyEnrolled` if an account already has an allotment or repeats in the batch.
    /// Returns `InvalidAllotment` if an amount is zero.
    #[ink(message)]
    fn enroll(
        &mut self,
        entries: Vec<EnrollmentEntry>,
        round_id: RoundId,
    ) -> Result<(), RoundVesterError>;

    /// Sends `account` its whole unclaimed allotment, ignoring the schedule.
    ///
    /// On success emits `Claimed`.
    #[ink(message)]
    fn admin_send(&mut self, account: AccountId) -> Result<Balance, RoundVesterError>;

    /// Transfers `amount` of `token` held by the contract to the caller.
    #[ink(message)]
    fn admin_withdraw(
        &mut self,
        amount: Balance,
        token: AccountId,
    ) -> Result<(), RoundVesterError>;

    /// Pulls `amount` of the vested token from the caller into the pool.
    /// Requires a prior allowance.
    #[ink(message)]
    fn admin_deposit(&mut self, amount: Balance) -> Result<(), RoundVesterError>;
}

#[ink::trait_definition]
pub trait RoundVesterView {
    /// Returns the account ID of the vested token.
    #[ink(message)]
    fn token(&self) -> AccountId;

    #[ink(message)]
    fn round_count(&self) -> RoundId;

    #[ink(message)]
    fn round(&self, round_id: RoundId) -> Option<VestingRound>;

    /// Returns all rounds in creation order.
    #[ink(message)]
    fn rounds(&self) -> Vec<VestingRound>;

    /// Returns the ledger record of `account` together with the amount it could claim now.
    #[ink(message)]
    fn participant(&self, account: AccountId) -> (ParticipantRecord, Balance);

    #[ink(message)]
    fn available_to_claim(&self, account: AccountId) -> Balance;

    #[ink(message)]
    fn vesting_state(&self, account: AccountId) -> VestingState;
}
