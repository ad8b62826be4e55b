use ink::{prelude::vec::Vec, storage::Mapping};
use pendzl::{
    math::errors::MathError,
    traits::{AccountId, Balance, Timestamp},
};

use crate::modules::vester::{
    calculator,
    errors::RoundVesterError,
    structs::{
        EnrollmentEntry, ParticipantRecord, PendingRelease, RoundId, VestingRound, VestingState,
        SCALE,
    },
    transfer::TokenTransfer,
};

/// Round registry and participant ledger.
#[derive(Debug)]
#[pendzl::storage_item]
pub struct VestingStorage {
    token: AccountId,
    #[lazy]
    next_round_id: RoundId,
    rounds: Mapping<RoundId, VestingRound>,
    participants: Mapping<AccountId, ParticipantRecord>,
    #[lazy]
    entered: bool,
}

impl VestingStorage {
    pub fn new(token: &AccountId) -> Self {
        VestingStorage {
            token: *token,
            next_round_id: Default::default(),
            rounds: Mapping::new(),
            participants: Mapping::new(),
            entered: Default::default(),
        }
    }

    pub fn token(&self) -> AccountId {
        self.token
    }

    pub fn round_count(&self) -> RoundId {
        self.next_round_id.get().unwrap_or(0)
    }

    pub fn round(&self, id: RoundId) -> Option<VestingRound> {
        self.rounds.get(id)
    }

    pub fn rounds(&self) -> Vec<VestingRound> {
        (0..self.round_count())
            .filter_map(|id| self.rounds.get(id))
            .collect()
    }

    pub fn insert_round(&mut self, round: &VestingRound) -> Result<RoundId, RoundVesterError> {
        if round.unlock_start >= round.unlock_cliff_end
            || round.vesting_percent > SCALE
            || round.vesting_end().is_none()
        {
            return Err(RoundVesterError::InvalidSchedule);
        }

        let round_id = self.round_count();
        self.rounds.insert(round_id, round);
        self.next_round_id
            .set(&(round_id.checked_add(1).ok_or(MathError::Overflow)?));
        Ok(round_id)
    }

    pub fn participant(&self, account: &AccountId) -> ParticipantRecord {
        self.participants.get(account).unwrap_or_default()
    }

    /// Writes every entry or none of them.
    pub fn enroll(
        &mut self,
        entries: &[EnrollmentEntry],
        round_id: RoundId,
    ) -> Result<(), RoundVesterError> {
        if round_id >= self.round_count() {
            return Err(RoundVesterError::RoundNotFound);
        }

        for (i, entry) in entries.iter().enumerate() {
            if entry.amount == 0 {
                return Err(RoundVesterError::InvalidAllotment);
            }
            if self.participant(&entry.account).is_enrolled()
                || entries[..i].iter().any(|e| e.account == entry.account)
            {
                return Err(RoundVesterError::AlreadyEnrolled);
            }
        }

        for entry in entries {
            self.participants.insert(
                entry.account,
                &ParticipantRecord {
                    allotted: entry.amount,
                    claimed: 0,
                    round_index: round_id,
                },
            );
        }
        Ok(())
    }

    fn round_of(&self, record: &ParticipantRecord) -> Result<VestingRound, RoundVesterError> {
        self.round(record.round_index)
            .ok_or(RoundVesterError::RoundNotFound)
    }

    pub fn available_to_claim(
        &self,
        account: &AccountId,
        now: Timestamp,
    ) -> Result<Balance, RoundVesterError> {
        let record = self.participant(account);
        if !record.is_enrolled() {
            return Ok(0);
        }
        let round = self.round_of(&record)?;
        Ok(calculator::available_to_claim(&record, &round, now)?)
    }

    pub fn vesting_state(
        &self,
        account: &AccountId,
        now: Timestamp,
    ) -> Result<VestingState, RoundVesterError> {
        let record = self.participant(account);
        if !record.is_enrolled() {
            return Ok(VestingState::Unvested);
        }
        let round = self.round_of(&record)?;
        Ok(calculator::vesting_state(&record, &round, now)?)
    }

    /// Books the amount vested for `account` at `now` as claimed.
    pub fn stage_claim(
        &mut self,
        account: &AccountId,
        now: Timestamp,
    ) -> Result<PendingRelease, RoundVesterError> {
        let record = self.participant(account);
        if !record.is_enrolled() {
            return Err(RoundVesterError::NothingToClaim);
        }
        let round = self.round_of(&record)?;
        if now <= round.unlock_start {
            return Err(RoundVesterError::TooEarly);
        }

        let amount = calculator::available_to_claim(&record, &round, now)?;
        if amount == 0 {
            return Err(RoundVesterError::NothingToClaim);
        }
        self.stage(account, record, amount)
    }

    /// Books everything still unclaimed by `account`, regardless of the schedule.
    pub fn stage_full_release(
        &mut self,
        account: &AccountId,
    ) -> Result<PendingRelease, RoundVesterError> {
        let record = self.participant(account);
        let amount = record.remaining();
        if amount == 0 {
            return Err(RoundVesterError::NothingToClaim);
        }
        self.stage(account, record, amount)
    }

    fn stage(
        &mut self,
        account: &AccountId,
        mut record: ParticipantRecord,
        amount: Balance,
    ) -> Result<PendingRelease, RoundVesterError> {
        let claimed_before = record.claimed;
        record.claimed = record
            .claimed
            .checked_add(amount)
            .ok_or(MathError::Overflow)?;
        if record.claimed > record.allotted {
            return Err(MathError::Overflow.into());
        }
        self.participants.insert(account, &record);

        Ok(PendingRelease {
            account: *account,
            amount,
            claimed_before,
        })
    }

    pub fn rollback(&mut self, pending: &PendingRelease) {
        let mut record = self.participant(&pending.account);
        record.claimed = pending.claimed_before;
        self.participants.insert(pending.account, &record);
    }

    /// Pays out a staged release, undoing the booking if the token refuses.
    pub fn settle<T: TokenTransfer>(
        &mut self,
        token: &mut T,
        pending: PendingRelease,
    ) -> Result<Balance, RoundVesterError> {
        match token.send(pending.account, pending.amount) {
            Ok(()) => Ok(pending.amount),
            Err(e) => {
                ink::env::debug_println!(
                    "release of {} to {:?} rolled back: {:?}",
                    pending.amount,
                    pending.account,
                    e
                );
                self.rollback(&pending);
                Err(RoundVesterError::TransferFailed(e))
            }
        }
    }

    pub fn enter(&mut self) -> Result<(), RoundVesterError> {
        if self.entered.get().unwrap_or(false) {
            return Err(RoundVesterError::ReentrantCall);
        }
        self.entered.set(&true);
        Ok(())
    }

    pub fn exit(&mut self) {
        self.entered.set(&false);
    }
}
