// SPDX-License-Identifier: MIT
#![cfg_attr(not(feature = "std"), no_std, no_main)]

mod helpers;
mod modules;

/// A contract releasing a PSP22 token to participants according to vesting rounds.
///
/// Holders of `ROUND_ADMIN` create rounds (unlock start, cliff, linear period and
/// the share vesting linearly) and enroll participants with an allotment in one
/// of them. Participants claim what has vested so far. Admins may also push a
/// participant's whole remaining allotment and move tokens in and out of the pool.
///
/// Claims book the amount before the token transfer and undo the booking if the
/// transfer fails. Claiming messages are additionally guarded against re-entry.
#[pendzl::implementation(AccessControl, SetCodeHash)]
#[ink::contract]
pub mod round_vester {
    pub use crate::modules::vester::{
        errors::RoundVesterError,
        events::{Claimed, ParticipantsEnrolled, PoolDeposited, PoolWithdrawn, RoundCreated},
        storage_fields::vesting::VestingStorage,
        structs::{
            EnrollmentEntry, ParticipantRecord, PendingRelease, RoundId, VestingRound,
            VestingState, SCALE,
        },
        traits::{RoundVester, RoundVesterManage, RoundVesterView},
        transfer::{Psp22Token, TokenTransfer},
    };
    pub use ink::prelude::vec::Vec;

    /// A role type for access to round and pool management - selector of "ROUND_ADMIN".
    pub const ROUND_ADMIN: RoleType = ink::selector_id!("ROUND_ADMIN");

    #[ink(storage)]
    #[derive(pendzl::traits::StorageFieldGetter)]
    pub struct RoundVesterContract {
        #[storage_field]
        access: AccessControlData,
        #[storage_field]
        vesting: VestingStorage,
    }

    impl RoundVesterContract {
        #[ink(constructor)]
        pub fn new(admin: AccountId, token: AccountId) -> Result<Self, RoundVesterError> {
            let mut instance = RoundVesterContract {
                access: AccessControlData::new(Some(admin)),
                vesting: VestingStorage::new(&token),
            };

            instance._grant_role(ROUND_ADMIN, Some(admin))?;

            Ok(instance)
        }

        fn _ensure_round_admin(&self) -> Result<(), RoundVesterError> {
            self._ensure_has_role(ROUND_ADMIN, Some(self.env().caller()))?;
            Ok(())
        }

        fn _vested_token(&self) -> Psp22Token {
            self.vesting.token().into()
        }

        fn _emit_claimed(&self, account: AccountId, amount: Balance, timestamp: Timestamp) {
            self.env().emit_event::<Claimed>(Claimed {
                account,
                amount,
                timestamp,
            });
        }
    }

    impl RoundVester for RoundVesterContract {
        #[ink(message)]
        fn claim(&mut self) -> Result<Balance, RoundVesterError> {
            let caller = self.env().caller();
            let now = self.env().block_timestamp();
            let mut token = self._vested_token();

            self.vesting.enter()?;
            let result = self
                .vesting
                .stage_claim(&caller, now)
                .and_then(|pending| self.vesting.settle(&mut token, pending));
            self.vesting.exit();

            let amount = result?;
            self._emit_claimed(caller, amount, now);
            Ok(amount)
        }
    }

    impl RoundVesterManage for RoundVesterContract {
        #[ink(message)]
        fn create_round(
            &mut self,
            unlock_start: Timestamp,
            unlock_cliff_end: Timestamp,
            vesting_period: Timestamp,
            vesting_percent: u128,
        ) -> Result<RoundId, RoundVesterError> {
            self._ensure_round_admin()?;

            let round_id = self.vesting.insert_round(&VestingRound {
                unlock_start,
                unlock_cliff_end,
                vesting_period,
                vesting_percent,
            })?;
            self.env().emit_event::<RoundCreated>(RoundCreated {
                round_id,
                unlock_start,
                unlock_cliff_end,
                vesting_period,
                vesting_percent,
                timestamp: self.env().block_timestamp(),
            });

            Ok(round_id)
        }

        #[ink(message)]
        fn enroll(
            &mut self,
            entries: Vec<EnrollmentEntry>,
            round_id: RoundId,
        ) -> Result<(), RoundVesterError> {
            self._ensure_round_admin()?;

            self.vesting.enroll(&entries, round_id)?;
            self.env()
                .emit_event::<ParticipantsEnrolled>(ParticipantsEnrolled {
                    round_id,
                    entries,
                    timestamp: self.env().block_timestamp(),
                });

            Ok(())
        }

        #[ink(message)]
        fn admin_send(&mut self, account: AccountId) -> Result<Balance, RoundVesterError> {
            self._ensure_round_admin()?;
            let mut token = self._vested_token();

            self.vesting.enter()?;
            let result = self
                .vesting
                .stage_full_release(&account)
                .and_then(|pending| self.vesting.settle(&mut token, pending));
            self.vesting.exit();

            let amount = result?;
            self._emit_claimed(account, amount, self.env().block_timestamp());
            Ok(amount)
        }

        #[ink(message)]
        fn admin_withdraw(
            &mut self,
            amount: Balance,
            token: AccountId,
        ) -> Result<(), RoundVesterError> {
            self._ensure_round_admin()?;
            let caller = self.env().caller();

            let mut psp22: Psp22Token = token.into();
            psp22.send(caller, amount)?;
            self.env().emit_event::<PoolWithdrawn>(PoolWithdrawn {
                to: caller,
                token,
                amount,
            });

            Ok(())
        }

        #[ink(message)]
        fn admin_deposit(&mut self, amount: Balance) -> Result<(), RoundVesterError> {
            self._ensure_round_admin()?;
            let caller = self.env().caller();

            self._vested_token()
                .collect(caller, self.env().account_id(), amount)?;
            self.env().emit_event::<PoolDeposited>(PoolDeposited {
                from: caller,
                amount,
            });

            Ok(())
        }
    }

    impl RoundVesterView for RoundVesterContract {
        #[ink(message)]
        fn token(&self) -> AccountId {
            self.vesting.token()
        }

        #[ink(message)]
        fn round_count(&self) -> RoundId {
            self.vesting.round_count()
        }

        #[ink(message)]
        fn round(&self, round_id: RoundId) -> Option<VestingRound> {
            self.vesting.round(round_id)
        }

        #[ink(message)]
        fn rounds(&self) -> Vec<VestingRound> {
            self.vesting.rounds()
        }

        #[ink(message)]
        fn participant(&self, account: AccountId) -> (ParticipantRecord, Balance) {
            (
                self.vesting.participant(&account),
                self.available_to_claim(account),
            )
        }

        #[ink(message)]
        fn available_to_claim(&self, account: AccountId) -> Balance {
            self.vesting
                .available_to_claim(&account, self.env().block_timestamp())
                .unwrap_or(0)
        }

        #[ink(message)]
        fn vesting_state(&self, account: AccountId) -> VestingState {
            self.vesting
                .vesting_state(&account, self.env().block_timestamp())
                .unwrap_or(VestingState::Unvested)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use ink::env::{test, DefaultEnvironment};

        fn accounts() -> test::DefaultAccounts<DefaultEnvironment> {
            test::default_accounts::<DefaultEnvironment>()
        }

        fn set_caller(account: AccountId) {
            test::set_caller::<DefaultEnvironment>(account);
        }

        fn set_time(timestamp: Timestamp) {
            test::set_block_timestamp::<DefaultEnvironment>(timestamp);
        }

        fn event_count() -> usize {
            test::recorded_events().count()
        }

        fn last_event_data() -> Vec<u8> {
            test::recorded_events()
                .last()
                .expect("an event was emitted")
                .data
        }

        // alice administers, django is the vested token, bob holds 1000 in
        // round 0: start 100, cliff 200, period 100, half linear
        fn make_vester() -> RoundVesterContract {
            let accs = accounts();
            set_caller(accs.alice);
            set_time(0);

            let mut vester =
                RoundVesterContract::new(accs.alice, accs.django).expect("constructor works");
            vester
                .create_round(100, 200, 100, SCALE / 2)
                .expect("round created");
            vester
                .enroll(
                    vec![EnrollmentEntry {
                        account: accs.bob,
                        amount: 1000,
                    }],
                    0,
                )
                .expect("bob enrolled");
            vester
        }

        #[ink::test]
        fn constructor_sets_token() {
            let vester = make_vester();
            assert_eq!(vester.token(), accounts().django);
        }

        #[ink::test]
        fn create_round_emits_event() {
            let mut vester = make_vester();
            set_time(42);
            let before = event_count();

            assert_eq!(vester.create_round(1_000, 2_000, 500, SCALE / 4), Ok(1));

            assert_eq!(event_count(), before + 1);
            let event = <RoundCreated as scale::Decode>::decode(&mut &last_event_data()[..])
                .expect("decodes");
            assert_eq!(event.round_id, 1);
            assert_eq!(event.unlock_start, 1_000);
            assert_eq!(event.unlock_cliff_end, 2_000);
            assert_eq!(event.vesting_period, 500);
            assert_eq!(event.vesting_percent, SCALE / 4);
            assert_eq!(event.timestamp, 42);
            assert_eq!(vester.round_count(), 2);
        }

        #[ink::test]
        fn create_round_rejects_equal_start_and_cliff() {
            let mut vester = make_vester();
            assert_eq!(
                vester.create_round(500, 500, 100, SCALE / 2),
                Err(RoundVesterError::InvalidSchedule)
            );
            assert_eq!(vester.round_count(), 1);
        }

        #[ink::test]
        fn create_round_rejects_unrepresentable_vesting_end() {
            let mut vester = make_vester();
            let events_before = event_count();
            assert_eq!(
                vester.create_round(1, u64::MAX - 10, 100, SCALE / 2),
                Err(RoundVesterError::InvalidSchedule)
            );
            assert_eq!(vester.round_count(), 1);
            assert_eq!(event_count(), events_before);
        }

        #[ink::test]
        fn admin_messages_require_role() {
            let accs = accounts();
            let mut vester = make_vester();
            set_caller(accs.bob);

            assert!(matches!(
                vester.create_round(1, 2, 3, 0),
                Err(RoundVesterError::Unauthorized(_))
            ));
            assert!(matches!(
                vester.enroll(
                    vec![EnrollmentEntry {
                        account: accs.eve,
                        amount: 1
                    }],
                    0
                ),
                Err(RoundVesterError::Unauthorized(_))
            ));
            assert!(matches!(
                vester.admin_send(accs.bob),
                Err(RoundVesterError::Unauthorized(_))
            ));
            assert!(matches!(
                vester.admin_withdraw(1, accs.django),
                Err(RoundVesterError::Unauthorized(_))
            ));
            assert!(matches!(
                vester.admin_deposit(1),
                Err(RoundVesterError::Unauthorized(_))
            ));
            assert!(!vester.participant(accs.eve).0.is_enrolled());
        }

        #[ink::test]
        fn enroll_emits_batch_event() {
            let accs = accounts();
            let mut vester = make_vester();
            set_time(7);
            let entries = vec![
                EnrollmentEntry {
                    account: accs.charlie,
                    amount: 10,
                },
                EnrollmentEntry {
                    account: accs.eve,
                    amount: 20,
                },
            ];

            assert_eq!(vester.enroll(entries.clone(), 0), Ok(()));

            let event =
                <ParticipantsEnrolled as scale::Decode>::decode(&mut &last_event_data()[..])
                    .expect("decodes");
            assert_eq!(event.round_id, 0);
            assert_eq!(event.entries, entries);
            assert_eq!(event.timestamp, 7);
        }

        #[ink::test]
        fn enroll_twice_keeps_first_allotment() {
            let accs = accounts();
            let mut vester = make_vester();
            let before = event_count();

            assert_eq!(
                vester.enroll(
                    vec![EnrollmentEntry {
                        account: accs.bob,
                        amount: 1
                    }],
                    0
                ),
                Err(RoundVesterError::AlreadyEnrolled)
            );
            assert_eq!(event_count(), before);
            assert_eq!(
                vester.participant(accs.bob).0,
                ParticipantRecord {
                    allotted: 1000,
                    claimed: 0,
                    round_index: 0,
                }
            );
        }

        #[ink::test]
        fn enroll_into_missing_round() {
            let accs = accounts();
            let mut vester = make_vester();
            assert_eq!(
                vester.enroll(
                    vec![EnrollmentEntry {
                        account: accs.eve,
                        amount: 1
                    }],
                    1
                ),
                Err(RoundVesterError::RoundNotFound)
            );
        }

        #[ink::test]
        fn availability_follows_schedule() {
            let accs = accounts();
            let vester = make_vester();

            for (now, expected) in [(100, 0), (150, 0), (200, 500), (250, 750), (301, 1000)] {
                set_time(now);
                assert_eq!(vester.available_to_claim(accs.bob), expected, "at {}", now);
                assert_eq!(vester.participant(accs.bob).1, expected);
            }
            assert_eq!(vester.vesting_state(accs.bob), VestingState::FullyVested);
        }

        #[ink::test]
        fn claim_before_unlock_start_is_too_early() {
            let accs = accounts();
            let mut vester = make_vester();
            set_caller(accs.bob);
            set_time(50);

            assert_eq!(vester.claim(), Err(RoundVesterError::TooEarly));
            assert_eq!(vester.participant(accs.bob).0.claimed, 0);
        }

        #[ink::test]
        fn claim_between_start_and_cliff_has_nothing() {
            let accs = accounts();
            let mut vester = make_vester();
            set_caller(accs.bob);
            set_time(150);

            assert_eq!(vester.claim(), Err(RoundVesterError::NothingToClaim));
        }

        #[ink::test]
        fn failed_claim_releases_the_lock() {
            let accs = accounts();
            let mut vester = make_vester();
            set_caller(accs.bob);
            set_time(50);

            assert_eq!(vester.claim(), Err(RoundVesterError::TooEarly));
            // a held lock would turn this into ReentrantCall
            assert_eq!(vester.claim(), Err(RoundVesterError::TooEarly));
        }

        #[ink::test]
        fn unenrolled_caller_has_nothing_to_claim() {
            let accs = accounts();
            let mut vester = make_vester();
            set_caller(accs.eve);
            set_time(1_000);

            assert_eq!(vester.claim(), Err(RoundVesterError::NothingToClaim));
            assert_eq!(vester.vesting_state(accs.eve), VestingState::Unvested);
        }

        #[ink::test]
        fn admin_send_to_unenrolled_account() {
            let accs = accounts();
            let mut vester = make_vester();

            assert_eq!(
                vester.admin_send(accs.eve),
                Err(RoundVesterError::NothingToClaim)
            );
        }

        #[ink::test]
        fn rounds_listed_in_creation_order() {
            let mut vester = make_vester();
            vester.create_round(10, 20, 0, 0).expect("round created");

            let rounds = vester.rounds();
            assert_eq!(rounds.len(), 2);
            assert_eq!(rounds[0].unlock_start, 100);
            assert_eq!(rounds[1].unlock_start, 10);
            assert_eq!(vester.round(1), Some(rounds[1]));
            assert_eq!(vester.round(2), None);
        }
    }

}
