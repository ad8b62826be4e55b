// SPDX-License-Identifier: MIT
#![cfg_attr(not(feature = "std"), no_std, no_main)]

/// Plain PSP22 token whose whole supply goes to the deployer. Used as the
/// vested token in end-to-end tests.
#[pendzl::implementation(PSP22)]
#[ink::contract]
pub mod test_token {
    use pendzl::contracts::psp22::PSP22Error;

    #[ink(storage)]
    #[derive(Default, pendzl::traits::StorageFieldGetter)]
    pub struct TestTokenContract {
        #[storage_field]
        data: PSP22Data,
    }

    impl TestTokenContract {
        #[ink(constructor)]
        pub fn new(initial_supply: Balance) -> Result<Self, PSP22Error> {
            let mut instance = Self::default();
            let caller = instance.env().caller();
            PSP22Internal::_mint_to(&mut instance, &caller, &initial_supply)?;
            Ok(instance)
        }
    }
}
