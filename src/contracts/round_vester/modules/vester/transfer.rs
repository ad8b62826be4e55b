use ink::{codegen::TraitCallBuilder, prelude::vec::Vec};
use pendzl::{
    contracts::psp22::{PSP22Error, PSP22Ref, PSP22},
    traits::{AccountId, Balance},
};

/// Value movement on the vested token. The contract talks to a PSP22
/// contract through it; tests substitute an in-memory ledger.
pub trait TokenTransfer {
    /// Moves `amount` from the contract to `to`.
    fn send(&mut self, to: AccountId, amount: Balance) -> Result<(), PSP22Error>;

    /// Moves `amount` from `from` to `to` using the contract's allowance.
    fn collect(&mut self, from: AccountId, to: AccountId, amount: Balance)
        -> Result<(), PSP22Error>;
}

/// A PSP22 token contract reached by cross-contract calls.
pub struct Psp22Token(PSP22Ref);

impl From<ink::primitives::AccountId> for Psp22Token {
    fn from(token: ink::primitives::AccountId) -> Self {
        Psp22Token(token.into())
    }
}

impl TokenTransfer for Psp22Token {
    fn send(&mut self, to: AccountId, amount: Balance) -> Result<(), PSP22Error> {
        // a failed dispatch is reported like a rejected transfer instead of trapping
        match self
            .0
            .call_mut()
            .transfer(to, amount, Vec::<u8>::new())
            .call_v1()
            .try_invoke()
        {
            Ok(Ok(result)) => result,
            _ => Err(PSP22Error::Custom("TransferCallFailed".into())),
        }
    }

    fn collect(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Balance,
    ) -> Result<(), PSP22Error> {
        match self
            .0
            .call_mut()
            .transfer_from(from, to, amount, Vec::<u8>::new())
            .call_v1()
            .try_invoke()
        {
            Ok(Ok(result)) => result,
            _ => Err(PSP22Error::Custom("TransferFromCallFailed".into())),
        }
    }
}
