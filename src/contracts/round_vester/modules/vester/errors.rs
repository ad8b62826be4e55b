use pendzl::{
    contracts::{access_control::AccessControlError, psp22::PSP22Error},
    math::errors::MathError,
};

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum RoundVesterError {
    MathError(MathError),
    /// The caller lacks the role required by the message.
    Unauthorized(AccessControlError),
    /// The token contract rejected the transfer or the call to it failed.
    TransferFailed(PSP22Error),

    /// `unlock_start` is not before `unlock_cliff_end`, or `vesting_percent` exceeds `SCALE`.
    InvalidSchedule,
    RoundNotFound,
    /// The account already holds an allotment or has claimed, or appears twice in one batch.
    AlreadyEnrolled,
    InvalidAllotment,
    /// The round has not passed its `unlock_start` yet.
    TooEarly,
    NothingToClaim,
    ReentrantCall,
}

impl From<MathError> for RoundVesterError {
    fn from(e: MathError) -> Self {
        RoundVesterError::MathError(e)
    }
}

impl From<AccessControlError> for RoundVesterError {
    fn from(e: AccessControlError) -> Self {
        RoundVesterError::Unauthorized(e)
    }
}

impl From<PSP22Error> for RoundVesterError {
    fn from(e: PSP22Error) -> Self {
        RoundVesterError::TransferFailed(e)
    }
}
