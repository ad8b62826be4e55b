//! Vested amount of a single participant at a point in time.
//!
//! Nothing is released before the cliff. At `unlock_cliff_end` the share
//! `1 - vesting_percent / SCALE` of the allotment is released at once and the
//! rest accrues linearly until `unlock_cliff_end + vesting_period`. Past that
//! moment the whole allotment is vested.

use pendzl::{
    math::errors::MathError,
    traits::{Balance, Timestamp},
};

use crate::{
    helpers::mul_div::mul_div_r_down,
    modules::vester::structs::{ParticipantRecord, VestingRound, VestingState, SCALE},
};

/// Total amount vested for `allotted` under `round` at `now`, ignoring claims.
pub fn vested_amount(
    allotted: Balance,
    round: &VestingRound,
    now: Timestamp,
) -> Result<Balance, MathError> {
    if allotted == 0 || now < round.unlock_start {
        return Ok(0);
    }

    let vesting_end = round.vesting_end().ok_or(MathError::Overflow)?;
    if now > vesting_end {
        return Ok(allotted);
    }
    if now < round.unlock_cliff_end {
        return Ok(0);
    }

    let at_cliff = mul_div_r_down(
        allotted,
        SCALE
            .checked_sub(round.vesting_percent)
            .ok_or(MathError::Underflow)?,
        SCALE,
    )?;
    let linear = allotted
        .checked_sub(at_cliff)
        .ok_or(MathError::Underflow)?;

    let accrued = if round.vesting_period == 0 {
        linear
    } else {
        let elapsed = now
            .checked_sub(round.unlock_cliff_end)
            .ok_or(MathError::Underflow)?;
        mul_div_r_down(linear, elapsed as u128, round.vesting_period as u128)?
    };

    at_cliff.checked_add(accrued).ok_or(MathError::Overflow)
}

/// Amount `record` may withdraw at `now`.
pub fn available_to_claim(
    record: &ParticipantRecord,
    round: &VestingRound,
    now: Timestamp,
) -> Result<Balance, MathError> {
    let vested = vested_amount(record.allotted, round, now)?;
    // claimed never exceeds what was vested when it was claimed, and vesting
    // only grows with time
    Ok(vested.saturating_sub(record.claimed))
}

pub fn vesting_state(
    record: &ParticipantRecord,
    round: &VestingRound,
    now: Timestamp,
) -> Result<VestingState, MathError> {
    let vested = vested_amount(record.allotted, round, now)?;
    Ok(if vested == 0 {
        VestingState::Unvested
    } else if vested < record.allotted {
        VestingState::PartiallyVested
    } else {
        VestingState::FullyVested
    })
}
