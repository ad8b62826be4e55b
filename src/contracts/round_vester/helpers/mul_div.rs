use ethnum::U256;
use pendzl::math::errors::MathError;

/// `x * y / denominator` rounded down, with the product held in 256 bits.
pub fn mul_div_r_down(x: u128, y: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivByZero);
    }

    if x == 0 || y == 0 {
        return Ok(0);
    }

    // u128 * u128 always fits in 256 bits
    let mul_u256 = U256::from(x)
        .checked_mul(U256::from(y))
        .ok_or(MathError::Overflow)?;
    let res_u256 = mul_u256 / U256::from(denominator);

    u128::try_from(res_u256).map_err(|_| MathError::Overflow)
}
