// Copyright 2025 Forecasting Technologies LTD.
//
// This file is part of Futurum.
//
// Futurum is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Futurum is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Futurum. If not, see <https://www.gnu.org/licenses/>.

use sp_arithmetic::{helpers_128bit::multiply_by_rational_with_rounding, Rounding};
use sp_core::U512;
use sp_runtime::{ArithmeticError, DispatchError};

/// Calculates `floor(total * numerator * balance / (denominator * initial_balance))`.
///
/// The products are formed in 512 bits, so the only possible error is a quotient that doesn't fit
/// into `u128`, which can't happen as long as `numerator <= denominator` and
/// `balance <= initial_balance`. Returns zero if either divisor is zero.
pub(crate) fn calculate_payout(
    total: u128,
    numerator: u128,
    balance: u128,
    denominator: u128,
    initial_balance: u128,
) -> Result<u128, DispatchError> {
    if denominator == 0 || initial_balance == 0 {
        return Ok(0);
    }
    let dividend = U512::from(total)
        .saturating_mul(U512::from(numerator))
        .saturating_mul(U512::from(balance));
    let divisor = U512::from(denominator).saturating_mul(U512::from(initial_balance));
    let result = dividend / divisor;
    if result > U512::from(u128::MAX) {
        return Err(ArithmeticError::Overflow.into());
    }
    Ok(result.low_u128())
}

/// Calculates the share `floor(withdrawn * amount / balance)` of the withdrawn counter which
/// accompanies `amount` out of `balance` claim units.
///
/// The sender keeps the rounding remainder, so the receiver's counter may fall short of its
/// exact share by less than one unit. The total of the counters is preserved, but the class as a
/// whole may redeem up to one unit per partial transfer more than its entitlement. Payouts are
/// capped by the pot, so the surplus can never exceed what was donated.
pub(crate) fn calculate_withdrawn_share(
    withdrawn: u128,
    amount: u128,
    balance: u128,
) -> Result<u128, DispatchError> {
    if withdrawn == 0 || amount == 0 {
        return Ok(0);
    }
    if amount >= balance {
        return Ok(withdrawn);
    }
    multiply_by_rational_with_rounding(withdrawn, amount, balance, Rounding::Down)
        .ok_or(ArithmeticError::Overflow.into())
}
