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

pub use crate::{
    asset::*,
    oracle::{Oracle, OracleStatus},
};
/// Signed counter-part of Balance
pub type Amount = i128;

/// Balance of an account.
pub type Balance = u128;

/// ORML adapter
pub type BasicCurrencyAdapter<R, B> = orml_currencies::BasicCurrencyAdapter<R, B, Amount, Balance>;

/// Identifier of a claim token class; a 256-bit hash of the oracle id and the originator.
pub type ClaimId = [u8; 32];

pub type CurrencyId = Asset;

/// Time
pub type Moment = u64;

/// The oracle identifier type.
pub type OracleId = u64;

// Tests

pub type AccountIdTest = u128;

#[cfg(feature = "std")]
pub type BlockTest<R> = frame_system::mocking::MockBlock<R>;
