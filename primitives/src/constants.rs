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

#![allow(
    // Constants parameters inside `parameter_types!` already check
    // arithmetic operations at compile time
    clippy::arithmetic_side_effects
)]

#[cfg(feature = "mock")]
pub mod mock;

use crate::types::{Balance, Moment};
use frame_support::PalletId;

pub const BASE: u128 = 10_000_000_000;
pub const CENT: Balance = BASE / 100; // 100_000_000

/// Claim tokens use 18 decimals, so one whole claim token is `10^18` units.
pub const CLAIM_TOKEN_UNIT: Balance = 1_000_000_000_000_000_000;

/// Amount of claim tokens minted to a customer on registration.
pub const INITIAL_CUSTOMER_BALANCE: Balance = 1_000 * CLAIM_TOKEN_UNIT;

pub const MILLISECS_PER_DAY: Moment = 86_400_000;

/// Grace period assigned to newly created oracles.
pub const DEFAULT_GRACE_PERIOD: Moment = 7 * MILLISECS_PER_DAY;

pub const BID_ON_ADDRESSES_PALLET_ID: PalletId = PalletId(*b"ftm/boad");
