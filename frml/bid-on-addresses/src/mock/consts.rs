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

use futurum_primitives::{constants::CLAIM_TOKEN_UNIT, types::Asset};

pub(crate) const COLLATERAL: Asset = Asset::ForeignAsset(0);
pub(crate) const SECOND_COLLATERAL: Asset = Asset::ForeignAsset(1);

pub(crate) const ALICE: u128 = 0;
pub(crate) const BOB: u128 = 1;
pub(crate) const CHARLIE: u128 = 2;
pub(crate) const DAVE: u128 = 3;
pub(crate) const EVE: u128 = 4;

/// The funds of every account created by the `ExtBuilder`.
pub(crate) const INITIAL_FUNDS: u128 = 1_000 * CLAIM_TOKEN_UNIT;
