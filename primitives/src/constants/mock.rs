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

#![cfg(feature = "mock")]

pub use super::*;
use crate::types::{Asset, Balance, CurrencyId, Moment};
use frame_support::{parameter_types, PalletId};
use orml_traits::parameter_type_with_key;

// Bid on addresses
parameter_types! {
    pub const BidOnAddressesPalletId: PalletId = BID_ON_ADDRESSES_PALLET_ID;
    pub const InitialCustomerBalance: Balance = INITIAL_CUSTOMER_BALANCE;
    pub const MaxCollaterals: u32 = 4;
    pub const MaxTransferBatch: u32 = 8;
}

// Oracle commons
parameter_types! {
    pub const DefaultGracePeriod: Moment = DEFAULT_GRACE_PERIOD;
}

// Balance
parameter_types! {
    pub const ExistentialDeposit: u128 = CENT;
    pub const MaxLocks: u32 = 50;
    pub const MaxReserves: u32 = 50;
}

// ORML
parameter_types! {
    pub const GetNativeCurrencyId: CurrencyId = Asset::Native;
}

parameter_type_with_key! {
    // Foreign assets can be held in any amount.
    pub ExistentialDeposits: |currency_id: CurrencyId| -> Balance {
        match currency_id {
            Asset::Native => ExistentialDeposit::get(),
            Asset::ForeignAsset(_) => 0,
        }
    };
}

// Time
parameter_types! {
    pub const MinimumPeriod: u64 = 6_000;
}
