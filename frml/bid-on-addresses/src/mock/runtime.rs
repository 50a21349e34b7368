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

use crate as frml_bid_on_addresses;
use crate::{types::HashedClaimIdManager, weights::WeightInfo};
use frame_support::{construct_runtime, derive_impl, traits::Everything, Blake2_256};
use futurum_primitives::{
    constants::mock::{
        BidOnAddressesPalletId, DefaultGracePeriod, ExistentialDeposit, ExistentialDeposits,
        GetNativeCurrencyId, InitialCustomerBalance, MaxCollaterals, MaxLocks, MaxReserves,
        MaxTransferBatch, MinimumPeriod,
    },
    types::{
        AccountIdTest, Amount, Balance, BasicCurrencyAdapter, BlockTest, CurrencyId, Moment,
        OracleId,
    },
};
use sp_runtime::traits::IdentityLookup;

construct_runtime! {
    pub enum Runtime {
        BidOnAddresses: frml_bid_on_addresses,
        Balances: pallet_balances,
        Currencies: orml_currencies,
        OracleCommons: frml_oracle_commons,
        System: frame_system,
        Timestamp: pallet_timestamp,
        Tokens: orml_tokens,
    }
}

impl frml_bid_on_addresses::Config for Runtime {
    type ClaimIdManager = HashedClaimIdManager<OracleId, AccountIdTest, Blake2_256>;
    type InitialCustomerBalance = InitialCustomerBalance;
    type MaxCollaterals = MaxCollaterals;
    type MaxTransferBatch = MaxTransferBatch;
    type MultiCurrency = Currencies;
    type OracleCommons = OracleCommons;
    type PalletId = BidOnAddressesPalletId;
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = WeightInfo<Runtime>;
}

impl frml_oracle_commons::Config for Runtime {
    type DefaultGracePeriod = DefaultGracePeriod;
    type OnOracleCreated = ();
    type OracleId = OracleId;
    type RuntimeEvent = RuntimeEvent;
    type Timestamp = Timestamp;
    type WeightInfo = frml_oracle_commons::weights::WeightInfo<Runtime>;
}

impl orml_currencies::Config for Runtime {
    type GetNativeCurrencyId = GetNativeCurrencyId;
    type MultiCurrency = Tokens;
    type NativeCurrency = BasicCurrencyAdapter<Runtime, Balances>;
    type WeightInfo = ();
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Runtime {
    type AccountStore = System;
    type Balance = Balance;
    type ExistentialDeposit = ExistentialDeposit;
    type MaxLocks = MaxLocks;
    type MaxReserves = MaxReserves;
    type ReserveIdentifier = [u8; 8];
}

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Runtime {
    type AccountData = pallet_balances::AccountData<Balance>;
    type AccountId = AccountIdTest;
    type Block = BlockTest<Runtime>;
    type Lookup = IdentityLookup<Self::AccountId>;
}

impl pallet_timestamp::Config for Runtime {
    type MinimumPeriod = MinimumPeriod;
    type Moment = Moment;
    type OnTimestampSet = ();
    type WeightInfo = ();
}

impl orml_tokens::Config for Runtime {
    type Amount = Amount;
    type Balance = Balance;
    type CurrencyId = CurrencyId;
    type DustRemovalWhitelist = Everything;
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposits = ExistentialDeposits;
    type MaxLocks = MaxLocks;
    type MaxReserves = MaxReserves;
    type CurrencyHooks = ();
    type ReserveIdentifier = [u8; 8];
    type WeightInfo = ();
}
