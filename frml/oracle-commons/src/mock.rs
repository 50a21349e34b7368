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

#![cfg(test)]

use crate::{self as frml_oracle_commons, weights::WeightInfo};
use core::cell::RefCell;
use frame_support::{construct_runtime, derive_impl};
use futurum_primitives::{
    constants::mock::{DefaultGracePeriod, MinimumPeriod},
    traits::OnOracleCreated,
    types::{AccountIdTest, BlockTest, Moment, OracleId},
};
use sp_runtime::{traits::IdentityLookup, BuildStorage};

construct_runtime!(
    pub enum Runtime {
        OracleCommons: frml_oracle_commons,
        System: frame_system,
        Timestamp: pallet_timestamp,
    }
);

impl crate::Config for Runtime {
    type DefaultGracePeriod = DefaultGracePeriod;
    type OnOracleCreated = MockOnOracleCreated;
    type OracleId = OracleId;
    type RuntimeEvent = RuntimeEvent;
    type Timestamp = Timestamp;
    type WeightInfo = WeightInfo<Runtime>;
}

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Runtime {
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

thread_local! {
    pub static CREATED_ORACLES: RefCell<Vec<(OracleId, AccountIdTest)>> =
        const { RefCell::new(vec![]) };
}

/// Records every announced oracle so tests can inspect the hook invocations.
pub struct MockOnOracleCreated;

impl MockOnOracleCreated {
    pub fn created_oracles() -> Vec<(OracleId, AccountIdTest)> {
        CREATED_ORACLES.with(|values| values.borrow().clone())
    }
}

impl OnOracleCreated<OracleId, AccountIdTest> for MockOnOracleCreated {
    fn on_oracle_created(oracle_id: &OracleId, owner: &AccountIdTest) {
        CREATED_ORACLES.with(|values| values.borrow_mut().push((*oracle_id, *owner)));
    }
}

#[derive(Default)]
pub struct ExtBuilder {}

impl ExtBuilder {
    pub fn build(self) -> sp_io::TestExternalities {
        let t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();

        CREATED_ORACLES.with(|values| values.borrow_mut().clear());

        let mut test_ext: sp_io::TestExternalities = t.into();
        test_ext.execute_with(|| System::set_block_number(1));
        test_ext
    }
}
