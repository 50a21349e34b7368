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

use alloc::vec::Vec;
use crate::mock::{
    consts::{ALICE, BOB, CHARLIE, COLLATERAL, DAVE, EVE, INITIAL_FUNDS, SECOND_COLLATERAL},
    runtime::{Runtime, System},
};
use futurum_primitives::types::{AccountIdTest, Balance, CurrencyId};
use sp_io::TestExternalities;
use sp_runtime::BuildStorage;

pub struct ExtBuilder {
    balances: Vec<(AccountIdTest, Balance)>,
    tokens: Vec<(AccountIdTest, CurrencyId, Balance)>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        let accounts = [ALICE, BOB, CHARLIE, DAVE, EVE];
        Self {
            balances: accounts.iter().map(|&who| (who, INITIAL_FUNDS)).collect(),
            tokens: accounts
                .iter()
                .flat_map(|&who| {
                    [(who, COLLATERAL, INITIAL_FUNDS), (who, SECOND_COLLATERAL, INITIAL_FUNDS)]
                })
                .collect(),
        }
    }
}

impl ExtBuilder {
    pub fn build() -> TestExternalities {
        Self::default().build_with()
    }

    pub fn build_with(self) -> TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();

        // see the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();

        pallet_balances::GenesisConfig::<Runtime> { balances: self.balances }
            .assimilate_storage(&mut t)
            .unwrap();

        orml_tokens::GenesisConfig::<Runtime> { balances: self.tokens }
            .assimilate_storage(&mut t)
            .unwrap();

        let mut test_ext: TestExternalities = t.into();

        test_ext.execute_with(|| System::set_block_number(1));

        test_ext
    }
}
