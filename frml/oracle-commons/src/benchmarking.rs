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
    // Auto-generated code is a no man's land
    clippy::arithmetic_side_effects
)]
#![cfg(feature = "runtime-benchmarks")]

use crate::{Pallet as OracleCommons, *};
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_oracle() {
        let caller: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        create_oracle(RawOrigin::Signed(caller));

        assert!(Oracles::<T>::contains_key(T::OracleId::from(0u8)));
    }

    #[benchmark]
    fn update_grace_period_ends() -> Result<(), BenchmarkError> {
        let owner: T::AccountId = whitelisted_caller();
        let oracle_id = <OracleCommons<T> as OracleCommonsPalletApi>::create_oracle(owner.clone())?;
        let grace_period_ends = <OracleCommons<T> as OracleCommonsPalletApi>::now();

        #[extrinsic_call]
        update_grace_period_ends(RawOrigin::Signed(owner), oracle_id, grace_period_ends);

        Ok(())
    }

    #[benchmark]
    fn change_oracle_owner() -> Result<(), BenchmarkError> {
        let owner: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("new_owner", 0, 0);
        let oracle_id = <OracleCommons<T> as OracleCommonsPalletApi>::create_oracle(owner.clone())?;

        #[extrinsic_call]
        change_oracle_owner(RawOrigin::Signed(owner), oracle_id, new_owner.clone());

        let oracle = <OracleCommons<T> as OracleCommonsPalletApi>::oracle(&oracle_id)?;
        assert!(oracle.is_owner(&new_owner));
        Ok(())
    }

    impl_benchmark_test_suite!(
        OracleCommons,
        crate::mock::ExtBuilder::default().build(),
        crate::mock::Runtime
    );
}
