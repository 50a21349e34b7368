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

use crate::{Pallet as BidOnAddresses, *};
use alloc::vec::Vec;
use frame_benchmarking::v2::*;
use frame_support::traits::Get;
use frame_system::RawOrigin;
use futurum_primitives::{
    traits::{OracleCommonsPalletApi, RedemptionApi},
    types::{Asset, ClaimId},
};
use orml_traits::MultiCurrency;
use sp_runtime::{traits::Zero, SaturatedConversion};

fn collateral(index: u32) -> Asset {
    Asset::ForeignAsset(index)
}

fn donation<T: Config>() -> BalanceOf<T> {
    100_000_000_000u128.saturated_into()
}

fn create_oracle<T: Config>(owner: &AccountIdOf<T>) -> OracleIdOf<T> {
    T::OracleCommons::create_oracle(owner.clone()).unwrap()
}

fn donate<T: Config>(oracle_id: OracleIdOf<T>, donor: &AccountIdOf<T>, collateral: Asset) {
    T::MultiCurrency::deposit(collateral, donor, donation::<T>()).unwrap();
    BidOnAddresses::<T>::donate(
        RawOrigin::Signed(donor.clone()).into(),
        collateral,
        oracle_id,
        donation::<T>(),
        donor.clone(),
    )
    .unwrap();
}

/// Sets up a finished oracle with `c` collaterals, all of which were already partially withdrawn
/// by `holder`, which maximizes the number of withdrawn counters touched by claim transfers.
fn setup_redeemed_claims<T: Config>(holder: &AccountIdOf<T>, c: u32) -> (OracleIdOf<T>, ClaimId) {
    let owner: AccountIdOf<T> = account("owner", 0, 0);
    let oracle_id = create_oracle::<T>(&owner);
    let other: AccountIdOf<T> = account("other", 0, 0);
    for who in [holder, &other] {
        BidOnAddresses::<T>::register_customer(RawOrigin::Signed(who.clone()).into(), oracle_id)
            .unwrap();
    }
    for index in 0..c {
        donate::<T>(oracle_id, &owner, collateral(index));
    }
    for who in [holder, &other] {
        BidOnAddresses::<T>::report_numerator(
            RawOrigin::Signed(owner.clone()).into(),
            oracle_id,
            who.clone(),
            1u8.into(),
        )
        .unwrap();
    }
    BidOnAddresses::<T>::finish_oracle(RawOrigin::Signed(owner).into(), oracle_id).unwrap();
    for index in 0..c {
        BidOnAddresses::<T>::withdraw_collateral(
            RawOrigin::Signed(holder.clone()).into(),
            collateral(index),
            oracle_id,
            holder.clone(),
        )
        .unwrap();
    }
    (oracle_id, <BidOnAddresses<T> as RedemptionApi>::claim_id(oracle_id, holder))
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn register_customer() {
        let owner: AccountIdOf<T> = account("owner", 0, 0);
        let oracle_id = create_oracle::<T>(&owner);
        let caller: AccountIdOf<T> = whitelisted_caller();

        #[extrinsic_call]
        register_customer(RawOrigin::Signed(caller.clone()), oracle_id);

        assert!(Registrations::<T>::contains_key(oracle_id, caller));
    }

    #[benchmark]
    fn donate() {
        let owner: AccountIdOf<T> = account("owner", 0, 0);
        let oracle_id = create_oracle::<T>(&owner);
        let caller: AccountIdOf<T> = whitelisted_caller();
        let amount = donation::<T>();
        T::MultiCurrency::deposit(collateral(0), &caller, amount).unwrap();

        #[extrinsic_call]
        donate(RawOrigin::Signed(caller.clone()), collateral(0), oracle_id, amount, caller.clone());

        assert_eq!(CollateralTotals::<T>::get(oracle_id, collateral(0)), amount);
    }

    #[benchmark]
    fn report_numerator() {
        let caller: AccountIdOf<T> = whitelisted_caller();
        let oracle_id = create_oracle::<T>(&caller);
        let customer: AccountIdOf<T> = account("customer", 0, 0);

        #[extrinsic_call]
        report_numerator(RawOrigin::Signed(caller), oracle_id, customer, 45u8.into());
    }

    #[benchmark]
    fn finish_oracle() -> Result<(), BenchmarkError> {
        let owner: AccountIdOf<T> = account("owner", 0, 0);
        let oracle_id = create_oracle::<T>(&owner);
        // Finishing on behalf of somebody else requires the additional check of the grace period.
        T::OracleCommons::mutate_oracle(&oracle_id, |oracle| {
            oracle.grace_period_ends = Zero::zero();
            Ok(())
        })?;
        let caller: AccountIdOf<T> = whitelisted_caller();

        #[extrinsic_call]
        finish_oracle(RawOrigin::Signed(caller), oracle_id);

        assert!(T::OracleCommons::oracle(&oracle_id)?.is_finished());
        Ok(())
    }

    #[benchmark]
    fn transfer_claim(c: Linear<0, { T::MaxCollaterals::get() }>) {
        let caller: AccountIdOf<T> = whitelisted_caller();
        let (_, claim_id) = setup_redeemed_claims::<T>(&caller, c);
        let to: AccountIdOf<T> = account("to", 0, 0);
        let amount = T::InitialCustomerBalance::get() / 2u8.into();

        #[extrinsic_call]
        transfer_claim(
            RawOrigin::Signed(caller.clone()),
            caller.clone(),
            to.clone(),
            claim_id,
            amount,
        );

        assert_eq!(BidOnAddresses::<T>::claim_balance(&to, claim_id), amount);
    }

    #[benchmark]
    fn batch_transfer_claims(
        n: Linear<1, { T::MaxTransferBatch::get() }>,
        c: Linear<0, { T::MaxCollaterals::get() }>,
    ) {
        let caller: AccountIdOf<T> = whitelisted_caller();
        let (_, claim_id) = setup_redeemed_claims::<T>(&caller, c);
        let to: AccountIdOf<T> = account("to", 0, 0);
        let amount: BalanceOf<T> = 1u8.into();
        let transfers: TransfersOf<T> =
            (0..n).map(|_| (claim_id, amount)).collect::<Vec<_>>().try_into().unwrap();

        #[extrinsic_call]
        batch_transfer_claims(RawOrigin::Signed(caller.clone()), caller, to, transfers);
    }

    #[benchmark]
    fn set_approval_for_all() {
        let caller: AccountIdOf<T> = whitelisted_caller();
        let operator: AccountIdOf<T> = account("operator", 0, 0);

        #[extrinsic_call]
        set_approval_for_all(RawOrigin::Signed(caller.clone()), operator.clone(), true);

        assert!(BidOnAddresses::<T>::is_approved_for_all(&caller, &operator));
    }

    #[benchmark]
    fn withdraw_collateral() {
        let owner: AccountIdOf<T> = account("owner", 0, 0);
        let caller: AccountIdOf<T> = whitelisted_caller();
        let oracle_id = create_oracle::<T>(&owner);
        BidOnAddresses::<T>::register_customer(RawOrigin::Signed(caller.clone()).into(), oracle_id)
            .unwrap();
        super::donate::<T>(oracle_id, &owner, collateral(0));
        BidOnAddresses::<T>::report_numerator(
            RawOrigin::Signed(owner.clone()).into(),
            oracle_id,
            caller.clone(),
            1u8.into(),
        )
        .unwrap();
        BidOnAddresses::<T>::finish_oracle(RawOrigin::Signed(owner).into(), oracle_id).unwrap();

        #[extrinsic_call]
        withdraw_collateral(
            RawOrigin::Signed(caller.clone()),
            collateral(0),
            oracle_id,
            caller.clone(),
        );

        assert!(!Withdrawn::<T>::get((collateral(0), oracle_id, &caller, &caller)).is_zero());
    }

    impl_benchmark_test_suite!(
        BidOnAddresses,
        crate::mock::ext_builder::ExtBuilder::build(),
        crate::mock::runtime::Runtime
    );
}
