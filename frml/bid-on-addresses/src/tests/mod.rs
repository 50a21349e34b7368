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

#![cfg(all(feature = "mock", test))]

macro_rules! assert_approx {
    ($left:expr, $right:expr, $precision:expr $(,)?) => {
        match (&$left, &$right, &$precision) {
            (left_val, right_val, precision_val) => {
                let diff = if *left_val > *right_val {
                    *left_val - *right_val
                } else {
                    *right_val - *left_val
                };
                if diff > *precision_val {
                    panic!(
                        "assertion `left approx== right` failed\n      left: {}\n     right: {}\n \
                         precision: {}\ndifference: {}",
                        *left_val, *right_val, *precision_val, diff
                    );
                }
            }
        }
    };
}

mod integration;
mod register_customer;

use crate::{
    mock::{
        consts::*,
        ext_builder::ExtBuilder,
        runtime::{
            BidOnAddresses, Currencies, OracleCommons, Runtime, RuntimeOrigin, System, Timestamp,
        },
    },
    ClaimBalances, ClaimOrigins, CollateralTotals, Error, Event, NumeratorTotals,
    OracleCollaterals, PayoutDenominators, Registrations, Withdrawn,
};
use frame_support::{assert_noop, assert_ok};
use futurum_primitives::{
    constants::mock::InitialCustomerBalance,
    traits::{OracleCommonsPalletApi, RedemptionApi},
    types::{AccountIdTest, Asset, Balance, ClaimId, OracleId},
};
use orml_traits::MultiCurrency;
use sp_runtime::DispatchError;

/// Utility struct for managing test accounts.
#[derive(Clone, Copy)]
pub(crate) struct Account {
    id: AccountIdTest,
}

impl Account {
    pub(crate) fn new(id: AccountIdTest) -> Account {
        Account { id }
    }

    pub(crate) fn id(&self) -> AccountIdTest {
        self.id
    }

    /// Deposits `amount` of `asset` and returns the account to allow call chains.
    pub(crate) fn deposit(self, asset: Asset, amount: Balance) -> Result<Account, DispatchError> {
        Currencies::deposit(asset, &self.id, amount).map(|_| self)
    }

    pub(crate) fn signed(&self) -> RuntimeOrigin {
        RuntimeOrigin::signed(self.id)
    }

    pub(crate) fn free_balance(&self, asset: Asset) -> Balance {
        Currencies::free_balance(asset, &self.id)
    }

    /// The balance of the claim tokens minted when `originator` registered with `oracle_id`.
    pub(crate) fn claim_balance(&self, oracle_id: OracleId, originator: &Account) -> Balance {
        BidOnAddresses::claim_balance(&self.id, claim_id(oracle_id, originator))
    }
}

/// Creates an oracle owned by `owner` whose grace period never ends.
pub(crate) fn create_oracle(owner: &Account) -> OracleId {
    assert_ok!(OracleCommons::create_oracle(owner.signed()));
    let oracle_id = OracleCommons::latest_oracle_id().unwrap();
    assert_ok!(OracleCommons::update_grace_period_ends(owner.signed(), oracle_id, u64::MAX));
    oracle_id
}

pub(crate) fn claim_id(oracle_id: OracleId, originator: &Account) -> ClaimId {
    <BidOnAddresses as RedemptionApi>::claim_id(oracle_id, &originator.id)
}

pub(crate) fn register(oracle_id: OracleId, customers: &[Account]) {
    for customer in customers.iter() {
        assert_ok!(BidOnAddresses::register_customer(customer.signed(), oracle_id));
    }
}

pub(crate) fn donate(oracle_id: OracleId, donor: &Account, collateral: Asset, amount: Balance) {
    assert_ok!(BidOnAddresses::donate(donor.signed(), collateral, oracle_id, amount, donor.id));
}

pub(crate) fn report(oracle_id: OracleId, owner: &Account, numerators: &[(Account, Balance)]) {
    for (customer, numerator) in numerators.iter() {
        assert_ok!(BidOnAddresses::report_numerator(
            owner.signed(),
            oracle_id,
            customer.id,
            *numerator
        ));
    }
}

pub(crate) fn finish(oracle_id: OracleId, owner: &Account) {
    assert_ok!(BidOnAddresses::finish_oracle(owner.signed(), oracle_id));
}

pub(crate) fn collateral_owing(
    collateral: Asset,
    oracle_id: OracleId,
    originator: &Account,
    holder: &Account,
) -> Balance {
    <BidOnAddresses as RedemptionApi>::collateral_owing(
        collateral,
        oracle_id,
        &originator.id,
        &holder.id,
    )
}

/// Reference value of the payout, computed without 512-bit intermediates. Only valid for
/// parameters whose triple product fits into `u128`.
pub(crate) fn expected_payout(
    total: Balance,
    numerator: Balance,
    balance: Balance,
    denominator: Balance,
) -> Balance {
    total * numerator * balance / denominator / InitialCustomerBalance::get()
}
