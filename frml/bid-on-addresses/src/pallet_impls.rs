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

use crate::{
    math, traits::ClaimIdManager, AccountIdOf, BalanceOf, ClaimBalances, CollateralTotals, Config,
    Numerators, OracleIdOf, Operators, Pallet, PayoutDenominators, Withdrawn, LOG_TARGET,
};
use frame_support::traits::Get;
use futurum_primitives::{
    traits::{OracleCommonsPalletApi, RedemptionApi},
    types::{Asset, ClaimId},
};
use sp_runtime::{
    traits::{Saturating, Zero},
    DispatchError, SaturatedConversion,
};

impl<T: Config> Pallet<T> {
    /// The balance of `who` in the claim token class `claim_id`.
    pub fn claim_balance(who: &AccountIdOf<T>, claim_id: ClaimId) -> BalanceOf<T> {
        ClaimBalances::<T>::get(claim_id, who)
    }

    /// Returns `true` if `operator` may act on behalf of `owner`.
    pub fn is_approved_for_all(owner: &AccountIdOf<T>, operator: &AccountIdOf<T>) -> bool {
        Operators::<T>::contains_key(owner, operator)
    }

    /// The amount of `collateral` that `holder` is entitled to in total (withdrawn or not) for
    /// its current balance of `originator`'s claim tokens.
    ///
    /// Zero if the oracle is open or no numerator was reported.
    pub(crate) fn entitlement(
        collateral: Asset,
        oracle_id: OracleIdOf<T>,
        originator: &AccountIdOf<T>,
        holder: &AccountIdOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let oracle = T::OracleCommons::oracle(&oracle_id)?;
        if !oracle.is_finished() {
            return Ok(Zero::zero());
        }
        let denominator = PayoutDenominators::<T>::get(oracle_id);
        if denominator.is_zero() {
            return Ok(Zero::zero());
        }

        let total = CollateralTotals::<T>::get(oracle_id, collateral);
        let numerator = Numerators::<T>::get(oracle_id, originator).unwrap_or_else(Zero::zero);
        let claim_id = T::ClaimIdManager::claim_id(oracle_id, originator);
        let balance = Self::claim_balance(holder, claim_id);
        let result = math::calculate_payout(
            total.saturated_into(),
            numerator.saturated_into(),
            balance.saturated_into(),
            denominator.saturated_into(),
            T::InitialCustomerBalance::get().saturated_into(),
        )?;

        Ok(result.saturated_into())
    }
}

impl<T: Config> RedemptionApi for Pallet<T> {
    type AccountId = AccountIdOf<T>;
    type Asset = Asset;
    type Balance = BalanceOf<T>;
    type ClaimId = ClaimId;
    type OracleId = OracleIdOf<T>;

    fn claim_id(oracle_id: Self::OracleId, originator: &Self::AccountId) -> Self::ClaimId {
        T::ClaimIdManager::claim_id(oracle_id, originator)
    }

    fn payout_numerator(oracle_id: Self::OracleId, customer: &Self::AccountId) -> Self::Balance {
        Numerators::<T>::get(oracle_id, customer).unwrap_or_else(Zero::zero)
    }

    fn payout_denominator(oracle_id: Self::OracleId) -> Self::Balance {
        PayoutDenominators::<T>::get(oracle_id)
    }

    fn collateral_owing(
        collateral: Self::Asset,
        oracle_id: Self::OracleId,
        originator: &Self::AccountId,
        holder: &Self::AccountId,
    ) -> Self::Balance {
        let entitlement = match Self::entitlement(collateral, oracle_id, originator, holder) {
            Ok(entitlement) => entitlement,
            Err(err) => {
                log::debug!(
                    target: LOG_TARGET,
                    "Nothing owed for oracle {:?}: {:?}",
                    oracle_id,
                    err,
                );
                return Zero::zero();
            }
        };
        let withdrawn = Withdrawn::<T>::get((&collateral, &oracle_id, originator, holder));
        entitlement.saturating_sub(withdrawn)
    }
}
