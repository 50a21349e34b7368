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
    math, traits::ClaimIdManager, AccountIdOf, BalanceOf, ClaimBalances, ClaimOrigins,
    CollateralTotals, Config, Error, Event, NumeratorTotals, Numerators, OracleCollaterals,
    OracleIdOf, Operators, Pallet, PayoutDenominators, Registrations, Withdrawn, LOG_TARGET,
};
use frame_support::{ensure, require_transactional, traits::Get};
use futurum_primitives::{
    math::checked_ops_res::{CheckedAddRes, CheckedSubRes},
    traits::OracleCommonsPalletApi,
    types::{Asset, ClaimId},
};
use orml_traits::MultiCurrency;
use sp_runtime::{
    traits::{CheckedSub, Saturating, Zero},
    DispatchResult, SaturatedConversion,
};

impl<T: Config> Pallet<T> {
    #[require_transactional]
    pub(crate) fn do_register_customer(
        who: AccountIdOf<T>,
        oracle_id: OracleIdOf<T>,
    ) -> DispatchResult {
        T::OracleCommons::oracle(&oracle_id)?;
        ensure!(
            !Registrations::<T>::contains_key(oracle_id, &who),
            Error::<T>::CustomerAlreadyRegistered
        );

        let claim_id = T::ClaimIdManager::claim_id(oracle_id, &who);
        let amount = T::InitialCustomerBalance::get();
        Registrations::<T>::insert(oracle_id, &who, ());
        ClaimOrigins::<T>::insert(claim_id, (oracle_id, who.clone()));
        ClaimBalances::<T>::insert(claim_id, &who, amount);

        Self::deposit_event(Event::<T>::CustomerRegistered {
            oracle_id,
            customer: who,
            claim_id,
            amount,
        });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_donate(
        who: AccountIdOf<T>,
        collateral: Asset,
        oracle_id: OracleIdOf<T>,
        amount: BalanceOf<T>,
        from: AccountIdOf<T>,
    ) -> DispatchResult {
        Self::ensure_approved(&who, &from)?;
        T::OracleCommons::oracle(&oracle_id)?;

        T::MultiCurrency::transfer(collateral, &from, &Self::pot_account(oracle_id), amount)?;

        CollateralTotals::<T>::try_mutate(oracle_id, collateral, |total| -> DispatchResult {
            *total = total.checked_add_res(&amount)?;
            Ok(())
        })?;
        OracleCollaterals::<T>::try_mutate(oracle_id, |collaterals| -> DispatchResult {
            if !collaterals.contains(&collateral) {
                collaterals.try_push(collateral).map_err(|_| Error::<T>::TooManyCollaterals)?;
            }
            Ok(())
        })?;

        Self::deposit_event(Event::<T>::CollateralDonated { oracle_id, collateral, from, amount });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_report_numerator(
        who: AccountIdOf<T>,
        oracle_id: OracleIdOf<T>,
        customer: AccountIdOf<T>,
        numerator: BalanceOf<T>,
    ) -> DispatchResult {
        let oracle = T::OracleCommons::oracle(&oracle_id)?;
        ensure!(oracle.is_owner(&who), Error::<T>::CallerNotOracleOwner);
        ensure!(oracle.is_open(), Error::<T>::OracleIsFinished);
        ensure!(
            !Numerators::<T>::contains_key(oracle_id, &customer),
            Error::<T>::NumeratorAlreadyReported
        );

        NumeratorTotals::<T>::try_mutate(oracle_id, |total| -> DispatchResult {
            *total = total.checked_add_res(&numerator)?;
            Ok(())
        })?;
        Numerators::<T>::insert(oracle_id, &customer, numerator);

        Self::deposit_event(Event::<T>::NumeratorReported { oracle_id, customer, numerator });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_finish_oracle(
        who: AccountIdOf<T>,
        oracle_id: OracleIdOf<T>,
    ) -> DispatchResult {
        let oracle = T::OracleCommons::oracle(&oracle_id)?;
        if !oracle.is_owner(&who) {
            ensure!(
                oracle.grace_period_elapsed(&T::OracleCommons::now()),
                Error::<T>::GracePeriodNotElapsed
            );
        }
        T::OracleCommons::finish_oracle(&oracle_id)?;

        let payout_denominator = NumeratorTotals::<T>::get(oracle_id);
        PayoutDenominators::<T>::insert(oracle_id, payout_denominator);

        log::debug!(
            target: LOG_TARGET,
            "Oracle {:?} finished by {:?} with payout denominator {:?}",
            oracle_id,
            who,
            payout_denominator,
        );
        Self::deposit_event(Event::<T>::OracleFinished { oracle_id, payout_denominator });

        Ok(())
    }

    /// Moves the claim tokens and the matching share of the withdrawn counters. Doesn't check
    /// approvals.
    #[require_transactional]
    pub(crate) fn do_transfer_claim(
        operator: AccountIdOf<T>,
        from: AccountIdOf<T>,
        to: AccountIdOf<T>,
        claim_id: ClaimId,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        let (oracle_id, originator) =
            ClaimOrigins::<T>::get(claim_id).ok_or(Error::<T>::UnknownClaimToken)?;
        let balance = ClaimBalances::<T>::get(claim_id, &from);
        let remaining =
            balance.checked_sub(&amount).ok_or(Error::<T>::InsufficientClaimBalance)?;

        if from != to && !amount.is_zero() {
            ClaimBalances::<T>::insert(claim_id, &from, remaining);
            ClaimBalances::<T>::try_mutate(claim_id, &to, |value| -> DispatchResult {
                *value = value.checked_add_res(&amount)?;
                Ok(())
            })?;

            for collateral in OracleCollaterals::<T>::get(oracle_id).into_iter() {
                let withdrawn = Withdrawn::<T>::get((&collateral, &oracle_id, &originator, &from));
                if withdrawn.is_zero() {
                    continue;
                }
                let share: BalanceOf<T> = math::calculate_withdrawn_share(
                    withdrawn.saturated_into(),
                    amount.saturated_into(),
                    balance.saturated_into(),
                )?
                .saturated_into();
                Withdrawn::<T>::insert(
                    (&collateral, &oracle_id, &originator, &from),
                    withdrawn.checked_sub_res(&share)?,
                );
                Withdrawn::<T>::try_mutate(
                    (&collateral, &oracle_id, &originator, &to),
                    |value| -> DispatchResult {
                        *value = value.checked_add_res(&share)?;
                        Ok(())
                    },
                )?;
            }
        }

        Self::deposit_event(Event::<T>::ClaimTransferred { operator, from, to, claim_id, amount });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_set_approval_for_all(
        who: AccountIdOf<T>,
        operator: AccountIdOf<T>,
        approved: bool,
    ) -> DispatchResult {
        ensure!(who != operator, Error::<T>::SelfApproval);

        if approved {
            Operators::<T>::insert(&who, &operator, ());
        } else {
            Operators::<T>::remove(&who, &operator);
        }

        Self::deposit_event(Event::<T>::ApprovalForAll { owner: who, operator, approved });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_withdraw_collateral(
        who: AccountIdOf<T>,
        collateral: Asset,
        oracle_id: OracleIdOf<T>,
        originator: AccountIdOf<T>,
    ) -> DispatchResult {
        let oracle = T::OracleCommons::oracle(&oracle_id)?;
        ensure!(oracle.is_finished(), Error::<T>::OracleNotFinished);

        let entitlement = Self::entitlement(collateral, oracle_id, &originator, &who)?;
        let withdrawn = Withdrawn::<T>::get((&collateral, &oracle_id, &originator, &who));
        let owing = entitlement.saturating_sub(withdrawn);
        if owing.is_zero() {
            return Ok(());
        }

        let pot = Self::pot_account(oracle_id);
        let available = T::MultiCurrency::free_balance(collateral, &pot);
        let amount = if owing > available {
            log::warn!(
                target: LOG_TARGET,
                "Pot of oracle {:?} holds {:?} units of {:?}, but {:?} are owed to {:?}",
                oracle_id,
                available,
                collateral,
                owing,
                who,
            );
            available
        } else {
            owing
        };
        if amount.is_zero() {
            return Ok(());
        }

        T::MultiCurrency::transfer(collateral, &pot, &who, amount)?;
        Withdrawn::<T>::insert(
            (&collateral, &oracle_id, &originator, &who),
            withdrawn.checked_add_res(&amount)?,
        );

        Self::deposit_event(Event::<T>::CollateralWithdrawn {
            oracle_id,
            collateral,
            originator,
            holder: who,
            amount,
        });

        Ok(())
    }

    pub(crate) fn ensure_approved(who: &AccountIdOf<T>, owner: &AccountIdOf<T>) -> DispatchResult {
        ensure!(
            who == owner || Operators::<T>::contains_key(owner, who),
            Error::<T>::NotApproved
        );
        Ok(())
    }
}
