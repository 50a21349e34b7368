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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod benchmarking;
mod dispatchable_impls;
mod math;
pub mod mock;
mod pallet_impls;
mod tests;
pub mod traits;
pub mod types;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{traits::ClaimIdManager, weights::WeightInfoFuturum};
    use core::marker::PhantomData;
    use frame_support::{
        pallet_prelude::{
            Blake2_128Concat, Identity, IsType, NMapKey, OptionQuery, StorageDoubleMap, StorageMap,
            StorageNMap, StorageVersion, ValueQuery,
        },
        traits::Get,
        transactional, BoundedVec, PalletId,
    };
    use frame_system::{ensure_signed, pallet_prelude::OriginFor};
    use futurum_primitives::{
        traits::OracleCommonsPalletApi,
        types::{Asset, ClaimId},
    };
    use orml_traits::MultiCurrency;
    use sp_runtime::{traits::AccountIdConversion, DispatchResult};

    pub(crate) const LOG_TARGET: &str = "runtime::frml-bid-on-addresses";

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type BalanceOf<T> =
        <<T as Config>::MultiCurrency as MultiCurrency<AccountIdOf<T>>>::Balance;
    pub(crate) type OracleIdOf<T> =
        <<T as Config>::OracleCommons as OracleCommonsPalletApi>::OracleId;
    pub(crate) type TransfersOf<T> =
        BoundedVec<(ClaimId, BalanceOf<T>), <T as Config>::MaxTransferBatch>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Register the caller as customer of `oracle_id`.
        ///
        /// Mints `InitialCustomerBalance` units of the caller's claim token class of the oracle to
        /// the caller. Every account may register once per oracle, at any stage of the oracle's
        /// lifecycle.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::register_customer())]
        #[transactional]
        pub fn register_customer(origin: OriginFor<T>, oracle_id: OracleIdOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_register_customer(who, oracle_id)
        }

        /// Donate `amount` units of `collateral` from `from` to the pot of `oracle_id`.
        ///
        /// The caller must either be `from` or an operator approved by `from`. The donation is
        /// distributed among the holders of the oracle's claim tokens once the oracle is finished.
        /// Donations to finished oracles are accepted.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::donate())]
        #[transactional]
        pub fn donate(
            origin: OriginFor<T>,
            collateral: Asset,
            oracle_id: OracleIdOf<T>,
            #[pallet::compact] amount: BalanceOf<T>,
            from: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_donate(who, collateral, oracle_id, amount, from)
        }

        /// Report the payout numerator of `customer`.
        ///
        /// Only the owner of the oracle may report, only while the oracle is open and only once
        /// per customer. The customer doesn't need to be registered.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::report_numerator())]
        #[transactional]
        pub fn report_numerator(
            origin: OriginFor<T>,
            oracle_id: OracleIdOf<T>,
            customer: AccountIdOf<T>,
            #[pallet::compact] numerator: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_report_numerator(who, oracle_id, customer, numerator)
        }

        /// Finish `oracle_id`, fixing the payout denominator to the sum of all reported
        /// numerators.
        ///
        /// The owner may finish the oracle at any time. Once the grace period has ended, any
        /// signed account may finish the oracle.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::finish_oracle())]
        #[transactional]
        pub fn finish_oracle(origin: OriginFor<T>, oracle_id: OracleIdOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_finish_oracle(who, oracle_id)
        }

        /// Move `amount` units of the claim token class `claim_id` from `from` to `to`.
        ///
        /// The caller must either be `from` or an operator approved by `from`. The collateral
        /// already withdrawn by `from` against the moved units is moved along with them.
        ///
        /// # Weight
        ///
        /// Complexity: `O(c)`, where `c` is the number of collaterals donated to the oracle.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_claim(T::MaxCollaterals::get()))]
        #[transactional]
        pub fn transfer_claim(
            origin: OriginFor<T>,
            from: AccountIdOf<T>,
            to: AccountIdOf<T>,
            claim_id: ClaimId,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_approved(&who, &from)?;
            Self::do_transfer_claim(who, from, to, claim_id, amount)
        }

        /// Move several claim token classes from `from` to `to` at once.
        ///
        /// Either all transfers succeed or none does.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n * c)`, where `n` is the number of transfers and `c` is the number of
        /// collaterals donated to the oracle.
        #[pallet::call_index(5)]
        #[pallet::weight(
            T::WeightInfo::batch_transfer_claims(transfers.len() as u32, T::MaxCollaterals::get())
        )]
        #[transactional]
        pub fn batch_transfer_claims(
            origin: OriginFor<T>,
            from: AccountIdOf<T>,
            to: AccountIdOf<T>,
            transfers: TransfersOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_approved(&who, &from)?;
            for (claim_id, amount) in transfers.into_iter() {
                Self::do_transfer_claim(who.clone(), from.clone(), to.clone(), claim_id, amount)?;
            }
            Ok(())
        }

        /// Allow or disallow `operator` to donate and transfer claim tokens on behalf of the
        /// caller.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::set_approval_for_all())]
        #[transactional]
        pub fn set_approval_for_all(
            origin: OriginFor<T>,
            operator: AccountIdOf<T>,
            approved: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_set_approval_for_all(who, operator, approved)
        }

        /// Withdraw the collateral owed to the caller for holding claim tokens of `originator`'s
        /// class.
        ///
        /// Requires the oracle to be finished. Calling this twice without a change of balances or
        /// donations in between transfers nothing the second time.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::withdraw_collateral())]
        #[transactional]
        pub fn withdraw_collateral(
            origin: OriginFor<T>,
            collateral: Asset,
            oracle_id: OracleIdOf<T>,
            originator: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_withdraw_collateral(who, collateral, oracle_id, originator)
        }
    }

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Derives the class ID of the claim tokens of a customer.
        type ClaimIdManager: ClaimIdManager<
                AccountId = Self::AccountId,
                ClaimId = ClaimId,
                OracleId = OracleIdOf<Self>,
            >;

        /// The amount of claim tokens minted to a customer on registration.
        #[pallet::constant]
        type InitialCustomerBalance: Get<BalanceOf<Self>>;

        /// The maximum number of distinct collaterals that may be donated to a single oracle.
        #[pallet::constant]
        type MaxCollaterals: Get<u32>;

        /// The maximum number of transfers in a single `batch_transfer_claims` call.
        #[pallet::constant]
        type MaxTransferBatch: Get<u32>;

        /// Holds the donated collateral.
        type MultiCurrency: MultiCurrency<Self::AccountId, CurrencyId = Asset>;

        /// The registry of oracles.
        type OracleCommons: OracleCommonsPalletApi<AccountId = Self::AccountId>;

        /// Identifier of this pallet; the pots of the oracles are sub-accounts of it.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type WeightInfo: WeightInfoFuturum;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    /// Customers registered with an oracle.
    #[pallet::storage]
    pub type Registrations<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        OracleIdOf<T>,
        Blake2_128Concat,
        AccountIdOf<T>,
        (),
        OptionQuery,
    >;

    /// Maps claim token classes to the oracle and the customer whose registration minted them.
    #[pallet::storage]
    pub type ClaimOrigins<T: Config> =
        StorageMap<_, Identity, ClaimId, (OracleIdOf<T>, AccountIdOf<T>), OptionQuery>;

    /// Balances of the claim token classes. Only the dispatchables of this pallet move them.
    #[pallet::storage]
    pub type ClaimBalances<T: Config> = StorageDoubleMap<
        _,
        Identity,
        ClaimId,
        Blake2_128Concat,
        AccountIdOf<T>,
        BalanceOf<T>,
        ValueQuery,
    >;

    /// The total amount of each collateral donated to an oracle.
    #[pallet::storage]
    pub type CollateralTotals<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        OracleIdOf<T>,
        Blake2_128Concat,
        Asset,
        BalanceOf<T>,
        ValueQuery,
    >;

    /// The collaterals ever donated to an oracle, in order of their first donation.
    #[pallet::storage]
    pub type OracleCollaterals<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        OracleIdOf<T>,
        BoundedVec<Asset, T::MaxCollaterals>,
        ValueQuery,
    >;

    /// The numerators reported by the owner of an oracle.
    #[pallet::storage]
    pub type Numerators<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        OracleIdOf<T>,
        Blake2_128Concat,
        AccountIdOf<T>,
        BalanceOf<T>,
        OptionQuery,
    >;

    /// The sum of all numerators reported for an oracle so far.
    #[pallet::storage]
    pub type NumeratorTotals<T: Config> =
        StorageMap<_, Blake2_128Concat, OracleIdOf<T>, BalanceOf<T>, ValueQuery>;

    /// The payout denominator of an oracle. Zero until the oracle is finished.
    #[pallet::storage]
    pub type PayoutDenominators<T: Config> =
        StorageMap<_, Blake2_128Concat, OracleIdOf<T>, BalanceOf<T>, ValueQuery>;

    /// Collateral already paid out, keyed by collateral, oracle, originator of the claim token
    /// class and holder.
    #[pallet::storage]
    pub type Withdrawn<T: Config> = StorageNMap<
        _,
        (
            NMapKey<Blake2_128Concat, Asset>,
            NMapKey<Blake2_128Concat, OracleIdOf<T>>,
            NMapKey<Blake2_128Concat, AccountIdOf<T>>,
            NMapKey<Blake2_128Concat, AccountIdOf<T>>,
        ),
        BalanceOf<T>,
        ValueQuery,
    >;

    /// Operators approved by an owner of claim tokens and collateral.
    #[pallet::storage]
    pub type Operators<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        AccountIdOf<T>,
        Blake2_128Concat,
        AccountIdOf<T>,
        (),
        OptionQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// `customer` registered with `oracle_id` and received `amount` units of `claim_id`.
        CustomerRegistered {
            oracle_id: OracleIdOf<T>,
            customer: AccountIdOf<T>,
            claim_id: ClaimId,
            amount: BalanceOf<T>,
        },
        /// `amount` units of `collateral` were moved from `from` to the pot of `oracle_id`.
        CollateralDonated {
            oracle_id: OracleIdOf<T>,
            collateral: Asset,
            from: AccountIdOf<T>,
            amount: BalanceOf<T>,
        },
        /// The owner of `oracle_id` reported the numerator of `customer`.
        NumeratorReported {
            oracle_id: OracleIdOf<T>,
            customer: AccountIdOf<T>,
            numerator: BalanceOf<T>,
        },
        /// `oracle_id` was finished and its payout denominator is now fixed.
        OracleFinished { oracle_id: OracleIdOf<T>, payout_denominator: BalanceOf<T> },
        /// `operator` moved `amount` units of `claim_id` from `from` to `to`.
        ClaimTransferred {
            operator: AccountIdOf<T>,
            from: AccountIdOf<T>,
            to: AccountIdOf<T>,
            claim_id: ClaimId,
            amount: BalanceOf<T>,
        },
        /// `owner` allowed (`approved == true`) or disallowed `operator` to act on its behalf.
        ApprovalForAll { owner: AccountIdOf<T>, operator: AccountIdOf<T>, approved: bool },
        /// `holder` withdrew `amount` units of `collateral` from the pot of `oracle_id` for
        /// holding claim tokens of `originator`.
        CollateralWithdrawn {
            oracle_id: OracleIdOf<T>,
            collateral: Asset,
            originator: AccountIdOf<T>,
            holder: AccountIdOf<T>,
            amount: BalanceOf<T>,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The account is already registered with this oracle.
        CustomerAlreadyRegistered,
        /// The caller is neither the owner of the assets nor an approved operator.
        NotApproved,
        /// Accounts can't approve themselves as operator.
        SelfApproval,
        /// The oracle already holds the maximum number of distinct collaterals.
        TooManyCollaterals,
        /// The caller is not the owner of the oracle.
        CallerNotOracleOwner,
        /// The action requires an open oracle.
        OracleIsFinished,
        /// The action requires a finished oracle.
        OracleNotFinished,
        /// A numerator was already reported for this customer.
        NumeratorAlreadyReported,
        /// Only the owner may finish the oracle before the grace period ends.
        GracePeriodNotElapsed,
        /// The claim token class was never minted.
        UnknownClaimToken,
        /// The sender holds fewer claim tokens of the class than it tries to move.
        InsufficientClaimBalance,
    }

    impl<T: Config> Pallet<T> {
        /// The account holding the collateral donated to `oracle_id`.
        pub fn pot_account(oracle_id: OracleIdOf<T>) -> AccountIdOf<T> {
            T::PalletId::get().into_sub_account_truncating(oracle_id)
        }
    }
}
