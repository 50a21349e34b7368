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
mod mock;
mod tests;
pub mod weights;

pub use futurum_primitives::traits::OracleCommonsPalletApi;
pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{weights::WeightInfoFuturum, OracleCommonsPalletApi};
    use core::marker::PhantomData;
    use frame_support::{
        dispatch::DispatchResult,
        ensure,
        pallet_prelude::{IsType, StorageMap, StorageValue, StorageVersion, ValueQuery},
        traits::{Get, Time},
        transactional, Blake2_128Concat, Parameter,
    };
    use frame_system::{ensure_signed, pallet_prelude::OriginFor};
    use futurum_primitives::{
        traits::OnOracleCreated,
        types::{Oracle, OracleStatus},
    };
    use parity_scale_codec::MaxEncodedLen;
    use sp_runtime::{
        traits::{AtLeast32BitUnsigned, CheckedAdd, MaybeSerializeDeserialize, Member, Saturating},
        ArithmeticError, DispatchError,
    };

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type MomentOf<T> = <<T as Config>::Timestamp as Time>::Moment;
    pub type OracleOf<T> = Oracle<AccountIdOf<T>, MomentOf<T>>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a new oracle owned by the caller.
        ///
        /// The ID of the oracle is announced in the `OracleCreated` event. The grace period ends
        /// `DefaultGracePeriod` after the current time.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_oracle())]
        #[transactional]
        pub fn create_oracle(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            <Self as OracleCommonsPalletApi>::create_oracle(who)?;
            Ok(())
        }

        /// Move the end of the grace period of `oracle_id`.
        ///
        /// Only the owner of the oracle may call this. Any point in time is accepted, including
        /// points in the past (which immediately allows anybody to finish the oracle).
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::update_grace_period_ends())]
        #[transactional]
        pub fn update_grace_period_ends(
            origin: OriginFor<T>,
            oracle_id: T::OracleId,
            grace_period_ends: MomentOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::mutate_oracle(&oracle_id, |oracle| {
                ensure!(oracle.is_owner(&who), Error::<T>::CallerNotOracleOwner);
                oracle.grace_period_ends = grace_period_ends;
                Ok(())
            })?;
            Self::deposit_event(Event::GracePeriodUpdated { oracle_id, grace_period_ends });
            Ok(())
        }

        /// Hand the administration of `oracle_id` over to `new_owner`.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::change_oracle_owner())]
        #[transactional]
        pub fn change_oracle_owner(
            origin: OriginFor<T>,
            oracle_id: T::OracleId,
            new_owner: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::mutate_oracle(&oracle_id, |oracle| {
                ensure!(oracle.is_owner(&who), Error::<T>::CallerNotOracleOwner);
                oracle.owner = new_owner.clone();
                Ok(())
            })?;
            Self::deposit_event(Event::OracleOwnerChanged {
                oracle_id,
                old_owner: who,
                new_owner,
            });
            Ok(())
        }
    }

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Time between the creation of an oracle and the end of its grace period.
        #[pallet::constant]
        type DefaultGracePeriod: Get<MomentOf<Self>>;

        /// Notified about every newly issued oracle ID.
        type OnOracleCreated: OnOracleCreated<Self::OracleId, Self::AccountId>;

        /// The identifier of individual oracles.
        type OracleId: AtLeast32BitUnsigned
            + Copy
            + Default
            + MaybeSerializeDeserialize
            + MaxEncodedLen
            + Member
            + Parameter;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Time tracker
        type Timestamp: Time;

        type WeightInfo: WeightInfoFuturum;
    }

    #[pallet::error]
    pub enum Error<T> {
        /// An oracle with the provided ID does not exist.
        OracleDoesNotExist,
        /// It is not possible to fetch the latest oracle ID when no oracle has been created.
        NoOracleHasBeenCreated,
        /// The caller is not the owner of the oracle.
        CallerNotOracleOwner,
        /// The oracle was already finished.
        OracleAlreadyFinished,
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// A new oracle was created.
        OracleCreated {
            oracle_id: T::OracleId,
            owner: AccountIdOf<T>,
            grace_period_ends: MomentOf<T>,
        },
        /// The owner moved the end of the grace period.
        GracePeriodUpdated { oracle_id: T::OracleId, grace_period_ends: MomentOf<T> },
        /// The oracle is now administrated by `new_owner`.
        OracleOwnerChanged {
            oracle_id: T::OracleId,
            old_owner: AccountIdOf<T>,
            new_owner: AccountIdOf<T>,
        },
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    impl<T> Pallet<T>
    where
        T: Config,
    {
        // Stores and returns the next oracle id.
        //
        // Retrieval is based on the stored ID plus one, recording the same incremented number
        // on the storage so next following calls will return yet another incremented number.
        //
        // Returns `Err` if `OracleId` addition overflows.
        fn next_oracle_id() -> Result<T::OracleId, DispatchError> {
            let id = if let Ok(current) = OracleCounter::<T>::try_get() {
                current.checked_add(&T::OracleId::from(1u8)).ok_or(ArithmeticError::Overflow)?
            } else {
                T::OracleId::from(0u8)
            };
            <OracleCounter<T>>::put(id);
            Ok(id)
        }
    }

    impl<T> OracleCommonsPalletApi for Pallet<T>
    where
        T: Config,
    {
        type AccountId = T::AccountId;
        type Moment = MomentOf<T>;
        type OracleId = T::OracleId;

        fn latest_oracle_id() -> Result<Self::OracleId, DispatchError> {
            <OracleCounter<T>>::try_get().map_err(|_err| Error::<T>::NoOracleHasBeenCreated.into())
        }

        fn oracle(oracle_id: &Self::OracleId) -> Result<OracleOf<T>, DispatchError> {
            <Oracles<T>>::try_get(oracle_id).map_err(|_err| Error::<T>::OracleDoesNotExist.into())
        }

        fn create_oracle(owner: Self::AccountId) -> Result<Self::OracleId, DispatchError> {
            let oracle_id = Self::next_oracle_id()?;
            let grace_period_ends = Self::now().saturating_add(T::DefaultGracePeriod::get());
            <Oracles<T>>::insert(oracle_id, Oracle::new(owner.clone(), grace_period_ends));

            T::OnOracleCreated::on_oracle_created(&oracle_id, &owner);
            Self::deposit_event(Event::OracleCreated { oracle_id, owner, grace_period_ends });

            Ok(oracle_id)
        }

        fn mutate_oracle<F>(oracle_id: &Self::OracleId, cb: F) -> DispatchResult
        where
            F: FnOnce(&mut OracleOf<T>) -> DispatchResult,
        {
            <Oracles<T>>::try_mutate(oracle_id, |opt| {
                if let Some(oracle) = opt {
                    cb(oracle)?;
                    return Ok(());
                }
                Err(Error::<T>::OracleDoesNotExist.into())
            })
        }

        fn finish_oracle(oracle_id: &Self::OracleId) -> DispatchResult {
            Self::mutate_oracle(oracle_id, |oracle| {
                ensure!(oracle.is_open(), Error::<T>::OracleAlreadyFinished);
                oracle.status = OracleStatus::Finished;
                Ok(())
            })
        }

        fn now() -> Self::Moment {
            T::Timestamp::now()
        }
    }

    /// Holds all oracles
    #[pallet::storage]
    pub type Oracles<T: Config> = StorageMap<_, Blake2_128Concat, T::OracleId, OracleOf<T>>;

    /// The ID of the latest created oracle. Absent until the first oracle is created.
    #[pallet::storage]
    pub type OracleCounter<T: Config> = StorageValue<_, T::OracleId, ValueQuery>;
}
