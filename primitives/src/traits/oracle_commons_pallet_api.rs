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

use crate::types::Oracle;
use frame_support::{
    dispatch::DispatchResult,
    pallet_prelude::{MaybeSerializeDeserialize, Member},
    Parameter,
};
use parity_scale_codec::MaxEncodedLen;
use sp_runtime::{
    traits::{AtLeast32Bit, AtLeast32BitUnsigned},
    DispatchError,
};

// Abstraction of the oracle type, which is not a part of `OracleCommonsPalletApi` because Rust
// doesn't support type aliases in traits.
pub type OracleOf<T> =
    Oracle<<T as OracleCommonsPalletApi>::AccountId, <T as OracleCommonsPalletApi>::Moment>;

/// Abstraction over storage operations for oracles
pub trait OracleCommonsPalletApi {
    type AccountId: Clone + PartialEq;
    type Moment: AtLeast32Bit + Copy + Default + Parameter + MaxEncodedLen;
    type OracleId: AtLeast32BitUnsigned
        + Copy
        + Default
        + MaybeSerializeDeserialize
        + MaxEncodedLen
        + Member
        + Parameter;

    // Oracle

    /// Latest attributed auto-generated ID
    ///
    /// Returns `Err` if no oracle has been created
    fn latest_oracle_id() -> Result<Self::OracleId, DispatchError>;

    /// Gets an oracle from the storage.
    fn oracle(oracle_id: &Self::OracleId) -> Result<OracleOf<Self>, DispatchError>;

    /// Creates an open oracle owned by `owner` with the default grace period, announces the new
    /// ID and returns it.
    ///
    /// This function is the only means by which new IDs are issued.
    fn create_oracle(owner: Self::AccountId) -> Result<Self::OracleId, DispatchError>;

    /// Mutates a given oracle storage
    fn mutate_oracle<F>(oracle_id: &Self::OracleId, cb: F) -> DispatchResult
    where
        F: FnOnce(&mut OracleOf<Self>) -> DispatchResult;

    /// Moves the oracle from `Open` to `Finished`.
    ///
    /// Fails if the oracle doesn't exist or is already finished. The transition can't be undone.
    fn finish_oracle(oracle_id: &Self::OracleId) -> DispatchResult;

    // Etc

    /// Returns the current UTC time (milliseconds)
    fn now() -> Self::Moment;
}
