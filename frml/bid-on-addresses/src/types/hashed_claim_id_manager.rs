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

use crate::traits::ClaimIdManager;
use core::marker::PhantomData;
use frame_support::StorageHasher;
use futurum_primitives::types::ClaimId;
use parity_scale_codec::Encode;

/// Claim IDs are the hash of the SCALE encoded tuple `(oracle_id, originator)`.
pub struct HashedClaimIdManager<OracleId, AccountId, Hasher>(
    PhantomData<(OracleId, AccountId, Hasher)>,
);

/// Beware! All changes to this implementation need to be backwards compatible. Failure to follow
/// this restriction will result in claim tokens changing IDs between versions, which separates
/// them from their origin and makes the collateral unreachable.
impl<OracleId, AccountId, Hasher> ClaimIdManager
    for HashedClaimIdManager<OracleId, AccountId, Hasher>
where
    OracleId: Encode,
    AccountId: Encode,
    Hasher: StorageHasher<Output = ClaimId>,
{
    type AccountId = AccountId;
    type ClaimId = ClaimId;
    type OracleId = OracleId;

    fn claim_id(oracle_id: Self::OracleId, originator: &Self::AccountId) -> Self::ClaimId {
        Hasher::hash(&(oracle_id, originator).encode())
    }
}
