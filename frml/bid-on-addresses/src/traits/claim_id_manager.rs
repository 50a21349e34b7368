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

/// Derives the identifier of the claim token class minted on registration.
pub trait ClaimIdManager {
    type AccountId;
    type ClaimId;
    type OracleId;

    /// Calculate the ID of the class minted when `originator` registers with `oracle_id`.
    ///
    /// Must be deterministic and injective for all practical purposes, since the class ID is the
    /// only link between a claim token and its origin.
    fn claim_id(oracle_id: Self::OracleId, originator: &Self::AccountId) -> Self::ClaimId;
}
