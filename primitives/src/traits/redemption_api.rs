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

/// Read-only access to the payout state of oracles.
pub trait RedemptionApi {
    type AccountId;
    type Asset;
    type Balance;
    type ClaimId;
    type OracleId;

    /// The ID of the claim token class minted when `originator` registered with `oracle_id`.
    fn claim_id(oracle_id: Self::OracleId, originator: &Self::AccountId) -> Self::ClaimId;

    /// Numerator reported for `customer`; zero if nothing was reported.
    fn payout_numerator(oracle_id: Self::OracleId, customer: &Self::AccountId) -> Self::Balance;

    /// Sum of all numerators of a finished oracle; zero while the oracle is open.
    fn payout_denominator(oracle_id: Self::OracleId) -> Self::Balance;

    /// Amount of `collateral` that `holder` may currently withdraw for its balance of the claim
    /// token class of `originator`.
    fn collateral_owing(
        collateral: Self::Asset,
        oracle_id: Self::OracleId,
        originator: &Self::AccountId,
        holder: &Self::AccountId,
    ) -> Self::Balance;
}
