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

/// Called whenever a new oracle ID is issued.
///
/// Lets other pallets (or tests) learn about IDs that they didn't request themselves without
/// having to scan the event log.
pub trait OnOracleCreated<OracleId, AccountId> {
    fn on_oracle_created(oracle_id: &OracleId, owner: &AccountId);
}

impl<OracleId, AccountId> OnOracleCreated<OracleId, AccountId> for () {
    fn on_oracle_created(_: &OracleId, _: &AccountId) {}
}
