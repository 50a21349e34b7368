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

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// An oracle reports outcome weights for customers and, once finished, fixes the payout
/// denominator.
///
/// Types
///
/// * `AI`: Account id
/// * `M`: Moment (time moment)
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Oracle<AI, M> {
    /// The account allowed to report numerators, finish the oracle and move its deadline.
    pub owner: AI,
    /// Point in time after which anybody may finish the oracle.
    pub grace_period_ends: M,
    /// The current status of the oracle.
    pub status: OracleStatus,
}

impl<AI, M> Oracle<AI, M>
where
    AI: PartialEq,
    M: PartialOrd,
{
    pub fn new(owner: AI, grace_period_ends: M) -> Self {
        Oracle { owner, grace_period_ends, status: OracleStatus::Open }
    }

    pub fn is_open(&self) -> bool {
        self.status == OracleStatus::Open
    }

    pub fn is_finished(&self) -> bool {
        self.status == OracleStatus::Finished
    }

    pub fn is_owner(&self, who: &AI) -> bool {
        self.owner == *who
    }

    /// Returns `true` if `now` lies at or beyond the end of the grace period.
    pub fn grace_period_elapsed(&self, now: &M) -> bool {
        *now >= self.grace_period_ends
    }
}

/// Lifecycle of an oracle. The only transition is `Open` to `Finished`.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub enum OracleStatus {
    /// Numerators may be reported.
    Open,
    /// The payout denominator is fixed and collateral can be withdrawn.
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn new_oracle_is_open() {
        let oracle = Oracle::new(7u128, 100u64);
        assert!(oracle.is_open());
        assert!(!oracle.is_finished());
        assert!(oracle.is_owner(&7));
        assert!(!oracle.is_owner(&8));
    }

    #[test_case(99, false)]
    #[test_case(100, true)]
    #[test_case(u64::MAX, true)]
    fn grace_period_elapsed_works(now: u64, expected: bool) {
        let oracle = Oracle::new(0u128, 100u64);
        assert_eq!(oracle.grace_period_elapsed(&now), expected);
    }
}
