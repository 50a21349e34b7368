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

//! Weights for frml_bid_on_addresses
//!
//! Hand-written estimates. Reads and writes are counted per storage item touched by the
//! dispatchable; the base execution times are rough figures. Replace this file with the output of
//! the benchmarks in `benchmarking.rs` before deploying.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(clippy::unnecessary_cast)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

///  Trait containing the required functions for weight retrival within
/// frml_bid_on_addresses
pub trait WeightInfoFuturum {
    fn register_customer() -> Weight;
    fn donate() -> Weight;
    fn report_numerator() -> Weight;
    fn finish_oracle() -> Weight;
    fn transfer_claim(c: u32) -> Weight;
    fn batch_transfer_claims(n: u32, c: u32) -> Weight;
    fn set_approval_for_all() -> Weight;
    fn withdraw_collateral() -> Weight;
}

/// Weight functions for frml_bid_on_addresses
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoFuturum for WeightInfo<T> {
    /// Storage: `OracleCommons::Oracles` (r:1 w:0)
    /// Storage: `BidOnAddresses::Registrations` (r:1 w:1)
    /// Storage: `BidOnAddresses::ClaimOrigins` (r:0 w:1)
    /// Storage: `BidOnAddresses::ClaimBalances` (r:0 w:1)
    fn register_customer() -> Weight {
        Weight::from_parts(29_650_000, 3593)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    /// Storage: `BidOnAddresses::Operators` (r:1 w:0)
    /// Storage: `OracleCommons::Oracles` (r:1 w:0)
    /// Storage: `Tokens::Accounts` (r:2 w:2)
    /// Storage: `System::Account` (r:2 w:2)
    /// Storage: `BidOnAddresses::CollateralTotals` (r:1 w:1)
    /// Storage: `BidOnAddresses::OracleCollaterals` (r:1 w:1)
    fn donate() -> Weight {
        Weight::from_parts(61_840_000, 6196)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(6))
    }
    /// Storage: `OracleCommons::Oracles` (r:1 w:0)
    /// Storage: `BidOnAddresses::Numerators` (r:1 w:1)
    /// Storage: `BidOnAddresses::NumeratorTotals` (r:1 w:1)
    fn report_numerator() -> Weight {
        Weight::from_parts(22_460_000, 3538)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    /// Storage: `OracleCommons::Oracles` (r:1 w:1)
    /// Storage: `Timestamp::Now` (r:1 w:0)
    /// Storage: `BidOnAddresses::NumeratorTotals` (r:1 w:0)
    /// Storage: `BidOnAddresses::PayoutDenominators` (r:0 w:1)
    fn finish_oracle() -> Weight {
        Weight::from_parts(24_930_000, 3538)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    /// Storage: `BidOnAddresses::Operators` (r:1 w:0)
    /// Storage: `BidOnAddresses::ClaimOrigins` (r:1 w:0)
    /// Storage: `BidOnAddresses::ClaimBalances` (r:2 w:2)
    /// Storage: `BidOnAddresses::OracleCollaterals` (r:1 w:0)
    /// Storage: `BidOnAddresses::Withdrawn` (r:2 w:2)
    /// The range of component `c` is `[0, 4]`.
    fn transfer_claim(c: u32) -> Weight {
        Weight::from_parts(27_340_000, 6196)
            .saturating_add(Weight::from_parts(9_870_000, 0).saturating_mul(c.into()))
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(c.into())))
            .saturating_add(T::DbWeight::get().writes(2))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(c.into())))
            .saturating_add(Weight::from_parts(0, 2539).saturating_mul(c.into()))
    }
    /// Storage: `BidOnAddresses::Operators` (r:1 w:0)
    /// Storage: `BidOnAddresses::ClaimOrigins` (r:8 w:0)
    /// Storage: `BidOnAddresses::ClaimBalances` (r:16 w:16)
    /// Storage: `BidOnAddresses::OracleCollaterals` (r:8 w:0)
    /// Storage: `BidOnAddresses::Withdrawn` (r:64 w:64)
    /// The range of component `n` is `[1, 8]`.
    /// The range of component `c` is `[0, 4]`.
    fn batch_transfer_claims(n: u32, c: u32) -> Weight {
        Weight::from_parts(9_350_000, 3593)
            .saturating_add(Weight::from_parts(25_120_000, 0).saturating_mul(n.into()))
            .saturating_add(
                Weight::from_parts(9_870_000, 0)
                    .saturating_mul(n.into())
                    .saturating_mul(c.into()),
            )
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().reads((4_u64).saturating_mul(n.into())))
            .saturating_add(
                T::DbWeight::get()
                    .reads((2_u64).saturating_mul(n.into()).saturating_mul(c.into())),
            )
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(n.into())))
            .saturating_add(
                T::DbWeight::get()
                    .writes((2_u64).saturating_mul(n.into()).saturating_mul(c.into())),
            )
            .saturating_add(Weight::from_parts(0, 5206).saturating_mul(n.into()))
    }
    /// Storage: `BidOnAddresses::Operators` (r:0 w:1)
    fn set_approval_for_all() -> Weight {
        Weight::from_parts(11_780_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `OracleCommons::Oracles` (r:1 w:0)
    /// Storage: `BidOnAddresses::PayoutDenominators` (r:1 w:0)
    /// Storage: `BidOnAddresses::CollateralTotals` (r:1 w:0)
    /// Storage: `BidOnAddresses::Numerators` (r:1 w:0)
    /// Storage: `BidOnAddresses::ClaimBalances` (r:1 w:0)
    /// Storage: `Tokens::Accounts` (r:2 w:2)
    /// Storage: `BidOnAddresses::Withdrawn` (r:1 w:1)
    /// Storage: `System::Account` (r:1 w:1)
    fn withdraw_collateral() -> Weight {
        Weight::from_parts(57_020_000, 8799)
            .saturating_add(T::DbWeight::get().reads(9))
            .saturating_add(T::DbWeight::get().writes(4))
    }
}
