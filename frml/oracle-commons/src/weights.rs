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

//! Weights for frml_oracle_commons
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
/// frml_oracle_commons
pub trait WeightInfoFuturum {
    fn create_oracle() -> Weight;
    fn update_grace_period_ends() -> Weight;
    fn change_oracle_owner() -> Weight;
}

/// Weight functions for frml_oracle_commons
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoFuturum for WeightInfo<T> {
    /// Storage: `OracleCommons::OracleCounter` (r:1 w:1)
    /// Storage: `Timestamp::Now` (r:1 w:0)
    /// Storage: `OracleCommons::Oracles` (r:0 w:1)
    fn create_oracle() -> Weight {
        Weight::from_parts(19_570_000, 1493)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    /// Storage: `OracleCommons::Oracles` (r:1 w:1)
    fn update_grace_period_ends() -> Weight {
        Weight::from_parts(14_020_000, 3538)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `OracleCommons::Oracles` (r:1 w:1)
    fn change_oracle_owner() -> Weight {
        Weight::from_parts(14_290_000, 3538)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}
