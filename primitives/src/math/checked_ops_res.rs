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

//! Checked arithmetic which reports failures as `DispatchError::Arithmetic` so that it can be
//! combined with `?` inside dispatchables.

use sp_arithmetic::{
    traits::{CheckedAdd, CheckedSub},
    ArithmeticError,
};
use sp_runtime::DispatchError;

macro_rules! checked_op_res {
    (
        $(#[$attr:meta])*
        $name:ident, $method:ident, $bound:ident, $checked:ident, $error:ident
    ) => {
        $(#[$attr])*
        pub trait $name: Sized {
            fn $method(&self, other: &Self) -> Result<Self, DispatchError>;
        }

        impl<T: $bound> $name for T {
            #[inline]
            fn $method(&self, other: &Self) -> Result<Self, DispatchError> {
                self.$checked(other).ok_or(DispatchError::Arithmetic(ArithmeticError::$error))
            }
        }
    };
}

checked_op_res!(
    /// Addition which fails with `ArithmeticError::Overflow`.
    CheckedAddRes, checked_add_res, CheckedAdd, checked_add, Overflow
);
checked_op_res!(
    /// Subtraction which fails with `ArithmeticError::Underflow`.
    CheckedSubRes, checked_sub_res, CheckedSub, checked_sub, Underflow
);
