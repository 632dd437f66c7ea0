// Copyright 2023 Centrifuge Foundation (centrifuge.io).
// This file is part of Centrifuge chain project.

// Centrifuge is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version (see http://www.gnu.org/licenses).

// Centrifuge is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::RuntimeDebug;
use scale_info::TypeInfo;
use sp_arithmetic::{
	traits::{EnsureAdd, EnsureSub, Zero},
	ArithmeticError,
};

/// A signed delta over an unsigned amount.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum Adjustment<Amount> {
	Increase(Amount),
	Decrease(Amount),
}

impl<Amount: Zero> Default for Adjustment<Amount> {
	fn default() -> Self {
		Adjustment::Increase(Zero::zero())
	}
}

impl<Amount> Adjustment<Amount>
where
	Amount: EnsureAdd + EnsureSub + Zero + PartialOrd + Copy,
{
	/// The unsigned value of the delta.
	pub fn abs(&self) -> Amount {
		match self {
			Adjustment::Increase(amount) | Adjustment::Decrease(amount) => *amount,
		}
	}

	pub fn is_zero(&self) -> bool {
		self.abs().is_zero()
	}

	/// Sums two deltas keeping the sign of the biggest one.
	pub fn ensure_add(self, other: Self) -> Result<Self, ArithmeticError> {
		use Adjustment::*;

		Ok(match (self, other) {
			(Increase(a), Increase(b)) => Increase(a.ensure_add(b)?),
			(Decrease(a), Decrease(b)) => Decrease(a.ensure_add(b)?),
			(Increase(inc), Decrease(dec)) | (Decrease(dec), Increase(inc)) => {
				if inc >= dec {
					Increase(inc.ensure_sub(dec)?)
				} else {
					Decrease(dec.ensure_sub(inc)?)
				}
			}
		})
	}

	/// Applies the delta over `value`.
	/// A decrease bigger than `value` is an underflow.
	pub fn apply(&self, value: Amount) -> Result<Amount, ArithmeticError> {
		match self {
			Adjustment::Increase(amount) => value.ensure_add(*amount),
			Adjustment::Decrease(amount) => value.ensure_sub(*amount),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn add_with_same_sign() {
		assert_eq!(
			Adjustment::Increase(3u64).ensure_add(Adjustment::Increase(4)),
			Ok(Adjustment::Increase(7))
		);
		assert_eq!(
			Adjustment::Decrease(3u64).ensure_add(Adjustment::Decrease(4)),
			Ok(Adjustment::Decrease(7))
		);
	}

	#[test]
	fn add_with_different_sign() {
		assert_eq!(
			Adjustment::Increase(10u64).ensure_add(Adjustment::Decrease(4)),
			Ok(Adjustment::Increase(6))
		);
		assert_eq!(
			Adjustment::Increase(4u64).ensure_add(Adjustment::Decrease(10)),
			Ok(Adjustment::Decrease(6))
		);
		assert_eq!(
			Adjustment::Decrease(5u64).ensure_add(Adjustment::Increase(5)),
			Ok(Adjustment::Increase(0))
		);
	}

	#[test]
	fn apply_over_value() {
		assert_eq!(Adjustment::Increase(5u64).apply(10), Ok(15));
		assert_eq!(Adjustment::Decrease(5u64).apply(10), Ok(5));
		assert_eq!(Adjustment::Decrease(10u64).apply(10), Ok(0));
		assert_eq!(
			Adjustment::Decrease(11u64).apply(10),
			Err(ArithmeticError::Underflow)
		);
	}

	#[test]
	fn zero_by_default() {
		assert!(Adjustment::<u64>::default().is_zero());
		assert_eq!(Adjustment::Decrease(7u64).abs(), 7);
	}
}
