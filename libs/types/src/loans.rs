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

use crate::Moment;

/// Terms a pool offers for a combination of score, ltv, duration and
/// collateral.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct LoanTerms<Rate> {
	/// Annual interest rate. `1` represents 100%.
	pub interest_rate: Rate,

	/// Seconds after the due date before the loan can be liquidated.
	pub grace_period: Moment,

	/// Multiplier applied to the interest accrued after the due date.
	pub late_fee: Rate,
}
