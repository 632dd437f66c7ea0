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

use sp_runtime::DispatchResult;

/// Per pool counters bounding how much and how many times users can borrow.
///
/// Implementations keep per user, per pool and per score ceilings together
/// with the number of open loans and reject the operation with their own
/// errors when a ceiling is reached.
pub trait RiskLimits<AccountId> {
	type PoolId;
	type Score;
	type Balance;

	/// Register a new borrow of `amount`.
	fn on_borrow(
		pool_id: Self::PoolId,
		who: &AccountId,
		score: Self::Score,
		amount: Self::Balance,
	) -> DispatchResult;

	/// Register that `amount` of principal was paid back, either by a
	/// repayment or a liquidation.
	fn on_repay_or_liquidate(
		pool_id: Self::PoolId,
		who: &AccountId,
		amount: Self::Balance,
	) -> DispatchResult;

	/// Register that a loan of `who` has no outstanding principal anymore.
	fn on_loan_fulfillment(pool_id: Self::PoolId, who: &AccountId) -> DispatchResult;
}
