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

use lending_types::{LoanTerms, Moment};

/// Lookup of the loan conditions configured for each pool.
pub trait LoanSettings {
	type PoolId;
	type CurrencyId;
	type Score;
	type Rate;

	/// Check if `collateral` can back loans of the pool.
	fn collateral_supported(pool_id: Self::PoolId, collateral: Self::CurrencyId) -> bool;

	/// Terms offered by the pool for the given combination, if any.
	fn loan_terms(
		pool_id: Self::PoolId,
		score: Self::Score,
		ltv: Self::Rate,
		duration: Moment,
		collateral: Self::CurrencyId,
	) -> Option<LoanTerms<Self::Rate>>;
}
