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

use sp_runtime::DispatchError;

/// Source of borrower credit scores.
pub trait CreditScore<AccountId> {
	type Score;

	/// Return the score of `who` if its last signed update is still valid.
	/// Fails if there is no score or if it is older than the validity period.
	fn validated_score(who: &AccountId) -> Result<Self::Score, DispatchError>;
}
