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

use frame_support::dispatch::DispatchResult;

/// Ledger holding the collateral deposited by borrowers.
///
/// Deposited collateral is either free or frozen. Only frozen collateral
/// backs a loan and only the lending engine wired to the custody is expected
/// to call the mutating methods.
pub trait CollateralCustody<AccountId> {
	/// Identifies a collateral asset
	type AssetId;

	/// Amount of collateral
	type Balance;

	/// Collateral deposited by `who` not backing any loan.
	fn free_balance(who: &AccountId, asset: Self::AssetId) -> Self::Balance;

	/// Collateral of `who` backing loans.
	fn frozen_balance(who: &AccountId, asset: Self::AssetId) -> Self::Balance;

	/// Move `amount` from the wallet of `who` into custody as free collateral.
	fn deposit(who: &AccountId, asset: Self::AssetId, amount: Self::Balance) -> DispatchResult;

	/// Move `amount` of free collateral into frozen collateral.
	fn freeze(who: &AccountId, asset: Self::AssetId, amount: Self::Balance) -> DispatchResult;

	/// Move `amount` of frozen collateral back into free collateral.
	fn unfreeze(who: &AccountId, asset: Self::AssetId, amount: Self::Balance) -> DispatchResult;

	/// Take `amount` of frozen collateral from `who` and send it to `recipient`.
	fn seize(
		recipient: &AccountId,
		asset: Self::AssetId,
		who: &AccountId,
		amount: Self::Balance,
	) -> DispatchResult;
}
