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

/// Converts amounts between assets using the current price state.
pub trait PriceConverter {
	/// Identifies an asset
	type AssetId;

	/// Amount of an asset
	type Balance;

	/// Express `amount` of `from` in units of `to`.
	/// Fails if any of both assets has no price.
	fn convert(
		amount: Self::Balance,
		from: Self::AssetId,
		to: Self::AssetId,
	) -> Result<Self::Balance, DispatchError>;
}
