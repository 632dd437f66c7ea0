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

use frame_support::weights::Weight;

pub trait WeightInfo {
	fn borrow(n: u32) -> Weight;
	fn repay() -> Weight;
	fn liquidate() -> Weight;
	fn pause() -> Weight;
	fn unpause() -> Weight;
	fn set_function_paused() -> Weight;
}

impl WeightInfo for () {
	fn borrow(_: u32) -> Weight {
		Weight::zero()
	}

	fn repay() -> Weight {
		Weight::zero()
	}

	fn liquidate() -> Weight {
		Weight::zero()
	}

	fn pause() -> Weight {
		Weight::zero()
	}

	fn unpause() -> Weight {
		Weight::zero()
	}

	fn set_function_paused() -> Weight {
		Weight::zero()
	}
}
