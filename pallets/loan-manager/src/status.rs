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

//! Loan status state machine.
//!
//! The next status of a loan only depends on its current status, the phase
//! the loan is in when the action happens and the action itself. Any
//! combination not listed in [`transition()`] keeps the current status.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::RuntimeDebug;
use scale_info::TypeInfo;

#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum LoanStatus {
	New,
	PaidEarlyPart,
	PaidEarlyFull,
	PaidLatePart,
	PaidLateFull,
	/// Liquidated without covering the whole obligation
	DefaultPart,
	DefaultFullLiquidated,
	/// A partially liquidated loan that was repaid afterwards
	DefaultFullPaid,
}

impl LoanStatus {
	/// No action can move a loan out of a terminal status.
	pub fn is_terminal(&self) -> bool {
		matches!(
			self,
			LoanStatus::PaidEarlyFull
				| LoanStatus::PaidLateFull
				| LoanStatus::DefaultFullLiquidated
				| LoanStatus::DefaultFullPaid
		)
	}
}

/// Time window of a loan relative to its due and liquidation dates.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum Phase {
	/// `now <= due_date`
	BeforeMaturity,
	/// `due_date < now <= liquidation_date`
	BeforeLiquidation,
	/// `now > liquidation_date`
	AfterLiquidation,
}

#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum Action {
	RepayPartial,
	RepayFull,
	LiquidationCovered,
	LiquidationNotCovered,
}

/// Transition table. `None` means the status persists.
pub fn transition(from: LoanStatus, phase: Phase, action: Action) -> Option<LoanStatus> {
	use Action::*;
	use LoanStatus::*;
	use Phase::*;

	match (phase, from, action) {
		(BeforeMaturity, New, RepayPartial) => Some(PaidEarlyPart),
		(BeforeMaturity, New | PaidEarlyPart, RepayFull) => Some(PaidEarlyFull),

		(BeforeLiquidation, New | PaidEarlyPart, RepayPartial) => Some(PaidLatePart),
		(BeforeLiquidation, New | PaidEarlyPart | PaidLatePart, RepayFull) => Some(PaidLateFull),

		(AfterLiquidation, New | PaidEarlyPart | PaidLatePart, action) => Some(match action {
			LiquidationCovered => DefaultFullLiquidated,
			LiquidationNotCovered => DefaultPart,
			RepayPartial => PaidLatePart,
			RepayFull => PaidLateFull,
		}),
		(AfterLiquidation, DefaultPart, RepayFull) => Some(DefaultFullPaid),

		_ => None,
	}
}

/// Resolves the status a loan has after `action`.
pub fn next_status(from: LoanStatus, phase: Phase, action: Action) -> LoanStatus {
	transition(from, phase, action).unwrap_or(from)
}
