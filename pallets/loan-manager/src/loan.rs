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
use frame_support::{traits::tokens, RuntimeDebug};
use lending_traits::PriceConverter;
use lending_types::{consts::SECONDS_PER_YEAR, Adjustment, Moment};
use scale_info::TypeInfo;
use sp_arithmetic::traits::EnsureFixedPointNumber;
use sp_runtime::{
	traits::{EnsureAdd, EnsureInto, EnsureMul, EnsureSub, EnsureSubAssign, Zero},
	ArithmeticError, DispatchError, FixedPointNumber, FixedPointOperand,
};

use crate::status::{next_status, Action, LoanStatus, Phase};

/// Collateralized loan issued by a pool.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct Loan<AccountId, PoolId, Balance, Rate, CurrencyId> {
	pub borrower: AccountId,
	pub pool_id: PoolId,

	/// Outstanding principal. It never increases.
	pub amount: Balance,

	/// Annual interest rate. `1` represents 100%.
	pub apr: Rate,

	/// Loan to value ratio used to compute the collateral frozen at issuance.
	pub ltv: Rate,

	/// Multiplier over the interest accrued after the due date.
	pub late_fee: Rate,

	pub issue_date: Moment,
	pub due_date: Moment,
	pub liquidation_date: Moment,

	/// Interest accrues from this moment.
	pub last_repay: Moment,

	/// Asset frozen to back the loan
	pub collateral: CurrencyId,
	pub frozen_collateral: Balance,

	pub status: LoanStatus,
}

/// Result of valuing a delinquent loan.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct DelinquencyInfo<Balance> {
	/// Interest accrued until the valuation moment, in underlying units
	pub interest: Balance,

	/// Collateral to hand over to the liquidator
	pub to_liquidate: Balance,

	/// Obligation the collateral cannot cover, in underlying units.
	/// It never exceeds the principal: interest the collateral cannot cover
	/// beyond the principal is forfeited, so the loan amount never grows.
	pub not_covered: Balance,

	/// Change of the pool valuation before the treasury cut, in underlying
	/// units. Any increase is recovered interest.
	pub pool_value_adjust: Adjustment<Balance>,
}

/// Split of an effective repayment.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub struct Repayment<Balance> {
	/// Amount charged to the payer
	pub paid: Balance,
	pub interest: Balance,
	pub principal: Balance,
}

/// Interest rate per second for an annual rate.
pub fn rate_per_sec<Rate: FixedPointNumber>(apr: Rate) -> Result<Rate, ArithmeticError> {
	apr.checked_div(&Rate::saturating_from_integer(SECONDS_PER_YEAR))
		.ok_or(ArithmeticError::DivisionByZero)
}

impl<AccountId, PoolId, Balance, Rate, CurrencyId> Loan<AccountId, PoolId, Balance, Rate, CurrencyId>
where
	Balance: tokens::Balance + FixedPointOperand,
	Rate: FixedPointNumber,
	CurrencyId: Copy,
{
	pub fn phase(&self, now: Moment) -> Phase {
		if now <= self.due_date {
			Phase::BeforeMaturity
		} else if now <= self.liquidation_date {
			Phase::BeforeLiquidation
		} else {
			Phase::AfterLiquidation
		}
	}

	pub fn is_delinquent(&self, now: Moment) -> bool {
		now > self.liquidation_date && !self.amount.is_zero()
	}

	/// Interest accrued since the last repayment.
	/// Time past the due date accrues with the late fee applied.
	pub fn interest(&self, now: Moment) -> Result<Balance, ArithmeticError> {
		if now <= self.last_repay {
			return Ok(Zero::zero());
		}

		let rate = rate_per_sec(self.apr)?;

		let on_time_elapsed = now.min(self.due_date).saturating_sub(self.last_repay);
		let on_time = rate.ensure_mul_int(self.amount.ensure_mul(on_time_elapsed.ensure_into()?)?)?;

		if now <= self.due_date {
			return Ok(on_time);
		}

		let late_elapsed = now.ensure_sub(self.last_repay.max(self.due_date))?;
		let late = self
			.late_fee
			.ensure_mul_int(rate.ensure_mul_int(self.amount.ensure_mul(late_elapsed.ensure_into()?)?)?)?;

		on_time.ensure_add(late)
	}

	/// Principal plus accrued interest.
	pub fn total_owed(&self, now: Moment) -> Result<Balance, ArithmeticError> {
		self.amount.ensure_add(self.interest(now)?)
	}

	/// Values the loan against its frozen collateral, expressed in the
	/// `underlying` currency of the pool.
	///
	/// A covered loan credits the pool with its whole interest and leaves the
	/// collateral above the obligation to the borrower. Otherwise all the
	/// frozen collateral is liquidated and the pool is credited with the
	/// interest it covers, or debited with the principal it does not cover.
	pub fn delinquency_info<Prices>(
		&self,
		underlying: CurrencyId,
		now: Moment,
	) -> Result<DelinquencyInfo<Balance>, DispatchError>
	where
		Prices: PriceConverter<AssetId = CurrencyId, Balance = Balance>,
	{
		let interest = self.interest(now)?;
		let owed = self.amount.ensure_add(interest)?;
		let frozen = self.frozen_collateral;

		let owed_as_collateral = Prices::convert(owed, underlying, self.collateral)?;

		if frozen >= owed_as_collateral {
			return Ok(DelinquencyInfo {
				interest,
				to_liquidate: owed_as_collateral,
				not_covered: Zero::zero(),
				pool_value_adjust: Adjustment::Increase(interest),
			});
		}

		let uncovered = owed_as_collateral.ensure_sub(frozen)?;
		let not_covered = Prices::convert(uncovered, self.collateral, underlying)?.min(self.amount);

		let principal_as_collateral = Prices::convert(self.amount, underlying, self.collateral)?;
		let pool_value_adjust = match frozen < principal_as_collateral {
			true => {
				let loss = principal_as_collateral.ensure_sub(frozen)?;
				Adjustment::Decrease(Prices::convert(loss, self.collateral, underlying)?)
			}
			false => {
				let recovered = frozen.ensure_sub(principal_as_collateral)?;
				Adjustment::Increase(
					Prices::convert(recovered, self.collateral, underlying)?.min(interest),
				)
			}
		};

		Ok(DelinquencyInfo {
			interest,
			to_liquidate: frozen,
			not_covered,
			pool_value_adjust,
		})
	}

	/// Applies a payment of up to `amount`. Interest is paid first.
	pub fn repay(&mut self, amount: Balance, now: Moment) -> Result<Repayment<Balance>, ArithmeticError> {
		let interest_owed = self.interest(now)?;
		let paid = amount.min(self.amount.ensure_add(interest_owed)?);
		let interest = paid.min(interest_owed);
		let principal = paid.ensure_sub(interest)?;

		self.amount.ensure_sub_assign(principal)?;
		self.last_repay = self.last_repay.max(now);

		let action = match self.amount.is_zero() {
			true => Action::RepayFull,
			false => Action::RepayPartial,
		};
		self.status = next_status(self.status, self.phase(now), action);

		Ok(Repayment {
			paid,
			interest,
			principal,
		})
	}

	/// Settles a liquidation described by `info`.
	/// Returns the principal no longer owed by the borrower.
	pub fn liquidate(
		&mut self,
		info: &DelinquencyInfo<Balance>,
		now: Moment,
	) -> Result<Balance, ArithmeticError> {
		let released = self.amount.ensure_sub(info.not_covered)?;

		let action = match info.not_covered.is_zero() {
			true => Action::LiquidationCovered,
			false => Action::LiquidationNotCovered,
		};

		self.status = next_status(self.status, self.phase(now), action);
		self.amount = info.not_covered;
		self.frozen_collateral = Zero::zero();
		self.last_repay = self.last_repay.max(now);

		Ok(released)
	}
}

#[cfg(test)]
mod tests {
	use lending_types::consts::{SECONDS_PER_DAY, SECONDS_PER_YEAR};
	use sp_runtime::FixedU128;

	use super::*;

	const USD: u32 = 1;
	const ETH: u32 = 2;
	const UNIT: u128 = 1_000_000_000_000;
	const START: Moment = 1_000;

	/// One underlying unit is worth two collateral units.
	struct DoubleInCollateral;

	impl PriceConverter for DoubleInCollateral {
		type AssetId = u32;
		type Balance = u128;

		fn convert(amount: u128, from: u32, to: u32) -> Result<u128, DispatchError> {
			match (from, to) {
				(USD, ETH) => Ok(amount * 2),
				(ETH, USD) => Ok(amount / 2),
				_ => Err(DispatchError::Other("no price")),
			}
		}
	}

	type TestLoan = Loan<u64, u32, u128, FixedU128, u32>;

	fn loan(amount: u128, apr: FixedU128, frozen: u128) -> TestLoan {
		Loan {
			borrower: 1,
			pool_id: 1,
			amount,
			apr,
			ltv: FixedU128::saturating_from_rational(1, 2),
			late_fee: FixedU128::saturating_from_integer(2),
			issue_date: START,
			due_date: START + SECONDS_PER_YEAR,
			liquidation_date: START + SECONDS_PER_YEAR + 5 * SECONDS_PER_DAY,
			last_repay: START,
			collateral: ETH,
			frozen_collateral: frozen,
			status: LoanStatus::New,
		}
	}

	fn percent(value: u128) -> FixedU128 {
		FixedU128::saturating_from_rational(value, 100)
	}

	#[test]
	fn no_interest_without_elapsed_time() {
		let loan = loan(100 * UNIT, percent(10), 0);

		assert_eq!(loan.interest(START), Ok(0));
		assert_eq!(loan.interest(START - 1), Ok(0));
	}

	#[test]
	fn interest_grows_with_time() {
		let loan = loan(100 * UNIT, percent(10), 0);

		let mut last = 0;
		for day in 1..=400 {
			let interest = loan.interest(START + day * SECONDS_PER_DAY).unwrap();
			assert!(interest > last);
			last = interest;
		}
	}

	#[test]
	fn on_time_interest() {
		let loan = loan(100 * UNIT, percent(10), 0);

		let interest = loan.interest(START + SECONDS_PER_YEAR).unwrap();
		assert!((10 * UNIT).abs_diff(interest) < UNIT / 1_000_000);

		let half = loan.interest(START + SECONDS_PER_YEAR / 2).unwrap();
		assert!((5 * UNIT).abs_diff(half) < UNIT / 1_000_000);
	}

	#[test]
	fn late_interest_applies_the_late_fee() {
		let loan = loan(100 * UNIT, percent(10), 0);
		let rate = rate_per_sec(percent(10)).unwrap();

		let on_time = loan.interest(loan.due_date).unwrap();
		let with_late = loan.interest(loan.due_date + SECONDS_PER_DAY).unwrap();

		let late = rate.saturating_mul_int(100 * UNIT * SECONDS_PER_DAY as u128);
		assert_eq!(with_late, on_time + 2 * late);
	}

	#[test]
	fn late_interest_starts_at_last_repay() {
		let mut loan = loan(100 * UNIT, percent(10), 0);
		loan.last_repay = loan.due_date + SECONDS_PER_DAY;

		let rate = rate_per_sec(percent(10)).unwrap();
		let late = rate.saturating_mul_int(100 * UNIT * SECONDS_PER_DAY as u128);

		assert_eq!(
			loan.interest(loan.due_date + 2 * SECONDS_PER_DAY),
			Ok(2 * late)
		);
	}

	#[test]
	fn phases() {
		let loan = loan(100, percent(10), 0);

		assert_eq!(loan.phase(loan.due_date), Phase::BeforeMaturity);
		assert_eq!(loan.phase(loan.due_date + 1), Phase::BeforeLiquidation);
		assert_eq!(loan.phase(loan.liquidation_date), Phase::BeforeLiquidation);
		assert_eq!(loan.phase(loan.liquidation_date + 1), Phase::AfterLiquidation);

		assert!(!loan.is_delinquent(loan.liquidation_date));
		assert!(loan.is_delinquent(loan.liquidation_date + 1));
	}

	#[test]
	fn paid_loans_are_never_delinquent() {
		let loan = loan(0, percent(10), 0);
		assert!(!loan.is_delinquent(loan.liquidation_date + 1));
	}

	#[test]
	fn covered_credits_only_interest() {
		let loan = loan(100 * UNIT, percent(10), 250 * UNIT);
		let now = loan.liquidation_date + 1;
		let interest = loan.interest(now).unwrap();

		assert_eq!(
			loan.delinquency_info::<DoubleInCollateral>(USD, now),
			Ok(DelinquencyInfo {
				interest,
				to_liquidate: 2 * (100 * UNIT + interest),
				not_covered: 0,
				pool_value_adjust: Adjustment::Increase(interest),
			})
		);
	}

	#[test]
	fn coverage_boundary() {
		let now = loan(100, FixedU128::zero(), 0).liquidation_date + 1;

		let exact = loan(100, FixedU128::zero(), 200)
			.delinquency_info::<DoubleInCollateral>(USD, now)
			.unwrap();
		assert_eq!(exact.to_liquidate, 200);
		assert_eq!(exact.not_covered, 0);
		assert_eq!(exact.pool_value_adjust, Adjustment::Increase(0));

		let short = loan(100, FixedU128::zero(), 198)
			.delinquency_info::<DoubleInCollateral>(USD, now)
			.unwrap();
		assert_eq!(short.to_liquidate, 198);
		assert_eq!(short.not_covered, 1);
		assert_eq!(short.pool_value_adjust, Adjustment::Decrease(1));
	}

	#[test]
	fn principal_not_covered() {
		let loan = loan(100, FixedU128::zero(), 150);
		let now = loan.liquidation_date + 1;

		assert_eq!(
			loan.delinquency_info::<DoubleInCollateral>(USD, now),
			Ok(DelinquencyInfo {
				interest: 0,
				to_liquidate: 150,
				not_covered: 25,
				pool_value_adjust: Adjustment::Decrease(25),
			})
		);
	}

	#[test]
	fn only_interest_not_covered() {
		let loan = loan(100 * UNIT, percent(100), 300 * UNIT);
		let now = loan.liquidation_date + 1;

		let info = loan.delinquency_info::<DoubleInCollateral>(USD, now).unwrap();
		let owed_as_collateral = 2 * (100 * UNIT + info.interest);

		assert!(info.interest > 100 * UNIT);
		assert_eq!(info.to_liquidate, 300 * UNIT);
		assert_eq!(info.not_covered, (owed_as_collateral - 300 * UNIT) / 2);
		assert_eq!(info.pool_value_adjust, Adjustment::Increase(50 * UNIT));
	}

	#[test]
	fn uncovered_obligation_never_exceeds_principal() {
		let loan = loan(100 * UNIT, percent(100), 10);
		let now = loan.liquidation_date + 1;

		let info = loan.delinquency_info::<DoubleInCollateral>(USD, now).unwrap();
		assert_eq!(info.not_covered, 100 * UNIT);
		assert_eq!(info.to_liquidate, 10);
		assert_eq!(info.pool_value_adjust, Adjustment::Decrease(100 * UNIT - 5));
	}

	#[test]
	fn missing_price() {
		let loan = loan(100, FixedU128::zero(), 150);

		assert_eq!(
			loan.delinquency_info::<DoubleInCollateral>(ETH, loan.liquidation_date + 1),
			Err(DispatchError::Other("no price"))
		);
	}

	#[test]
	fn repay_pays_interest_first() {
		let mut loan = loan(100 * UNIT, percent(10), 0);
		let now = START + SECONDS_PER_YEAR / 2;
		let interest = loan.interest(now).unwrap();

		let repayment = loan.repay(interest + UNIT, now).unwrap();

		assert_eq!(
			repayment,
			Repayment {
				paid: interest + UNIT,
				interest,
				principal: UNIT,
			}
		);
		assert_eq!(loan.amount, 99 * UNIT);
		assert_eq!(loan.last_repay, now);
		assert_eq!(loan.status, LoanStatus::PaidEarlyPart);
		assert_eq!(loan.interest(now), Ok(0));
	}

	#[test]
	fn repay_is_capped_at_the_obligation() {
		let mut loan = loan(100 * UNIT, percent(10), 0);
		let now = loan.due_date + SECONDS_PER_DAY;
		let owed = loan.total_owed(now).unwrap();

		let repayment = loan.repay(owed * 2, now).unwrap();

		assert_eq!(repayment.paid, owed);
		assert_eq!(repayment.principal, 100 * UNIT);
		assert_eq!(loan.amount, 0);
		assert_eq!(loan.status, LoanStatus::PaidLateFull);
	}

	#[test]
	fn liquidation_settles_the_loan() {
		let mut loan = loan(100, FixedU128::zero(), 150);
		let now = loan.liquidation_date + 1;
		let info = loan.delinquency_info::<DoubleInCollateral>(USD, now).unwrap();

		assert_eq!(loan.liquidate(&info, now), Ok(75));
		assert_eq!(loan.amount, 25);
		assert_eq!(loan.frozen_collateral, 0);
		assert_eq!(loan.last_repay, now);
		assert_eq!(loan.status, LoanStatus::DefaultPart);
	}
}
