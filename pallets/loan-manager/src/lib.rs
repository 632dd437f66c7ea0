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

//! # Loan manager pallet
//!
//! Lifecycle engine of collateralized loans. Borrowers freeze collateral in
//! custody and receive liquidity from a pool. Interest accrues linearly over
//! the outstanding principal, with a late fee multiplier after the due date.
//! Once the grace period after the due date is over, a liquidator can seize
//! the frozen collateral paying the principal and its interest to the pool.
//!
//! The pallet is instantiable. Each instance keeps its own loans, identifiers
//! and pause flags.
//!
//! ## Dispatchables
//! - [`Pallet::borrow`]: Freeze collateral and withdraw liquidity from a pool.
//! - [`Pallet::repay`]: Pay interest first and then principal of any loan.
//! - [`Pallet::liquidate`]: Seize the collateral of a delinquent loan.
//! - [`Pallet::pause`], [`Pallet::unpause`] and
//!   [`Pallet::set_function_paused`]: Stop the engine or some of its calls.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;
pub use weights::WeightInfo;

pub mod loan;
pub mod status;
pub mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[frame_support::pallet]
pub mod pallet {
	use frame_support::{
		pallet_prelude::*,
		traits::{tokens, UnixTime},
		transactional, PalletError,
	};
	use frame_system::pallet_prelude::*;
	use lending_traits::{
		CollateralCustody, CreditScore, LoanSettings, Permissions, PoolVault, PriceConverter,
		RiskLimits, Treasury,
	};
	use lending_types::{Adjustment, Moment, PermissionScope, Role};
	use sp_arithmetic::traits::EnsureFixedPointNumber;
	use sp_runtime::{
		traits::{AtLeast32BitUnsigned, BadOrigin, EnsureAdd, EnsureAddAssign, EnsureSub, One, Zero},
		ArithmeticError, FixedPointNumber, FixedPointOperand,
	};
	use sp_std::vec::Vec;

	use super::*;
	use crate::{
		loan::{DelinquencyInfo, Loan},
		status::{Action, LoanStatus, Phase},
		types::PausableFunction,
	};

	pub type LoanOf<T, I> = Loan<
		<T as frame_system::Config>::AccountId,
		<T as Config<I>>::PoolId,
		<T as Config<I>>::Balance,
		<T as Config<I>>::Rate,
		<T as Config<I>>::CurrencyId,
	>;

	const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

	pub(crate) const LOG_TARGET: &str = "runtime::loan-manager";

	#[pallet::pallet]
	#[pallet::storage_version(STORAGE_VERSION)]
	pub struct Pallet<T, I = ()>(_);

	#[pallet::config]
	pub trait Config<I: 'static = ()>: frame_system::Config {
		type RuntimeEvent: From<Event<Self, I>>
			+ IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// Amount of underlying or collateral
		type Balance: tokens::Balance + FixedPointOperand;

		/// Defines the rate type used for math computations
		type Rate: Parameter + Member + FixedPointNumber + MaxEncodedLen;

		/// Identify a currency, used both for underlying and collateral assets
		type CurrencyId: Parameter + Member + Copy + MaxEncodedLen;

		/// Identify a pool
		type PoolId: Parameter + Member + Copy + MaxEncodedLen;

		/// Identify a loan inside a pool
		type LoanId: Parameter + Member + Copy + MaxEncodedLen + AtLeast32BitUnsigned;

		/// Credit score of a borrower
		type Score: Parameter + Member;

		/// Fetching method for the time of the current block
		type Time: UnixTime;

		/// Custody holding the free and frozen collateral of the borrowers
		type Collateral: CollateralCustody<
			Self::AccountId,
			AssetId = Self::CurrencyId,
			Balance = Self::Balance,
		>;

		/// Converts amounts between underlying and collateral assets
		type Prices: PriceConverter<AssetId = Self::CurrencyId, Balance = Self::Balance>;

		/// Tracks the exposure of pools and borrowers
		type Limits: RiskLimits<
			Self::AccountId,
			PoolId = Self::PoolId,
			Score = Self::Score,
			Balance = Self::Balance,
		>;

		/// Gives the current score of a borrower
		type Scores: CreditScore<Self::AccountId, Score = Self::Score>;

		/// Access to the pool liquidity and valuation
		type Pool: PoolVault<
			Self::AccountId,
			PoolId = Self::PoolId,
			CurrencyId = Self::CurrencyId,
			Balance = Self::Balance,
		>;

		/// Receives a cut of the paid interest
		type Treasury: Treasury<
			Self::AccountId,
			CurrencyId = Self::CurrencyId,
			Balance = Self::Balance,
			Rate = Self::Rate,
		>;

		/// Per pool configuration of the accepted loans
		type Settings: LoanSettings<
			PoolId = Self::PoolId,
			CurrencyId = Self::CurrencyId,
			Score = Self::Score,
			Rate = Self::Rate,
		>;

		/// Used to verify permissions of users
		type Permissions: Permissions<
			Self::AccountId,
			Scope = PermissionScope<Self::PoolId>,
			Role = Role,
			Error = DispatchError,
		>;

		/// Version tag callers must send to interact with the engine
		#[pallet::constant]
		type CurrentVersion: Get<u32>;

		/// Max number of loans a borrower can have in this engine
		#[pallet::constant]
		type MaxLoansPerBorrower: Get<u32>;

		/// Information of runtime weights
		type WeightInfo: WeightInfo;
	}

	/// Contains the last loan id generated in each pool
	#[pallet::storage]
	pub(crate) type LastLoanId<T: Config<I>, I: 'static = ()> =
		StorageMap<_, Blake2_128Concat, T::PoolId, T::LoanId, ValueQuery>;

	/// Storage for all loans. Loans are never removed.
	#[pallet::storage]
	pub type Loans<T: Config<I>, I: 'static = ()> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		T::PoolId,
		Blake2_128Concat,
		T::LoanId,
		LoanOf<T, I>,
		OptionQuery,
	>;

	/// Loans issued to each borrower
	#[pallet::storage]
	pub(crate) type UserLoans<T: Config<I>, I: 'static = ()> = StorageMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		BoundedVec<(T::PoolId, T::LoanId), T::MaxLoansPerBorrower>,
		ValueQuery,
	>;

	#[pallet::storage]
	pub(crate) type Paused<T: Config<I>, I: 'static = ()> = StorageValue<_, bool, ValueQuery>;

	#[pallet::storage]
	pub(crate) type PausedFunctions<T: Config<I>, I: 'static = ()> =
		StorageMap<_, Blake2_128Concat, PausableFunction, bool, ValueQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config<I>, I: 'static = ()> {
		/// A loan was issued
		LoanCreated {
			borrower: T::AccountId,
			pool_id: T::PoolId,
			loan_id: T::LoanId,
			apr: T::Rate,
			amount: T::Balance,
		},
		/// An amount was repaid for a loan
		LoanPayed {
			pool_id: T::PoolId,
			loan_id: T::LoanId,
			payer: T::AccountId,
			interest: T::Balance,
			principal: T::Balance,
		},
		/// A loan was fully repaid and its collateral released
		LoanClosed {
			pool_id: T::PoolId,
			loan_id: T::LoanId,
			released_collateral: T::Balance,
		},
		/// The collateral of a delinquent loan was seized
		LoanLiquidated {
			pool_id: T::PoolId,
			loan_id: T::LoanId,
			liquidator: T::AccountId,
			seized_collateral: T::Balance,
			released_collateral: T::Balance,
			paid: T::Balance,
			not_covered: T::Balance,
		},
		Paused {
			who: T::AccountId,
		},
		Unpaused {
			who: T::AccountId,
		},
		FunctionPauseChanged {
			function: PausableFunction,
			paused: bool,
		},
	}

	#[pallet::error]
	pub enum Error<T, I = ()> {
		/// Emits when pool doesn't exist
		PoolNotFound,
		/// Emits when loan doesn't exist
		LoanNotFound,
		/// Emits when the loan doesn't exist or has no principal left
		LoanAmountZero,
		/// Emits when the engine is paused
		Paused,
		/// Emits when the called function is paused
		FunctionPaused,
		/// Emits when pausing an engine that is already paused
		AlreadyPaused,
		/// Emits when unpausing an engine that is not paused
		NotPaused,
		/// Emits when the version sent by the caller is not the current one
		VersionMismatch,
		/// Emits when the borrower reached the max number of loans
		MaxLoansPerBorrower,
		/// Emits when a valuation decrease is bigger than the pool value
		PoolValueBelowZero,
		/// Emits when the loan can not be borrowed
		BorrowLoanError(BorrowLoanError),
		/// Emits when the loan can not be repaid
		RepayLoanError(RepayLoanError),
		/// Emits when the loan can not be liquidated
		LiquidationError(LiquidationError),
	}

	/// Error related to loan borrowing
	#[derive(Encode, Decode, TypeInfo, PalletError)]
	pub enum BorrowLoanError {
		/// Emits when the borrowed amount is zero
		ZeroBorrow,
		/// Emits when the free collateral doesn't reach the required one
		InsufficientCollateral,
		/// Emits when the pool doesn't accept the collateral asset
		CollateralAssetNotSupported,
		/// Emits when the pool has no terms for the requested loan
		SettingsNotConfigured,
	}

	impl<T, I> From<BorrowLoanError> for Error<T, I> {
		fn from(error: BorrowLoanError) -> Self {
			Error::<T, I>::BorrowLoanError(error)
		}
	}

	/// Error related to loan repayment
	#[derive(Encode, Decode, TypeInfo, PalletError)]
	pub enum RepayLoanError {
		/// Emits when the repaid amount is zero
		ZeroRepay,
	}

	impl<T, I> From<RepayLoanError> for Error<T, I> {
		fn from(error: RepayLoanError) -> Self {
			Error::<T, I>::RepayLoanError(error)
		}
	}

	/// Error related to loan liquidation
	#[derive(Encode, Decode, TypeInfo, PalletError)]
	pub enum LiquidationError {
		/// Emits when the loan is not delinquent
		LoanIsLiquid,
		/// Emits when the loan was already partially liquidated
		AlreadyLiquidated,
	}

	impl<T, I> From<LiquidationError> for Error<T, I> {
		fn from(error: LiquidationError) -> Self {
			Error::<T, I>::LiquidationError(error)
		}
	}

	#[pallet::call]
	impl<T: Config<I>, I: 'static> Pallet<T, I> {
		/// Issues a loan of `amount` underlying from `pool_id`, freezing the
		/// required `collateral` of the caller.
		///
		/// A non zero `deposit` is moved into custody before checking the
		/// free collateral.
		#[pallet::weight(T::WeightInfo::borrow(T::MaxLoansPerBorrower::get()))]
		#[pallet::call_index(0)]
		#[transactional]
		#[allow(clippy::too_many_arguments)]
		pub fn borrow(
			origin: OriginFor<T>,
			pool_id: T::PoolId,
			collateral: T::CurrencyId,
			amount: T::Balance,
			ltv: T::Rate,
			duration: Moment,
			deposit: T::Balance,
			version: u32,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::ensure_not_paused(PausableFunction::Borrow)?;
			Self::ensure_version(version)?;
			ensure!(
				!amount.is_zero(),
				Error::<T, I>::from(BorrowLoanError::ZeroBorrow)
			);

			let underlying = Self::underlying(pool_id)?;
			let score = T::Scores::validated_score(&who)?;

			ensure!(
				T::Settings::collateral_supported(pool_id, collateral),
				Error::<T, I>::from(BorrowLoanError::CollateralAssetNotSupported)
			);

			let terms = T::Settings::loan_terms(pool_id, score.clone(), ltv, duration, collateral)
				.ok_or(Error::<T, I>::from(BorrowLoanError::SettingsNotConfigured))?;

			let required = Self::collateral_for(amount, ltv, underlying, collateral)?;

			if !deposit.is_zero() {
				T::Collateral::deposit(&who, collateral, deposit)?;
			}

			ensure!(
				T::Collateral::free_balance(&who, collateral) >= required,
				Error::<T, I>::from(BorrowLoanError::InsufficientCollateral)
			);
			T::Collateral::freeze(&who, collateral, required)?;

			let now = Self::now();
			let due_date = now.ensure_add(duration)?;
			let loan_id = Self::generate_loan_id(pool_id)?;

			Loans::<T, I>::insert(
				pool_id,
				loan_id,
				Loan {
					borrower: who.clone(),
					pool_id,
					amount,
					apr: terms.interest_rate,
					ltv,
					late_fee: terms.late_fee,
					issue_date: now,
					due_date,
					liquidation_date: due_date.ensure_add(terms.grace_period)?,
					last_repay: now,
					collateral,
					frozen_collateral: required,
					status: LoanStatus::New,
				},
			);

			UserLoans::<T, I>::try_mutate(&who, |loans| loans.try_push((pool_id, loan_id)))
				.map_err(|_| Error::<T, I>::MaxLoansPerBorrower)?;

			T::Pool::withdraw(pool_id, who.clone(), amount)?;
			T::Limits::on_borrow(pool_id, &who, score, amount)?;

			log::debug!(
				target: LOG_TARGET,
				"Loan {:?} of pool {:?} created for {:?} freezing {:?}",
				loan_id,
				pool_id,
				amount,
				required,
			);

			Self::deposit_event(Event::<T, I>::LoanCreated {
				borrower: who,
				pool_id,
				loan_id,
				apr: terms.interest_rate,
				amount,
			});

			Ok(())
		}

		/// Pays up to `amount` of a loan, interest first.
		/// Anybody can repay any loan. Only the outstanding obligation is
		/// charged to the caller.
		#[pallet::weight(T::WeightInfo::repay())]
		#[pallet::call_index(1)]
		#[transactional]
		pub fn repay(
			origin: OriginFor<T>,
			pool_id: T::PoolId,
			loan_id: T::LoanId,
			amount: T::Balance,
			version: u32,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::ensure_not_paused(PausableFunction::Repay)?;
			Self::ensure_version(version)?;
			ensure!(
				!amount.is_zero(),
				Error::<T, I>::from(RepayLoanError::ZeroRepay)
			);

			let underlying = Self::underlying(pool_id)?;
			let now = Self::now();

			let (repayment, written_off, borrower, collateral, released) =
				Self::mutate_loan(pool_id, loan_id, |loan| {
					let written_off = loan.status == LoanStatus::DefaultPart;
					let repayment = loan.repay(amount, now)?;

					let released = match loan.amount.is_zero() {
						true => Some(sp_std::mem::take(&mut loan.frozen_collateral)),
						false => None,
					};

					Ok((
						repayment,
						written_off,
						loan.borrower.clone(),
						loan.collateral,
						released,
					))
				})?;

			let cut = Self::collect_treasury_cut(underlying, &who, repayment.interest)?;
			T::Pool::deposit(pool_id, who.clone(), repayment.paid.ensure_sub(cut)?)?;

			// The principal of a partially liquidated loan is no longer part of
			// the pool valuation.
			let recovered = match written_off {
				true => repayment.paid,
				false => repayment.interest,
			};
			Self::update_pool_value(pool_id, Adjustment::Increase(recovered.ensure_sub(cut)?))?;

			if !repayment.principal.is_zero() {
				T::Limits::on_repay_or_liquidate(pool_id, &borrower, repayment.principal)?;
			}

			log::debug!(
				target: LOG_TARGET,
				"Loan {:?} of pool {:?} repaid with {:?} interest and {:?} principal",
				loan_id,
				pool_id,
				repayment.interest,
				repayment.principal,
			);

			Self::deposit_event(Event::<T, I>::LoanPayed {
				pool_id,
				loan_id,
				payer: who,
				interest: repayment.interest,
				principal: repayment.principal,
			});

			if let Some(released) = released {
				if !released.is_zero() {
					T::Collateral::unfreeze(&borrower, collateral, released)?;
				}
				T::Limits::on_loan_fulfillment(pool_id, &borrower)?;

				log::debug!(target: LOG_TARGET, "Loan {:?} of pool {:?} closed", loan_id, pool_id);

				Self::deposit_event(Event::<T, I>::LoanClosed {
					pool_id,
					loan_id,
					released_collateral: released,
				});
			}

			Ok(())
		}

		/// Seizes the collateral of a delinquent loan.
		/// The caller pays the principal and the accrued interest to the pool.
		/// Collateral above the obligation goes back to the borrower.
		#[pallet::weight(T::WeightInfo::liquidate())]
		#[pallet::call_index(2)]
		#[transactional]
		pub fn liquidate(
			origin: OriginFor<T>,
			pool_id: T::PoolId,
			loan_id: T::LoanId,
			version: u32,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::ensure_role(PermissionScope::Pool(pool_id), &who, Role::Liquidator)?;
			Self::ensure_not_paused(PausableFunction::Liquidate)?;
			Self::ensure_version(version)?;

			let underlying = Self::underlying(pool_id)?;
			let now = Self::now();

			let (info, frozen, principal, settled, borrower, collateral) =
				Self::mutate_loan(pool_id, loan_id, |loan| {
					ensure!(
						loan.is_delinquent(now),
						Error::<T, I>::from(LiquidationError::LoanIsLiquid)
					);
					ensure!(
						loan.status != LoanStatus::DefaultPart,
						Error::<T, I>::from(LiquidationError::AlreadyLiquidated)
					);

					let info = loan.delinquency_info::<T::Prices>(underlying, now)?;
					let frozen = loan.frozen_collateral;
					let principal = loan.amount;
					let released = loan.liquidate(&info, now)?;

					Ok((
						info,
						frozen,
						principal,
						released,
						loan.borrower.clone(),
						loan.collateral,
					))
				})?;

			let payment = principal.ensure_add(info.interest)?;
			let recovered_interest = match info.pool_value_adjust {
				Adjustment::Increase(amount) => amount.min(info.interest),
				Adjustment::Decrease(_) => Zero::zero(),
			};

			let cut = Self::collect_treasury_cut(underlying, &who, recovered_interest)?;
			T::Pool::deposit(pool_id, who.clone(), payment.ensure_sub(cut)?)?;

			T::Collateral::seize(&who, collateral, &borrower, info.to_liquidate)?;

			let released = frozen.ensure_sub(info.to_liquidate)?;
			if !released.is_zero() {
				T::Collateral::unfreeze(&borrower, collateral, released)?;
			}

			let adjustment = info.pool_value_adjust.ensure_add(Adjustment::Decrease(cut))?;
			Self::update_pool_value(pool_id, adjustment)?;

			if !settled.is_zero() {
				T::Limits::on_repay_or_liquidate(pool_id, &borrower, settled)?;
			}
			if info.not_covered.is_zero() {
				T::Limits::on_loan_fulfillment(pool_id, &borrower)?;
			}

			log::debug!(
				target: LOG_TARGET,
				"Loan {:?} of pool {:?} liquidated seizing {:?}, not covered {:?}",
				loan_id,
				pool_id,
				info.to_liquidate,
				info.not_covered,
			);

			Self::deposit_event(Event::<T, I>::LoanLiquidated {
				pool_id,
				loan_id,
				liquidator: who,
				seized_collateral: info.to_liquidate,
				released_collateral: released,
				paid: payment,
				not_covered: info.not_covered,
			});

			Ok(())
		}

		/// Stops every borrow, repay and liquidate call of this instance.
		#[pallet::weight(T::WeightInfo::pause())]
		#[pallet::call_index(3)]
		pub fn pause(origin: OriginFor<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::ensure_role(PermissionScope::Engine, &who, Role::Pauser)?;
			ensure!(!Paused::<T, I>::get(), Error::<T, I>::AlreadyPaused);

			Paused::<T, I>::put(true);

			log::info!(target: LOG_TARGET, "Engine paused by {:?}", who);
			Self::deposit_event(Event::<T, I>::Paused { who });

			Ok(())
		}

		#[pallet::weight(T::WeightInfo::unpause())]
		#[pallet::call_index(4)]
		pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::ensure_role(PermissionScope::Engine, &who, Role::Pauser)?;
			ensure!(Paused::<T, I>::get(), Error::<T, I>::NotPaused);

			Paused::<T, I>::put(false);

			log::info!(target: LOG_TARGET, "Engine unpaused by {:?}", who);
			Self::deposit_event(Event::<T, I>::Unpaused { who });

			Ok(())
		}

		/// Pauses or resumes a single function of this instance.
		#[pallet::weight(T::WeightInfo::set_function_paused())]
		#[pallet::call_index(5)]
		pub fn set_function_paused(
			origin: OriginFor<T>,
			function: PausableFunction,
			paused: bool,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::ensure_role(PermissionScope::Engine, &who, Role::Pauser)?;

			PausedFunctions::<T, I>::insert(function, paused);

			log::info!(
				target: LOG_TARGET,
				"Function {:?} paused: {:?}",
				function,
				paused
			);
			Self::deposit_event(Event::<T, I>::FunctionPauseChanged { function, paused });

			Ok(())
		}
	}

	/// Queries
	impl<T: Config<I>, I: 'static> Pallet<T, I> {
		/// Status of a loan with status `from` after `action` happens in
		/// `phase`.
		pub fn get_status(from: LoanStatus, phase: Phase, action: Action) -> LoanStatus {
			crate::status::next_status(from, phase, action)
		}

		pub fn loan(pool_id: T::PoolId, loan_id: T::LoanId) -> Result<LoanOf<T, I>, DispatchError> {
			Loans::<T, I>::get(pool_id, loan_id).ok_or_else(|| Error::<T, I>::LoanNotFound.into())
		}

		/// Interest accrued by the loan until now.
		pub fn get_interest(pool_id: T::PoolId, loan_id: T::LoanId) -> Result<T::Balance, DispatchError> {
			Ok(Self::loan(pool_id, loan_id)?.interest(Self::now())?)
		}

		pub fn get_delinquency_info(
			pool_id: T::PoolId,
			loan_id: T::LoanId,
		) -> Result<DelinquencyInfo<T::Balance>, DispatchError> {
			let underlying = Self::underlying(pool_id)?;
			Self::loan(pool_id, loan_id)?.delinquency_info::<T::Prices>(underlying, Self::now())
		}

		pub fn is_delinquent(pool_id: T::PoolId, loan_id: T::LoanId) -> bool {
			Loans::<T, I>::get(pool_id, loan_id)
				.map(|loan| loan.is_delinquent(Self::now()))
				.unwrap_or(false)
		}

		/// Collateral to freeze for borrowing `amount` of the pool underlying
		/// with a loan to value ratio of `ltv`.
		pub fn required_collateral(
			pool_id: T::PoolId,
			collateral: T::CurrencyId,
			amount: T::Balance,
			ltv: T::Rate,
		) -> Result<T::Balance, DispatchError> {
			Self::collateral_for(amount, ltv, Self::underlying(pool_id)?, collateral)
		}

		pub fn user_loans(who: &T::AccountId) -> Vec<(T::PoolId, T::LoanId)> {
			UserLoans::<T, I>::get(who).into_inner()
		}
	}

	/// Utility methods
	impl<T: Config<I>, I: 'static> Pallet<T, I> {
		fn now() -> Moment {
			T::Time::now().as_secs()
		}

		fn ensure_role(
			scope: PermissionScope<T::PoolId>,
			who: &T::AccountId,
			role: Role,
		) -> DispatchResult {
			T::Permissions::has(scope, who.clone(), role)
				.then_some(())
				.ok_or_else(|| BadOrigin.into())
		}

		fn ensure_not_paused(function: PausableFunction) -> DispatchResult {
			ensure!(!Paused::<T, I>::get(), Error::<T, I>::Paused);
			ensure!(
				!PausedFunctions::<T, I>::get(function),
				Error::<T, I>::FunctionPaused
			);
			Ok(())
		}

		fn ensure_version(version: u32) -> DispatchResult {
			ensure!(
				version == T::CurrentVersion::get(),
				Error::<T, I>::VersionMismatch
			);
			Ok(())
		}

		fn underlying(pool_id: T::PoolId) -> Result<T::CurrencyId, DispatchError> {
			ensure!(T::Pool::pool_exists(pool_id), Error::<T, I>::PoolNotFound);
			T::Pool::currency_for(pool_id).ok_or_else(|| Error::<T, I>::PoolNotFound.into())
		}

		fn collateral_for(
			amount: T::Balance,
			ltv: T::Rate,
			underlying: T::CurrencyId,
			collateral: T::CurrencyId,
		) -> Result<T::Balance, DispatchError> {
			let value = ltv
				.reciprocal()
				.ok_or(ArithmeticError::DivisionByZero)?
				.ensure_mul_int(amount)?;

			T::Prices::convert(value, underlying, collateral)
		}

		fn generate_loan_id(pool_id: T::PoolId) -> Result<T::LoanId, ArithmeticError> {
			LastLoanId::<T, I>::try_mutate(pool_id, |last_loan_id| {
				last_loan_id.ensure_add_assign(One::one())?;
				Ok(*last_loan_id)
			})
		}

		/// Sends the treasury share of `interest` from `payer` to the
		/// treasury. Returns the amount sent.
		fn collect_treasury_cut(
			currency: T::CurrencyId,
			payer: &T::AccountId,
			interest: T::Balance,
		) -> Result<T::Balance, DispatchError> {
			let cut = T::Treasury::percentage().ensure_mul_int(interest)?;

			if !cut.is_zero() {
				T::Treasury::collect(currency, payer, cut)?;
			}

			Ok(cut)
		}

		fn update_pool_value(
			pool_id: T::PoolId,
			adjustment: Adjustment<T::Balance>,
		) -> DispatchResult {
			if let Adjustment::Decrease(amount) = adjustment {
				ensure!(
					amount <= T::Pool::value(pool_id),
					Error::<T, I>::PoolValueBelowZero
				);
			}

			if adjustment.is_zero() {
				return Ok(());
			}

			T::Pool::update_value(pool_id, adjustment)
		}

		/// Mutates a loan with principal left.
		fn mutate_loan<F, R>(pool_id: T::PoolId, loan_id: T::LoanId, f: F) -> Result<R, DispatchError>
		where
			F: FnOnce(&mut LoanOf<T, I>) -> Result<R, DispatchError>,
		{
			Loans::<T, I>::try_mutate(pool_id, loan_id, |maybe_loan| {
				let loan = maybe_loan
					.as_mut()
					.filter(|loan| !loan.amount.is_zero())
					.ok_or(Error::<T, I>::LoanAmountZero)?;

				f(loan)
			})
		}
	}
}
