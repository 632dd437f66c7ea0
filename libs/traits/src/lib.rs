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

//! # Lending traits
//!
//! Every collaborator the loan manager talks to is expressed here as a trait.
//! Runtimes wire real pallets behind them, tests wire the mocks of
//! `lending-mocks`.

// Ensure we're `no_std` when compiling for WebAssembly.
#![cfg_attr(not(feature = "std"), no_std)]

use codec::MaxEncodedLen;
use frame_support::{dispatch::DispatchResult, Parameter};
use lending_types::Adjustment;
use sp_runtime::traits::Member;
use sp_std::fmt::Debug;

/// Traits related to collateral custody.
pub mod collateral;

/// Traits related to risk limits.
pub mod limits;

/// Traits related to price conversions.
pub mod prices;

/// Traits related to borrower scores.
pub mod scores;

/// Traits related to the per pool loan settings.
pub mod settings;

pub use collateral::CollateralCustody;
pub use limits::RiskLimits;
pub use prices::PriceConverter;
pub use scores::CreditScore;
pub use settings::LoanSettings;

/// Checks and modifies the roles of an account.
pub trait Permissions<AccountId> {
	type Scope;
	type Role;
	type Error: Debug;
	type Ok: Debug;

	fn has(scope: Self::Scope, who: AccountId, role: Self::Role) -> bool;

	fn add(scope: Self::Scope, who: AccountId, role: Self::Role) -> Result<Self::Ok, Self::Error>;

	fn remove(
		scope: Self::Scope,
		who: AccountId,
		role: Self::Role,
	) -> Result<Self::Ok, Self::Error>;
}

/// The vault of a lending pool: the liquidity it holds and the value it
/// reports.
pub trait PoolVault<AccountId> {
	type PoolId: Parameter + Member + Debug + Copy + MaxEncodedLen;
	type CurrencyId;
	type Balance;

	/// Check if the pool exists
	fn pool_exists(pool_id: Self::PoolId) -> bool;

	/// Get the underlying currency the pool lends.
	fn currency_for(pool_id: Self::PoolId) -> Option<Self::CurrencyId>;

	/// Internal valuation of the pool in underlying units.
	fn value(pool_id: Self::PoolId) -> Self::Balance;

	/// Withdraw `amount` from the pool liquidity to the `to` account.
	fn withdraw(pool_id: Self::PoolId, to: AccountId, amount: Self::Balance) -> DispatchResult;

	/// Deposit `amount` from the `from` account into the pool liquidity.
	fn deposit(pool_id: Self::PoolId, from: AccountId, amount: Self::Balance) -> DispatchResult;

	/// Modify the internal valuation of the pool.
	/// Fails if the valuation would go below zero.
	fn update_value(pool_id: Self::PoolId, adjustment: Adjustment<Self::Balance>)
		-> DispatchResult;
}

/// Protocol treasury taking a cut of the interest paid to the pools.
pub trait Treasury<AccountId> {
	type CurrencyId;
	type Balance;
	type Rate;

	/// Fraction of the paid interest that goes to the treasury.
	fn percentage() -> Self::Rate;

	/// Move `amount` of `currency` from `from` to the treasury.
	fn collect(currency: Self::CurrencyId, from: &AccountId, amount: Self::Balance)
		-> DispatchResult;
}
