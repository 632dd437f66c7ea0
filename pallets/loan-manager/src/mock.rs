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

use std::time::Duration;

use frame_support::traits::{ConstU16, ConstU32, ConstU64, Everything, UnixTime};
use lending_mocks::{
	pallet_mock_custody, pallet_mock_limits, pallet_mock_permissions, pallet_mock_pools,
	pallet_mock_prices, pallet_mock_scores, pallet_mock_settings,
};
use lending_types::{PermissionScope, Role};
use sp_core::H256;
use sp_runtime::{
	testing::Header,
	traits::{BlakeTwo256, IdentityLookup},
	FixedPointNumber, FixedU128,
};

use crate::pallet as pallet_loan_manager;

pub const BLOCK_TIME: Duration = Duration::from_secs(12);
pub const DAY: Duration = Duration::from_secs(24 * 3600);

const BLOCK_TIME_MS: u64 = BLOCK_TIME.as_millis() as u64;

pub const BORROWER: AccountId = 1;
pub const OTHER_BORROWER: AccountId = 2;
pub const LIQUIDATOR: AccountId = 3;
pub const PAUSER: AccountId = 4;
pub const ANY: AccountId = 100;
pub const TREASURY: AccountId = 99;

pub const POOL_A: PoolId = 1;
pub const POOL_B: PoolId = 2;
pub const NO_POOL: PoolId = 42;

pub const USD: CurrencyId = 1;
pub const ETH: CurrencyId = 2;
pub const NO_PRICED: CurrencyId = 3;

pub const CURRENCY: Balance = 1_000_000_000_000;
pub const POOL_LIQUIDITY: Balance = 10_000 * CURRENCY;
pub const WALLET_COLLATERAL: Balance = 1_000 * CURRENCY;
pub const LIQUIDATOR_FUNDS: Balance = 10_000 * CURRENCY;

pub const VERSION: u32 = 1;
pub const SCORE: Score = 700;

type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Runtime>;
type Block = frame_system::mocking::MockBlock<Runtime>;

pub type AccountId = u64;
pub type Balance = u128;
pub type Rate = FixedU128;
pub type CurrencyId = u32;
pub type PoolId = u32;
pub type LoanId = u32;
pub type Score = u32;

frame_support::construct_runtime!(
	pub enum Runtime where
		Block = Block,
		NodeBlock = Block,
		UncheckedExtrinsic = UncheckedExtrinsic,
	{
		System: frame_system,
		Timer: pallet_timestamp,
		MockCustody: pallet_mock_custody,
		MockPools: pallet_mock_pools,
		MockPrices: pallet_mock_prices,
		MockScores: pallet_mock_scores,
		MockSettings: pallet_mock_settings,
		MockLimits: pallet_mock_limits,
		MockPermissions: pallet_mock_permissions,
		LoanManager: pallet_loan_manager,
		OtherLoanManager: pallet_loan_manager::<Instance1>,
	}
);

frame_support::parameter_types! {
	pub const CurrentVersion: u32 = VERSION;
	pub const MaxLoansPerBorrower: u32 = 4;
}

impl frame_system::Config for Runtime {
	type AccountData = ();
	type AccountId = AccountId;
	type BaseCallFilter = Everything;
	type BlockHashCount = ConstU64<250>;
	type BlockLength = ();
	type BlockNumber = u64;
	type BlockWeights = ();
	type DbWeight = ();
	type Hash = H256;
	type Hashing = BlakeTwo256;
	type Header = Header;
	type Index = u64;
	type Lookup = IdentityLookup<Self::AccountId>;
	type MaxConsumers = ConstU32<16>;
	type OnKilledAccount = ();
	type OnNewAccount = ();
	type OnSetCode = ();
	type PalletInfo = PalletInfo;
	type RuntimeCall = RuntimeCall;
	type RuntimeEvent = RuntimeEvent;
	type RuntimeOrigin = RuntimeOrigin;
	type SS58Prefix = ConstU16<42>;
	type SystemWeightInfo = ();
	type Version = ();
}

impl pallet_timestamp::Config for Runtime {
	type MinimumPeriod = ConstU64<BLOCK_TIME_MS>;
	type Moment = u64;
	type OnTimestampSet = ();
	type WeightInfo = ();
}

impl pallet_mock_custody::Config for Runtime {
	type AssetId = CurrencyId;
	type Balance = Balance;
}

impl pallet_mock_pools::Config for Runtime {
	type Balance = Balance;
	type CurrencyId = CurrencyId;
	type PoolId = PoolId;
	type Rate = Rate;
}

impl pallet_mock_prices::Config for Runtime {
	type AssetId = CurrencyId;
	type Balance = Balance;
}

impl pallet_mock_scores::Config for Runtime {
	type Score = Score;
}

impl pallet_mock_settings::Config for Runtime {
	type CurrencyId = CurrencyId;
	type PoolId = PoolId;
	type Rate = Rate;
	type Score = Score;
}

impl pallet_mock_limits::Config for Runtime {
	type Balance = Balance;
	type PoolId = PoolId;
	type Score = Score;
}

impl pallet_mock_permissions::Config for Runtime {
	type Role = Role;
	type Scope = PermissionScope<PoolId>;
}

impl pallet_loan_manager::Config for Runtime {
	type Balance = Balance;
	type Collateral = MockCustody;
	type CurrencyId = CurrencyId;
	type CurrentVersion = CurrentVersion;
	type Limits = MockLimits;
	type LoanId = LoanId;
	type MaxLoansPerBorrower = MaxLoansPerBorrower;
	type Permissions = MockPermissions;
	type Pool = MockPools;
	type PoolId = PoolId;
	type Prices = MockPrices;
	type Rate = Rate;
	type RuntimeEvent = RuntimeEvent;
	type Score = Score;
	type Scores = MockScores;
	type Settings = MockSettings;
	type Time = Timer;
	type Treasury = MockPools;
	type WeightInfo = ();
}

impl pallet_loan_manager::Config<pallet_loan_manager::Instance1> for Runtime {
	type Balance = Balance;
	type Collateral = MockCustody;
	type CurrencyId = CurrencyId;
	type CurrentVersion = CurrentVersion;
	type Limits = MockLimits;
	type LoanId = LoanId;
	type MaxLoansPerBorrower = MaxLoansPerBorrower;
	type Permissions = MockPermissions;
	type Pool = MockPools;
	type PoolId = PoolId;
	type Prices = MockPrices;
	type Rate = Rate;
	type RuntimeEvent = RuntimeEvent;
	type Score = Score;
	type Scores = MockScores;
	type Settings = MockSettings;
	type Time = Timer;
	type Treasury = MockPools;
	type WeightInfo = ();
}

pub fn new_test_ext() -> sp_io::TestExternalities {
	let storage = frame_system::GenesisConfig::default()
		.build_storage::<Runtime>()
		.unwrap();

	let mut ext = sp_io::TestExternalities::new(storage);
	ext.execute_with(|| {
		System::set_block_number(1);
		advance_time(BLOCK_TIME);

		MockPools::create_pool(POOL_A, USD, POOL_LIQUIDITY);
		MockPools::create_pool(POOL_B, USD, POOL_LIQUIDITY);
		MockPools::set_treasury(TREASURY, FixedU128::saturating_from_rational(10, 100));
		MockPools::fund(USD, &LIQUIDATOR, LIQUIDATOR_FUNDS);

		MockCustody::fund(&BORROWER, ETH, WALLET_COLLATERAL);
		MockCustody::fund(&OTHER_BORROWER, ETH, WALLET_COLLATERAL);
	});
	ext
}

pub fn now() -> Duration {
	<Timer as UnixTime>::now()
}

pub fn advance_time(elapsed: Duration) {
	Timer::set_timestamp(Timer::get() + elapsed.as_millis() as u64);
}
