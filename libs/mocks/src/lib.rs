pub mod custody;
pub mod limits;
pub mod permissions;
pub mod pools;
pub mod prices;
pub mod scores;
pub mod settings;

pub use custody::pallet as pallet_mock_custody;
pub use limits::pallet as pallet_mock_limits;
pub use permissions::pallet as pallet_mock_permissions;
pub use pools::pallet as pallet_mock_pools;
pub use prices::pallet as pallet_mock_prices;
pub use scores::pallet as pallet_mock_scores;
pub use settings::pallet as pallet_mock_settings;

pub mod reexport {
	pub use frame_support;
	pub use frame_system;
	pub use sp_core;
	pub use sp_io;
	pub use sp_runtime;
}

/// Creates a runtime with a pallet mock to make isolated tests
/// See tests below of this same file
#[macro_export]
macro_rules! make_runtime_for_mock {
	($runtime_name:ident, $mock_name:ident, $pallet:ident, $externalities:ident) => {
		use $crate::reexport::{
			frame_support,
			frame_support::traits::{ConstU16, ConstU32, ConstU64, Everything},
			frame_system,
			sp_core::H256,
			sp_io,
			sp_runtime::{
				testing::Header,
				traits::{BlakeTwo256, IdentityLookup},
			},
		};

		type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<$runtime_name>;
		type Block = frame_system::mocking::MockBlock<$runtime_name>;

		frame_support::construct_runtime!(
			pub enum $runtime_name where
				Block = Block,
				NodeBlock = Block,
				UncheckedExtrinsic = UncheckedExtrinsic,
			{
				System: frame_system,
				$mock_name: $pallet,
			}
		);

		impl frame_system::Config for $runtime_name {
			type AccountData = ();
			type AccountId = u64;
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

		pub fn $externalities() -> sp_io::TestExternalities {
			sp_io::TestExternalities::default()
		}
	};
}
