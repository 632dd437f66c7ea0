#[frame_support::pallet(dev_mode)]
pub mod pallet {
	use frame_support::pallet_prelude::*;
	use lending_traits::PriceConverter;
	use mock_builder::{execute_call, register_call};

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type AssetId;
		type Balance;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	#[pallet::storage]
	type CallIds<T: Config> = StorageMap<_, _, String, mock_builder::CallId>;

	impl<T: Config> Pallet<T> {
		pub fn mock_convert(
			f: impl Fn(T::Balance, T::AssetId, T::AssetId) -> Result<T::Balance, DispatchError>
				+ 'static,
		) {
			register_call!(move |(a, b, c)| f(a, b, c));
		}
	}

	impl<T: Config> PriceConverter for Pallet<T> {
		type AssetId = T::AssetId;
		type Balance = T::Balance;

		fn convert(a: T::Balance, b: T::AssetId, c: T::AssetId) -> Result<T::Balance, DispatchError> {
			execute_call!((a, b, c))
		}
	}
}
