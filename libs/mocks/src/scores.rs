#[frame_support::pallet(dev_mode)]
pub mod pallet {
	use frame_support::pallet_prelude::*;
	use lending_traits::CreditScore;
	use mock_builder::{execute_call, register_call};

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type Score;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	#[pallet::storage]
	type CallIds<T: Config> = StorageMap<_, _, String, mock_builder::CallId>;

	impl<T: Config> Pallet<T> {
		pub fn mock_validated_score(
			f: impl Fn(T::AccountId) -> Result<T::Score, DispatchError> + 'static,
		) {
			register_call!(f);
		}
	}

	impl<T: Config> CreditScore<T::AccountId> for Pallet<T> {
		type Score = T::Score;

		fn validated_score(a: &T::AccountId) -> Result<T::Score, DispatchError> {
			execute_call!(a.clone())
		}
	}
}
