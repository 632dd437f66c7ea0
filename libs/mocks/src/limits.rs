#[frame_support::pallet(dev_mode)]
pub mod pallet {
	use frame_support::pallet_prelude::*;
	use lending_traits::RiskLimits;
	use mock_builder::{execute_call, register_call};

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type PoolId;
		type Score;
		type Balance;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	#[pallet::storage]
	type CallIds<T: Config> = StorageMap<_, _, String, mock_builder::CallId>;

	impl<T: Config> Pallet<T> {
		pub fn mock_on_borrow(
			f: impl Fn(T::PoolId, T::AccountId, T::Score, T::Balance) -> DispatchResult + 'static,
		) {
			register_call!(move |(a, b, c, d)| f(a, b, c, d));
		}

		pub fn mock_on_repay_or_liquidate(
			f: impl Fn(T::PoolId, T::AccountId, T::Balance) -> DispatchResult + 'static,
		) {
			register_call!(move |(a, b, c)| f(a, b, c));
		}

		pub fn mock_on_loan_fulfillment(
			f: impl Fn(T::PoolId, T::AccountId) -> DispatchResult + 'static,
		) {
			register_call!(move |(a, b)| f(a, b));
		}
	}

	impl<T: Config> RiskLimits<T::AccountId> for Pallet<T> {
		type Balance = T::Balance;
		type PoolId = T::PoolId;
		type Score = T::Score;

		fn on_borrow(a: T::PoolId, b: &T::AccountId, c: T::Score, d: T::Balance) -> DispatchResult {
			execute_call!((a, b.clone(), c, d))
		}

		fn on_repay_or_liquidate(a: T::PoolId, b: &T::AccountId, c: T::Balance) -> DispatchResult {
			execute_call!((a, b.clone(), c))
		}

		fn on_loan_fulfillment(a: T::PoolId, b: &T::AccountId) -> DispatchResult {
			execute_call!((a, b.clone()))
		}
	}
}
