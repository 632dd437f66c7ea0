#[frame_support::pallet(dev_mode)]
pub mod pallet {
	use frame_support::pallet_prelude::*;
	use lending_traits::LoanSettings;
	use lending_types::{LoanTerms, Moment};
	use mock_builder::{execute_call, register_call};

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type PoolId;
		type CurrencyId;
		type Score;
		type Rate;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	#[pallet::storage]
	type CallIds<T: Config> = StorageMap<_, _, String, mock_builder::CallId>;

	impl<T: Config> Pallet<T> {
		pub fn mock_collateral_supported(f: impl Fn(T::PoolId, T::CurrencyId) -> bool + 'static) {
			register_call!(move |(a, b)| f(a, b));
		}

		pub fn mock_loan_terms(
			f: impl Fn(T::PoolId, T::Score, T::Rate, Moment, T::CurrencyId) -> Option<LoanTerms<T::Rate>>
				+ 'static,
		) {
			register_call!(move |(a, b, c, d, e)| f(a, b, c, d, e));
		}
	}

	impl<T: Config> LoanSettings for Pallet<T> {
		type CurrencyId = T::CurrencyId;
		type PoolId = T::PoolId;
		type Rate = T::Rate;
		type Score = T::Score;

		fn collateral_supported(a: T::PoolId, b: T::CurrencyId) -> bool {
			execute_call!((a, b))
		}

		fn loan_terms(
			a: T::PoolId,
			b: T::Score,
			c: T::Rate,
			d: Moment,
			e: T::CurrencyId,
		) -> Option<LoanTerms<T::Rate>> {
			execute_call!((a, b, c, d, e))
		}
	}
}
