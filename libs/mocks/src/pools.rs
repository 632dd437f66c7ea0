/// Storage backed pools with the underlying balances of their users and the
/// protocol treasury.
#[frame_support::pallet(dev_mode)]
pub mod pallet {
	use frame_support::{pallet_prelude::*, traits::tokens};
	use lending_traits::{PoolVault, Treasury};
	use lending_types::Adjustment;
	use sp_arithmetic::FixedPointNumber;
	use sp_runtime::traits::{EnsureAddAssign, EnsureSubAssign};

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type PoolId: Parameter + Member + Copy + MaxEncodedLen;
		type CurrencyId: Parameter + Member + Copy + MaxEncodedLen;
		type Balance: tokens::Balance;
		type Rate: Parameter + Member + FixedPointNumber;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
	pub struct PoolDetails<CurrencyId, Balance> {
		pub currency: CurrencyId,
		/// Liquidity available to borrowers
		pub reserve: Balance,
		/// Internal valuation reported by the pool
		pub value: Balance,
	}

	#[pallet::storage]
	pub type Pools<T: Config> = StorageMap<
		_,
		Blake2_128Concat,
		T::PoolId,
		PoolDetails<T::CurrencyId, T::Balance>,
	>;

	/// Underlying balances held by accounts.
	#[pallet::storage]
	pub type Holdings<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		T::CurrencyId,
		Blake2_128Concat,
		T::AccountId,
		T::Balance,
		ValueQuery,
	>;

	#[pallet::storage]
	pub type TreasuryAccount<T: Config> = StorageValue<_, T::AccountId>;

	#[pallet::storage]
	pub type TreasuryPercentage<T: Config> = StorageValue<_, T::Rate, ValueQuery>;

	#[pallet::error]
	pub enum Error<T> {
		PoolNotFound,
		/// The pool has not enough liquidity
		InsufficientReserve,
		/// The account has not enough underlying balance
		InsufficientBalance,
		/// The adjustment would leave the pool valuation below zero
		PoolValueBelowZero,
		TreasuryNotSet,
	}

	impl<T: Config> Pallet<T> {
		/// Create a pool whose reserve and value equal `liquidity`.
		pub fn create_pool(
			pool_id: T::PoolId,
			currency: T::CurrencyId,
			liquidity: T::Balance,
		) {
			Pools::<T>::insert(
				pool_id,
				PoolDetails {
					currency,
					reserve: liquidity,
					value: liquidity,
				},
			);
		}

		pub fn set_treasury(account: T::AccountId, percentage: T::Rate) {
			TreasuryAccount::<T>::put(account);
			TreasuryPercentage::<T>::put(percentage);
		}

		/// Give `amount` of `currency` to `who`.
		pub fn fund(currency: T::CurrencyId, who: &T::AccountId, amount: T::Balance) {
			Holdings::<T>::mutate(currency, who, |balance| {
				*balance = balance.saturating_add(amount)
			});
		}

		pub fn balance(currency: T::CurrencyId, who: &T::AccountId) -> T::Balance {
			Holdings::<T>::get(currency, who)
		}

		pub fn reserve(pool_id: T::PoolId) -> T::Balance {
			Pools::<T>::get(pool_id)
				.map(|pool| pool.reserve)
				.unwrap_or_default()
		}

		fn transfer(
			currency: T::CurrencyId,
			from: &T::AccountId,
			to: &T::AccountId,
			amount: T::Balance,
		) -> DispatchResult {
			Holdings::<T>::try_mutate(currency, from, |balance| {
				balance
					.ensure_sub_assign(amount)
					.map_err(|_| Error::<T>::InsufficientBalance)
			})?;
			Holdings::<T>::try_mutate(currency, to, |balance| -> DispatchResult {
				Ok(balance.ensure_add_assign(amount)?)
			})
		}

		fn mutate_pool<R>(
			pool_id: T::PoolId,
			f: impl FnOnce(
				&mut PoolDetails<T::CurrencyId, T::Balance>,
			) -> Result<R, DispatchError>,
		) -> Result<R, DispatchError> {
			Pools::<T>::try_mutate(pool_id, |pool| {
				f(pool.as_mut().ok_or(Error::<T>::PoolNotFound)?)
			})
		}
	}

	impl<T: Config> PoolVault<T::AccountId> for Pallet<T> {
		type Balance = T::Balance;
		type CurrencyId = T::CurrencyId;
		type PoolId = T::PoolId;

		fn pool_exists(pool_id: T::PoolId) -> bool {
			Pools::<T>::contains_key(pool_id)
		}

		fn currency_for(pool_id: T::PoolId) -> Option<T::CurrencyId> {
			Pools::<T>::get(pool_id).map(|pool| pool.currency)
		}

		fn value(pool_id: T::PoolId) -> T::Balance {
			Pools::<T>::get(pool_id)
				.map(|pool| pool.value)
				.unwrap_or_default()
		}

		fn withdraw(pool_id: T::PoolId, to: T::AccountId, amount: T::Balance) -> DispatchResult {
			let currency = Self::mutate_pool(pool_id, |pool| {
				pool.reserve
					.ensure_sub_assign(amount)
					.map_err(|_| Error::<T>::InsufficientReserve)?;
				Ok(pool.currency)
			})?;

			Self::fund(currency, &to, amount);
			Ok(())
		}

		fn deposit(pool_id: T::PoolId, from: T::AccountId, amount: T::Balance) -> DispatchResult {
			let currency = Self::currency_for(pool_id).ok_or(Error::<T>::PoolNotFound)?;

			Holdings::<T>::try_mutate(currency, &from, |balance| {
				balance
					.ensure_sub_assign(amount)
					.map_err(|_| Error::<T>::InsufficientBalance)
			})?;

			Self::mutate_pool(pool_id, |pool| Ok(pool.reserve.ensure_add_assign(amount)?))
		}

		fn update_value(pool_id: T::PoolId, adjustment: Adjustment<T::Balance>) -> DispatchResult {
			Self::mutate_pool(pool_id, |pool| {
				pool.value = adjustment
					.apply(pool.value)
					.map_err(|_| Error::<T>::PoolValueBelowZero)?;
				Ok(())
			})
		}
	}

	impl<T: Config> Treasury<T::AccountId> for Pallet<T> {
		type Balance = T::Balance;
		type CurrencyId = T::CurrencyId;
		type Rate = T::Rate;

		fn percentage() -> T::Rate {
			TreasuryPercentage::<T>::get()
		}

		fn collect(currency: T::CurrencyId, from: &T::AccountId, amount: T::Balance) -> DispatchResult {
			let treasury = TreasuryAccount::<T>::get().ok_or(Error::<T>::TreasuryNotSet)?;
			Self::transfer(currency, from, &treasury, amount)
		}
	}
}
