/// Storage backed custody, so balances are rolled back together with the
/// storage of the pallet under test.
#[frame_support::pallet(dev_mode)]
pub mod pallet {
	use frame_support::{pallet_prelude::*, traits::tokens};
	use lending_traits::CollateralCustody;
	use sp_runtime::traits::{EnsureAddAssign, EnsureSubAssign};

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type AssetId: Parameter + Member + Copy + MaxEncodedLen;
		type Balance: tokens::Balance;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	/// Collateral held by an account outside of the custody.
	#[pallet::storage]
	pub type Wallets<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		Blake2_128Concat,
		T::AssetId,
		T::Balance,
		ValueQuery,
	>;

	#[pallet::storage]
	pub type Free<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		Blake2_128Concat,
		T::AssetId,
		T::Balance,
		ValueQuery,
	>;

	#[pallet::storage]
	pub type Frozen<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		Blake2_128Concat,
		T::AssetId,
		T::Balance,
		ValueQuery,
	>;

	#[pallet::error]
	pub enum Error<T> {
		/// The wallet has not enough collateral to deposit
		InsufficientBalance,
		/// Not enough free collateral to freeze
		InsufficientFreeCollateral,
		/// Not enough frozen collateral to unfreeze or seize
		InsufficientFrozenCollateral,
	}

	impl<T: Config> Pallet<T> {
		/// Give `amount` of `asset` to the wallet of `who`.
		pub fn fund(who: &T::AccountId, asset: T::AssetId, amount: T::Balance) {
			Wallets::<T>::mutate(who, asset, |balance| *balance = balance.saturating_add(amount));
		}

		pub fn wallet(who: &T::AccountId, asset: T::AssetId) -> T::Balance {
			Wallets::<T>::get(who, asset)
		}

		fn take(balance: &mut T::Balance, amount: T::Balance, error: Error<T>) -> DispatchResult {
			balance.ensure_sub_assign(amount).map_err(|_| error.into())
		}

		fn give(balance: &mut T::Balance, amount: T::Balance) -> DispatchResult {
			Ok(balance.ensure_add_assign(amount)?)
		}
	}

	impl<T: Config> CollateralCustody<T::AccountId> for Pallet<T> {
		type AssetId = T::AssetId;
		type Balance = T::Balance;

		fn free_balance(who: &T::AccountId, asset: T::AssetId) -> T::Balance {
			Free::<T>::get(who, asset)
		}

		fn frozen_balance(who: &T::AccountId, asset: T::AssetId) -> T::Balance {
			Frozen::<T>::get(who, asset)
		}

		fn deposit(who: &T::AccountId, asset: T::AssetId, amount: T::Balance) -> DispatchResult {
			Wallets::<T>::try_mutate(who, asset, |balance| {
				Self::take(balance, amount, Error::<T>::InsufficientBalance)
			})?;
			Free::<T>::try_mutate(who, asset, |balance| Self::give(balance, amount))
		}

		fn freeze(who: &T::AccountId, asset: T::AssetId, amount: T::Balance) -> DispatchResult {
			Free::<T>::try_mutate(who, asset, |balance| {
				Self::take(balance, amount, Error::<T>::InsufficientFreeCollateral)
			})?;
			Frozen::<T>::try_mutate(who, asset, |balance| Self::give(balance, amount))
		}

		fn unfreeze(who: &T::AccountId, asset: T::AssetId, amount: T::Balance) -> DispatchResult {
			Frozen::<T>::try_mutate(who, asset, |balance| {
				Self::take(balance, amount, Error::<T>::InsufficientFrozenCollateral)
			})?;
			Free::<T>::try_mutate(who, asset, |balance| Self::give(balance, amount))
		}

		fn seize(
			recipient: &T::AccountId,
			asset: T::AssetId,
			who: &T::AccountId,
			amount: T::Balance,
		) -> DispatchResult {
			Frozen::<T>::try_mutate(who, asset, |balance| {
				Self::take(balance, amount, Error::<T>::InsufficientFrozenCollateral)
			})?;
			Wallets::<T>::try_mutate(recipient, asset, |balance| Self::give(balance, amount))
		}
	}
}

#[cfg(test)]
mod tests {
	use frame_support::{assert_noop, assert_ok};
	use lending_traits::CollateralCustody;

	use super::pallet as pallet_mock_custody;
	use crate::make_runtime_for_mock;

	make_runtime_for_mock!(Runtime, MockCustody, pallet_mock_custody, new_test_ext);

	impl pallet_mock_custody::Config for Runtime {
		type AssetId = u32;
		type Balance = u128;
	}

	const USER: u64 = 1;
	const LIQUIDATOR: u64 = 2;
	const ASSET: u32 = 7;

	#[test]
	fn freeze_then_unfreeze_restores_free_balance() {
		new_test_ext().execute_with(|| {
			MockCustody::fund(&USER, ASSET, 1_000);
			assert_ok!(MockCustody::deposit(&USER, ASSET, 600));

			let free = MockCustody::free_balance(&USER, ASSET);
			assert_ok!(MockCustody::freeze(&USER, ASSET, 250));
			assert_eq!(MockCustody::free_balance(&USER, ASSET), free - 250);
			assert_eq!(MockCustody::frozen_balance(&USER, ASSET), 250);

			assert_ok!(MockCustody::unfreeze(&USER, ASSET, 250));
			assert_eq!(MockCustody::free_balance(&USER, ASSET), free);
			assert_eq!(MockCustody::frozen_balance(&USER, ASSET), 0);
		});
	}

	#[test]
	fn insufficient_balances() {
		new_test_ext().execute_with(|| {
			MockCustody::fund(&USER, ASSET, 100);

			assert_noop!(
				MockCustody::deposit(&USER, ASSET, 101),
				pallet_mock_custody::Error::<Runtime>::InsufficientBalance
			);

			assert_ok!(MockCustody::deposit(&USER, ASSET, 100));
			assert_noop!(
				MockCustody::freeze(&USER, ASSET, 101),
				pallet_mock_custody::Error::<Runtime>::InsufficientFreeCollateral
			);

			assert_ok!(MockCustody::freeze(&USER, ASSET, 40));
			assert_noop!(
				MockCustody::unfreeze(&USER, ASSET, 41),
				pallet_mock_custody::Error::<Runtime>::InsufficientFrozenCollateral
			);
		});
	}

	#[test]
	fn seize_moves_frozen_collateral_to_the_recipient() {
		new_test_ext().execute_with(|| {
			MockCustody::fund(&USER, ASSET, 100);
			assert_ok!(MockCustody::deposit(&USER, ASSET, 100));
			assert_ok!(MockCustody::freeze(&USER, ASSET, 80));

			assert_ok!(MockCustody::seize(&LIQUIDATOR, ASSET, &USER, 30));
			assert_eq!(MockCustody::frozen_balance(&USER, ASSET), 50);
			assert_eq!(MockCustody::free_balance(&USER, ASSET), 20);
			assert_eq!(MockCustody::wallet(&LIQUIDATOR, ASSET), 30);
		});
	}
}
