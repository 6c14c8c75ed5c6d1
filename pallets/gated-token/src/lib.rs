//! # Gated Token Pallet
//!
//! A fungible token whose transfers are gated by an allow-list until the token is unlocked.
//!
//! - While **locked** (the initial state), a transfer only succeeds if the receiver is on the
//!   allow-list.
//! - Once **unlocked**, the allow-list is no longer consulted for transfers.
//! - The allow-list is administered by the owner, the gate keeper or the dev address
//!   (see [`roles`]). Only the owner mints, appoints delegates or hands over ownership.
//! - Holders burn their own tokens; the owner may burn on anyone's behalf.

#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` and the `RuntimeEvent` config item are deprecated upstream.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use roles::{Privilege, RoleRegistry};
pub use weights::WeightInfo;

pub mod migrations;
pub mod roles;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-gated-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Maximum number of accounts accepted by a bulk allow-list call.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Henkaku")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "HENKAKU")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals (18 by convention)
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Always equals the sum of all balances.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Remaining amount `spender` may move out of `owner`'s balance, keyed `(owner, spender)`.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Accounts allowed to receive transfers while the token is locked
    #[pallet::storage]
    #[pallet::getter(fn is_allowed)]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::type_value]
    pub fn LockedOnDeploy() -> bool {
        true
    }

    /// Whether transfers are restricted to allow-listed receivers.
    #[pallet::storage]
    #[pallet::getter(fn is_locked)]
    pub type Locked<T> = StorageValue<_, bool, ValueQuery, LockedOnDeploy>;

    /// Owner, gate keeper and dev address.
    #[pallet::storage]
    #[pallet::getter(fn roles)]
    pub type Roles<T: Config> = StorageValue<_, RoleRegistry<T::AccountId>, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens destroyed
        Burned { from: T::AccountId, amount: u128 },
        /// Allowance of `spender` over `owner`'s balance set to `amount`
        Approved { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Account added to whitelist
        Whitelisted { account: T::AccountId },
        /// Account removed from whitelist
        RemovedFromWhitelist { account: T::AccountId },
        /// Gate keeper reassigned
        GateKeeperChanged { old: Option<T::AccountId>, new: T::AccountId },
        /// Dev address reassigned
        DevAddressChanged { old: Option<T::AccountId>, new: T::AccountId },
        /// Ownership handed over
        OwnershipTransferred { previous: T::AccountId, new: T::AccountId },
        /// Transfers no longer require an allow-listed receiver
        Unlocked { by: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// ONLY ADMIN CAN EXECUTE
        Unauthorized,
        /// INVALID: RECEIVER IS NOT ALLOWED
        ReceiverNotAllowed,
        /// INVALID: NOT YOUR ASSET
        NotOwnAsset,
        InsufficientBalance,
        InsufficientAllowance,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MaxBatchSize::get() > 0, "`MaxBatchSize` must admit at least one account");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create `amount` new tokens for `to`. Owner only.
        ///
        /// The receiver is not checked against the allow-list.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_privilege(&who, Privilege::Owner)?;

            let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let balance = Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

            TotalSupply::<T>::put(supply);
            Balances::<T>::insert(&to, balance);
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        /// Destroy `amount` of `holder`'s tokens.
        ///
        /// Allowed for the holder itself and for the owner.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, holder: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(who == holder || Roles::<T>::get().is_owner(&who), Error::<T>::NotOwnAsset);

            let balance = Balances::<T>::get(&holder)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientBalance)?;

            Balances::<T>::insert(&holder, balance);
            // Supply is never below a single balance.
            TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));
            Self::deposit_event(Event::Burned { from: holder, amount });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)
        }

        /// Let `spender` move up to `amount` of the caller's tokens. Overwrites any previous
        /// allowance. `u128::MAX` grants an allowance that is never consumed.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approved { owner, spender, amount });
            Ok(())
        }

        /// Move `amount` from `from` to `to` out of the caller's allowance.
        ///
        /// Subject to the same gate and balance rules as [`Pallet::transfer`].
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;

            let allowance = Allowances::<T>::get(&from, &spender);
            let remaining =
                allowance.checked_sub(amount).ok_or(Error::<T>::InsufficientAllowance)?;

            Self::do_transfer(&from, &to, amount)?;

            if allowance != u128::MAX {
                Allowances::<T>::insert(&from, &spender, remaining);
            }
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::add_whitelist_user())]
        pub fn add_whitelist_user(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_privilege(&who, Privilege::Admin)?;
            Self::do_add_whitelist(account);
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::add_whitelist_users(accounts.len() as u32))]
        pub fn add_whitelist_users(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxBatchSize>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_privilege(&who, Privilege::Admin)?;
            for account in accounts {
                Self::do_add_whitelist(account);
            }
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::remove_whitelist_user())]
        pub fn remove_whitelist_user(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_privilege(&who, Privilege::Admin)?;
            Self::do_remove_whitelist(account);
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::remove_whitelist_users(accounts.len() as u32))]
        pub fn remove_whitelist_users(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxBatchSize>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_privilege(&who, Privilege::Admin)?;
            for account in accounts {
                Self::do_remove_whitelist(account);
            }
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::set_gate_keeper())]
        pub fn set_gate_keeper(origin: OriginFor<T>, gate_keeper: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_privilege(&who, Privilege::Owner)?;

            let old = Roles::<T>::mutate(|roles| roles.gate_keeper.replace(gate_keeper.clone()));
            log::info!(target: LOG_TARGET, "gate keeper changed from {:?} to {:?}", old, gate_keeper);
            Self::deposit_event(Event::GateKeeperChanged { old, new: gate_keeper });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::set_dev_address())]
        pub fn set_dev_address(origin: OriginFor<T>, dev_address: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_privilege(&who, Privilege::Owner)?;

            let old = Roles::<T>::mutate(|roles| roles.dev_address.replace(dev_address.clone()));
            log::info!(target: LOG_TARGET, "dev address changed from {:?} to {:?}", old, dev_address);
            Self::deposit_event(Event::DevAddressChanged { old, new: dev_address });
            Ok(())
        }

        /// Hand ownership to `new_owner`. Takes effect immediately; the caller loses every
        /// owner-only privilege.
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_privilege(&who, Privilege::Owner)?;

            Roles::<T>::mutate(|roles| roles.owner = Some(new_owner.clone()));
            log::info!(target: LOG_TARGET, "ownership transferred from {:?} to {:?}", who, new_owner);
            Self::deposit_event(Event::OwnershipTransferred { previous: who, new: new_owner });
            Ok(())
        }

        /// Open transfers to every receiver. There is no way back to the locked state.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::un_lock())]
        pub fn un_lock(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_privilege(&who, Privilege::Admin)?;

            Locked::<T>::put(false);
            log::info!(target: LOG_TARGET, "token unlocked by {:?}", who);
            Self::deposit_event(Event::Unlocked { by: who });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        pub fn owner() -> Option<T::AccountId> {
            Roles::<T>::get().owner
        }

        pub fn gate_keeper() -> Option<T::AccountId> {
            Roles::<T>::get().gate_keeper
        }

        pub fn dev_address() -> Option<T::AccountId> {
            Roles::<T>::get().dev_address
        }

        fn ensure_privilege(who: &T::AccountId, required: Privilege) -> DispatchResult {
            ensure!(Roles::<T>::get().permits(who, required), Error::<T>::Unauthorized);
            Ok(())
        }

        fn ensure_receiver_allowed(to: &T::AccountId) -> DispatchResult {
            if Locked::<T>::get() && !Whitelist::<T>::get(to) {
                log::debug!(target: LOG_TARGET, "rejected transfer to {:?}: not allow-listed", to);
                return Err(Error::<T>::ReceiverNotAllowed.into());
            }
            Ok(())
        }

        /// Gate check, balance check, then the balance move. Nothing is written unless every
        /// check passes.
        pub(crate) fn do_transfer(
            from: &T::AccountId,
            to: &T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            Self::ensure_receiver_allowed(to)?;

            let from_balance = Balances::<T>::get(from)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientBalance)?;

            if from != to {
                let to_balance =
                    Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Balances::<T>::insert(from, from_balance);
                Balances::<T>::insert(to, to_balance);
            }

            Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
            Ok(())
        }

        fn do_add_whitelist(account: T::AccountId) {
            Whitelist::<T>::insert(&account, true);
            Self::deposit_event(Event::Whitelisted { account });
        }

        fn do_remove_whitelist(account: T::AccountId) {
            Whitelist::<T>::remove(&account);
            Self::deposit_event(Event::RemovedFromWhitelist { account });
        }

        /// Checks that the sum of all balances equals the total supply.
        #[cfg(any(feature = "try-runtime", test))]
        pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
            let sum = Balances::<T>::iter_values()
                .try_fold(0u128, |acc, balance| acc.checked_add(balance))
                .ok_or(sp_runtime::TryRuntimeError::Other("balance sum overflows u128"))?;
            ensure!(
                sum == TotalSupply::<T>::get(),
                sp_runtime::TryRuntimeError::Other("sum of balances differs from total supply")
            );
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Deploying account. Holds every owner privilege.
        pub owner: Option<T::AccountId>,
        pub gate_keeper: Option<T::AccountId>,
        pub dev_address: Option<T::AccountId>,
        /// Start with the gate open. Defaults to locked.
        pub unlocked: bool,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Accounts to whitelist at genesis
        pub whitelisted_accounts: Vec<T::AccountId>,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            Roles::<T>::put(RoleRegistry {
                owner: self.owner.clone(),
                gate_keeper: self.gate_keeper.clone(),
                dev_address: self.dev_address.clone(),
            });
            Locked::<T>::put(!self.unlocked);

            for account in &self.whitelisted_accounts {
                Whitelist::<T>::insert(account, true);
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                Balances::<T>::mutate(account, |balance| {
                    *balance = balance.checked_add(*amount).expect("Genesis balance overflows u128")
                });
                total = total.checked_add(*amount).expect("Genesis total supply overflows u128");
            }
            TotalSupply::<T>::put(total);
        }
    }
}
