//! Storage migrations for pallet-gated-token.
//!
//! Each migration is versioned and runs exactly once: it checks the on-chain storage version,
//! transforms storage, then bumps the version. Re-running a migration on an already migrated
//! chain is a no-op.
//!
//! # Wiring Migrations in Runtime
//!
//! ```ignore
//! parameter_types! {
//!     pub TokenOwner: AccountId = /* deploying account */;
//! }
//!
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_gated_token::migrations::v1::MigrateToV1<Runtime, TokenOwner>,
//! >;
//! ```
//!
//! # Guidelines
//!
//! - **Never skip versions**: always migrate sequentially (v1 → v2 → v3)
//! - **Accurate weights**: return the `Weight` of the DB operations actually performed
//! - **Logging**: use `log::info!` with the pallet log target to track progress

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet, Roles, LOG_TARGET};

/// Version 0 → 1: deploy the token onto a running chain.
///
/// Chains that start with the pallet get their owner from genesis. Chains that add the pallet
/// in a runtime upgrade have no genesis for it, so this migration seeds the owner from
/// `InitialOwner`. The token starts locked with an empty allow-list either way, which is the
/// storage default.
pub mod v1 {
    use super::*;

    /// Migration struct for upgrading storage to version 1.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The runtime configuration type implementing `Config`
    /// * `InitialOwner` - Account that becomes owner unless one is already set
    pub struct MigrateToV1<T, InitialOwner>(PhantomData<(T, InitialOwner)>);

    impl<T: Config, InitialOwner: Get<T::AccountId>> OnRuntimeUpgrade
        for MigrateToV1<T, InitialOwner>
    {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                let seeded = Roles::<T>::mutate(|roles| {
                    if roles.owner.is_some() {
                        return false;
                    }
                    roles.owner = Some(InitialOwner::get());
                    true
                });

                if seeded {
                    log::info!(
                        target: LOG_TARGET,
                        "Running migration v0 → v1: owner set to {:?}",
                        InitialOwner::get()
                    );
                } else {
                    log::info!(
                        target: LOG_TARGET,
                        "Running migration v0 → v1: owner already present, left untouched"
                    );
                }

                StorageVersion::new(1).put::<Pallet<T>>();

                // Version read + roles read, version write + roles write
                T::DbWeight::get().reads_writes(2, 2)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );

                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );

            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            let post_version = Pallet::<T>::on_chain_storage_version();

            log::info!(
                target: LOG_TARGET,
                "Post-upgrade: version changed from {} to {:?}",
                pre_version,
                post_version
            );

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
                frame_support::ensure!(
                    Roles::<T>::get().owner.is_some(),
                    sp_runtime::TryRuntimeError::Other("Migration to v1 left the token ownerless")
                );
            }

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_test_ext, GatedToken, Test, OWNER};
    use frame_support::{parameter_types, traits::StorageVersion};

    parameter_types! {
        pub const UpgradeOwner: u64 = 42;
    }

    type Migration = v1::MigrateToV1<Test, UpgradeOwner>;

    /// A chain that adds the pallet mid-life: no storage version, no roles.
    fn simulate_pallet_added_by_upgrade() {
        StorageVersion::new(0).put::<Pallet<Test>>();
        Roles::<Test>::kill();
    }

    #[test]
    fn migration_v1_seeds_owner() {
        new_test_ext().execute_with(|| {
            simulate_pallet_added_by_upgrade();
            assert_eq!(GatedToken::owner(), None);

            let _weight = Migration::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert_eq!(GatedToken::owner(), Some(42));
            assert_eq!(GatedToken::gate_keeper(), None);
            assert_eq!(GatedToken::dev_address(), None);
            assert_eq!(GatedToken::is_locked(), true);
        });
    }

    #[test]
    fn migration_v1_keeps_existing_owner() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();

            Migration::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert_eq!(GatedToken::owner(), Some(OWNER));
        });
    }

    #[test]
    fn migration_v1_idempotent() {
        new_test_ext().execute_with(|| {
            simulate_pallet_added_by_upgrade();
            Migration::on_runtime_upgrade();

            // Ownership moves on after the upgrade
            Roles::<Test>::mutate(|roles| roles.owner = Some(7));

            Migration::on_runtime_upgrade();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert_eq!(GatedToken::owner(), Some(7));
        });
    }

    #[test]
    fn migration_v1_skipped_on_higher_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(5).put::<Pallet<Test>>();
            Roles::<Test>::kill();

            Migration::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 5);
            assert_eq!(GatedToken::owner(), None);
        });
    }
}
