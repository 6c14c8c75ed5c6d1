//! Role registry for the gated token.
//!
//! Three distinguished accounts hold privilege over the token:
//!
//! - **owner**: set at genesis (or by migration), transferable. The only role that may mint,
//!   reassign the delegates, or hand over ownership.
//! - **gate keeper**: optional delegate appointed by the owner.
//! - **dev address**: optional delegate appointed by the owner.
//!
//! All three may administer the allow-list and unlock the token. Verdicts are computed from an
//! explicit [`RoleRegistry`] value and the caller, so the check carries no hidden state.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::DefaultNoBound;
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Privilege tier required by a call.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Privilege {
    /// Owner only.
    Owner,
    /// Owner, gate keeper or dev address.
    Admin,
}

/// The accounts currently holding a privileged role.
#[derive(
    Clone, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug, DefaultNoBound,
)]
pub struct RoleRegistry<AccountId> {
    pub owner: Option<AccountId>,
    pub gate_keeper: Option<AccountId>,
    pub dev_address: Option<AccountId>,
}

impl<AccountId: PartialEq> RoleRegistry<AccountId> {
    /// Registry for a fresh deployment: `owner` set, no delegates.
    pub fn with_owner(owner: AccountId) -> Self {
        Self { owner: Some(owner), gate_keeper: None, dev_address: None }
    }

    pub fn is_owner(&self, who: &AccountId) -> bool {
        self.owner.as_ref() == Some(who)
    }

    /// True if `who` holds any of the three roles.
    pub fn is_admin(&self, who: &AccountId) -> bool {
        self.is_owner(who) ||
            self.gate_keeper.as_ref() == Some(who) ||
            self.dev_address.as_ref() == Some(who)
    }

    /// Permission verdict for `who` against the required tier.
    pub fn permits(&self, who: &AccountId, required: Privilege) -> bool {
        match required {
            Privilege::Owner => self.is_owner(who),
            Privilege::Admin => self.is_admin(who),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: u64 = 1;
    const KEEPER: u64 = 2;
    const DEV: u64 = 3;
    const STRANGER: u64 = 4;

    fn full_registry() -> RoleRegistry<u64> {
        RoleRegistry { owner: Some(OWNER), gate_keeper: Some(KEEPER), dev_address: Some(DEV) }
    }

    #[test]
    fn empty_registry_permits_nobody() {
        let roles = RoleRegistry::<u64>::default();
        for who in [OWNER, KEEPER, DEV, STRANGER] {
            assert!(!roles.permits(&who, Privilege::Owner));
            assert!(!roles.permits(&who, Privilege::Admin));
        }
    }

    #[test]
    fn with_owner_sets_only_owner() {
        let roles = RoleRegistry::with_owner(OWNER);
        assert_eq!(roles.owner, Some(OWNER));
        assert_eq!(roles.gate_keeper, None);
        assert_eq!(roles.dev_address, None);
    }

    #[test]
    fn every_role_is_admin() {
        let roles = full_registry();
        assert!(roles.permits(&OWNER, Privilege::Admin));
        assert!(roles.permits(&KEEPER, Privilege::Admin));
        assert!(roles.permits(&DEV, Privilege::Admin));
        assert!(!roles.permits(&STRANGER, Privilege::Admin));
    }

    #[test]
    fn only_owner_passes_owner_tier() {
        let roles = full_registry();
        assert!(roles.permits(&OWNER, Privilege::Owner));
        assert!(!roles.permits(&KEEPER, Privilege::Owner));
        assert!(!roles.permits(&DEV, Privilege::Owner));
        assert!(!roles.permits(&STRANGER, Privilege::Owner));
    }

    #[test]
    fn one_account_may_hold_several_roles() {
        let roles =
            RoleRegistry { owner: Some(OWNER), gate_keeper: Some(OWNER), dev_address: None };
        assert!(roles.permits(&OWNER, Privilege::Owner));
        assert!(roles.permits(&OWNER, Privilege::Admin));
        assert!(!roles.permits(&DEV, Privilege::Admin));
    }

    #[test]
    fn registry_roundtrips_through_scale() {
        let roles = full_registry();
        let decoded = RoleRegistry::<u64>::decode(&mut &roles.encode()[..]).unwrap();
        assert_eq!(decoded, roles);
    }
}
