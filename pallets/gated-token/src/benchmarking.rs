//! Benchmarking setup for pallet-gated-token

use super::*;

#[allow(unused)]
use crate::Pallet as GatedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Makes `who` the sole privileged account.
fn set_owner<T: Config>(who: &T::AccountId) {
    Roles::<T>::put(RoleRegistry::with_owner(who.clone()));
}

fn accounts<T: Config>(n: u32) -> BoundedVec<T::AccountId, T::MaxBatchSize> {
    (0..n)
        .map(|i| account("member", i, 0))
        .collect::<Vec<_>>()
        .try_into()
        .expect("n is within MaxBatchSize")
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        set_owner::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        set_owner::<T>(&caller);
        Balances::<T>::insert(&holder, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&holder), 9_000_000);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        // Locked gate with an allow-listed receiver is the most expensive path
        Whitelist::<T>::insert(&recipient, true);
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);

        Whitelist::<T>::insert(&recipient, true);
        Balances::<T>::insert(&holder, 10_000_000);
        TotalSupply::<T>::put(10_000_000);
        Allowances::<T>::insert(&holder, &spender, 5_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), holder.clone(), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
        assert_eq!(Allowances::<T>::get(&holder, &spender), 4_000_000);
    }

    #[benchmark]
    fn add_whitelist_user() {
        let caller: T::AccountId = whitelisted_caller();
        let member: T::AccountId = account("member", 0, 0);
        set_owner::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), member.clone());

        assert_eq!(Whitelist::<T>::get(&member), true);
    }

    #[benchmark]
    fn add_whitelist_users(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        let members = accounts::<T>(n);
        set_owner::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), members.clone());

        for member in members {
            assert_eq!(Whitelist::<T>::get(&member), true);
        }
    }

    #[benchmark]
    fn remove_whitelist_user() {
        let caller: T::AccountId = whitelisted_caller();
        let member: T::AccountId = account("member", 0, 0);
        set_owner::<T>(&caller);
        Whitelist::<T>::insert(&member, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), member.clone());

        assert_eq!(Whitelist::<T>::get(&member), false);
    }

    #[benchmark]
    fn remove_whitelist_users(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        let members = accounts::<T>(n);
        set_owner::<T>(&caller);
        for member in members.iter() {
            Whitelist::<T>::insert(member, true);
        }

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), members.clone());

        for member in members {
            assert_eq!(Whitelist::<T>::get(&member), false);
        }
    }

    #[benchmark]
    fn set_gate_keeper() {
        let caller: T::AccountId = whitelisted_caller();
        let keeper: T::AccountId = account("keeper", 0, 0);
        set_owner::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), keeper.clone());

        assert_eq!(Roles::<T>::get().gate_keeper, Some(keeper));
    }

    #[benchmark]
    fn set_dev_address() {
        let caller: T::AccountId = whitelisted_caller();
        let dev: T::AccountId = account("dev", 0, 0);
        set_owner::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), dev.clone());

        assert_eq!(Roles::<T>::get().dev_address, Some(dev));
    }

    #[benchmark]
    fn transfer_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        let successor: T::AccountId = account("successor", 0, 0);
        set_owner::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), successor.clone());

        assert_eq!(Roles::<T>::get().owner, Some(successor));
    }

    #[benchmark]
    fn un_lock() {
        let caller: T::AccountId = whitelisted_caller();
        set_owner::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Locked::<T>::get(), false);
    }

    impl_benchmark_test_suite!(GatedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
