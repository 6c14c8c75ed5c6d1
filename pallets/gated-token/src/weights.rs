//! Weights for pallet-gated-token.
//!
//! Estimated figures. Replace with generated values from the `runtime-benchmarks` suite in
//! `benchmarking.rs` once it has run on reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-gated-token.
pub trait WeightInfo {
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn add_whitelist_user() -> Weight;
    fn add_whitelist_users(n: u32) -> Weight;
    fn remove_whitelist_user() -> Weight;
    fn remove_whitelist_users(n: u32) -> Weight;
    fn set_gate_keeper() -> Weight;
    fn set_dev_address() -> Weight;
    fn transfer_ownership() -> Weight;
    fn un_lock() -> Weight;
}

/// Weights for pallet-gated-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Roles` (r:1 w:0), `TotalSupply` (r:1 w:1), `Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(14_200_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Roles` (r:1 w:0), `TotalSupply` (r:1 w:1), `Balances` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(14_900_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Locked` (r:1 w:0), `Whitelist` (r:1 w:0), `Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(19_600_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Allowances` (r:0 w:1)
    fn approve() -> Weight {
        Weight::from_parts(9_800_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Allowances` (r:1 w:1), `Locked` (r:1 w:0), `Whitelist` (r:1 w:0),
    /// `Balances` (r:2 w:2)
    fn transfer_from() -> Weight {
        Weight::from_parts(24_300_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `Roles` (r:1 w:0), `Whitelist` (r:0 w:1)
    fn add_whitelist_user() -> Weight {
        Weight::from_parts(10_100_000, 1_588)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles` (r:1 w:0), `Whitelist` (r:0 w:n)
    /// The range of component `n` is `[1, 64]`.
    fn add_whitelist_users(n: u32) -> Weight {
        Weight::from_parts(9_400_000, 1_588)
            .saturating_add(Weight::from_parts(2_150_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    /// Storage: `Roles` (r:1 w:0), `Whitelist` (r:0 w:1)
    fn remove_whitelist_user() -> Weight {
        Weight::from_parts(10_300_000, 1_588)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles` (r:1 w:0), `Whitelist` (r:0 w:n)
    /// The range of component `n` is `[1, 64]`.
    fn remove_whitelist_users(n: u32) -> Weight {
        Weight::from_parts(9_500_000, 1_588)
            .saturating_add(Weight::from_parts(2_200_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    /// Storage: `Roles` (r:1 w:1)
    fn set_gate_keeper() -> Weight {
        Weight::from_parts(9_900_000, 1_588)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles` (r:1 w:1)
    fn set_dev_address() -> Weight {
        Weight::from_parts(9_900_000, 1_588)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles` (r:1 w:1)
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_588)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles` (r:1 w:0), `Locked` (r:0 w:1)
    fn un_lock() -> Weight {
        Weight::from_parts(9_200_000, 1_588)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(14_200_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(14_900_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(19_600_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(9_800_000, 0).saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(24_300_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn add_whitelist_user() -> Weight {
        Weight::from_parts(10_100_000, 1_588)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn add_whitelist_users(n: u32) -> Weight {
        Weight::from_parts(9_400_000, 1_588)
            .saturating_add(Weight::from_parts(2_150_000, 0).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    fn remove_whitelist_user() -> Weight {
        Weight::from_parts(10_300_000, 1_588)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn remove_whitelist_users(n: u32) -> Weight {
        Weight::from_parts(9_500_000, 1_588)
            .saturating_add(Weight::from_parts(2_200_000, 0).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    fn set_gate_keeper() -> Weight {
        Weight::from_parts(9_900_000, 1_588)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_dev_address() -> Weight {
        Weight::from_parts(9_900_000, 1_588)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_588)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn un_lock() -> Weight {
        Weight::from_parts(9_200_000, 1_588)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
