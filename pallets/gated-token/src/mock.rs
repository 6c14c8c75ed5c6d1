use crate as pallet_gated_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
    BoundedVec,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        GatedToken: pallet_gated_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

parameter_types! {
    pub const MaxBatchSize: u32 = 16;
}

impl pallet_gated_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxBatchSize = MaxBatchSize;
    type WeightInfo = ();
}

pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CAROL: u64 = 4;
pub const DAVE: u64 = 5;

/// One whole token at 18 decimals.
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// Bulk allow-list argument for the mock runtime.
pub fn batch(accounts: &[u64]) -> BoundedVec<u64, MaxBatchSize> {
    accounts.to_vec().try_into().expect("batch within MaxBatchSize")
}

/// Fresh deployment by `OWNER`: locked, empty allow-list, no balances.
pub fn deployment() -> pallet_gated_token::GenesisConfig<Test> {
    pallet_gated_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        token_name: b"Test Token".to_vec(),
        token_symbol: b"TST".to_vec(),
        decimals: 18,
        ..Default::default()
    }
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with(deployment())
}

pub fn new_test_ext_with(
    genesis: pallet_gated_token::GenesisConfig<Test>,
) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are not recorded at block zero.
    ext.execute_with(|| System::set_block_number(1));
    ext
}
