use crate as pallet_lively_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, Contains},
    PalletId,
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
        Balances: pallet_balances,
        LivelyToken: pallet_lively_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<u64>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type AccountStore = System;
}

pub const ADMIN: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CAROL: u64 = 4;
pub const BURNER: u64 = 5;
/// Managed wallet with a privileged allowance.
pub const PUBLIC_SALE: u64 = 10;
/// Funded wallet that is not managed.
pub const FOUNDING_TEAM: u64 = 11;
/// Accounts from here up count as forwarders.
pub const CONSENSUS: u64 = 100;
pub const SUCCESSOR: u64 = 101;

pub const INITIAL_SUPPLY: u128 = 1_000_000_000;
pub const PUBLIC_SALE_BALANCE: u128 = 500_000_000;
pub const PUBLIC_SALE_ALLOWANCE: u128 = 500_000_000;

pub struct MockForwarders;
impl Contains<u64> for MockForwarders {
    fn contains(who: &u64) -> bool {
        *who >= CONSENSUS
    }
}

#[cfg(feature = "runtime-benchmarks")]
impl pallet_lively_token::BenchmarkHelper<u64> for MockForwarders {
    fn forwarder() -> u64 {
        CONSENSUS
    }
}

parameter_types! {
    pub const LedgerPalletId: PalletId = PalletId(*b"lv/ledgr");
}

impl pallet_lively_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Forwarders = MockForwarders;
    type Currency = Balances;
    type PalletId = LedgerPalletId;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = MockForwarders;
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_lively_token::GenesisConfig::<Test> {
        admin: Some(ADMIN),
        token_name: b"Lively Token".to_vec(),
        token_symbol: b"LVL".to_vec(),
        decimals: 18,
        initial_balances: vec![
            (PUBLIC_SALE, PUBLIC_SALE_BALANCE),
            (FOUNDING_TEAM, 499_000_000),
            (ALICE, 1_000_000),
        ],
        managed_wallets: vec![(PUBLIC_SALE, PUBLIC_SALE_ALLOWANCE)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
