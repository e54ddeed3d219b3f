use crate as pallet_relay;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Forwarder accounts are truncated sub-accounts of the pallet id, so the
// account type must be wide enough to keep the forwarder index.
pub type AccountId = u128;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        LivelyToken: pallet_lively_token,
        Relay: pallet_relay,
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
    type AccountId = AccountId;
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

pub const ADMIN: AccountId = 1;
pub const ALICE: AccountId = 2;
pub const BOB: AccountId = 3;
/// Operator of forwarder 0, created at genesis.
pub const OPERATOR: AccountId = 10;
/// Operator of forwarder 1, created at genesis.
pub const STANDBY_OPERATOR: AccountId = 11;
pub const NEW_OPERATOR: AccountId = 12;

pub const INITIAL_SUPPLY: u128 = 1_000_000;

parameter_types! {
    pub const LedgerPalletId: PalletId = PalletId(*b"lv/ledgr");
    pub const RelayPalletId: PalletId = PalletId(*b"lv/relay");
}

#[cfg(feature = "runtime-benchmarks")]
pub struct RelayForwarder;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_lively_token::BenchmarkHelper<AccountId> for RelayForwarder {
    fn forwarder() -> AccountId {
        let (_, account) = Relay::register(OPERATOR).expect("forwarder ids left");
        account
    }
}

impl pallet_lively_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Forwarders = pallet_relay::Forwarders<Test>;
    type Currency = Balances;
    type PalletId = LedgerPalletId;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = RelayForwarder;
}

impl pallet_relay::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type RuntimeCall = RuntimeCall;
    type PalletId = RelayPalletId;
    type WeightInfo = ();
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_lively_token::GenesisConfig::<Test> {
        admin: Some(ADMIN),
        token_name: b"Lively Token".to_vec(),
        token_symbol: b"LVL".to_vec(),
        decimals: 18,
        initial_balances: vec![(ALICE, INITIAL_SUPPLY)],
        managed_wallets: vec![],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_relay::GenesisConfig::<Test> { operators: vec![OPERATOR, STANDBY_OPERATOR] }
        .assimilate_storage(&mut t)
        .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
