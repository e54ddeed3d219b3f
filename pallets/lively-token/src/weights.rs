//! Weights for pallet-lively-token.
//!
//! Hand-estimated from the storage footprint of each call until the
//! `runtime-benchmarks` suite in `benchmarking.rs` is run on reference
//! hardware. Each figure is one base unit per read/write plus a fixed
//! execution cost.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

pub trait WeightInfo {
    fn bootstrap_consensus() -> Weight;
    fn grant() -> Weight;
    fn revoke() -> Weight;
    fn pause_account() -> Weight;
    fn unpause_account() -> Weight;
    fn pause_all() -> Weight;
    fn unpause_all() -> Weight;
    fn freeze() -> Weight;
    fn unfreeze() -> Weight;
    fn freeze_from() -> Weight;
    fn unfreeze_from() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn approve_sec() -> Weight;
    fn increase_allowance_sec() -> Weight;
    fn decrease_allowance_sec() -> Weight;
    fn transfer_from() -> Weight;
    fn transfer_from_sec() -> Weight;
    fn approve_from_wallet() -> Weight;
    fn withdraw_contract_balance() -> Weight;
}

/// Weights for the runtime, scaled by its `DbWeight`.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn bootstrap_consensus() -> Weight {
        Weight::from_parts(12_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn grant() -> Weight {
        Weight::from_parts(14_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn revoke() -> Weight {
        Weight::from_parts(14_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn pause_account() -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unpause_account() -> Weight {
        Self::pause_account()
    }
    fn pause_all() -> Weight {
        Weight::from_parts(9_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unpause_all() -> Weight {
        Self::pause_all()
    }
    fn freeze() -> Weight {
        Weight::from_parts(16_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn unfreeze() -> Weight {
        Self::freeze()
    }
    fn freeze_from() -> Weight {
        Weight::from_parts(18_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn unfreeze_from() -> Weight {
        Self::freeze_from()
    }
    fn mint() -> Weight {
        Weight::from_parts(18_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn burn() -> Weight {
        Self::mint()
    }
    fn transfer() -> Weight {
        Weight::from_parts(20_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn approve_sec() -> Weight {
        Weight::from_parts(13_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn increase_allowance_sec() -> Weight {
        Self::approve_sec()
    }
    fn decrease_allowance_sec() -> Weight {
        Self::approve_sec()
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(26_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn transfer_from_sec() -> Weight {
        Self::transfer_from()
    }
    fn approve_from_wallet() -> Weight {
        Weight::from_parts(15_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn withdraw_contract_balance() -> Weight {
        Weight::from_parts(40_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(2))
    }
}

// For tests and mocks.
impl WeightInfo for () {
    fn bootstrap_consensus() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn grant() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn revoke() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn pause_account() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn unpause_account() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn pause_all() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn unpause_all() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn freeze() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn unfreeze() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn freeze_from() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn unfreeze_from() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn mint() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn burn() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn transfer() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn approve() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn approve_sec() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn increase_allowance_sec() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn decrease_allowance_sec() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn transfer_from_sec() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn approve_from_wallet() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn withdraw_contract_balance() -> Weight {
        Weight::from_parts(10_000, 0)
    }
}
