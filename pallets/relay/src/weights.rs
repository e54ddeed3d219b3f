//! Weights for pallet-relay.
//!
//! `relay` covers only the forwarding overhead; the relayed call's own weight
//! is added at dispatch.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

pub trait WeightInfo {
    fn create() -> Weight;
    fn relay() -> Weight;
    fn set_operator() -> Weight;
}

/// Weights for the runtime, scaled by its `DbWeight`.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn create() -> Weight {
        Weight::from_parts(15_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn relay() -> Weight {
        Weight::from_parts(11_000_000, 0).saturating_add(T::DbWeight::get().reads(1))
    }
    fn set_operator() -> Weight {
        Weight::from_parts(12_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

// For tests and mocks.
impl WeightInfo for () {
    fn create() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn relay() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn set_operator() -> Weight {
        Weight::from_parts(10_000, 0)
    }
}
