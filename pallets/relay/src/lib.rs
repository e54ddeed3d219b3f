#![cfg_attr(not(feature = "std"), no_std)]
// The pallet still declares `RuntimeEvent` and uses storage getters
#![allow(deprecated)]

//! # Relay
//!
//! Forwarder identities for the ledger's consensus role. Each forwarder is a
//! keyless account derived from this pallet's id and a sequential
//! [`ForwarderId`]; it acts only when its operator relays a call through it.
//! Rotating the operator key keeps the forwarder account, and therefore any
//! role it holds, unchanged.
//!
//! The runtime hands [`Forwarders`] to the ledger as its capability check.

use core::marker::PhantomData;
use frame_support::{
    dispatch::{DispatchResult, GetDispatchInfo, PostDispatchInfo},
    ensure,
    pallet_prelude::*,
    traits::Contains,
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::{AccountIdConversion, Dispatchable};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-relay";

pub type ForwarderId = u32;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Calls a forwarder may relay.
        type RuntimeCall: Parameter
            + Dispatchable<RuntimeOrigin = Self::RuntimeOrigin, PostInfo = PostDispatchInfo>
            + GetDispatchInfo
            + From<frame_system::Call<Self>>
            + IsType<<Self as frame_system::Config>::RuntimeCall>;

        /// Root of every forwarder account.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Id handed to the next forwarder
    #[pallet::storage]
    #[pallet::getter(fn next_forwarder_id)]
    pub type NextForwarderId<T> = StorageValue<_, ForwarderId, ValueQuery>;

    /// Operator allowed to relay through each forwarder
    #[pallet::storage]
    #[pallet::getter(fn operator_of)]
    pub type Operators<T: Config> =
        StorageMap<_, Twox64Concat, ForwarderId, T::AccountId, OptionQuery>;

    /// Reverse index from forwarder account to its id
    #[pallet::storage]
    #[pallet::getter(fn forwarder_id)]
    pub type ForwarderIds<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, ForwarderId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        ForwarderCreated { id: ForwarderId, account: T::AccountId, operator: T::AccountId },
        /// Operator key rotated; the forwarder account is unchanged
        OperatorChanged { id: ForwarderId, previous: T::AccountId, operator: T::AccountId },
        /// A call was dispatched as the forwarder account
        Relayed { id: ForwarderId, account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the forwarder's operator
        Unauthorized,
        UnknownForwarder,
        /// Forwarder ids are exhausted
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a forwarder operated by the caller.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create())]
        pub fn create(origin: OriginFor<T>) -> DispatchResult {
            let operator = ensure_signed(origin)?;
            Self::register(operator)?;
            Ok(())
        }

        /// Dispatch `call` with the forwarder account as signed origin.
        ///
        /// A failing inner call fails the relay with the inner error.
        #[pallet::call_index(1)]
        #[pallet::weight({
            let di = call.get_dispatch_info();
            (T::WeightInfo::relay().saturating_add(di.call_weight), di.class)
        })]
        pub fn relay(
            origin: OriginFor<T>,
            id: ForwarderId,
            call: Box<<T as Config>::RuntimeCall>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let operator = Operators::<T>::get(id).ok_or(Error::<T>::UnknownForwarder)?;
            ensure!(who == operator, Error::<T>::Unauthorized);

            let account = Self::account_of(id);
            call.dispatch(frame_system::RawOrigin::Signed(account.clone()).into())
                .map(|_| ())
                .map_err(|e| e.error)?;

            log::debug!(target: LOG_TARGET, "Forwarder {id} relayed a call as {account:?}");
            Self::deposit_event(Event::Relayed { id, account });
            Ok(())
        }

        /// Hand the forwarder to a new operator key.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::set_operator())]
        pub fn set_operator(
            origin: OriginFor<T>,
            id: ForwarderId,
            operator: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let previous = Operators::<T>::get(id).ok_or(Error::<T>::UnknownForwarder)?;
            ensure!(who == previous, Error::<T>::Unauthorized);

            Operators::<T>::insert(id, &operator);
            log::info!(target: LOG_TARGET, "Forwarder {id} operator rotated to {operator:?}");
            Self::deposit_event(Event::OperatorChanged { id, previous, operator });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// One forwarder is created per entry, in order, operated by it
        pub operators: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for operator in &self.operators {
                Pallet::<T>::register(operator.clone()).expect("Too many genesis forwarders");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Account a forwarder acts as. Derived, so it exists before any
    /// storage does.
    pub fn account_of(id: ForwarderId) -> T::AccountId {
        T::PalletId::get().into_sub_account_truncating(id)
    }

    /// Allocate the next forwarder id for `operator`.
    pub fn register(operator: T::AccountId) -> Result<(ForwarderId, T::AccountId), DispatchError> {
        let id = NextForwarderId::<T>::get();
        let next = id.checked_add(1).ok_or(Error::<T>::Overflow)?;
        let account = Self::account_of(id);

        NextForwarderId::<T>::put(next);
        Operators::<T>::insert(id, &operator);
        ForwarderIds::<T>::insert(&account, id);

        log::info!(target: LOG_TARGET, "Forwarder {id} created as {account:?}");
        Self::deposit_event(Event::ForwarderCreated { id, account: account.clone(), operator });
        Ok((id, account))
    }
}

/// Accounts that belong to a forwarder created by this pallet.
pub struct Forwarders<T>(PhantomData<T>);

impl<T: Config> Contains<T::AccountId> for Forwarders<T> {
    fn contains(who: &T::AccountId) -> bool {
        ForwarderIds::<T>::contains_key(who)
    }
}

#[cfg(any(feature = "try-runtime", test))]
impl<T: Config> Pallet<T> {
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let next = NextForwarderId::<T>::get();
        for (account, id) in ForwarderIds::<T>::iter() {
            ensure!(id < next, "Forwarder id was never allocated");
            ensure!(Self::account_of(id) == account, "Forwarder index out of sync");
            ensure!(Operators::<T>::contains_key(id), "Forwarder has no operator");
        }
        ensure!(Operators::<T>::iter_keys().all(|id| id < next), "Operator for unallocated id");
        Ok(())
    }
}
