//! Benchmarking setup for pallet-relay

use super::*;

#[allow(unused)]
use crate::Pallet as Relay;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create() {
        let caller: T::AccountId = whitelisted_caller();
        let id = NextForwarderId::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert_eq!(Operators::<T>::get(id), Some(caller));
    }

    // Forwarding overhead only; the relayed call is the cheapest there is.
    #[benchmark]
    fn relay() -> Result<(), BenchmarkError> {
        let operator: T::AccountId = whitelisted_caller();
        let (id, account) = Relay::<T>::register(operator.clone())?;
        let call: <T as Config>::RuntimeCall =
            frame_system::Call::<T>::remark { remark: Vec::new() }.into();

        #[extrinsic_call]
        _(RawOrigin::Signed(operator), id, Box::new(call));

        frame_system::Pallet::<T>::assert_last_event(
            <T as Config>::RuntimeEvent::from(Event::Relayed { id, account }).into(),
        );
        Ok(())
    }

    #[benchmark]
    fn set_operator() -> Result<(), BenchmarkError> {
        let operator: T::AccountId = whitelisted_caller();
        let successor: T::AccountId = account("successor", 0, 0);
        let (id, _) = Relay::<T>::register(operator.clone())?;

        #[extrinsic_call]
        _(RawOrigin::Signed(operator), id, successor.clone());

        assert_eq!(Operators::<T>::get(id), Some(successor));
        Ok(())
    }

    impl_benchmark_test_suite!(Relay, crate::mock::new_test_ext(), crate::mock::Test);
}
