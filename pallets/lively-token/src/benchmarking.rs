//! Benchmarking setup for pallet-lively-token

use super::*;

#[allow(unused)]
use crate::Pallet as LivelyToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;
const FUNDS: u128 = 10_000_000;

fn holder<T: Config>(role: Role, name: &'static str) -> T::AccountId {
    let who: T::AccountId = account(name, 0, SEED);
    RoleHolders::<T>::insert(role, &who);
    who
}

fn funded<T: Config>(name: &'static str) -> T::AccountId {
    let who: T::AccountId = account(name, 0, SEED);
    Balances::<T>::insert(&who, FUNDS);
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(FUNDS));
    who
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn bootstrap_consensus() {
        let admin = holder::<T>(Role::Admin, "admin");
        let forwarder = T::BenchmarkHelper::forwarder();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), forwarder.clone());

        assert_eq!(RoleHolders::<T>::get(Role::Consensus), Some(forwarder));
    }

    // Worst case: starts a consensus migration.
    #[benchmark]
    fn grant() {
        let consensus = holder::<T>(Role::Consensus, "consensus");
        let successor = T::BenchmarkHelper::forwarder();

        #[extrinsic_call]
        _(
            RawOrigin::Signed(consensus.clone()),
            Role::Consensus,
            Some(consensus.clone()),
            successor.clone(),
        );

        assert_eq!(RoleHolders::<T>::get(Role::Consensus), Some(successor));
        assert_eq!(OutgoingConsensus::<T>::get(), Some(consensus));
    }

    // Worst case: completes a consensus migration.
    #[benchmark]
    fn revoke() {
        let outgoing: T::AccountId = account("outgoing", 0, SEED);
        let settled = T::BenchmarkHelper::forwarder();
        RoleHolders::<T>::insert(Role::Consensus, &settled);
        OutgoingConsensus::<T>::put(&outgoing);

        #[extrinsic_call]
        _(RawOrigin::Signed(settled.clone()), Role::Consensus, outgoing);

        assert_eq!(OutgoingConsensus::<T>::get(), None);
        assert_eq!(RoleHolders::<T>::get(Role::Consensus), Some(settled));
    }

    #[benchmark]
    fn pause_account() {
        let consensus = holder::<T>(Role::Consensus, "consensus");
        let account: T::AccountId = account("account", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(consensus), account.clone());

        assert!(PausedAccounts::<T>::get(&account));
    }

    #[benchmark]
    fn unpause_account() {
        let consensus = holder::<T>(Role::Consensus, "consensus");
        let account: T::AccountId = account("account", 0, SEED);
        PausedAccounts::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(consensus), account.clone());

        assert!(!PausedAccounts::<T>::get(&account));
    }

    #[benchmark]
    fn pause_all() {
        let consensus = holder::<T>(Role::Consensus, "consensus");

        #[extrinsic_call]
        _(RawOrigin::Signed(consensus));

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause_all() {
        let consensus = holder::<T>(Role::Consensus, "consensus");
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(consensus));

        assert!(!Paused::<T>::get());
    }

    #[benchmark]
    fn freeze() {
        let caller = funded::<T>("caller");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 0, 1_000);

        assert_eq!(FrozenBalances::<T>::get(&caller), 1_000);
    }

    #[benchmark]
    fn unfreeze() {
        let caller = funded::<T>("caller");
        FrozenBalances::<T>::insert(&caller, 1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000, 1_000);

        assert_eq!(FrozenBalances::<T>::get(&caller), 0);
    }

    #[benchmark]
    fn freeze_from() {
        let consensus = holder::<T>(Role::Consensus, "consensus");
        let account = funded::<T>("account");

        #[extrinsic_call]
        _(RawOrigin::Signed(consensus), account.clone(), 0, 1_000);

        assert_eq!(FrozenBalances::<T>::get(&account), 1_000);
    }

    #[benchmark]
    fn unfreeze_from() {
        let consensus = holder::<T>(Role::Consensus, "consensus");
        let account = funded::<T>("account");
        FrozenBalances::<T>::insert(&account, 1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(consensus), account.clone(), 1_000, 1_000);

        assert_eq!(FrozenBalances::<T>::get(&account), 0);
    }

    #[benchmark]
    fn mint() {
        let consensus = holder::<T>(Role::Consensus, "consensus");
        let to = funded::<T>("to");
        let supply = TotalSupply::<T>::get();
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(consensus), to.clone(), FUNDS, supply, 1_000);

        assert_eq!(Balances::<T>::get(&to), FUNDS + 1_000);
    }

    #[benchmark]
    fn burn() {
        let burner = holder::<T>(Role::Burner, "burner");
        let from = funded::<T>("from");
        let supply = TotalSupply::<T>::get();
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(burner), from.clone(), FUNDS, supply, 1_000);

        assert_eq!(Balances::<T>::get(&from), FUNDS - 1_000);
    }

    #[benchmark]
    fn transfer() {
        let caller = funded::<T>("caller");
        let recipient: T::AccountId = account("recipient", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 1_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000);
    }

    #[benchmark]
    fn approve() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 1_000);
    }

    #[benchmark]
    fn approve_sec() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);
        Allowances::<T>::insert(&owner, &spender, 1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 1_000, 2_000);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 2_000);
    }

    #[benchmark]
    fn increase_allowance_sec() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);
        Allowances::<T>::insert(&owner, &spender, 1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 1_000, 500);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 1_500);
    }

    #[benchmark]
    fn decrease_allowance_sec() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);
        Allowances::<T>::insert(&owner, &spender, 1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 1_000, 500);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 500);
    }

    // Worst case: a privileged spender drawing on a managed wallet.
    #[benchmark]
    fn transfer_from() {
        let admin = holder::<T>(Role::Admin, "admin");
        let wallet = funded::<T>("wallet");
        let to: T::AccountId = account("to", 0, SEED);
        ManagedWallets::<T>::insert(&wallet, FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), wallet.clone(), to.clone(), 1_000);

        assert_eq!(Balances::<T>::get(&to), 1_000);
        assert_eq!(ManagedWallets::<T>::get(&wallet), Some(FUNDS - 1_000));
    }

    #[benchmark]
    fn transfer_from_sec() {
        let admin = holder::<T>(Role::Admin, "admin");
        let wallet = funded::<T>("wallet");
        let to: T::AccountId = account("to", 0, SEED);
        ManagedWallets::<T>::insert(&wallet, FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), wallet.clone(), to.clone(), FUNDS, 1_000);

        assert_eq!(Balances::<T>::get(&wallet), FUNDS - 1_000);
    }

    #[benchmark]
    fn approve_from_wallet() {
        let admin = holder::<T>(Role::Admin, "admin");
        let wallet = funded::<T>("wallet");
        let spender: T::AccountId = account("spender", 0, SEED);
        ManagedWallets::<T>::insert(&wallet, FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), wallet.clone(), spender.clone(), 0, 1_000);

        assert_eq!(Allowances::<T>::get(&wallet, &spender), 1_000);
    }

    #[benchmark]
    fn withdraw_contract_balance() {
        let consensus = holder::<T>(Role::Consensus, "consensus");
        let to: T::AccountId = account("to", 0, SEED);
        let amount = T::Currency::minimum_balance() * 100u32.into();
        T::Currency::make_free_balance_be(&LivelyToken::<T>::account_id(), amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(consensus), to.clone());

        assert_eq!(T::Currency::free_balance(&to), amount);
    }

    impl_benchmark_test_suite!(LivelyToken, crate::mock::new_test_ext(), crate::mock::Test);
}
