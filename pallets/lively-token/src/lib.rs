#![cfg_attr(not(feature = "std"), no_std)]
// The pallet still declares `RuntimeEvent` and uses storage getters
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Lively token ledger
//!
//! A permissioned, pausable, supply-adjustable token. Global state (supply,
//! pause flags, frozen funds) is mutated only by the holders of three
//! singleton roles:
//!
//! - **Admin**: set at genesis; pauses individual accounts, bootstraps the
//!   consensus role once, approves spending from managed wallets.
//! - **Consensus**: always a forwarder identity (see `pallet-relay`); mints,
//!   burns, pauses the whole ledger, freezes on behalf of others and assigns
//!   every role.
//! - **Burner**: may burn while the ledger is paused.
//!
//! Every sensitive mutation takes the caller's view of the state it depends
//! on (`expected_*` arguments) and fails with [`Error::StaleState`] when that
//! view is out of date. Calls either commit fully or leave no trace.

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{Contains, Currency, ExistenceRequirement},
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::{AccountIdConversion, Zero};
use sp_std::prelude::*;

pub use pallet::*;
pub use types::{Capability, Role};
pub use weights::WeightInfo;

mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-lively-token";

/// Supplies accounts the runtime's `Forwarders` filter accepts.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
    fn forwarder() -> AccountId;
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    pub type BalanceOf<T> =
        <<T as Config>::Currency as Currency<<T as frame_system::Config>::AccountId>>::Balance;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Identities that can only act by relaying a designated operator's
        /// payload. The consensus role may only be held by one of these.
        type Forwarders: Contains<Self::AccountId>;

        /// Native currency the ledger account may receive and later sweep.
        type Currency: Currency<Self::AccountId>;

        /// Derives the ledger's own account.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfo;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: BenchmarkHelper<Self::AccountId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Lively Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "LVL")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Settled holder of each role
    #[pallet::storage]
    #[pallet::getter(fn role_holder)]
    pub type RoleHolders<T: Config> = StorageMap<_, Twox64Concat, Role, T::AccountId, OptionQuery>;

    /// Previous consensus holder while an authority migration is pending.
    /// Keeps the consensus role until its successor revokes it.
    #[pallet::storage]
    #[pallet::getter(fn outgoing_consensus)]
    pub type OutgoingConsensus<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Total token supply, spendable and frozen
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Spendable balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Frozen balances (counted in supply, not transferable)
    #[pallet::storage]
    #[pallet::getter(fn freeze_of)]
    pub type FrozenBalances<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Allowances keyed by (owner, spender)
    #[pallet::storage]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Ledger-wide pause flag
    #[pallet::storage]
    #[pallet::getter(fn paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Per-account pause flags
    #[pallet::storage]
    #[pallet::getter(fn paused_of)]
    pub type PausedAccounts<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Managed source wallets and the allowance their Admin and Consensus
    /// holders share against them
    #[pallet::storage]
    #[pallet::getter(fn managed_allowance)]
    pub type ManagedWallets<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u128, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Consensus role assigned for the first time
        ConsensusBootstrapped { holder: T::AccountId },
        /// Role assigned to a new holder
        RoleGranted { role: Role, previous: Option<T::AccountId>, holder: T::AccountId },
        /// Role taken away from a holder
        RoleRevoked { role: Role, holder: T::AccountId },
        AccountPaused { account: T::AccountId },
        AccountUnpaused { account: T::AccountId },
        LedgerPaused,
        LedgerUnpaused,
        /// Spendable balance moved into the frozen balance
        Frozen { account: T::AccountId, amount: u128 },
        /// Frozen balance moved back to spendable
        Unfrozen { account: T::AccountId, amount: u128 },
        Minted { to: T::AccountId, amount: u128 },
        Burned { from: T::AccountId, amount: u128 },
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance of `spender` over `owner`'s balance set to `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Native balance of the ledger account swept out
        ContractBalanceWithdrawn { to: T::AccountId, amount: BalanceOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold a role permitted to make this call
        Unauthorized,
        /// Not allowed in the current pause state
        Forbidden,
        /// A caller-supplied expectation does not match live state
        StaleState,
        InsufficientBalance,
        InsufficientAllowance,
        /// Consensus role already has a holder
        AlreadyInitialized,
        /// Consensus role may only be held by a forwarder
        InvalidHolder,
        /// A consensus holder cannot revoke itself
        SelfRevocationForbidden,
        /// Previous consensus holder has not been revoked yet
        MigrationPending,
        /// Wallet is not a managed source wallet
        UnmanagedWallet,
        /// Arithmetic overflow, or supply out of step with balances
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
        /// Assign the consensus role for the first time. Admin only; the new
        /// holder must be a forwarder.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::bootstrap_consensus())]
        pub fn bootstrap_consensus(origin: OriginFor<T>, holder: T::AccountId) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Admin])?;
            ensure!(
                !RoleHolders::<T>::contains_key(Role::Consensus),
                Error::<T>::AlreadyInitialized
            );
            ensure!(T::Forwarders::contains(&holder), Error::<T>::InvalidHolder);

            RoleHolders::<T>::insert(Role::Consensus, &holder);
            log::info!(target: LOG_TARGET, "Consensus role bootstrapped to {holder:?}");
            Self::deposit_event(Event::ConsensusBootstrapped { holder });
            Ok(())
        }

        /// Replace the holder of `role`. `current` must name the live holder
        /// (`None` for an empty slot).
        ///
        /// Granting `Consensus` starts a migration: the displaced holder keeps
        /// the role until the new holder revokes it.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::grant())]
        pub fn grant(
            origin: OriginFor<T>,
            role: Role,
            current: Option<T::AccountId>,
            holder: T::AccountId,
        ) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Consensus])?;
            let previous = RoleHolders::<T>::get(role);
            ensure!(previous == current, Error::<T>::StaleState);

            if role == Role::Consensus {
                ensure!(OutgoingConsensus::<T>::get().is_none(), Error::<T>::MigrationPending);
                ensure!(T::Forwarders::contains(&holder), Error::<T>::InvalidHolder);
                if let Some(outgoing) = previous.as_ref().filter(|p| **p != holder) {
                    OutgoingConsensus::<T>::put(outgoing);
                }
            }

            RoleHolders::<T>::insert(role, &holder);
            log::info!(target: LOG_TARGET, "Role {role:?} granted to {holder:?}");
            Self::deposit_event(Event::RoleGranted { role, previous, holder });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::revoke())]
        pub fn revoke(origin: OriginFor<T>, role: Role, current: T::AccountId) -> DispatchResult {
            let caller = Self::ensure_any_role(origin, &[Role::Consensus])?;
            ensure!(Self::has_role(role, &current), Error::<T>::StaleState);

            if role == Role::Consensus {
                ensure!(caller != current, Error::<T>::SelfRevocationForbidden);
                // The caller is the other consensus holder, so a migration is
                // pending. Revoking the outgoing side completes it, revoking
                // the settled side rolls it back.
                if let Some(outgoing) = OutgoingConsensus::<T>::take() {
                    if outgoing != current {
                        RoleHolders::<T>::insert(Role::Consensus, outgoing);
                    }
                }
            } else {
                RoleHolders::<T>::remove(role);
            }

            log::info!(target: LOG_TARGET, "Role {role:?} revoked from {current:?}");
            Self::deposit_event(Event::RoleRevoked { role, holder: current });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::pause_account())]
        pub fn pause_account(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Admin, Role::Consensus])?;
            PausedAccounts::<T>::insert(&account, true);
            Self::deposit_event(Event::AccountPaused { account });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::unpause_account())]
        pub fn unpause_account(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Admin, Role::Consensus])?;
            PausedAccounts::<T>::remove(&account);
            Self::deposit_event(Event::AccountUnpaused { account });
            Ok(())
        }

        /// Enter the maintenance window: transfers stop, supply changes open.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::pause_all())]
        pub fn pause_all(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Consensus])?;
            Paused::<T>::put(true);
            log::info!(target: LOG_TARGET, "Ledger paused");
            Self::deposit_event(Event::LedgerPaused);
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::unpause_all())]
        pub fn unpause_all(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Consensus])?;
            Paused::<T>::put(false);
            log::info!(target: LOG_TARGET, "Ledger unpaused");
            Self::deposit_event(Event::LedgerUnpaused);
            Ok(())
        }

        /// Move `amount` of the caller's spendable balance into its frozen
        /// balance.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::freeze())]
        pub fn freeze(origin: OriginFor<T>, expected_frozen: u128, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_freeze(who, expected_frozen, amount)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::unfreeze())]
        pub fn unfreeze(
            origin: OriginFor<T>,
            expected_frozen: u128,
            amount: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_unfreeze(who, expected_frozen, amount)
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::freeze_from())]
        pub fn freeze_from(
            origin: OriginFor<T>,
            account: T::AccountId,
            expected_frozen: u128,
            amount: u128,
        ) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Consensus])?;
            Self::do_freeze(account, expected_frozen, amount)
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::unfreeze_from())]
        pub fn unfreeze_from(
            origin: OriginFor<T>,
            account: T::AccountId,
            expected_frozen: u128,
            amount: u128,
        ) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Consensus])?;
            Self::do_unfreeze(account, expected_frozen, amount)
        }

        /// Create `amount` new tokens on `to`. Only while the ledger is paused.
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(
            origin: OriginFor<T>,
            to: T::AccountId,
            expected_balance: u128,
            expected_total_supply: u128,
            amount: u128,
        ) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Consensus])?;
            let (balance, supply) =
                Self::ensure_supply_window(&to, expected_balance, expected_total_supply)?;

            let new_supply = supply.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let new_balance = balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            TotalSupply::<T>::put(new_supply);
            Balances::<T>::insert(&to, new_balance);

            log::debug!(target: LOG_TARGET, "Minted {amount} to {to:?}, supply {new_supply}");
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        /// Destroy `amount` of `from`'s spendable tokens. Only while the
        /// ledger is paused.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(
            origin: OriginFor<T>,
            from: T::AccountId,
            expected_balance: u128,
            expected_total_supply: u128,
            amount: u128,
        ) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Consensus, Role::Burner])?;
            let (balance, supply) =
                Self::ensure_supply_window(&from, expected_balance, expected_total_supply)?;

            let new_balance = balance.checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
            let new_supply = supply.checked_sub(amount).ok_or(Error::<T>::Overflow)?;
            TotalSupply::<T>::put(new_supply);
            Balances::<T>::insert(&from, new_balance);

            log::debug!(target: LOG_TARGET, "Burned {amount} from {from:?}, supply {new_supply}");
            Self::deposit_event(Event::Burned { from, amount });
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_active(&sender)?;
            Self::do_transfer(sender, to, amount)
        }

        /// Set the allowance unconditionally (last write wins).
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_active(&owner)?;
            Self::set_allowance(owner, spender, amount);
            Ok(())
        }

        /// Set the allowance only if it still equals `expected`.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::approve_sec())]
        pub fn approve_sec(
            origin: OriginFor<T>,
            spender: T::AccountId,
            expected: u128,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_active(&owner)?;
            Self::ensure_allowance(&owner, &spender, expected)?;
            Self::set_allowance(owner, spender, amount);
            Ok(())
        }

        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::increase_allowance_sec())]
        pub fn increase_allowance_sec(
            origin: OriginFor<T>,
            spender: T::AccountId,
            expected: u128,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_active(&owner)?;
            Self::ensure_allowance(&owner, &spender, expected)?;
            let amount = expected.checked_add(delta).ok_or(Error::<T>::Overflow)?;
            Self::set_allowance(owner, spender, amount);
            Ok(())
        }

        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::decrease_allowance_sec())]
        pub fn decrease_allowance_sec(
            origin: OriginFor<T>,
            spender: T::AccountId,
            expected: u128,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_active(&owner)?;
            Self::ensure_allowance(&owner, &spender, expected)?;
            let amount = expected.checked_sub(delta).ok_or(Error::<T>::InsufficientAllowance)?;
            Self::set_allowance(owner, spender, amount);
            Ok(())
        }

        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_active(&owner)?;
            Self::do_transfer_from(spender, owner, to, amount)
        }

        /// `transfer_from` that also requires `owner`'s balance to equal
        /// `expected_balance`.
        #[pallet::call_index(19)]
        #[pallet::weight(T::WeightInfo::transfer_from_sec())]
        pub fn transfer_from_sec(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            expected_balance: u128,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_active(&owner)?;
            ensure!(Balances::<T>::get(&owner) == expected_balance, Error::<T>::StaleState);
            Self::do_transfer_from(spender, owner, to, amount)
        }

        /// Let `spender` move funds out of a managed wallet.
        #[pallet::call_index(20)]
        #[pallet::weight(T::WeightInfo::approve_from_wallet())]
        pub fn approve_from_wallet(
            origin: OriginFor<T>,
            wallet: T::AccountId,
            spender: T::AccountId,
            expected: u128,
            amount: u128,
        ) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Admin, Role::Consensus])?;
            ensure!(ManagedWallets::<T>::contains_key(&wallet), Error::<T>::UnmanagedWallet);
            Self::ensure_active(&wallet)?;
            Self::ensure_allowance(&wallet, &spender, expected)?;
            Self::set_allowance(wallet, spender, amount);
            Ok(())
        }

        /// Sweep the native balance held by the ledger account to `to`.
        #[pallet::call_index(21)]
        #[pallet::weight(T::WeightInfo::withdraw_contract_balance())]
        pub fn withdraw_contract_balance(origin: OriginFor<T>, to: T::AccountId) -> DispatchResult {
            Self::ensure_any_role(origin, &[Role::Consensus])?;
            let account = Self::account_id();
            let amount = T::Currency::free_balance(&account);
            if !amount.is_zero() {
                T::Currency::transfer(&account, &to, amount, ExistenceRequirement::AllowDeath)?;
            }

            log::info!(target: LOG_TARGET, "Withdrew {amount:?} from ledger account to {to:?}");
            Self::deposit_event(Event::ContractBalanceWithdrawn { to, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial admin role holder
        pub admin: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Initial token balances (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
        /// Managed source wallets and their privileged allowance
        pub managed_wallets: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref admin) = self.admin {
                RoleHolders::<T>::insert(Role::Admin, admin);
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                Balances::<T>::insert(account, amount);
                total = total.checked_add(*amount).expect("Initial balances overflow u128");
            }
            TotalSupply::<T>::put(total);

            for (wallet, allowance) in &self.managed_wallets {
                ManagedWallets::<T>::insert(wallet, allowance);
            }

            log::info!(
                target: LOG_TARGET,
                "Genesis: {} balances, {} managed wallets, supply {total}",
                self.initial_balances.len(),
                self.managed_wallets.len()
            );
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Whether `who` holds `role`. The outgoing consensus holder still counts
    /// until it is revoked.
    pub fn has_role(role: Role, who: &T::AccountId) -> bool {
        RoleHolders::<T>::get(role).as_ref() == Some(who) ||
            (role == Role::Consensus && OutgoingConsensus::<T>::get().as_ref() == Some(who))
    }

    /// Amount `spender` may still move out of `owner`'s balance.
    pub fn allowance(owner: &T::AccountId, spender: &T::AccountId) -> u128 {
        if Self::is_managed_spender(owner, spender) {
            ManagedWallets::<T>::get(owner).unwrap_or_default()
        } else {
            Allowances::<T>::get(owner, spender)
        }
    }

    pub fn supports_interface(id: [u8; 4]) -> bool {
        Capability::ALL.iter().any(|capability| capability.interface_id() == id)
    }

    /// The ledger's own account, holder of incidentally received native funds.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    fn ensure_any_role(
        origin: OriginFor<T>,
        roles: &[Role],
    ) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(roles.iter().any(|role| Self::has_role(*role, &who)), Error::<T>::Unauthorized);
        Ok(who)
    }

    fn ensure_active(account: &T::AccountId) -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::Forbidden);
        ensure!(!PausedAccounts::<T>::get(account), Error::<T>::Forbidden);
        Ok(())
    }

    fn ensure_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        expected: u128,
    ) -> DispatchResult {
        ensure!(Self::allowance(owner, spender) == expected, Error::<T>::StaleState);
        Ok(())
    }

    /// Checks shared by mint and burn; returns the live (balance, supply).
    fn ensure_supply_window(
        account: &T::AccountId,
        expected_balance: u128,
        expected_total_supply: u128,
    ) -> Result<(u128, u128), DispatchError> {
        ensure!(Paused::<T>::get(), Error::<T>::Forbidden);
        let balance = Balances::<T>::get(account);
        let supply = TotalSupply::<T>::get();
        ensure!(balance == expected_balance, Error::<T>::StaleState);
        ensure!(supply == expected_total_supply, Error::<T>::StaleState);
        Ok((balance, supply))
    }

    fn is_managed_spender(owner: &T::AccountId, spender: &T::AccountId) -> bool {
        ManagedWallets::<T>::contains_key(owner) &&
            (Self::has_role(Role::Admin, spender) || Self::has_role(Role::Consensus, spender))
    }

    /// Writes where `allowance` reads: the shared budget for privileged
    /// spenders of a managed wallet, the allowance map otherwise.
    fn set_allowance(owner: T::AccountId, spender: T::AccountId, amount: u128) {
        if Self::is_managed_spender(&owner, &spender) {
            ManagedWallets::<T>::insert(&owner, amount);
        } else {
            Allowances::<T>::insert(&owner, &spender, amount);
        }
        Self::deposit_event(Event::Approval { owner, spender, amount });
    }

    fn do_freeze(account: T::AccountId, expected_frozen: u128, amount: u128) -> DispatchResult {
        Self::ensure_active(&account)?;
        let frozen = FrozenBalances::<T>::get(&account);
        ensure!(frozen == expected_frozen, Error::<T>::StaleState);
        let balance = Balances::<T>::get(&account)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
        let frozen = frozen.checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(&account, balance);
        FrozenBalances::<T>::insert(&account, frozen);
        Self::deposit_event(Event::Frozen { account, amount });
        Ok(())
    }

    fn do_unfreeze(account: T::AccountId, expected_frozen: u128, amount: u128) -> DispatchResult {
        Self::ensure_active(&account)?;
        let frozen = FrozenBalances::<T>::get(&account);
        ensure!(frozen == expected_frozen, Error::<T>::StaleState);
        let frozen = frozen.checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        let balance =
            Balances::<T>::get(&account).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(&account, balance);
        FrozenBalances::<T>::insert(&account, frozen);
        Self::deposit_event(Event::Unfrozen { account, amount });
        Ok(())
    }

    fn do_transfer(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        let remaining = Balances::<T>::get(&from)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;

        Balances::<T>::insert(&from, remaining);
        Balances::<T>::try_mutate(&to, |balance| -> DispatchResult {
            *balance = balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })?;
        Self::deposit_event(Event::Transferred { from, to, amount });
        Ok(())
    }

    fn do_transfer_from(
        spender: T::AccountId,
        owner: T::AccountId,
        to: T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        let allowed = Self::allowance(&owner, &spender);
        let remaining = allowed.checked_sub(amount).ok_or(Error::<T>::InsufficientAllowance)?;
        let managed = Self::is_managed_spender(&owner, &spender);

        Self::do_transfer(owner.clone(), to, amount)?;
        if managed {
            ManagedWallets::<T>::insert(&owner, remaining);
        } else {
            Allowances::<T>::insert(&owner, &spender, remaining);
        }
        Ok(())
    }
}

#[cfg(any(feature = "try-runtime", test))]
impl<T: Config> Pallet<T> {
    /// Total supply must equal the sum of spendable and frozen balances.
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let spendable = Balances::<T>::iter_values().fold(0u128, |sum, b| sum.saturating_add(b));
        let frozen = FrozenBalances::<T>::iter_values().fold(0u128, |sum, b| sum.saturating_add(b));
        ensure!(
            spendable.saturating_add(frozen) == TotalSupply::<T>::get(),
            "Total supply does not match the sum of balances"
        );
        Ok(())
    }
}
