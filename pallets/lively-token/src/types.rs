use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::traits::{BlakeTwo256, Hash};

/// Named permission held by at most one account at a time.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    Debug,
)]
pub enum Role {
    /// Pauses accounts and approves from managed wallets. Set at genesis.
    Admin,
    /// Owns supply, global pause and role assignment. Must be a forwarder.
    Consensus,
    /// May burn while the ledger is paused.
    Burner,
}

/// Feature groups reported through `Pallet::supports_interface`.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Debug)]
pub enum Capability {
    AccessControl,
    Pausable,
    Freezable,
    Mintable,
    Burnable,
    Erc20,
    Erc20Sec,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::AccessControl,
        Capability::Pausable,
        Capability::Freezable,
        Capability::Mintable,
        Capability::Burnable,
        Capability::Erc20,
        Capability::Erc20Sec,
    ];

    pub fn name(&self) -> &'static [u8] {
        match self {
            Capability::AccessControl => b"AccessControl",
            Capability::Pausable => b"Pausable",
            Capability::Freezable => b"Freezable",
            Capability::Mintable => b"Mintable",
            Capability::Burnable => b"Burnable",
            Capability::Erc20 => b"ERC20",
            Capability::Erc20Sec => b"ERC20Sec",
        }
    }

    /// First four bytes of `blake2_256(name)`.
    pub fn interface_id(&self) -> [u8; 4] {
        let hash = BlakeTwo256::hash(self.name());
        let mut id = [0u8; 4];
        id.copy_from_slice(&hash.as_ref()[..4]);
        id
    }
}
