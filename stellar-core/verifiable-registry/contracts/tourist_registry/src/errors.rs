use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    InvalidOwner = 1,
    Unauthorized = 2,
    DuplicateDigest = 3,
    AlreadyInitialized = 4,
    NotInitialized = 5,
}
