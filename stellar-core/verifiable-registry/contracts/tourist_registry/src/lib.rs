#![no_std]

mod errors;
mod events;
mod storage;

pub use errors::ContractError;

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String};

/// Strkey of the all-zero ed25519 account, used as the null principal.
const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

const CONTRACT_VERSION: u32 = 1;

/// Registry contract anchoring tourist record digests.
///
/// Each accepted digest gets a sequential Digital ID starting at 1. Only the
/// owner bound at initialization may register, and registrations are never
/// overwritten or removed.
#[contract]
pub struct TouristRegistry;

#[contractimpl]
impl TouristRegistry {
    /// Bind the registry to its owner. Can only be called once, and the
    /// owner must authorize it.
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        if storage::has_owner(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        if owner == Self::null_account(&env) || owner == env.current_contract_address() {
            return Err(ContractError::InvalidOwner);
        }

        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_total_tourists(&env, 0);
        storage::extend_instance(&env);

        log!(&env, "tourist registry initialized", owner);
        Ok(())
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a tourist digest and return its Digital ID.
    pub fn register_tourist(
        env: Env,
        caller: Address,
        digest: BytesN<32>,
    ) -> Result<u64, ContractError> {
        caller.require_auth();

        let owner = storage::get_owner(&env).ok_or(ContractError::NotInitialized)?;

        if caller != owner {
            log!(&env, "registration rejected for non-owner", caller);
            return Err(ContractError::Unauthorized);
        }

        if storage::has_digital_id(&env, &digest) {
            return Err(ContractError::DuplicateDigest);
        }

        let digital_id = storage::get_total_tourists(&env) + 1;
        storage::set_total_tourists(&env, digital_id);
        storage::set_digital_id(&env, &digest, digital_id);
        storage::extend_instance(&env);

        events::tourist_registered(&env, digital_id, &digest, &caller);

        log!(&env, "tourist registered", digital_id);
        Ok(digital_id)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check whether a digest has been registered
    pub fn is_registered(env: Env, digest: BytesN<32>) -> bool {
        storage::has_digital_id(&env, &digest)
    }

    /// Digital ID of a registered digest, or 0 if it was never registered.
    pub fn get_digital_id(env: Env, digest: BytesN<32>) -> u64 {
        storage::get_digital_id(&env, &digest).unwrap_or(0)
    }

    /// Same lookup as `get_digital_id`, with absence as `None`.
    pub fn find_digital_id(env: Env, digest: BytesN<32>) -> Option<u64> {
        storage::get_digital_id(&env, &digest)
    }

    /// Number of successful registrations so far
    pub fn total_tourists(env: Env) -> u64 {
        storage::get_total_tourists(&env)
    }

    /// Get the registry owner
    pub fn owner(env: Env) -> Result<Address, ContractError> {
        storage::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    /// Contract interface version
    pub fn version(_env: Env) -> u32 {
        CONTRACT_VERSION
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    fn null_account(env: &Env) -> Address {
        Address::from_string(&String::from_str(env, NULL_ACCOUNT))
    }
}
