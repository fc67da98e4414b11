use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol};

pub const TOURIST: Symbol = symbol_short!("tourist");
pub const REGISTER: Symbol = symbol_short!("register");

/// Publishes `TouristRegistered(digital_id, digest, registered_by)`.
pub fn tourist_registered(
    env: &Env,
    digital_id: u64,
    digest: &BytesN<32>,
    registered_by: &Address,
) {
    env.events().publish(
        (TOURIST, REGISTER),
        (digital_id, digest.clone(), registered_by.clone()),
    );
}
