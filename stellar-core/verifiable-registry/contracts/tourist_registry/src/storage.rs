use soroban_sdk::{contracttype, Address, BytesN, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const TOURIST_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const TOURIST_LIFETIME_THRESHOLD: u32 = TOURIST_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    TotalTourists,
    Tourist(BytesN<32>),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_total_tourists(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TotalTourists)
        .unwrap_or(0)
}

pub fn set_total_tourists(env: &Env, total: u64) {
    env.storage()
        .instance()
        .set(&DataKey::TotalTourists, &total);
}

pub fn get_digital_id(env: &Env, digest: &BytesN<32>) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::Tourist(digest.clone()))
}

/// Entries are written once; callers must check `has_digital_id` first.
pub fn set_digital_id(env: &Env, digest: &BytesN<32>, digital_id: u64) {
    let key = DataKey::Tourist(digest.clone());
    env.storage().persistent().set(&key, &digital_id);
    env.storage()
        .persistent()
        .extend_ttl(&key, TOURIST_LIFETIME_THRESHOLD, TOURIST_BUMP_AMOUNT);
}

pub fn has_digital_id(env: &Env, digest: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Tourist(digest.clone()))
}
