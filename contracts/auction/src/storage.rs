use crate::types::{
    Auction, DataKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT,
    PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Address, Env};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

/// The record is written by the constructor, so it is present for the
/// lifetime of the contract instance.
pub fn get_auction(env: &Env) -> Auction {
    env.storage()
        .instance()
        .get(&DataKey::Auction)
        .unwrap()
}

pub fn save_auction(env: &Env, auction: &Auction) {
    env.storage().instance().set(&DataKey::Auction, auction);
    extend_instance_ttl(env);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::ReentrancyLock)
        .unwrap_or(false)
}

pub fn set_lock(env: &Env) {
    env.storage().instance().set(&DataKey::ReentrancyLock, &true);
}

pub fn clear_lock(env: &Env) {
    env.storage().instance().remove(&DataKey::ReentrancyLock);
}

pub fn get_pending_return(env: &Env, bidder: &Address) -> i128 {
    let key = DataKey::PendingReturn(bidder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn add_pending_return(env: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::PendingReturn(bidder.clone());
    let owed = get_pending_return(env, bidder) + amount;
    env.storage().persistent().set(&key, &owed);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_pending_return(env: &Env, bidder: &Address) {
    let key = DataKey::PendingReturn(bidder.clone());
    env.storage().persistent().remove(&key);
}
