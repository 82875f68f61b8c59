//! Boundary to the two external collaborators: the asset registry that
//! records who owns the auctioned item, and the payment token that moves
//! bid value. Every call goes through the `try_` client so a failing or
//! trapping collaborator comes back as a contract error.

use crate::errors::Error;
use crate::storage;
use crate::types::AssetRef;
use soroban_sdk::{contractclient, log, token, Address, Env};

/// Interface the auction expects from an asset registry.
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    /// Current owner of `item_id`.
    fn owner_of(env: Env, item_id: u64) -> Address;

    /// Move `item_id` from `from` to `to`. Must fail if `from` is not the
    /// owner or has not authorized the move.
    fn transfer(env: Env, from: Address, to: Address, item_id: u64);
}

pub fn transfer_asset(
    env: &Env,
    from: &Address,
    to: &Address,
    asset: &AssetRef,
) -> Result<(), Error> {
    let registry = AssetRegistryClient::new(env, &asset.registry);
    match registry.try_transfer(from, to, &asset.item_id) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "asset transfer of item {} rejected", asset.item_id);
            Err(Error::AssetTransferFailed)
        }
    }
}

/// Pull `amount` from `from` into the contract's custody.
pub fn escrow_value(
    env: &Env,
    payment_token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), Error> {
    let token_client = token::Client::new(env, payment_token);
    match token_client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "escrow of {} from {} rejected", amount, from.clone());
            Err(Error::ValueTransferFailed)
        }
    }
}

/// Release `amount` held by the contract to `to`. Callers must hold the
/// reentrancy lock (see [`non_reentrant`]).
pub fn release_value(
    env: &Env,
    payment_token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let token_client = token::Client::new(env, payment_token);
    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "release of {} to {} rejected", amount, to.clone());
            Err(Error::ValueTransferFailed)
        }
    }
}

/// Run `op` with the reentrancy lock held for its whole duration.
///
/// A call that finds the lock already held fails with
/// [`Error::ReentrantCall`] before touching any state.
pub fn non_reentrant<T>(
    env: &Env,
    op: impl FnOnce() -> Result<T, Error>,
) -> Result<T, Error> {
    if storage::is_locked(env) {
        log!(env, "reentrant call rejected");
        return Err(Error::ReentrantCall);
    }
    storage::set_lock(env);
    let result = op();
    storage::clear_lock(env);
    result
}
