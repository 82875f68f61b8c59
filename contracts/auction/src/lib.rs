#![no_std]

//! # Asset Auction
//!
//! Soroban contract auctioning one registry-held asset per deployment,
//! either ascending (English) or descending (Dutch).
//!
//! The seller deploys the contract with an [`AuctionConfig`], then calls
//! [`AuctionContract::start`], which moves the asset into the contract's
//! custody and opens bidding. Bids escrow their full amount with the
//! contract. [`AuctionContract::end`] settles exactly once: the asset goes
//! to the highest bidder and the winning bid to the seller, or the asset
//! goes back to the seller when nobody bid. In descending mode the first
//! qualifying bid settles the auction inside the same call.
//!
//! Every operation that releases value runs under a single reentrancy lock
//! (see [`custody::non_reentrant`]). Failed calls return an [`Error`] and
//! the host discards their state changes.

mod custody;
mod errors;
mod events;
mod pricing;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env};

pub use custody::{AssetRegistry, AssetRegistryClient};
pub use errors::Error;
pub use events::{BidEventData, EndEventData, StartEventData, WithdrawEventData};
pub use types::{AssetRef, Auction, AuctionConfig, AuctionMode, AuctionState, RefundPolicy};

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    /// Record the auction parameters. The asset stays with the seller until
    /// [`start`](Self::start).
    ///
    /// Panics with [`Error::InvalidPrice`] if a price is negative or a
    /// descending auction's floor is above its start price.
    pub fn __constructor(env: Env, seller: Address, config: AuctionConfig) {
        if config.start_price < 0 || config.end_price < 0 {
            panic_with_error!(&env, Error::InvalidPrice);
        }
        if config.mode == AuctionMode::Descending && config.end_price > config.start_price {
            panic_with_error!(&env, Error::InvalidPrice);
        }

        let auction = Auction::new(seller, config);
        storage::save_auction(&env, &auction);
    }

    /// Take custody of the asset and open bidding for `duration` seconds.
    ///
    /// # Errors
    /// * `Error::Unauthorized` - `caller` is not the seller
    /// * `Error::AlreadyStarted` / `Error::AlreadyEnded` - not in `Created`
    /// * `Error::InvalidDuration` - zero duration or end time overflow
    /// * `Error::AssetTransferFailed` - the registry refused the transfer
    /// * `Error::ReentrantCall` - called while another operation holds the lock
    pub fn start(env: Env, caller: Address, duration: u64) -> Result<(), Error> {
        caller.require_auth();

        custody::non_reentrant(&env, || {
            let mut auction = storage::get_auction(&env);

            if caller != auction.seller {
                return Err(Error::Unauthorized);
            }
            match auction.state {
                AuctionState::Created => {}
                AuctionState::Started => return Err(Error::AlreadyStarted),
                AuctionState::Ended => return Err(Error::AlreadyEnded),
            }
            if duration == 0 {
                return Err(Error::InvalidDuration);
            }

            let now = env.ledger().timestamp();
            let end_time = now.checked_add(duration).ok_or(Error::InvalidDuration)?;

            custody::transfer_asset(
                &env,
                &auction.seller,
                &env.current_contract_address(),
                &auction.asset,
            )?;

            auction.start_time = now;
            auction.end_time = end_time;
            auction.state = AuctionState::Started;
            storage::save_auction(&env, &auction);

            log!(&env, "auction started, ends at {}", end_time);
            StartEventData {
                start_time: now,
                end_time,
            }
            .publish(&env);

            Ok(())
        })
    }

    /// Escrow `amount` from `bidder` as the new highest bid.
    ///
    /// The displaced bidder, if any, gets their escrow back: sent
    /// immediately under [`RefundPolicy::Push`], credited for
    /// [`withdraw`](Self::withdraw) under [`RefundPolicy::Pull`]. In
    /// descending mode an accepted bid also settles the auction.
    ///
    /// # Errors
    /// * `Error::NotStarted` / `Error::AlreadyEnded` - not in `Started`
    /// * `Error::AuctionExpired` - ledger time is at or past `end_time`
    /// * `Error::BidTooLow` - ascending: `amount <= highest_bid`;
    ///   descending: `amount < current_price()`
    /// * `Error::ValueTransferFailed` - escrow or refund transfer failed
    /// * `Error::AssetTransferFailed` - descending settlement could not
    ///   deliver the asset
    /// * `Error::ReentrantCall` - called while another operation holds the lock
    pub fn bid(env: Env, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        custody::non_reentrant(&env, || {
            let mut auction = storage::get_auction(&env);
            let now = env.ledger().timestamp();

            match auction.state {
                AuctionState::Started => {}
                AuctionState::Created => return Err(Error::NotStarted),
                AuctionState::Ended => return Err(Error::AlreadyEnded),
            }
            if now >= auction.end_time {
                return Err(Error::AuctionExpired);
            }

            let accepted = match auction.mode {
                AuctionMode::Ascending => amount > auction.highest_bid,
                AuctionMode::Descending => amount >= pricing::current_price(&auction, now),
            };
            if !accepted {
                return Err(Error::BidTooLow);
            }

            custody::escrow_value(&env, &auction.payment_token, &bidder, amount)?;

            if let Some(previous) = auction.highest_bidder.take() {
                displace_bidder(&env, &auction, &previous, auction.highest_bid)?;
            }

            auction.highest_bidder = Some(bidder.clone());
            auction.highest_bid = amount;

            log!(&env, "bid of {} accepted from {}", amount, bidder.clone());
            BidEventData { bidder, amount }.publish(&env);

            if auction.mode == AuctionMode::Descending {
                return settle(&env, auction);
            }

            storage::save_auction(&env, &auction);
            Ok(())
        })
    }

    /// Settle the auction.
    ///
    /// Allowed once `end_time` has passed, or at any time after `start` in
    /// descending mode.
    ///
    /// # Errors
    /// * `Error::NotStarted` / `Error::AlreadyEnded` - not in `Started`
    /// * `Error::AuctionNotYetEnded` - ascending auction before `end_time`
    /// * `Error::AssetTransferFailed` / `Error::ValueTransferFailed` -
    ///   settlement transfer failed
    /// * `Error::ReentrantCall` - called while another operation holds the lock
    pub fn end(env: Env) -> Result<(), Error> {
        custody::non_reentrant(&env, || {
            let auction = storage::get_auction(&env);

            match auction.state {
                AuctionState::Started => {}
                AuctionState::Created => return Err(Error::NotStarted),
                AuctionState::Ended => return Err(Error::AlreadyEnded),
            }
            if auction.mode == AuctionMode::Ascending
                && env.ledger().timestamp() < auction.end_time
            {
                return Err(Error::AuctionNotYetEnded);
            }

            settle(&env, auction)
        })
    }

    /// Pay out everything credited to `bidder` after being outbid. Only
    /// available under [`RefundPolicy::Pull`]; works in any state,
    /// including after settlement.
    ///
    /// # Errors
    /// * `Error::PullRefundsDisabled` - auction uses `RefundPolicy::Push`
    /// * `Error::NothingToWithdraw` - no balance is owed to `bidder`
    /// * `Error::ValueTransferFailed` - the payout transfer failed
    /// * `Error::ReentrantCall` - called while another operation holds the lock
    pub fn withdraw(env: Env, bidder: Address) -> Result<i128, Error> {
        bidder.require_auth();

        custody::non_reentrant(&env, || {
            let auction = storage::get_auction(&env);
            if auction.refund_policy != RefundPolicy::Pull {
                return Err(Error::PullRefundsDisabled);
            }

            let owed = storage::get_pending_return(&env, &bidder);
            if owed == 0 {
                return Err(Error::NothingToWithdraw);
            }

            // Balance is cleared before value leaves the contract.
            storage::remove_pending_return(&env, &bidder);
            custody::release_value(&env, &auction.payment_token, &bidder, owed)?;

            WithdrawEventData {
                bidder,
                amount: owed,
            }
            .publish(&env);

            Ok(owed)
        })
    }

    /// Price a new bid is measured against right now.
    pub fn current_price(env: Env) -> i128 {
        let auction = storage::get_auction(&env);
        pricing::current_price(&auction, env.ledger().timestamp())
    }

    pub fn get_auction(env: Env) -> Auction {
        storage::get_auction(&env)
    }

    pub fn get_highest_bid(env: Env) -> (Option<Address>, i128) {
        let auction = storage::get_auction(&env);
        (auction.highest_bidder, auction.highest_bid)
    }

    pub fn state(env: Env) -> AuctionState {
        storage::get_auction(&env).state
    }

    /// Amount credited to `bidder` and not yet withdrawn.
    pub fn pending_return(env: Env, bidder: Address) -> i128 {
        storage::get_pending_return(&env, &bidder)
    }
}

/// Return `amount` of escrow to a bidder who has just been outbid.
fn displace_bidder(
    env: &Env,
    auction: &Auction,
    bidder: &Address,
    amount: i128,
) -> Result<(), Error> {
    match auction.refund_policy {
        RefundPolicy::Push => {
            custody::release_value(env, &auction.payment_token, bidder, amount)?;
            WithdrawEventData {
                bidder: bidder.clone(),
                amount,
            }
            .publish(env);
        }
        RefundPolicy::Pull => {
            storage::add_pending_return(env, bidder, amount);
            log!(env, "credited {} to {}", amount, bidder.clone());
        }
    }
    Ok(())
}

/// Move the auction to `Ended` and release custody. Runs inside the caller's
/// reentrancy lock; `bid` calls it directly for descending auctions.
fn settle(env: &Env, mut auction: Auction) -> Result<(), Error> {
    auction.state = AuctionState::Ended;
    storage::save_auction(env, &auction);

    let contract = env.current_contract_address();
    match &auction.highest_bidder {
        Some(winner) => {
            custody::transfer_asset(env, &contract, winner, &auction.asset)?;
            custody::release_value(
                env,
                &auction.payment_token,
                &auction.seller,
                auction.highest_bid,
            )?;
            log!(
                env,
                "auction settled, {} wins at {}",
                winner.clone(),
                auction.highest_bid
            );
        }
        None => {
            custody::transfer_asset(env, &contract, &auction.seller, &auction.asset)?;
            log!(env, "auction settled without bids");
        }
    }

    EndEventData {
        winner: auction.highest_bidder.clone(),
        amount: auction.highest_bid,
    }
    .publish(env);

    Ok(())
}

#[cfg(test)]
mod test;
