use soroban_sdk::{contracttype, Address};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Price discovery strategy.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionMode {
    /// English auction: bids must strictly beat the current highest bid.
    Ascending = 0,
    /// Dutch auction: the price falls linearly and the first taker wins.
    Descending = 1,
}

/// How a displaced bidder gets their escrow back.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RefundPolicy {
    /// Refund is sent inside the `bid` call that displaces the bidder.
    Push = 0,
    /// Refund is credited and claimed later through `withdraw`.
    Pull = 1,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionState {
    Created = 0,
    Started = 1,
    Ended = 2,
}

/// Entry in an external asset registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub registry: Address,
    pub item_id: u64,
}

/// Parameters fixed at deployment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    pub asset: AssetRef,
    /// Token used for bids and proceeds (usually the native asset contract)
    pub payment_token: Address,
    pub start_price: i128,
    /// Floor price; ignored in ascending mode
    pub end_price: i128,
    pub mode: AuctionMode,
    pub refund_policy: RefundPolicy,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub seller: Address,
    pub asset: AssetRef,
    pub payment_token: Address,
    pub start_price: i128,
    pub end_price: i128,
    pub mode: AuctionMode,
    pub refund_policy: RefundPolicy,
    pub start_time: u64,
    pub end_time: u64,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub state: AuctionState,
}

impl Auction {
    pub fn new(seller: Address, config: AuctionConfig) -> Self {
        Auction {
            seller,
            asset: config.asset,
            payment_token: config.payment_token,
            start_price: config.start_price,
            end_price: config.end_price,
            mode: config.mode,
            refund_policy: config.refund_policy,
            start_time: 0,
            end_time: 0,
            highest_bidder: None,
            highest_bid: config.start_price,
            state: AuctionState::Created,
        }
    }
}

#[contracttype]
pub enum DataKey {
    Auction,
    ReentrancyLock,
    PendingReturn(Address),
}
