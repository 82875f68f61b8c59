use soroban_sdk::{contractevent, Address};

/// Emitted when the seller hands the asset over and bidding opens
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StartEventData {
    pub start_time: u64,
    pub end_time: u64,
}

/// Emitted when a bid becomes the highest bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidEventData {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Emitted when escrow goes back to a displaced bidder, either pushed
/// during `bid` or pulled through `withdraw`
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEventData {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Emitted once, at settlement. `winner` is `None` when the asset went back
/// to the seller.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndEventData {
    pub winner: Option<Address>,
    pub amount: i128,
}
