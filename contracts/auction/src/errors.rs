use soroban_sdk::contracterror;

/// Error codes for the auction contract.
///
/// Codes are grouped by failure class: authorization (1), lifecycle state
/// (10..), timing (20..), bid amount (30..) and custody (40..).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the seller
    Unauthorized = 1,

    AlreadyStarted = 10,
    NotStarted = 11,
    AlreadyEnded = 12,
    /// Bidder has no pending return to withdraw
    NothingToWithdraw = 13,
    /// `withdraw` called on an auction that refunds bidders directly
    PullRefundsDisabled = 14,

    /// Bid arrived at or after `end_time`
    AuctionExpired = 20,
    /// Ascending auction ended before `end_time`
    AuctionNotYetEnded = 21,
    InvalidDuration = 22,

    BidTooLow = 30,
    InvalidPrice = 31,

    /// Asset registry rejected the custody transfer
    AssetTransferFailed = 40,
    /// Payment token rejected the value transfer
    ValueTransferFailed = 41,
    /// A value-releasing operation was re-entered
    ReentrantCall = 42,
}
