use crate::types::{Auction, AuctionMode, AuctionState};

/// Price a new bid is measured against at ledger time `now`.
///
/// Ascending: the current highest bid, which a new bid must strictly exceed.
///
/// Descending: `start_price` at `start_time`, falling linearly to
/// `end_price` at `end_time` and flat afterwards. The drop is truncated, so
/// the quoted price sits less than one unit above the exact line. Before
/// `start` the price is `start_price`.
pub fn current_price(auction: &Auction, now: u64) -> i128 {
    match auction.mode {
        AuctionMode::Ascending => auction.highest_bid,
        AuctionMode::Descending => {
            if auction.state == AuctionState::Created {
                return auction.start_price;
            }
            if now >= auction.end_time {
                return auction.end_price;
            }
            let elapsed = now.saturating_sub(auction.start_time) as u128;
            // `start` rejects a zero duration, so this is never zero.
            let duration = (auction.end_time - auction.start_time) as u128;
            // Construction guarantees start_price >= end_price >= 0.
            let spread = (auction.start_price - auction.end_price) as u128;

            // floor(spread * elapsed / duration) without the wide product.
            let drop = spread / duration * elapsed + spread % duration * elapsed / duration;
            auction.start_price - drop as i128
        }
    }
}
