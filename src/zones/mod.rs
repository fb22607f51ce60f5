//! Card zones: the per-side draw pile and hand.
//!
//! Both are passive containers. Only the turn controller mutates them,
//! through `Deck::draw`, `Hand::add_card` and `Hand::remove_card`.

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::Hand;
