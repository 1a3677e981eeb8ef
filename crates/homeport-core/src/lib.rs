// homeport-core: Data layer between homeport-api and consumers (TUI).

pub mod filter;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use filter::{FilterCriteria, PriceBracket, filter_listings};
pub use store::ListingStore;

// Re-export the wire model at the crate root for ergonomics. The client
// holds immutable per-fetch snapshots, so the wire shape is the domain
// shape.
pub use homeport_api::{Agent, HouseType, Listing, ListingAgent};
