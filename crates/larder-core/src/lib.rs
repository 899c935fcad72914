//! Core item store for the larder inventory tracker.
//!
//! Owns the authoritative item collection and user-selected view state,
//! persists through a pluggable read-all/write-all backend, and derives
//! the expiring-soon subset after every mutation. Date arithmetic and
//! severity classification live in `larder-expiry`.

pub mod event;
pub mod item;
pub mod prefs;
pub mod query;
pub mod storage;
pub mod store;

pub use event::*;
pub use item::*;
pub use prefs::*;
pub use query::*;
pub use storage::*;
pub use store::*;
