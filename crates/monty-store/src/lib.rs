//! Game lifecycle store for Monty.
//!
//! The store creates, retrieves, and deletes game instances by id. It is
//! the unit of lookup and removal failure, and it owns the concurrency
//! contract: id allocation and map updates are serialized by the store,
//! and each game carries its own lock so concurrent mutations of one game
//! cannot interleave.
//!
//! # Key types
//!
//! - [`GameStore`] — creates/retrieves/removes games
//! - [`GameHandle`] — cheap-clone handle to one stored game
//! - [`StoreError`] — lookup/removal failures

mod error;
mod handle;
mod store;

pub use error::StoreError;
pub use handle::GameHandle;
pub use store::GameStore;
