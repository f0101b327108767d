//! # roster-store
//!
//! Line-oriented JSON persistence for a roster company.
//!
//! [`file::save_at`] writes one JSON object per employee in id order;
//! [`file::restore_at`] reads either that format or a single bracketed JSON
//! array and inserts every decoded employee into a [`Company`](roster_core::Company).

pub mod codec;
pub mod error;
pub mod file;
pub mod paths;

pub use codec::{decode, decode_document, encode};
pub use error::StoreError;
pub use file::{load_at, restore_at, restore_shared_at, save_at, save_shared_at};
