//! Toss-and-classify engine for hexcast.
//!
//! # Architecture
//!
//! The crate is organized around three small, composable pieces:
//!
//! - [`toss`] - one trial: three fair coin flips summed and classified into a
//!   [`hexcast_types::Line`], with randomness behind the [`CoinSource`] seam
//! - [`cast`] - six trials in fixed bottom-to-top order, projected onto two
//!   trigram configurations and resolved against the catalog
//! - [`catalog`] - the validated table of the eight trigrams, indexed by the
//!   3-bit key of each line configuration
//!
//! Every cast is a self-contained computation over a private coin source and
//! a read-only catalog: no state survives between calls, and a cast either
//! resolves completely or fails without producing a partial result.

mod cast;
mod catalog;
mod data;
mod toss;

pub use cast::{CastError, TRIALS_PER_CAST, cast, cast_observed};
pub use catalog::{Catalog, CatalogError};
pub use toss::{COINS_PER_TRIAL, CoinSource, CoinsExhausted, FixedCoins, ThreadCoins, draw_trial};
