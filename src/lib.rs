//! Roadmap status service for the goji design studio.
//!
//! Three pieces collaborate here:
//!
//! - [`catalog`]: the immutable branch/item tree describing the studio's
//!   launch roadmap. Compiled in, never mutated at runtime.
//! - [`store`]: durable persistence of per-item completion flags in a single
//!   JSON file, exposed over HTTP by [`api`].
//! - [`view`]: the client-side controller that merges catalog and status,
//!   applies filters, and issues optimistic toggles through [`client`].

pub mod api;
pub mod catalog;
pub mod client;
pub mod models;
pub mod store;
pub mod view;
