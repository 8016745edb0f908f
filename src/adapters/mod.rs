//! Adapter implementations of the port traits.
//!
//! `live` talks to the real world, `recording` wraps live adapters and
//! captures every interaction to a cassette, `replaying` serves recorded
//! interactions back deterministically.

pub mod live;
pub mod recording;
pub mod replaying;
