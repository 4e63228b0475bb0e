//! Pure decision logic for the hookgate relay.
//!
//! Everything in this crate is a total function over the parsed webhook
//! payload -- no I/O, no shared state -- so the API crate and its tests
//! can exercise the filter without an HTTP stack.

pub mod classify;
pub mod emote;
