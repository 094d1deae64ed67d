//! HTTP server exposing the tic-tac-toe engine over a JSON REST API.
//!
//! The server owns exactly one [`noughts_engine::Series`] behind a mutex and
//! echoes the full game snapshot back from every endpoint, so clients can
//! stay thin: send an action, render whatever comes back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;

pub use api::{MoveRequest, SharedSeries, router};
