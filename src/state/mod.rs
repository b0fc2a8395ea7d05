//! File-backed persistence of the simulated working directory.
//!
//! Every verb runs in a fresh process, so the only thing that carries a
//! "session" from one invocation to the next is the state file managed here.

mod store;

pub use store::StateStore;
