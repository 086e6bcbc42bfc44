//! Mini-game state machines.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each game is plain Rust state with explicit transitions. Components own
//! an instance in a signal, schedule the timed transitions with
//! `util::timer`, and write completed results into `GameProgress`.

pub mod lock;
pub mod pairing;
pub mod roulette;
pub mod survey;
