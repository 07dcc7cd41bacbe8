//! Per-run session state.
//!
//! A [`SessionRecord`] is created at process start and re-created on every
//! run reset. Known flags live in typed per-path fields; any other name is
//! accepted into an open extension map so newer scenes can record flags this
//! version does not know about.

mod flags;
mod record;
mod value;

pub use flags::SessionFlag;
pub use record::{
    HungerFlags, JoyFlags, RageFlags, SessionRecord, SilenceFlags, SorrowFlags, TruthFlags,
};
pub use value::FlagValue;
