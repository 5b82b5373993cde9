//! Command handler implementations for Gator CLI
//!
//! Every handler has the same shape, `fn(&mut State, &Command) -> Result<()>`,
//! so the registry can store them side by side.

mod users;

pub use users::*;
