// ABOUTME: Command module aggregator for the webship CLI.
// ABOUTME: Re-exports deploy and list command handlers.

mod deploy;
mod list;

pub use deploy::deploy;
pub use list::list;
