// crates/vouch-cli/src/commands/mod.rs
//
// Command module declarations for the vouch CLI.

pub mod normalize;
pub mod verify;
pub mod whois;
