// crates/vouch-cli/src/commands/normalize.rs
//
// Print the canonical domain an identifier resolves to, without any
// network access.

use clap::Args;

use vouch_core::{DomainIdentifier, VouchError};

/// Arguments for the `normalize` command.
#[derive(Debug, Args)]
pub struct NormalizeCmd {
    /// Email address, URL, or bare domain.
    pub input: String,
}

/// Execute the normalize command.
pub fn run(cmd: &NormalizeCmd) -> Result<(), Box<dyn std::error::Error>> {
    let domain = DomainIdentifier::parse(&cmd.input)
        .ok_or_else(|| VouchError::InvalidInput(cmd.input.trim().to_string()))?;
    println!("{}", domain);
    Ok(())
}
