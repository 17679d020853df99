// crates/vouch-cli/src/commands/whois.rs
//
// Show the parsed WHOIS facts for a domain: registrar, creation and
// expiry dates, and the derived age used for scoring.

use chrono::Utc;
use clap::Args;

use vouch_core::{DomainIdentifier, VouchError};
use vouch_signals::whois::age_in_days;
use vouch_signals::WhoisClient;

use crate::config::VouchConfig;
use crate::output::{format_json, format_table, ReportRow};

/// Arguments for the `whois` command.
#[derive(Debug, Args)]
pub struct WhoisCmd {
    /// Domain (or email/URL) to look up.
    pub identifier: String,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the whois command.
pub async fn run(cmd: &WhoisCmd, config: &VouchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let domain = DomainIdentifier::parse(&cmd.identifier)
        .ok_or_else(|| VouchError::InvalidInput(cmd.identifier.trim().to_string()))?;

    let client = WhoisClient::new(&config.engine.whois);
    let record = client.lookup(domain.as_str()).await?;

    let created = record.creation_date();
    let expires = record.expiry_date();
    let age = created.map(|c| age_in_days(c, Utc::now()));

    if cmd.json {
        let doc = serde_json::json!({
            "domain": domain,
            "registrar": record.registrar(),
            "created": created.map(|d| d.to_rfc3339()),
            "expires": expires.map(|d| d.to_rfc3339()),
            "domain_age_days": age,
        });
        println!("{}", format_json(&doc));
        return Ok(());
    }

    let date_or_dash = |d: Option<chrono::DateTime<Utc>>| {
        d.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    };
    let rows = vec![
        ReportRow::new("Domain", domain.as_str()),
        ReportRow::new("Registrar", record.registrar().unwrap_or("-")),
        ReportRow::new("Created", date_or_dash(created)),
        ReportRow::new("Expires", date_or_dash(expires)),
        ReportRow::new(
            "Age",
            age.map(|a| format!("{} days", a))
                .unwrap_or_else(|| "unknown".to_string()),
        ),
    ];
    println!("{}", format_table(&rows));
    Ok(())
}
