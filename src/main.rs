use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use connection_credential::{ConnectionType, Credential, ParseOptions};

#[derive(Parser)]
#[command(name = "credential-check")]
#[command(about = "Parse and validate a connection credential given as a JSON object")]
struct Args {
    /// JSON file with the credential fields, stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Connection type used when the input has no connectionType
    #[arg(short, long, default_value = "tls")]
    connection_type: ConnectionType,

    /// Only check field shapes, skip the auth type completeness check
    #[arg(short, long)]
    parse_only: bool,

    /// Enable debug logging
    #[arg(short = 'D', long)]
    debug: bool,
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let raw = read_input(args.input.as_ref())?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let fields = value.as_object().ok_or("input must be a JSON object")?;

    let options = ParseOptions::builder()
        .default_connection_type(args.connection_type)
        .build()?;

    let credential = Credential::parse_with(fields, &options).map_err(|e| {
        log::error!("Parse failed on {}: {}", e.fields().join(", "), e);
        e
    })?;

    println!("{:#?}", credential);
    println!("endpoint: {}", credential.endpoint());
    println!("fingerprint: {}", credential.fingerprint());

    if args.parse_only {
        log::info!("Skipping completeness check.");
        return Ok(());
    }

    credential.validate_for_auth_type().map_err(|e| {
        log::error!("Validation failed: {}", e);
        e
    })?;

    log::info!(
        "Credential usable: {} via {} ({}).",
        credential.auth_type(),
        credential.connection_type(),
        credential.auth_type().family()
    );
    Ok(())
}
