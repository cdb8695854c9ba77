use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use threshseed::Seeder;

#[derive(Parser, Debug)]
#[command(name = "threshseed")]
#[command(about = "Seed the Devices collection with randomized temperature-alert thresholds")]
struct Args {
    /// Number of synthetic devices to seed (device1 .. deviceN)
    num_of_devices: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let store = firestore_from_env()?;

    let written = Seeder::new(&store)
        .run(&mut rand::rng(), args.num_of_devices)
        .await?;

    info!(written, "seeding complete");
    Ok(())
}

/// Build a Firestore store from ambient environment credentials.
///
/// `GOOGLE_CLOUD_PROJECT` (or `FIRESTORE_PROJECT_ID`) names the project.
/// `FIRESTORE_EMULATOR_HOST`, when set, targets the emulator over plain
/// HTTP with no token, matching the behavior of the official clients.
/// `FIRESTORE_ACCESS_TOKEN` supplies the OAuth2 bearer token otherwise.
#[cfg(feature = "firestore")]
fn firestore_from_env() -> Result<threshseed::FirestoreStore> {
    use std::env;

    let project = env::var("GOOGLE_CLOUD_PROJECT")
        .or_else(|_| env::var("FIRESTORE_PROJECT_ID"))
        .map_err(|_| {
            anyhow::anyhow!("GOOGLE_CLOUD_PROJECT or FIRESTORE_PROJECT_ID must be set")
        })?;

    let mut builder = threshseed::FirestoreStore::builder().project(project);

    if let Ok(host) = env::var("FIRESTORE_EMULATOR_HOST") {
        builder = builder.endpoint(format!("http://{host}"));
    } else if let Ok(token) = env::var("FIRESTORE_ACCESS_TOKEN") {
        builder = builder.access_token(token);
    }

    Ok(builder.build())
}

#[cfg(not(feature = "firestore"))]
fn firestore_from_env() -> Result<threshseed::MemoryStore> {
    anyhow::bail!("built without the `firestore` feature; no store backend available")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_count() {
        let args = Args::try_parse_from(["threshseed", "3"]).unwrap();
        assert_eq!(args.num_of_devices, 3);
    }

    #[test]
    fn test_zero_is_valid() {
        let args = Args::try_parse_from(["threshseed", "0"]).unwrap();
        assert_eq!(args.num_of_devices, 0);
    }

    #[test]
    fn test_missing_count_is_an_error() {
        assert!(Args::try_parse_from(["threshseed"]).is_err());
    }

    #[test]
    fn test_non_integer_count_is_an_error() {
        assert!(Args::try_parse_from(["threshseed", "abc"]).is_err());
    }

    #[test]
    fn test_negative_count_is_an_error() {
        assert!(Args::try_parse_from(["threshseed", "-1"]).is_err());
    }
}
