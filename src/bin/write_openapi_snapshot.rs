// src/bin/write_openapi_snapshot.rs
use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    moderation_core::presentation::http::openapi::write_openapi_snapshot()?;
    println!(
        "OpenAPI snapshot written to {}",
        moderation_core::presentation::http::openapi::snapshot_path()
    );
    Ok(())
}
