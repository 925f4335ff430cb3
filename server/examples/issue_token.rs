//! Mint a development access token.
//!
//! Usage: `JWT_PRIVATE_KEY=<base64 pem> cargo run --example issue_token -- <role> [permission...]`

use anyhow::{Context, Result};
use erp_server::auth::jwt::generate_access_token;
use uuid::Uuid;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let role = args
        .next()
        .context("Usage: issue_token <role> [permission...]")?;
    let permissions: Vec<String> = args.collect();

    dotenvy::dotenv().ok();
    let private_key = std::env::var("JWT_PRIVATE_KEY").context("JWT_PRIVATE_KEY must be set")?;
    let expiry = std::env::var("JWT_ACCESS_EXPIRY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(900);

    let token = generate_access_token(Uuid::now_v7(), &role, &permissions, &private_key, expiry)?;
    println!("{token}");

    Ok(())
}
