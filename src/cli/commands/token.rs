use clap::Args;
use serde_json::json;
use uuid::Uuid;

use crate::auth::{generate_jwt, Claims};
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::types::{Principal, Role};

#[derive(Debug, Args)]
pub struct TokenArgs {
    #[arg(long, help = "User id the token authenticates")]
    pub user: Uuid,

    #[arg(long, default_value = "user", help = "Role claim: user or admin")]
    pub role: Role,

    #[arg(long, help = "Lifetime in hours (defaults to JWT_EXPIRY_HOURS)")]
    pub hours: Option<u64>,
}

pub fn handle(args: TokenArgs, config: AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let principal = Principal::new(args.user, args.role);
    let hours = args.hours.unwrap_or(config.security.jwt_expiry_hours);
    let claims = Claims::new(&principal, hours)?;
    let token = generate_jwt(&claims, &config.security.jwt_secret)?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            json!({
                "token": token,
                "user": principal.id,
                "role": principal.role,
                "expires_in": claims.exp - claims.iat,
            })
        ),
        OutputFormat::Text => println!("{}", token),
    }
    Ok(())
}
