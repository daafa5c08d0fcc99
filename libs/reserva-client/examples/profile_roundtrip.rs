//! Fetch and update the authenticated user's profile.
//!
//! Expects a running Reserva backend and a credential obtained out of band.
//!
//! To run this example:
//! ```bash
//! export RESERVA_API_URL="http://localhost:3000"  # Optional, this is the default
//! export RESERVA_TOKEN="your-jwt-here"
//! cargo run --example profile_roundtrip
//! ```

use std::sync::Arc;

use reserva_client::{
    ApiGateway, GatewayConfig, Gender, MemoryNavigator, NotificationChannel, SessionContext,
    UpdateProfileRequest, UsersApi,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let session = SessionContext::in_memory();
    if let Ok(token) = std::env::var("RESERVA_TOKEN") {
        session.set_credential(&token);
    }

    let gateway = ApiGateway::new(
        &GatewayConfig::from_env(),
        session,
        Arc::new(MemoryNavigator::default()),
    )?;
    let users = UsersApi::new(gateway);

    println!("=== Fetching profile ===\n");

    let profile = users.get_me().await?;
    println!(
        "{} <{}>",
        profile.full_name,
        profile.email.as_deref().unwrap_or("no email")
    );

    println!("\n=== Toggling the marketing opt-in ===\n");

    let updated = users
        .update_me(&UpdateProfileRequest {
            full_name: profile.full_name.clone(),
            phone: profile.phone.clone(),
            gender: profile.gender.unwrap_or(Gender::PreferNotToSay),
            birth_date: profile.birth_date.clone(),
            notification_channel: profile
                .notification_channel
                .unwrap_or(NotificationChannel::Email),
            marketing_opt_in: !profile.marketing_opt_in,
        })
        .await?;

    println!("marketing opt-in is now: {}", updated.marketing_opt_in);

    Ok(())
}
