//! Shows what a 401 does to the session: teardown and redirect to login.
//!
//! Point the gateway at a backend and hand it an expired or bogus
//! credential.
//!
//! To run this example:
//! ```bash
//! export RESERVA_API_URL="http://localhost:3000"  # Optional, this is the default
//! cargo run --example session_expiry
//! ```

use std::sync::Arc;

use reserva_client::{
    ApiGateway, GatewayConfig, MemoryNavigator, Navigator, SessionContext, UsersApi,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let session = SessionContext::in_memory();
    session.set_credential("expired-token");
    session.set_identity(r#"{"id":1,"fullName":"Ana"}"#);

    let navigator = Arc::new(MemoryNavigator::new("/perfil"));
    let gateway = ApiGateway::new(
        &GatewayConfig::from_env(),
        session.clone(),
        navigator.clone(),
    )?;
    let users = UsersApi::new(gateway);

    match users.get_me().await {
        Ok(profile) => println!("still signed in as {}", profile.full_name),
        Err(err) => {
            println!("request failed: {err}");
            println!("credential cleared: {}", session.credential().is_none());
            println!("identity cleared:   {}", session.identity().is_none());
            println!("now at:             {}", navigator.current_path());
        }
    }

    Ok(())
}
