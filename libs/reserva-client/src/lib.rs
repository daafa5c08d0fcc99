//! Client SDK for the Reserva web API.
//!
//! Every call the Reserva frontend makes funnels through a single gateway
//! that attaches the session credential, strips the server's
//! `{ success, data }` response envelope and normalizes every failure into
//! one message-carrying error. This crate packages that gateway together
//! with the typed user-management surface built on top of it.
//!
//! The gateway is handed its collaborators instead of reaching for ambient
//! state: a [`SessionContext`] holds the credential and identity slots, and
//! a [`Navigator`] tells it where the user is and lets it redirect to the
//! login screen when the server reports an expired session.
//!
//! # Examples
//!
//! ## Typed API surface
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use reserva_client::{
//!     ApiGateway, GatewayConfig, MemoryNavigator, SessionContext, UsersApi,
//! };
//!
//! # async fn example() -> Result<(), reserva_client::ApiError> {
//! let session = SessionContext::in_memory();
//! session.set_credential("jwt-from-login");
//!
//! let gateway = ApiGateway::new(
//!     &GatewayConfig::from_env(),
//!     session,
//!     Arc::new(MemoryNavigator::default()),
//! )?;
//!
//! let users = UsersApi::new(gateway);
//! let profile = users.get_me().await?;
//! println!("signed in as {}", profile.full_name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Raw requests
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use reserva_client::{
//!     ApiGateway, ApiRequest, GatewayConfig, MemoryNavigator, Method, SessionContext,
//! };
//!
//! # async fn example() -> Result<(), reserva_client::ApiError> {
//! let gateway = ApiGateway::new(
//!     &GatewayConfig::new("https://api.reserva.example"),
//!     SessionContext::in_memory(),
//!     Arc::new(MemoryNavigator::default()),
//! )?;
//!
//! let request = ApiRequest::builder()
//!     .method(Method::GET)
//!     .path("/users/me")
//!     .build()?;
//!
//! let payload = gateway.execute(request).await?;
//! println!("{payload}");
//! # Ok(())
//! # }
//! ```

mod config;
mod envelope;
mod error;
mod gateway;
mod nav;
mod request;
mod session;
mod users;

// Re-export public API
pub use config::{BASE_URL_ENV, GatewayConfig};
pub use error::ApiError;
pub use gateway::ApiGateway;
pub use nav::{LOGIN_ROUTE, MemoryNavigator, Navigator};
pub use request::{ApiRequest, ApiRequestBuilder};
pub use session::{MemorySessionStore, SessionContext, SessionStore};
pub use users::{
    ChangePasswordRequest, Gender, NotificationChannel, UpdateProfileRequest, UserProfile,
    UsersApi,
};

// Re-export commonly used types from dependencies
pub use http::Method;
