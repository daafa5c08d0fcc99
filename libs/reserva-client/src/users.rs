use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::gateway::ApiGateway;

/// Path of the authenticated user's profile resource.
const ME_PATH: &str = "/users/me";
/// Path of the password-change resource.
const PASSWORD_PATH: &str = "/users/me/password";

/// Gender options offered by the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

/// Channel the user prefers for booking notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationChannel {
    Whatsapp,
    Sms,
    Email,
}

/// The authenticated user's profile as the server reports it.
///
/// Everything beyond the identity fields is optional or defaulted, so sparse
/// payloads deserialize cleanly. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// ISO-8601 timestamp, passed through as the server sends it.
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub notification_channel: Option<NotificationChannel>,
    #[serde(default)]
    pub marketing_opt_in: bool,
    /// Server-reported verification flag; absent means not reported.
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub phone_verified: Option<bool>,
}

/// Profile update payload for `PUT /users/me`.
///
/// Optional fields serialize as explicit nulls: sending `None` clears the
/// stored value rather than leaving it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub phone: Option<String>,
    pub gender: Gender,
    /// ISO-8601 timestamp.
    pub birth_date: Option<String>,
    pub notification_channel: NotificationChannel,
    pub marketing_opt_in: bool,
}

/// Password change payload for `PUT /users/me/password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// User-management operations, all funneled through the gateway.
#[derive(Clone)]
pub struct UsersApi {
    gateway: ApiGateway,
}

impl UsersApi {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Fetch the authenticated user's profile.
    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        self.gateway.get(ME_PATH).await
    }

    /// Replace the profile and return the server's updated copy.
    pub async fn update_me(&self, update: &UpdateProfileRequest) -> Result<UserProfile, ApiError> {
        self.gateway.put(ME_PATH, update).await
    }

    /// Change the password. The current password guards the operation; the
    /// response body is discarded.
    pub async fn change_password(&self, change: &ChangePasswordRequest) -> Result<(), ApiError> {
        let _: Value = self.gateway.put(PASSWORD_PATH, change).await?;
        Ok(())
    }
}
