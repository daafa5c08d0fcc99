use std::sync::Arc;

use httpmock::prelude::*;
use reserva_client::{
    ApiGateway, ChangePasswordRequest, GatewayConfig, Gender, MemoryNavigator,
    NotificationChannel, SessionContext, UpdateProfileRequest, UsersApi,
};
use serde_json::json;

fn users_api(server: &MockServer) -> (UsersApi, SessionContext) {
    let session = SessionContext::in_memory();
    session.set_credential("secret-token");
    let gateway = ApiGateway::new(
        &GatewayConfig::new(server.base_url()),
        session.clone(),
        Arc::new(MemoryNavigator::new("/perfil")),
    )
    .unwrap();
    (UsersApi::new(gateway), session)
}

#[tokio::test]
async fn test_get_me_returns_the_unwrapped_profile() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/users/me")
            .header("Authorization", "Bearer secret-token");
        then.status(200).json_body(json!({
            "success": true,
            "data": {
                "id": 7,
                "fullName": "Luis Gómez",
                "email": "luis@example.com",
                "phone": "+573001112233",
                "gender": "MALE",
                "birthDate": "1990-04-12T00:00:00.000Z",
                "notificationChannel": "WHATSAPP",
                "marketingOptIn": true,
                "emailVerified": true
            }
        }));
    });

    let (users, _session) = users_api(&server);

    let profile = users.get_me().await.unwrap();

    assert_eq!(profile.id, 7);
    assert_eq!(profile.full_name, "Luis Gómez");
    assert_eq!(profile.gender, Some(Gender::Male));
    assert_eq!(
        profile.notification_channel,
        Some(NotificationChannel::Whatsapp)
    );
    assert!(profile.marketing_opt_in);
    assert_eq!(profile.email_verified, Some(true));
    mock.assert();
}

#[tokio::test]
async fn test_get_me_tolerates_sparse_payload() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/users/me");
        then.status(200)
            .json_body(json!({"success": true, "data": {"id": 1, "fullName": "Ana"}}));
    });

    let (users, _session) = users_api(&server);

    let profile = users.get_me().await.unwrap();

    assert_eq!(profile.id, 1);
    assert_eq!(profile.full_name, "Ana");
    assert_eq!(profile.email, None);
    assert_eq!(profile.gender, None);
    assert!(!profile.marketing_opt_in);
}

#[tokio::test]
async fn test_update_me_sends_camel_case_body_with_explicit_nulls() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/users/me")
            .header("Content-Type", "application/json")
            .json_body(json!({
                "fullName": "Ana María",
                "phone": null,
                "gender": "FEMALE",
                "birthDate": null,
                "notificationChannel": "EMAIL",
                "marketingOptIn": false
            }));
        then.status(200).json_body(json!({
            "success": true,
            "data": {
                "id": 1,
                "fullName": "Ana María",
                "notificationChannel": "EMAIL",
                "marketingOptIn": false
            }
        }));
    });

    let (users, _session) = users_api(&server);

    let updated = users
        .update_me(&UpdateProfileRequest {
            full_name: "Ana María".into(),
            phone: None,
            gender: Gender::Female,
            birth_date: None,
            notification_channel: NotificationChannel::Email,
            marketing_opt_in: false,
        })
        .await
        .unwrap();

    assert_eq!(updated.full_name, "Ana María");
    assert_eq!(
        updated.notification_channel,
        Some(NotificationChannel::Email)
    );
    mock.assert();
}

#[tokio::test]
async fn test_change_password_discards_the_response_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/users/me/password")
            .json_body(json!({
                "currentPassword": "old-secret",
                "newPassword": "new-secret"
            }));
        then.status(200).json_body(
            json!({"success": true, "data": null, "message": "Contraseña actualizada"}),
        );
    });

    let (users, _session) = users_api(&server);

    users
        .change_password(&ChangePasswordRequest {
            current_password: "old-secret".into(),
            new_password: "new-secret".into(),
        })
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_wrong_current_password_surfaces_the_server_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(PUT).path("/api/users/me/password");
        then.status(400)
            .json_body(json!({"error": "La contraseña actual no es válida"}));
    });

    let (users, _session) = users_api(&server);

    let err = users
        .change_password(&ChangePasswordRequest {
            current_password: "wrong".into(),
            new_password: "new-secret".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message, "La contraseña actual no es válida");
}

#[tokio::test]
async fn test_missing_profile_maps_to_fixed_message() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/users/me");
        then.status(404).json_body(json!({"error": "no such row"}));
    });

    let (users, session) = users_api(&server);

    let err = users.get_me().await.unwrap_err();

    assert_eq!(err.message, "Usuario no encontrado.");
    // 404 is not a session-expiry signal.
    assert_eq!(session.credential().as_deref(), Some("secret-token"));
}
