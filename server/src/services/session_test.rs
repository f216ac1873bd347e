use super::*;
#[cfg(feature = "live-db-tests")]
use crate::db::test_support::{integration_pool, seed_user};

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_serializes_email() {
    let user = SessionUser { id: Uuid::nil(), email: "a@b.com".into() };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["email"], "a@b.com");
    assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
}

// =============================================================================
// Live-database round trips (opt-in: --features live-db-tests -- --ignored)
// =============================================================================

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn session_lifecycle_round_trip() {
    let pool = integration_pool().await;
    let user_id = seed_user(&pool).await;

    let token = create_session(&pool, user_id).await.expect("create_session should succeed");

    let user = validate_session(&pool, &token)
        .await
        .expect("validate_session should succeed")
        .expect("fresh session should validate");
    assert_eq!(user.id, user_id);
    assert!(user.email.ends_with("@example.com"));

    let bogus = validate_session(&pool, "not-a-real-token")
        .await
        .expect("validate_session should succeed");
    assert!(bogus.is_none());

    delete_session(&pool, &token).await.expect("delete_session should succeed");
    let gone = validate_session(&pool, &token)
        .await
        .expect("validate_session should succeed");
    assert!(gone.is_none());
}
