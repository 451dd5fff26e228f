use collabnet::management::TokenManager;
use collabnet::types::Token;

fn token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "playlist-read-private".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_token_expires_four_minutes_early() {
    let mgr = TokenManager::new(token(1_000, 3_600));

    assert!(!mgr.is_expired(1_000 + 3_600 - 241));
    assert!(mgr.is_expired(1_000 + 3_600 - 240));
}

#[test]
fn test_short_lived_token_does_not_underflow() {
    let mgr = TokenManager::new(token(0, 60));
    assert!(mgr.is_expired(0));
}
