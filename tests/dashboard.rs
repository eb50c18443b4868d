use axum::extract::FromRequestParts;
use axum::http::Request;
use hotel_admin_api::{
    config::DashboardConfig,
    error::AppError,
    middleware::session::{SessionClaims, SessionUser},
};
use jsonwebtoken::{EncodingKey, Header, encode};

#[test]
fn navigation_tree_covers_every_entity_view() {
    let config = DashboardConfig::standard();

    let titles: Vec<&str> = config.main.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Dashboard", "Inventory", "Pricing", "Property Content"]
    );

    let items: Vec<&str> = config
        .main
        .iter()
        .flat_map(|s| s.items.iter().map(|i| i.title.as_str()))
        .collect();
    for expected in ["Hotels", "Room Types", "Availability", "Seasons", "Room Rates"] {
        assert!(items.contains(&expected), "missing nav item {expected}");
    }

    assert!(!config.secondary.is_empty());
}

#[tokio::test]
async fn session_extractor_rejects_missing_or_malformed_tokens() {
    let request = Request::builder().uri("/api/dashboard/home").body(()).unwrap();
    let (mut parts, _) = request.into_parts();
    let err = SessionUser::from_request_parts(&mut parts, &()).await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden));

    let request = Request::builder()
        .uri("/api/dashboard/home")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(())
        .unwrap();
    let (mut parts, _) = request.into_parts();
    let err = SessionUser::from_request_parts(&mut parts, &()).await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn session_extractor_accepts_a_signed_token() {
    // Safety: this test is the only user of SESSION_SECRET in this binary.
    unsafe { std::env::set_var("SESSION_SECRET", "test-secret") };

    let claims = SessionClaims {
        sub: "user-1".to_string(),
        name: "Ada".to_string(),
        exp: 4102444800, // 2100-01-01
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    let request = Request::builder()
        .uri("/api/dashboard/home")
        .header("authorization", format!("Bearer {token}"))
        .body(())
        .unwrap();
    let (mut parts, _) = request.into_parts();
    let session = SessionUser::from_request_parts(&mut parts, &()).await.unwrap();
    assert_eq!(session.subject, "user-1");
    assert_eq!(session.name, "Ada");
}
