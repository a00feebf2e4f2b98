mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

#[tokio::test]
async fn protected_route_without_cookie_is_401() -> anyhow::Result<()> {
    let app = build_app().await?;
    let resp = send(&app, bare_request("GET", "/bookings?email=a@example.com", None)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body, json!({ "error": true, "message": "Unauthorized access" }));
    Ok(())
}

#[tokio::test]
async fn jwt_sets_http_only_cookie() -> anyhow::Result<()> {
    let app = build_app().await?;
    let resp = send(
        &app,
        json_request("POST", "/jwt", None, &json!({ "email": "user@example.com" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp.headers().get("set-cookie").unwrap().to_str()?.to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));

    let body = body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));
    Ok(())
}

#[tokio::test]
async fn logout_clears_cookie_on_both_verbs() -> anyhow::Result<()> {
    let app = build_app().await?;
    for method in ["POST", "GET"] {
        let resp = send(&app, bare_request(method, "/logout", None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let set_cookie = resp.headers().get("set-cookie").unwrap().to_str()?.to_string();
        assert!(set_cookie.starts_with("token="));
        assert!(set_cookie.contains("Max-Age=0"));
        let body = body_json(resp).await;
        assert_eq!(body, json!({ "success": true }));
    }
    Ok(())
}

#[tokio::test]
async fn logout_with_active_session_clears_cookie() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cookie = login(&app, "a@example.com").await;
    let resp = send(&app, bare_request("POST", "/logout", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let set_cookie = resp.headers().get("set-cookie").unwrap().to_str()?.to_string();
    assert!(set_cookie.starts_with("token=;"), "{set_cookie}");
    assert!(set_cookie.contains("Max-Age=0"));
    Ok(())
}

#[tokio::test]
async fn identity_without_plausible_email_is_400() -> anyhow::Result<()> {
    let app = build_app().await?;
    let resp = send(
        &app,
        json_request("POST", "/jwt", None, &json!({ "email": "not-an-email" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], true);
    Ok(())
}

#[tokio::test]
async fn scoped_query_with_matching_email_succeeds() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cookie = login(&app, "a@example.com").await;
    let resp = send(
        &app,
        bare_request("GET", "/bookings?email=a@example.com", Some(&cookie)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
    Ok(())
}

#[tokio::test]
async fn scoped_query_with_foreign_email_is_403() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cookie = login(&app, "a@example.com").await;
    for uri in [
        "/bookings?email=b@example.com",
        "/manage-services?email=b@example.com",
        "/services-to-do?email=b@example.com",
    ] {
        let resp = send(&app, bare_request("GET", uri, Some(&cookie))).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{uri}");
        let body = body_json(resp).await;
        assert_eq!(body, json!({ "error": true, "message": "forbidden access" }));
    }
    Ok(())
}

#[tokio::test]
async fn garbage_token_is_indistinguishable_from_absent() -> anyhow::Result<()> {
    let app = build_app().await?;
    let resp = send(
        &app,
        bare_request("GET", "/bookings?email=a@example.com", Some("token=garbage")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Unauthorized access");
    Ok(())
}

#[tokio::test]
async fn token_signed_with_wrong_secret_is_401() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cookie = forge_cookie("some-other-secret", 5, "a@example.com");
    let resp = send(
        &app,
        bare_request("GET", "/bookings?email=a@example.com", Some(&cookie)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn expired_token_is_401() -> anyhow::Result<()> {
    let app = build_app().await?;
    let cookie = forge_cookie(TEST_SECRET, -2, "a@example.com");
    let resp = send(
        &app,
        bare_request("GET", "/bookings?email=a@example.com", Some(&cookie)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
