//! The root path and the static front-end bundle.

use anyhow::Result;
use reqwest::{redirect::Policy, StatusCode};

use crate::helpers::TestApp;

#[tokio::test]
async fn root_redirects_to_front_end() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.http_client.get(app.url("/")).send().await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.url().path(), "/static/index.html");
    assert!(res.text().await?.contains("Mergington High School"));

    Ok(())
}

#[tokio::test]
async fn root_redirect_is_see_other() -> Result<()> {
    let app = TestApp::spawn().await?;
    let client = reqwest::Client::builder().redirect(Policy::none()).build()?;

    let res = client.get(app.url("/")).send().await?;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/static/index.html")
    );

    Ok(())
}

#[tokio::test]
async fn static_assets_are_served() -> Result<()> {
    let app = TestApp::spawn().await?;

    for asset in ["app.js", "styles.css"] {
        let res = app
            .http_client
            .get(app.url(&format!("/static/{asset}")))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK, "{asset}");
    }

    let res = app
        .http_client
        .get(app.url("/static/missing.js"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
