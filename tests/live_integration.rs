use tsuru_http::{TsuruClient, TsuruError};

fn load_live_credentials() -> Option<(String, String)> {
    let target = std::env::var("TSURU_TARGET").ok()?;
    let token = std::env::var("TSURU_TOKEN").ok()?;
    if target.trim().is_empty() || token.trim().is_empty() {
        return None;
    }
    Some((target, token))
}

#[tokio::test]
async fn live_read_only_roundtrip() {
    let Some((target, token)) = load_live_credentials() else {
        eprintln!("skipping live test: TSURU_TARGET/TSURU_TOKEN not set");
        return;
    };

    let tsuru = TsuruClient::connect(target, token)
        .await
        .expect("connect must succeed against live target");

    tsuru.list_plans().await.expect("plans must list");
    let apps = tsuru.list_apps().await;
    // An account without apps may answer 204 on some targets.
    if let Err(err) = &apps {
        assert!(
            matches!(err, TsuruError::Api { status: 204, .. }),
            "unexpected list_apps error: {err}"
        );
    }

    let missing = tsuru
        .get_app("tsuru-http-live-test-app-that-does-not-exist")
        .await
        .expect_err("missing app must fail");
    assert_eq!(missing.status(), Some(404));
}
