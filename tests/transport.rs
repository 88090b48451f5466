//! Transport behavior shared by both clients: status mapping, the data
//! envelope, default parameters, headers, rate-limit retry and closing.

mod common;

use common::*;
use fortnite_api::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Rate limiting
// =============================================================================

mod rate_limit {
    use super::*;

    async fn always_limited(server: &MockServer, expected: u64) {
        Mock::given(method("GET"))
            .and(path("/v2/aes"))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_json(json!({"status": 429, "data": {"error": "Rate limit exceeded."}})),
            )
            .expect(expected)
            .mount(server)
            .await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_async_gives_up_after_five_requests() {
        let server = MockServer::start().await;
        always_limited(&server, 5).await;

        let client = builder(&server).build().unwrap();
        let err = client.aes().fetch(KeyFormat::Hex).await.unwrap_err();

        match err {
            ApiError::RateLimited { attempts, message } => {
                assert_eq!(attempts, 5);
                assert_eq!(message, "Rate limit exceeded.");
            }
            other => panic!("expected RateLimited, got {:?}", other),
        }
        server.verify().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_blocking_gives_up_after_five_requests() {
        let server = MockServer::start().await;
        always_limited(&server, 5).await;

        let err = blocking(builder(&server), |client| client.aes().fetch(KeyFormat::Hex))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::RateLimited { attempts: 5, .. }));
        server.verify().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_recovers_when_limit_lifts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/aes"))
            .respond_with(ResponseTemplate::new(429).insert_header("X-Ratelimit-Reset", "2000-01-01T00:00:00Z"))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        mount(&server, "/v2/aes", aes()).await;

        let client = builder(&server).build().unwrap();
        let aes = client.aes().fetch(KeyFormat::Hex).await.unwrap();
        assert_eq!(aes.dynamic_keys.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_disabled_retry_makes_one_request() {
        let server = MockServer::start().await;
        always_limited(&server, 1).await;

        let client = builder(&server).rate_limit(RateLimitRetry::disabled()).build().unwrap();
        let err = client.aes().fetch(KeyFormat::Hex).await.unwrap_err();
        assert!(matches!(err, ApiError::RateLimited { attempts: 1, .. }));
        server.verify().await;
    }
}

// =============================================================================
// Status mapping
// =============================================================================

mod status {
    use super::*;

    async fn respond(server: &MockServer, status: u16, body: serde_json::Value) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unauthorized() {
        let server = MockServer::start().await;
        respond(&server, 401, json!({"status": 401, "error": "Invalid API key"})).await;

        let client = builder(&server).build().unwrap();
        let err = client
            .stats()
            .fetch_br(TEST_ACCOUNT_NAME, BrStatsParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(ref m) if m == "Invalid API key"));
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_not_found() {
        let server = MockServer::start().await;
        respond(&server, 404, json!({"status": 404, "error": "the requested cosmetic was not found"})).await;

        let client = builder(&server).build().unwrap();
        let err = client
            .cosmetics()
            .fetch_br_by_id("CID_Unknown", FetchOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "the requested cosmetic was not found"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_service_unavailable() {
        let server = MockServer::start().await;
        respond(&server, 503, json!({})).await;

        let client = builder(&server).build().unwrap();
        let err = client.map().fetch(None).await.unwrap_err();
        assert!(matches!(err, ApiError::ServiceUnavailable(ref m) if m == fortnite_api::error::DEFAULT_ERROR_MESSAGE));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_other_status_is_not_retried() {
        let server = MockServer::start().await;
        respond(&server, 500, json!({"status": 500, "error": "boom"})).await;

        let err = blocking(builder(&server), |client| client.playlists().fetch(None))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, ref message } if message == "boom"));
        server.verify().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = builder(&server).build().unwrap();
        let err = client.aes().fetch(KeyFormat::Hex).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}

// =============================================================================
// Envelope and payload shape
// =============================================================================

mod envelope {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_bare_payload_without_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/creatorcode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(creator_code()))
            .mount(&server)
            .await;

        let client = builder(&server).build().unwrap();
        let code = client.creator_codes().fetch("ninja").await.unwrap();
        assert_eq!(code.account.id, TEST_ACCOUNT_ID);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_wrong_shape_is_malformed_payload() {
        let server = MockServer::start().await;
        mount(&server, "/v1/playlists", json!({"not": "a list"})).await;

        let client = builder(&server).build().unwrap();
        let err = client.playlists().fetch(None).await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedPayload { field: "<root>", .. }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_missing_required_field_is_malformed_payload() {
        let server = MockServer::start().await;
        mount(&server, "/v2/creatorcode", json!({"code": "ninja"})).await;

        let client = builder(&server).build().unwrap();
        let err = client.creator_codes().fetch("ninja").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::MalformedPayload { entity: "CreatorCode", field: "account", .. }
        ));
    }
}

// =============================================================================
// Parameters and headers
// =============================================================================

mod parameters {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_default_language_and_flags() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/shop"))
            .and(query_param("language", "de"))
            .and(query_param("responseFlags", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(shop())))
            .expect(1)
            .mount(&server)
            .await;

        let client = builder(&server)
            .default_language(GameLanguage::German)
            .response_flags(ResponseFlags::INCLUDE_SHOP_HISTORY)
            .build()
            .unwrap();
        let shop = client.shop().fetch(FetchOptions::new()).await.unwrap();
        assert_eq!(shop.entries.as_ref().unwrap().len(), 1);
        server.verify().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_per_call_overrides() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/cosmetics/br"))
            .and(query_param("language", "ja"))
            .and(query_param("responseFlags", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(cosmetics_br(3))))
            .expect(1)
            .mount(&server)
            .await;

        let client = builder(&server).build().unwrap();
        let options = FetchOptions::new()
            .language(GameLanguage::Japanese)
            .response_flags(ResponseFlags::all());
        let cosmetics = client.cosmetics().fetch_br(options).await.unwrap();
        assert_eq!(cosmetics.len(), 3);
        assert_eq!(cosmetics.materialized_count(), 0);
        server.verify().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_auth_and_user_agent_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("authorization", TEST_API_KEY))
            .and(header("user-agent", fortnite_api::network::USER_AGENT))
            .and(header("x-trace", "42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(aes())))
            .expect(2)
            .mount(&server)
            .await;

        let client = builder(&server).header("X-Trace", "42").build().unwrap();
        client.aes().fetch(KeyFormat::Hex).await.unwrap();
        blocking(builder(&server).header("X-Trace", "42"), |client| client.aes().fetch(KeyFormat::Hex))
            .await
            .unwrap();
        server.verify().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_stats_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/stats/br/v2"))
            .and(query_param("name", TEST_ACCOUNT_NAME))
            .and(query_param("accountType", "psn"))
            .and(query_param("timeWindow", "season"))
            .and(query_param("image", "none"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(stats())))
            .expect(1)
            .mount(&server)
            .await;

        let client = builder(&server).build().unwrap();
        let params = BrStatsParams::new()
            .account_type(AccountType::Psn)
            .time_window(TimeWindow::Season);
        let stats = client.stats().fetch_br(TEST_ACCOUNT_NAME, params).await.unwrap();
        assert_eq!(stats.account.name, TEST_ACCOUNT_NAME);
        server.verify().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_id_segment_is_percent_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/playlists/Playlist%20Solo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(playlist())))
            .expect(1)
            .mount(&server)
            .await;

        let client = builder(&server).build().unwrap();
        let playlist = client.playlists().fetch_by_id("Playlist Solo", None).await.unwrap();
        assert_eq!(playlist.id, TEST_PLAYLIST_ID);
        server.verify().await;
    }
}

// =============================================================================
// Local checks that never reach the network
// =============================================================================

mod preconditions {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_stats_without_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = Client::builder().base_url(server.uri()).build().unwrap();
        let err = client
            .stats()
            .fetch_br_by_id(TEST_ACCOUNT_ID, BrStatsParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingApiKey));
        server.verify().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_beta_not_enabled() {
        let server = MockServer::start().await;
        let client = builder(&server).beta(false).build().unwrap();
        assert!(matches!(
            client.beta().fetch_new_display_assets().await,
            Err(ApiError::BetaAccessNotEnabled)
        ));

        let err = blocking(builder(&server).beta(false), |client| client.beta().fetch_material_instances())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BetaAccessNotEnabled));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_blank_names_are_rejected() {
        let server = MockServer::start().await;
        let client = builder(&server).build().unwrap();
        assert!(matches!(client.creator_codes().fetch("  ").await, Err(ApiError::MalformedRequest(_))));
        assert!(matches!(
            client.stats().fetch_br("", BrStatsParams::default()).await,
            Err(ApiError::MalformedRequest(_))
        ));
        assert!(matches!(
            client.cosmetics().search_br(&CosmeticSearchParams::new()).await,
            Err(ApiError::MalformedRequest(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_blank_ids_are_rejected_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .expect(0)
            .mount(&server)
            .await;

        let client = builder(&server).build().unwrap();
        assert!(matches!(
            client.cosmetics().fetch_br_by_id("", FetchOptions::new()).await,
            Err(ApiError::MalformedRequest(_))
        ));
        assert!(matches!(
            client.playlists().fetch_by_id("  ", None).await,
            Err(ApiError::MalformedRequest(_))
        ));

        let (cosmetic, playlist) = blocking(builder(&server), |c| {
            (
                c.cosmetics().fetch_br_by_id(" ", FetchOptions::new()).map(|_| ()),
                c.playlists().fetch_by_id("", None).map(|_| ()),
            )
        })
        .await;
        assert!(matches!(cosmetic, Err(ApiError::MalformedRequest(_))));
        assert!(matches!(playlist, Err(ApiError::MalformedRequest(_))));
    }

    #[test]
    fn test_invalid_header_fails_build() {
        let result = Client::builder().header("bad header", "x").build();
        assert!(matches!(result, Err(ApiError::MalformedRequest(_))));
    }
}

// =============================================================================
// Closing
// =============================================================================

mod closing {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_assets_fail_after_close() {
        let server = MockServer::start().await;
        let icon_url = format!("{}/images/vbuck.png", server.uri());
        let mut payload = shop();
        payload["vbuckIcon"] = json!(icon_url);
        mount(&server, "/v2/shop", payload).await;
        Mock::given(method("GET"))
            .and(path("/images/vbuck.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, b'P', b'N', b'G']))
            .expect(1)
            .mount(&server)
            .await;

        let client = builder(&server).build().unwrap();
        let shop = client.shop().fetch(FetchOptions::new()).await.unwrap();
        assert_eq!(shop.vbuck_icon.read().await.unwrap(), vec![0x89, b'P', b'N', b'G']);

        client.close();
        assert!(matches!(shop.vbuck_icon.read().await, Err(ApiError::ClientClosed)));
        server.verify().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_blocking_client_closes_on_drop() {
        let server = MockServer::start().await;
        mount(&server, "/v1/map", map()).await;

        let map = blocking(builder(&server), |client| client.map().fetch(None)).await.unwrap();
        assert!(map.images.blank.http().is_closed());
        assert_eq!(map.pois.len(), 2);
    }
}
