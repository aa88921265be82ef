use super::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RaydiumClient {
    let config = RaydiumConfig {
        pools_url: format!("{}/pools/info/list", server.uri()),
        ..RaydiumConfig::default()
    };
    RaydiumClient::new(config).unwrap()
}

fn sample_pool(symbol_a: &str, symbol_b: &str) -> serde_json::Value {
    json!({
        "type": "Concentrated",
        "id": "8sLbNZoA1cfnvMJLPfp98ZLAnFSYCFApfJKMbiXNLwxj",
        "mintA": { "symbol": symbol_a, "decimals": 9 },
        "mintB": { "symbol": symbol_b, "decimals": 6 },
        "price": 142.3,
        "tvl": 8123456.78,
        "day": { "volume": 20345678.9, "volumeFee": 1234.5, "feeApr": 12.44, "apr": 15.02 },
        "week": { "volume": 1.0, "feeApr": 1.0, "apr": 1.0 }
    })
}

#[test]
fn query_params_vary_only_by_pool_type() {
    let client = RaydiumClient::new(RaydiumConfig::default()).unwrap();

    for filter in PoolTypeFilter::VALUES {
        let params = client.query_params(filter);
        assert_eq!(
            params,
            vec![
                ("poolType", filter.as_str().to_string()),
                ("poolSortField", "default".to_string()),
                ("sortType", "desc".to_string()),
                ("pageSize", "10".to_string()),
                ("page", "1".to_string()),
            ]
        );
    }
}

#[tokio::test]
async fn issues_one_request_per_filter_with_fixed_parameters() {
    for filter in PoolTypeFilter::VALUES {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pools/info/list"))
            .and(query_param("poolType", filter.as_str()))
            .and(query_param("poolSortField", "default"))
            .and(query_param("sortType", "desc"))
            .and(query_param("pageSize", "10"))
            .and(query_param("page", "1"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "req-1",
                "success": true,
                "data": { "count": 1, "data": [sample_pool("SOL", "USDC")], "hasNextPage": true }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = client_for(&server).fetch_pool_list(filter).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.count, Some(1));
        assert_eq!(page.has_next_page, Some(true));

        let pool = &page.data[0];
        assert_eq!(pool.mint_a.symbol, "SOL");
        assert_eq!(pool.mint_b.symbol, "USDC");
        assert_eq!(pool.pool_type.as_deref(), Some("Concentrated"));
        assert_eq!(pool.day.fee_apr, 12.44);
        // Dropping the server verifies the `expect(1)` count
    }
}

#[tokio::test]
async fn non_success_status_is_an_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_pool_list(PoolTypeFilter::All)
        .await
        .unwrap_err();
    assert!(matches!(err, PoolsError::HttpStatus { status: 503 }));
}

#[tokio::test]
async fn body_without_pool_array_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "rows": [] } })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_pool_list(PoolTypeFilter::All)
        .await
        .unwrap_err();
    assert!(matches!(err, PoolsError::InvalidResponse(_)));
}

#[tokio::test]
async fn explicit_failure_flag_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "req-9",
            "success": false,
            "data": { "data": [] }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_pool_list(PoolTypeFilter::Concentrated)
        .await
        .unwrap_err();
    assert!(matches!(err, PoolsError::InvalidResponse(msg) if msg.contains("req-9")));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let config = RaydiumConfig {
        pools_url: "http://127.0.0.1:9/pools/info/list".to_string(),
        ..RaydiumConfig::default()
    };
    let err = RaydiumClient::new(config)
        .unwrap()
        .fetch_pool_list(PoolTypeFilter::All)
        .await
        .unwrap_err();
    assert!(matches!(err, PoolsError::Network(_)));
}
