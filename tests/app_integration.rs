use chrono::NaiveDate;
use coinlens::cli::dashboard::DashboardRequest;
use std::fs;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_yahoo_mock_server(symbol: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/v8/finance/chart/{symbol}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub async fn create_coingecko_mock_server(mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/simple/price"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    /// A chart payload with `days` consecutive daily closes starting at
    /// `start` and 100.0, stepping by 1.0 per day.
    pub fn yahoo_chart_body(start: chrono::NaiveDate, days: usize) -> String {
        let timestamps: Vec<String> = (0..days)
            .map(|i| {
                (start + chrono::Duration::days(i as i64))
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
                    .and_utc()
                    .timestamp()
                    .to_string()
            })
            .collect();
        let closes: Vec<String> = (0..days).map(|i| format!("{:.1}", 100.0 + i as f64)).collect();

        format!(
            r#"{{
                "chart": {{
                    "result": [{{
                        "timestamp": [{}],
                        "indicators": {{
                            "quote": [{{
                                "close": [{}]
                            }}]
                        }}
                    }}]
                }}
            }}"#,
            timestamps.join(", "),
            closes.join(", ")
        )
    }
}

fn write_config(yahoo_uri: &str, coingecko_uri: &str) -> tempfile::NamedTempFile {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_content = format!(
        r#"
        providers:
          yahoo:
            base_url: {yahoo_uri}
          coingecko:
            base_url: {coingecko_uri}
    "#,
    );
    fs::write(config_file.path(), &config_content).expect("Failed to write config file");
    config_file
}

fn dashboard_request(out_dir: &tempfile::TempDir) -> DashboardRequest {
    DashboardRequest {
        coin: Some("Bitcoin".to_string()),
        start: Some(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
        end: Some(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()),
        out_dir: Some(out_dir.path().to_path_buf()),
    }
}

#[test_log::test(tokio::test)]
async fn test_full_dashboard_flow_with_mocks() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let yahoo_mock =
        test_utils::create_yahoo_mock_server("BTC-USD", &test_utils::yahoo_chart_body(start, 60))
            .await;
    let coingecko_mock =
        test_utils::create_coingecko_mock_server(r#"{"bitcoin": {"usd": 64250.5}}"#).await;

    let config_file = write_config(&yahoo_mock.uri(), &coingecko_mock.uri());
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");

    info!("Running dashboard against mock servers");
    let result = coinlens::run_command(
        coinlens::AppCommand::Dashboard(dashboard_request(&out_dir)),
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(
        result.is_ok(),
        "Dashboard command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_dashboard_survives_spot_price_failure() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let yahoo_mock =
        test_utils::create_yahoo_mock_server("BTC-USD", &test_utils::yahoo_chart_body(start, 60))
            .await;

    // CoinGecko is rate limited; the dashboard still renders.
    let coingecko_mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/simple/price"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&coingecko_mock)
        .await;

    let config_file = write_config(&yahoo_mock.uri(), &coingecko_mock.uri());
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let result = coinlens::run_command(
        coinlens::AppCommand::Dashboard(dashboard_request(&out_dir)),
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(
        result.is_ok(),
        "Dashboard command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_dashboard_fails_when_history_unavailable() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let yahoo_mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/BTC-USD"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&yahoo_mock)
        .await;

    let coingecko_mock =
        test_utils::create_coingecko_mock_server(r#"{"bitcoin": {"usd": 64250.5}}"#).await;

    let config_file = write_config(&yahoo_mock.uri(), &coingecko_mock.uri());
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let result = coinlens::run_command(
        coinlens::AppCommand::Dashboard(dashboard_request(&out_dir)),
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("HTTP error: 500")
    );
}

#[test_log::test(tokio::test)]
async fn test_dashboard_reports_empty_range() {
    // A valid payload with no bars at all
    let yahoo_mock =
        test_utils::create_yahoo_mock_server("BTC-USD", r#"{"chart": {"result": [{}]}}"#).await;
    let coingecko_mock =
        test_utils::create_coingecko_mock_server(r#"{"bitcoin": {"usd": 64250.5}}"#).await;

    let config_file = write_config(&yahoo_mock.uri(), &coingecko_mock.uri());
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let result = coinlens::run_command(
        coinlens::AppCommand::Dashboard(dashboard_request(&out_dir)),
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_ok());
    // No charts for an empty range
    assert_eq!(fs::read_dir(out_dir.path()).unwrap().count(), 0);
}

#[test_log::test(tokio::test)]
async fn test_coins_command() {
    let result = coinlens::run_command(coinlens::AppCommand::Coins, None).await;
    assert!(result.is_ok());
}
