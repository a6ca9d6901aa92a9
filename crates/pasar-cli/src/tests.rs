use clap::Parser;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

#[test]
fn parses_normalize_command() {
    let cli = Cli::try_parse_from(["pasar-cli", "normalize", "vendor_b"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Normalize {
            vendor_type: Vendor::B,
            input: None
        }
    ));
}

#[test]
fn normalize_vendor_type_is_case_insensitive() {
    let cli = Cli::try_parse_from(["pasar-cli", "normalize", "VENDOR_C", "--input", "resto.json"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Normalize { vendor_type, input } => {
            assert_eq!(vendor_type, Vendor::C);
            assert_eq!(input, Some(PathBuf::from("resto.json")));
        }
        Commands::Aggregate { .. } => panic!("expected normalize"),
    }
}

#[test]
fn rejects_unknown_vendor_type() {
    let err = Cli::try_parse_from(["pasar-cli", "normalize", "vendor_x"]).unwrap_err();
    assert!(err.to_string().contains("Unknown vendor type: vendor_x"), "{err}");
}

#[test]
fn parses_aggregate_command() {
    let cli = Cli::try_parse_from(["pasar-cli", "aggregate"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Aggregate { sample: false }));

    let cli = Cli::try_parse_from(["pasar-cli", "aggregate", "--sample"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Aggregate { sample: true }));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["pasar-cli"]).is_err());
}

#[test]
fn normalize_document_wraps_products() {
    let raw = r#"[{"kd_produk": "A001", "nm_brg": "Kopi Bubuk 100g", "hrg": "15000", "ket_stok": "ada"}]"#;

    let document = normalize::normalize_document(Vendor::A, raw).expect("document");

    assert_eq!(
        document,
        json!({
            "success": true,
            "count": 1,
            "source": "vendor_a",
            "data": [{
                "id": "A001",
                "nama": "Kopi Bubuk 100g",
                "harga_final": 13500,
                "status": "Tersedia",
                "sumber": "Vendor A"
            }]
        })
    );
}

#[test]
fn normalize_document_rejects_bad_input() {
    assert!(normalize::normalize_document(Vendor::A, "not json").is_err());
    assert!(normalize::normalize_document(Vendor::A, r#"{"kd_produk": "A001"}"#).is_err());
}

#[test]
fn read_input_reports_missing_file() {
    let err = normalize::read_input(Some(std::path::Path::new("/definitely/not/here.json")))
        .unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"), "{err}");
}

#[tokio::test]
async fn aggregate_renders_products_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"sku": "TSHIRT-001", "productName": "Kaos Ijen Crater", "price": 75000, "isAvailable": true}
        ])))
        .mount(&server)
        .await;

    let config = pasar_core::AppConfig {
        env: pasar_core::Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("addr"),
        log_level: "info".to_owned(),
        endpoints: pasar_core::VendorEndpoints {
            vendor_a: Some(format!("{}/api/warung", server.uri())),
            vendor_b: Some(format!("{}/products", server.uri())),
            vendor_c: None,
        },
        fetch_timeout_secs: 5,
        fetch_user_agent: "pasar-test/0.1".to_owned(),
        fetch_max_retries: 0,
        fetch_retry_backoff_ms: 0,
    };

    let document = aggregate::run_aggregate(&config, true).await.expect("document");

    // Vendor A answers 404 from the mock server and contributes nothing.
    assert_eq!(document["success"], true);
    assert_eq!(document["count"], 2);
    assert_eq!(
        document["sources"],
        json!({"vendorA": 0, "vendorB": 1, "vendorC": 1})
    );
    assert_eq!(document["data"][0]["sumber"], "Vendor B");
    assert_eq!(document["data"][1]["nama"], "Nasi Tempong (Recommended)");
}

fn bad_config() -> Result<pasar_core::AppConfig, ConfigError> {
    Err(ConfigError::InvalidEnvVar {
        var: "PASAR_FETCH_TIMEOUT_SECS".to_owned(),
        reason: "invalid digit found in string".to_owned(),
    })
}

#[tokio::test]
async fn normalize_runs_despite_config_error() {
    let file = std::env::temp_dir().join(format!("pasar-cli-normalize-{}.json", std::process::id()));
    std::fs::write(
        &file,
        r#"[{"sku": "TSHIRT-001", "productName": "Kaos Ijen Crater", "price": 75000, "isAvailable": true}]"#,
    )
    .expect("write input");

    let result = run(
        Commands::Normalize {
            vendor_type: Vendor::B,
            input: Some(file.clone()),
        },
        bad_config(),
    )
    .await;
    std::fs::remove_file(&file).ok();

    let document = result.expect("normalize should not need config");
    assert_eq!(document["count"], 1);
    assert_eq!(document["source"], "vendor_b");
}

#[tokio::test]
async fn aggregate_reports_config_error() {
    let err = run(Commands::Aggregate { sample: true }, bad_config())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("PASAR_FETCH_TIMEOUT_SECS"), "{err}");
}
