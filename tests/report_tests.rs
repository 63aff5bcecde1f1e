use telecom_dashboard::aggregator::{build_report, ReportOptions};
use telecom_dashboard::charts::{generate_charts, ChartConfig};
use telecom_dashboard::output::{read_report, write_report, write_svg};
use telecom_dashboard::parser::{parse_snapshot_str, read_snapshot};
use telecom_dashboard::utils::error::SnapshotError;

const PRODUCTS: &str = r#"{
    "data": [
        {"id": "sim-5g", "name": "5G SIM Pack", "category": "SIM", "price": 199, "stock": 420, "monthlySales": [120, 150, 180, 210, 260, 300]},
        {"id": "iot-plan", "name": "IoT Device Plan", "category": "Plans", "price": 349.5, "stock": 1200, "monthlySales": [80, 85, 90, 95, 100, 110]},
        {"id": "router", "name": "Fiber Router", "category": "Hardware", "price": 2499, "stock": 75, "monthlySales": [30, 28, 35, 40, 38, 45]}
    ]
}"#;

#[test]
fn test_report_from_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("products.json");
    std::fs::write(&input, PRODUCTS).unwrap();

    let snapshot = read_snapshot(&input).unwrap();
    let options = ReportOptions {
        source: input.display().to_string(),
        query: "ROUTER".to_string(),
        ..Default::default()
    };
    let report = build_report(&snapshot, &options).unwrap();

    let output = dir.path().join("dashboard.json");
    write_report(&report, &output).unwrap();
    let loaded = read_report(&output).unwrap();

    assert_eq!(loaded.product_count, 3);
    assert_eq!(loaded.filtered.len(), 1);
    assert_eq!(loaded.filtered[0].name, "Fiber Router");
    assert_eq!(loaded.filtered[0].sparkline.len(), 6);
    assert_eq!(loaded.restock, vec!["5G SIM Pack", "Fiber Router"]);
    assert_eq!(loaded.monthly_units.last().unwrap().month, "Sep");
    assert_eq!(loaded.monthly_units.last().unwrap().units, 455);
}

#[test]
fn test_chart_sheet_written() {
    let snapshot = parse_snapshot_str(PRODUCTS).unwrap();
    let report = build_report(&snapshot, &ReportOptions::default()).unwrap();
    let config = ChartConfig::new().with_title("Q2 inventory").with_width(800);

    let svg = generate_charts(&report, Some(&config)).unwrap();
    assert!(svg.contains("Q2 inventory"));
    assert!(svg.contains(r#"width="800""#));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.svg");
    write_svg(&svg, &path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_mismatched_series_rejected_at_ingestion() {
    let json = r#"[
        {"id": 1, "name": "A", "category": "X", "price": 1, "stock": 1, "monthlySales": [1, 2, 3]},
        {"id": 2, "name": "B", "category": "X", "price": 1, "stock": 1, "monthlySales": [1, 2]}
    ]"#;

    assert!(matches!(
        parse_snapshot_str(json),
        Err(SnapshotError::InvalidRecord { .. })
    ));
}
