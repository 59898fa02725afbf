//! Performance benchmarks for the tool rental engine.
//!
//! Measures charge-day counting over growing rental periods and a full
//! checkout round trip through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tool_rental::api::{AppState, CheckoutRequest, create_router};
use tool_rental::calculation::{checkout, count_charge_days};
use tool_rental::config::ConfigLoader;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/catalog").expect("Failed to load config")
}

fn checkout_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 7, 2).unwrap()
}

/// Benchmark: charge-day counting as the rental period grows.
fn bench_count_scaling(c: &mut Criterion) {
    let config = load_config();
    let ladder = config.get_tool("LADW").unwrap().clone();
    let start = checkout_date();

    let mut group = c.benchmark_group("count_charge_days");

    for days in [1u64, 7, 30, 365, 730, 3650].iter() {
        let due = start + chrono::Days::new(*days);
        group.throughput(Throughput::Elements(*days));
        group.bench_with_input(BenchmarkId::new("days", days), days, |b, _| {
            b.iter(|| black_box(count_charge_days(black_box(&ladder), start, due)))
        });
    }

    group.finish();
}

/// Benchmark: building a full agreement without the HTTP layer.
fn bench_checkout(c: &mut Criterion) {
    let config = load_config();
    let chainsaw = config.get_tool("CHNS").unwrap().clone();

    c.bench_function("checkout_5_days", |b| {
        b.iter(|| black_box(checkout(black_box(&chainsaw), 5, 25, checkout_date())))
    });
}

/// Benchmark: checkout through the router.
fn bench_api_checkout(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let request = CheckoutRequest {
        tool_code: "LADW".to_string(),
        rental_days: 730,
        discount_percent: 25,
        checkout_date: checkout_date(),
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("api_checkout_730_days", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/checkout")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_count_scaling,
    bench_checkout,
    bench_api_checkout,
);
criterion_main!(benches);
