use addresscheck::{RawResponse, ResponseNormalizer};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn json_body(warnings: usize) -> String {
    let codes: Vec<String> = (0..warnings).map(|i| format!("\"synm{:03}\"", i % 18 + 1)).collect();
    format!(r#"{{"address":"someone@example","result":"invalid","syntaxWarnings":[{}]}}"#, codes.join(","))
}

fn xml_body(warnings: usize) -> String {
    let codes: String = (0..warnings)
        .map(|i| format!("<warning>extm{:03}</warning>", i % 30 + 1))
        .collect();
    format!("<result><address>someone@example</address><syntaxWarnings>{}</syntaxWarnings></result>", codes)
}

pub fn normalize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for warnings in [0, 5, 50] {
        let json = RawResponse::with_body(200, "application/json", json_body(warnings));
        group.bench_with_input(BenchmarkId::new("json", warnings), &json, |b, raw| {
            b.iter(|| {
                let _ = ResponseNormalizer::normalize_response(raw.clone());
            });
        });

        let xml = RawResponse::with_body(200, "text/xml", xml_body(warnings));
        group.bench_with_input(BenchmarkId::new("xml", warnings), &xml, |b, raw| {
            b.iter(|| {
                let _ = ResponseNormalizer::normalize_response(raw.clone());
            });
        });
    }

    let plain = RawResponse::with_body(200, "text/plain", "x".repeat(10_000));
    group.bench_with_input(BenchmarkId::new("raw", 10_000), &plain, |b, raw| {
        b.iter(|| {
            let _ = ResponseNormalizer::normalize_response(raw.clone());
        });
    });

    group.finish();
}

criterion_group!(benches, normalize_benchmark);
criterion_main!(benches);
