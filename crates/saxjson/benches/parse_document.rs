//! Benchmark – `saxjson::Parser` into a DOM and into a no-op consumer
#![allow(missing_docs)]
#![allow(clippy::cast_precision_loss)]

use std::{fmt::Write, hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use saxjson::{DomBuilder, EventConsumer, Parser};

/// Discards every event; measures the parser alone.
struct Discard;

impl EventConsumer for Discard {
    type Output = ();

    fn string_value(&mut self, value: &str) {
        black_box(value);
    }
    fn integer_value(&mut self, value: i64) {
        black_box(value);
    }
    fn float_value(&mut self, value: f64) {
        black_box(value);
    }
    fn boolean_value(&mut self, value: bool) {
        black_box(value);
    }
    fn null_value(&mut self) {}
    fn begin_array(&mut self) {}
    fn end_array(&mut self) {}
    fn begin_object(&mut self) {}
    fn end_object(&mut self) {}
    fn result(&mut self) {}
}

/// Produce a *deterministic* array of `records` objects mixing every value
/// kind, with a sprinkling of escapes so both string paths are exercised.
fn make_json_payload(records: usize) -> String {
    let mut s = String::from("[");
    for i in 0..records {
        if i > 0 {
            s.push(',');
        }
        write!(
            s,
            r#"{{"id":{i},"name":"user-{i}","bio":"line one\nline two é","score":{score},"active":{active},"tags":["a","b","c"],"parent":null}}"#,
            score = i as f64 * 0.25,
            active = i % 2 == 0,
        )
        .expect("writing to a String cannot fail");
    }
    s.push(']');
    s
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");
    group
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3));

    for records in [10usize, 1_000, 10_000] {
        let payload = make_json_payload(records);
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_with_input(BenchmarkId::new("dom", records), &payload, |b, p| {
            let mut parser = Parser::new(DomBuilder::new());
            b.iter(|| black_box(parser.parse(p.as_str()).expect("valid payload")));
        });

        group.bench_with_input(BenchmarkId::new("discard", records), &payload, |b, p| {
            let mut parser = Parser::new(Discard);
            b.iter(|| black_box(parser.parse(p.as_str()).expect("valid payload")));
        });

        group.bench_with_input(BenchmarkId::new("serde_json", records), &payload, |b, p| {
            b.iter(|| {
                black_box(serde_json::from_str::<serde_json::Value>(p).expect("valid payload"))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
