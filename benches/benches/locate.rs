use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphql_locator::{locate, ClickPosition};
use graphql_syntax::{parse_document, token_range_at};
use std::fmt::Write;
use std::hint::black_box;

const SAMPLE_OPERATION: &str = r"
query GetUser($id: ID!) {
  user(id: $id) {
    ...UserFields
    posts {
      id
      title
    }
  }
}

fragment UserFields on User {
  id
  name
  email
}
";

/// A document with `count` named queries, clicked on in the last one.
fn many_operations(count: usize) -> (String, ClickPosition) {
    let mut text = String::new();
    for i in 0..count {
        let _ = writeln!(text, "query Op{i} {{ field{i} {{ id name }} }}\n");
    }
    let last = text.rfind("query").unwrap_or(0);
    let click = ClickPosition::new(last + 6, last + 8);
    (text, click)
}

fn bench_parse_document(c: &mut Criterion) {
    c.bench_function("parse_document", |b| {
        b.iter(|| parse_document(black_box(SAMPLE_OPERATION)));
    });
}

fn bench_token_range_at(c: &mut Criterion) {
    let offset = SAMPLE_OPERATION.find("UserFields").unwrap_or(0);
    c.bench_function("token_range_at", |b| {
        b.iter(|| token_range_at(black_box(SAMPLE_OPERATION), black_box(offset)));
    });
}

fn bench_locate_last_definition(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate_last_definition");
    for count in [1, 10, 100] {
        let (text, click) = many_operations(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| locate(black_box(text), black_box(click)));
        });
    }
    group.finish();
}

fn bench_locate_miss(c: &mut Criterion) {
    let (text, _) = many_operations(100);
    let click = ClickPosition::new(text.len() + 10, text.len() + 11);
    c.bench_function("locate_miss", |b| {
        b.iter(|| locate(black_box(&text), black_box(click)));
    });
}

criterion_group!(
    benches,
    bench_parse_document,
    bench_token_range_at,
    bench_locate_last_definition,
    bench_locate_miss,
);
criterion_main!(benches);
