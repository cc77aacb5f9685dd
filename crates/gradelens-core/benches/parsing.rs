use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradelens_core::parser::{parse_dataset_str, validate_dataset};

fn synthetic_csv(rows: usize) -> String {
    let mut csv = String::from("Q1,Q2,Q3,Q4,Q5,Q6,Q7,Q8,Q9,Q10,Total\n");
    for i in 0..rows {
        let answers: Vec<u8> = (0..10).map(|k| u8::from((i + k) % 3 != 0)).collect();
        let total: u32 = answers.iter().map(|&a| u32::from(a)).sum();
        let fields: Vec<String> = answers.iter().map(u8::to_string).collect();
        csv.push_str(&fields.join(","));
        csv.push(',');
        csv.push_str(&total.to_string());
        csv.push('\n');
    }
    csv
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_dataset");
    let source = PathBuf::from("bench.csv");

    for rows in [100, 1_000, 10_000] {
        let csv = synthetic_csv(rows);
        group.bench_function(format!("rows={rows}"), |b| {
            b.iter(|| parse_dataset_str(black_box(&csv), &source))
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let csv = synthetic_csv(1_000);
    let dataset = parse_dataset_str(&csv, &PathBuf::from("bench.csv")).unwrap();

    c.bench_function("validate_dataset/rows=1000", |b| {
        b.iter(|| validate_dataset(black_box(&dataset)))
    });
}

criterion_group!(benches, bench_parse, bench_validate);
criterion_main!(benches);
