//! Benchmarks for the bx pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bx::{export, resolve_tokens, Brand, Colour, Content, ExportFormat, ExportOptions};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_brand() -> Brand {
    let source = fs::read_to_string(fixtures_dir().join("acme.brand.yaml")).unwrap();
    let mut brand: Brand = serde_yaml::from_str(&source).unwrap();
    brand.normalize();
    brand
}

fn load_content() -> Content {
    let source = fs::read_to_string(fixtures_dir().join("website.content.yaml")).unwrap();
    serde_yaml::from_str(&source).unwrap()
}

// -- Colour math benchmarks --

fn bench_colour_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("colour");

    let blue = Colour::from_hex("#2563eb").unwrap();
    let white = Colour::WHITE;

    group.bench_function("contrast_ratio", |b| {
        b.iter(|| black_box(blue).contrast_ratio(black_box(white)))
    });

    group.bench_function("scale", |b| b.iter(|| black_box(blue).scale()));

    group.bench_function("cmyk", |b| b.iter(|| black_box(blue).to_cmyk()));

    group.finish();
}

// -- Resolution benchmarks --

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let brand = load_brand();
    group.bench_function("resolve_tokens", |b| {
        b.iter(|| resolve_tokens(black_box(&brand)))
    });

    group.finish();
}

// -- Export benchmarks --

fn bench_exports(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    let brand = load_brand();
    let tokens = resolve_tokens(&brand);
    let content = load_content();
    let options = ExportOptions::default();

    group.bench_function("tokens_css", |b| {
        b.iter(|| export(ExportFormat::TokensCss, &tokens, &content, &options).unwrap())
    });

    group.bench_function("print_specs", |b| {
        b.iter(|| export(ExportFormat::PrintSpecs, &tokens, &content, &options).unwrap())
    });

    group.bench_function("pptx_deck", |b| {
        b.iter(|| export(ExportFormat::Pptx, &tokens, &content, &options).unwrap())
    });

    group.bench_function("pdf_guidelines", |b| {
        b.iter(|| export(ExportFormat::PdfGuidelines, &tokens, &content, &options).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_colour_math, bench_resolution, bench_exports);
criterion_main!(benches);
