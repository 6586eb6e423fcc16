//! End-to-end pipeline tests: definition file → tokens → artifacts.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use bx::{
    check_contrast, export, resolve_tokens, Brand, BxError, Content, ExportFormat, ExportOptions,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture_brand() -> Brand {
    let source = fs::read_to_string(fixtures_dir().join("acme.brand.yaml")).unwrap();
    let mut brand: Brand = serde_yaml::from_str(&source).unwrap();
    let warnings = brand.normalize();
    assert!(warnings.is_empty(), "fixture should be clean: {:?}", warnings);
    brand
}

fn load_fixture_content() -> Content {
    let source = fs::read_to_string(fixtures_dir().join("website.content.yaml")).unwrap();
    serde_yaml::from_str(&source).unwrap()
}

#[test]
fn css_export_contains_primary_verbatim() {
    let brand = load_fixture_brand();
    let tokens = resolve_tokens(&brand);
    let artifact = export(
        ExportFormat::TokensCss,
        &tokens,
        &Content::empty(),
        &ExportOptions::default(),
    )
    .unwrap();
    let css = artifact.as_text().unwrap();
    assert!(css.contains("--color-primary: #2563eb;"));
    assert!(css.contains("--font-heading: 'Inter', 'Helvetica Neue', sans-serif;"));
}

#[test]
fn css_export_is_byte_identical_across_calls() {
    let brand = load_fixture_brand();
    let a = export(
        ExportFormat::TokensCss,
        &resolve_tokens(&brand),
        &Content::empty(),
        &ExportOptions::default(),
    )
    .unwrap();
    let b = export(
        ExportFormat::TokensCss,
        &resolve_tokens(&brand),
        &Content::empty(),
        &ExportOptions::default(),
    )
    .unwrap();
    assert_eq!(a.bytes, b.bytes);
}

#[test]
fn resolution_is_pure() {
    let brand = load_fixture_brand();
    assert_eq!(resolve_tokens(&brand), resolve_tokens(&brand));
}

#[test]
fn business_card_with_empty_content_has_two_pages() {
    let brand = load_fixture_brand();
    let tokens = resolve_tokens(&brand);
    let artifact = export(
        ExportFormat::PdfBusinessCard,
        &tokens,
        &Content::empty(),
        &ExportOptions::default(),
    )
    .unwrap();
    let doc = lopdf::Document::load_mem(&artifact.bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn unknown_format_is_rejected_by_name() {
    let err = "unknown-format".parse::<ExportFormat>().unwrap_err();
    match err {
        BxError::UnsupportedFormat { format, .. } => assert_eq!(format, "unknown-format"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn complete_package_exports_every_format() {
    let brand = load_fixture_brand();
    let tokens = resolve_tokens(&brand);
    let content = load_fixture_content();
    let options = ExportOptions::default();

    for format in ExportFormat::ALL {
        let artifact = export(format, &tokens, &content, &options)
            .unwrap_or_else(|e| panic!("{} failed: {}", format, e));
        assert!(!artifact.bytes.is_empty(), "{} produced no bytes", format);
        assert!(artifact.filename.starts_with("acme-studio-"));
    }
}

#[test]
fn pptx_package_is_readable_and_branded() {
    let brand = load_fixture_brand();
    let tokens = resolve_tokens(&brand);
    let artifact = export(
        ExportFormat::Pptx,
        &tokens,
        &load_fixture_content(),
        &ExportOptions::default(),
    )
    .unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(artifact.bytes)).unwrap();
    let mut slide1 = String::new();
    std::io::Read::read_to_string(
        &mut archive.by_name("ppt/slides/slide1.xml").unwrap(),
        &mut slide1,
    )
    .unwrap();
    // Headline falls back to the brand name on the title slide.
    assert!(slide1.contains("Acme Studio"));
}

#[test]
fn contrast_report_for_black_on_white() {
    let mut brand = load_fixture_brand();
    brand.colors.text = "#000000".to_string();
    brand.colors.background = "#ffffff".to_string();
    let report = check_contrast(&brand);

    let text_check = &report.checks[0];
    assert!((text_check.ratio - 21.0).abs() < 1e-9);
    assert_eq!(format!("{}", text_check.level), "AAA");
}

#[test]
fn malformed_brand_normalizes_instead_of_failing_export() {
    let mut brand = load_fixture_brand();
    brand.colors.accent = "not-a-colour".to_string();
    let warnings = brand.normalize();
    assert_eq!(warnings.len(), 1);

    // After normalization the export pipeline runs on the documented default.
    let tokens = resolve_tokens(&brand);
    assert_eq!(tokens.colors.accent.to_hex(), "#f59e0b");
}
