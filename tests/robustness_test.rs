use std::time::{Duration, Instant};

use rs_seo_audit::facts::LinkType;
use rs_seo_audit::{analyze, score, AnalyzeOptions, FactSet, RateTable};

fn facts(html: &str) -> FactSet {
    analyze(html, "example.com", &AnalyzeOptions::default())
}

#[test]
fn empty_document_yields_zero_valued_facts() {
    let facts = facts("");

    assert_eq!(facts.meta.title, "");
    assert_eq!(facts.meta.description, "");
    assert!(facts.meta.og_properties.is_empty());
    assert_eq!(facts.document.doctype, "");
    assert_eq!(facts.document.css_count, 0);
    assert_eq!(facts.document.html_ratio, 0.0);
    assert_eq!(facts.content.total_images, 0);
    assert!(!facts.content.has_headings);
    assert!(facts.links.links.is_empty());
    assert!(facts.links.friendly);
    assert!(facts.analytics.is_empty());
    assert!(facts.keyword_cloud.is_empty());
    assert!(facts.consistency_matrix.is_empty());
}

#[test]
fn whitespace_document_scores_without_error() {
    let facts = facts("   \n\t  ");
    assert!(facts.keyword_cloud.is_empty());

    let breakdown = score(&facts, &RateTable::default()).expect("score");
    assert!(breakdown.total >= 0.0 && breakdown.total <= 100.0);
}

#[test]
fn unclosed_tags_are_recovered() {
    let facts = facts("<html><head><title>Shop<body><h1>Sale<p>Cheap shoes <a href=/shoes>shoes");

    assert!(facts.links.links.len() <= 1);
    assert!(facts.content.has_headings || facts.meta.title.contains("Shop"));
}

#[test]
fn broken_attributes_do_not_panic() {
    let html = r#"<a href="/x class=broken>text</a><img src=><img alt="a" src="b.png"<meta name=description content="x>"#;
    let facts = facts(html);
    assert!(facts.content.total_images <= 2);
}

#[test]
fn unparseable_domain_treats_absolute_links_as_external() {
    let html = r#"<a href="/about">About</a><a href="https://example.com/">Home</a>"#;
    let facts = analyze(html, "", &AnalyzeOptions::default());

    assert_eq!(facts.links.internal_count, 1);
    assert_eq!(facts.links.links[1].link_type, LinkType::External);
    assert_eq!(facts.links.external_dofollow_count, 1);
}

#[test]
fn garbage_domain_does_not_panic() {
    for domain in ["::::", "http://", "mailto:someone@example.com", "  "] {
        let facts = analyze(r#"<a href="/a">a</a>"#, domain, &AnalyzeOptions::default());
        assert_eq!(facts.links.links.len(), 1, "domain {domain:?}");
    }
}

#[test]
fn binary_noise_does_not_panic() {
    let noise: String = (0u8..=255).map(char::from).cycle().take(4096).collect();
    let facts = facts(&noise);
    assert!(facts.keyword_cloud.len() <= 10);
}

#[test]
fn deeply_nested_markup_completes() {
    let depth = 500;
    let html = format!("{}<p>deep deep deep</p>{}", "<div>".repeat(depth), "</div>".repeat(depth));

    let started = Instant::now();
    let facts = facts(&html);
    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(facts.keyword_cloud.get(&"deep".to_string()).map(|e| e.count), Some(3));
}

#[test]
fn large_document_completes_in_reasonable_time() {
    let paragraph = r#"<p>Fresh fish from the <a href="/market">market</a>, every morning.</p>"#;
    let html = format!("<html><body>{}</body></html>", paragraph.repeat(5000));

    let started = Instant::now();
    let facts = facts(&html);
    assert!(started.elapsed() < Duration::from_secs(30));
    assert_eq!(facts.links.internal_count, 5000);
}
