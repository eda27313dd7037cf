use std::time::Duration;

use rs_seo_audit::{analyze, AnalyzeOptions};

const GERMAN: &str = r#"<html lang="de-AT"><head><title>Frischer Fisch</title></head>
<body><h1>Fisch</h1><p>Der Fisch und der Markt. Der Fisch ist frisch und der Markt ist offen.</p></body></html>"#;

fn words(html: &str, options: &AnalyzeOptions) -> Vec<String> {
    analyze(html, "example.com", options).keyword_cloud.keys().cloned().collect()
}

#[test]
fn defaults() {
    let options = AnalyzeOptions::default();
    assert_eq!(options.language, None);
    assert_eq!(options.cloud_size, 10);
    assert_eq!(options.consistency_count, 5);
    assert_eq!(options.min_word_length, 3);
    assert_eq!(options.request_timeout, Duration::from_secs(10));
}

#[test]
fn document_language_selects_stop_words() {
    let words = words(GERMAN, &AnalyzeOptions::default());
    assert_eq!(words[0], "fisch");
    assert!(!words.contains(&"der".to_string()));
    assert!(!words.contains(&"und".to_string()));
}

#[test]
fn language_override_wins() {
    let options = AnalyzeOptions {
        language: Some("en".to_string()),
        ..AnalyzeOptions::default()
    };
    let words = words(GERMAN, &options);
    // "der" is not an English stop word.
    assert!(words.contains(&"der".to_string()));
}

#[test]
fn cloud_size_bounds_the_cloud() {
    let html = "<p>alpha alpha alpha bravo bravo charlie delta echo</p>";
    let options = AnalyzeOptions {
        cloud_size: 2,
        ..AnalyzeOptions::default()
    };
    assert_eq!(words(html, &options), vec!["alpha", "bravo"]);
}

#[test]
fn consistency_count_bounds_the_matrix() {
    let html = "<p>alpha alpha alpha bravo bravo charlie delta echo</p>";
    let options = AnalyzeOptions {
        consistency_count: 2,
        ..AnalyzeOptions::default()
    };
    let facts = analyze(html, "example.com", &options);
    assert_eq!(facts.keyword_cloud.len(), 5);
    assert_eq!(facts.consistency_matrix.len(), 2);

    let none = AnalyzeOptions {
        consistency_count: 0,
        ..AnalyzeOptions::default()
    };
    assert!(analyze(html, "example.com", &none).consistency_matrix.is_empty());
}

#[test]
fn min_word_length_filters_tokens() {
    let html = "<p>seo seo seo audit audit</p>";
    assert_eq!(words(html, &AnalyzeOptions::default()), vec!["seo", "audit"]);

    let options = AnalyzeOptions {
        min_word_length: 4,
        ..AnalyzeOptions::default()
    };
    assert_eq!(words(html, &options), vec!["audit"]);
}
