use rs_seo_audit::{analyze_bytes, AnalyzeOptions};

#[test]
fn utf8_content_is_kept() {
    let html = "<html><head><meta charset=\"utf-8\"><title>Crème brûlée, 中文</title></head></html>".as_bytes();
    let facts = analyze_bytes(html, "example.com", &AnalyzeOptions::default());

    assert_eq!(facts.meta.title, "Crème brûlée, 中文");
    assert_eq!(facts.document.charset, "utf-8");
}

#[test]
fn latin1_is_transcoded() {
    let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9 M\xFCller</title>\
        <meta name=\"description\" content=\"Fran\xE7ais\"></head></html>";
    let facts = analyze_bytes(html, "example.com", &AnalyzeOptions::default());

    assert_eq!(facts.meta.title, "Café Müller");
    assert_eq!(facts.meta.description, "Français");
    assert_eq!(facts.document.charset, "ISO-8859-1");
}

#[test]
fn windows_1252_via_http_equiv() {
    let html = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\">\
        <title>\x93Quoted\x94 \x80 price</title></head></html>";
    let facts = analyze_bytes(html, "example.com", &AnalyzeOptions::default());

    assert_eq!(facts.meta.title, "\u{201c}Quoted\u{201d} \u{20ac} price");
    assert_eq!(facts.document.charset, "windows-1252");
}

#[test]
fn undeclared_encoding_defaults_to_utf8() {
    let facts = analyze_bytes("<title>Ärger</title>".as_bytes(), "example.com", &AnalyzeOptions::default());
    assert_eq!(facts.meta.title, "Ärger");
    assert_eq!(facts.document.charset, "");
}

#[test]
fn invalid_bytes_are_replaced() {
    let html = b"<html><head><meta charset=\"utf-8\"><title>Bad \xFF\xFE byte</title></head></html>";
    let facts = analyze_bytes(html, "example.com", &AnalyzeOptions::default());
    assert!(facts.meta.title.contains('\u{FFFD}'));
    assert!(facts.meta.title.starts_with("Bad"));
}

#[test]
fn title_length_counts_transcoded_characters() {
    let html = b"<meta charset=\"latin1\"><title>\xE9\xE9\xE9</title>";
    let facts = analyze_bytes(html, "example.com", &AnalyzeOptions::default());
    assert_eq!(facts.meta.title.chars().count(), 3);
}
