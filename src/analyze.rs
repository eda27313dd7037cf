//! Analysis pipeline: runs every extractor and assembles the fact set.

use tracing::{debug, instrument};

use crate::dom;
use crate::extractor::{analytics, document, favicon, flags, headings, images, links, meta, optimization};
use crate::facts::{ContentFacts, DocumentFacts, FactSet, Flags, MetaFacts, OptimizationFacts};
use crate::http::{self, HttpFetcher};
use crate::keywords::{cloud, consistency, stopwords};
use crate::options::AnalyzeOptions;
use crate::url_utils::Site;
use crate::w3c::{W3cSummary, W3cValidator};

/// Offline analysis. Network-backed facts keep their absent defaults.
#[instrument(skip_all, fields(domain = %domain, bytes = html.len()))]
pub(crate) fn analyze(html: &str, domain: &str, options: &AnalyzeOptions) -> FactSet {
    let site = Site::parse(domain);
    if site.is_none() {
        debug!("domain not parseable, absolute links are classified external");
    }

    let doc = dom::parse(html);

    let meta = meta::extract(&doc, html);
    let document = document::extract(&doc, html);
    let headings = headings::extract(&doc);
    let images = images::extract(&doc);
    let links = links::extract(&doc, site.as_ref());
    let visible_text = dom::visible_text(&doc);
    let markup = flags::extract(&doc, html, &visible_text);
    let favicon = favicon::from_html(&doc, site.as_ref());

    let meta_facts = MetaFacts {
        title: meta.title,
        description: meta.description,
        keywords: meta.keywords,
        og_properties: meta.og_properties,
    };

    let language = options.stop_word_language(&document.lang);
    let keyword_cloud = cloud::build(
        &visible_text,
        stopwords::for_language(&language),
        options.cloud_size,
        options.min_word_length,
    );
    let consistency_matrix = consistency::build(&keyword_cloud, &meta_facts, &headings, options.consistency_count);

    debug!(
        links = links.links.len(),
        images = images.total,
        words = keyword_cloud.len(),
        %language,
        "page extracted"
    );

    FactSet {
        meta: meta_facts,
        document: DocumentFacts {
            doctype: document.doctype,
            lang: document.lang,
            charset: meta.charset,
            css_count: document.css_count,
            js_count: document.js_count,
            html_ratio: document.html_ratio,
            favicon,
            deprecated_tags: document.deprecated_tags,
        },
        content: ContentFacts {
            has_headings: !headings.h1.is_empty(),
            headings,
            total_images: images.total,
            total_images_with_alt: images.with_alt,
            images_missing_alt: images.missing_alt,
        },
        links,
        flags: Flags {
            flash: markup.flash,
            iframe: markup.iframe,
            nested_tables: markup.nested_tables,
            inline_css: markup.inline_css,
            plain_email: markup.plain_email,
            viewport: meta.viewport,
            dublin_core: meta.dublin_core,
            apple_icon: document.apple_icon,
            printable: document.printable,
            robots_txt: false,
            gzip: false,
        },
        optimization: OptimizationFacts::default(),
        analytics: analytics::detect(html),
        w3c: W3cSummary::default(),
        keyword_cloud,
        consistency_matrix,
    }
}

/// Offline analysis plus the favicon fallback, site checks and markup
/// validation, run concurrently.
///
/// The parsed document is dropped before the first await. Request failures
/// leave the affected facts at their absent defaults.
#[instrument(skip_all, fields(domain = %domain))]
pub(crate) async fn analyze_online(
    html: &str,
    domain: &str,
    options: &AnalyzeOptions,
    fetcher: &dyn HttpFetcher,
    validator: Option<&dyn W3cValidator>,
) -> FactSet {
    let facts = analyze(html, domain, options);

    let Some(site) = Site::parse(domain) else {
        debug!("domain not parseable, checks skipped");
        return facts;
    };
    let timeout = options.request_timeout;
    let needs_favicon = facts.document.favicon.is_empty();
    let page_url = site.origin.to_string();

    let favicon_check = async {
        if needs_favicon {
            favicon::check(fetcher, &site, timeout).await
        } else {
            None
        }
    };
    let validation = async {
        match validator {
            Some(validator) => validate(validator, &page_url, timeout).await,
            None => W3cSummary::default(),
        }
    };

    let (fetched_favicon, report, w3c) =
        tokio::join!(favicon_check, optimization::check(fetcher, &site, timeout), validation);

    debug!(
        robots_txt = report.robots_txt,
        sitemaps = report.sitemap_urls.len(),
        gzip = report.gzip,
        w3c_errors = w3c.errors,
        "checks finished"
    );

    FactSet {
        document: DocumentFacts {
            favicon: fetched_favicon.unwrap_or(facts.document.favicon),
            ..facts.document
        },
        flags: Flags {
            robots_txt: report.robots_txt,
            gzip: report.gzip,
            ..facts.flags
        },
        optimization: OptimizationFacts {
            sitemap_urls: report.sitemap_urls,
        },
        w3c,
        ..facts
    }
}

async fn validate(validator: &dyn W3cValidator, url: &str, timeout: std::time::Duration) -> W3cSummary {
    match http::bounded(timeout, validator.validate(url)).await {
        Ok(response) => W3cSummary::from_response(&response),
        Err(e) => {
            debug!(%url, error = %e, "markup validation unavailable");
            W3cSummary::default()
        }
    }
}
