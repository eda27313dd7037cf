//! Anchor classification.
//!
//! Every navigable `a[href]` becomes a [`Link`] tagged internal/external and
//! dofollow/nofollow. The aggregate counters are folded from the same pass.

use crate::dom::{self, Document};
use crate::facts::{Juice, Link, LinkFacts, LinkType};
use crate::url_utils::{self, Site, Target};

/// Classify every link in the document against the analyzed site.
///
/// With no parseable site, bare paths are still internal and every absolute
/// URL is external.
#[must_use]
pub fn extract(doc: &Document, site: Option<&Site>) -> LinkFacts {
    dom::each(doc, "a[href]")
        .filter_map(|anchor| {
            let href = dom::get_attribute(&anchor, "href")?;
            if !url_utils::is_navigable_href(&href) {
                return None;
            }
            let target = url_utils::resolve_href(&href, site);
            let juice = if dom::has_token(&anchor, "rel", "nofollow") {
                Juice::Nofollow
            } else {
                Juice::Dofollow
            };
            Some((target, dom::clean_text(&anchor), juice))
        })
        .fold(LinkFacts::default(), |mut facts, (target, anchor_text, juice)| {
            let link_type = classify(&target, site);

            match (link_type, juice) {
                (LinkType::Internal, _) => facts.internal_count += 1,
                (LinkType::External, Juice::Dofollow) => facts.external_dofollow_count += 1,
                (LinkType::External, Juice::Nofollow) => facts.external_nofollow_count += 1,
            }

            let path = target.path();
            facts.friendly &= !target.has_query();
            facts.has_underscore |= path.contains('_');
            if url_utils::is_file_path(path) {
                facts.file_link_count += 1;
            }

            facts.links.push(Link {
                url: target.as_string(),
                anchor_text,
                link_type,
                juice,
            });
            facts
        })
}

fn classify(target: &Target, site: Option<&Site>) -> LinkType {
    let internal = match target {
        Target::Absolute(url) => site.is_some_and(|site| site.is_same_host(url)),
        Target::BarePath(_) => true,
        Target::Opaque(_) => false,
    };
    if internal {
        LinkType::Internal
    } else {
        LinkType::External
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(html: &str, domain: &str) -> LinkFacts {
        extract(&dom::parse(html), Site::parse(domain).as_ref())
    }

    #[test]
    fn classifies_internal_and_external() {
        let facts = links(
            r#"<a href="/about">About</a>
               <a href="https://example.com/x?y=1">X</a>
               <a href="https://other.com/">Other</a>"#,
            "example.com",
        );
        assert_eq!(facts.internal_count, 2);
        assert_eq!(facts.external_dofollow_count, 1);
        assert_eq!(facts.external_nofollow_count, 0);
        assert!(!facts.friendly);
        assert_eq!(facts.links[0].url, "http://example.com/about");
        assert_eq!(facts.links[2].link_type, LinkType::External);
    }

    #[test]
    fn internal_nofollow_is_tagged_but_not_counted_as_juice() {
        let facts = links(
            r#"<a href="/login" rel="nofollow">Login</a>
               <a href="https://ads.example.net/" rel="sponsored NOFOLLOW">Ad</a>"#,
            "example.com",
        );
        assert_eq!(facts.links[0].juice, Juice::Nofollow);
        assert_eq!(facts.internal_count, 1);
        assert_eq!(facts.external_nofollow_count, 1);
        assert_eq!(facts.external_dofollow_count, 0);
    }

    #[test]
    fn www_and_case_are_ignored_in_host_comparison() {
        let facts = links(
            r#"<a href="https://WWW.Example.com/a">A</a><a href="//example.com/b">B</a>"#,
            "www.example.com",
        );
        assert_eq!(facts.internal_count, 2);
    }

    #[test]
    fn idn_domain_matches_punycode_links() {
        let facts = links(r#"<a href="https://xn--bcher-kva.de/shop">Shop</a>"#, "bücher.de");
        assert_eq!(facts.internal_count, 1);
    }

    #[test]
    fn skips_non_navigable_hrefs() {
        let facts = links(
            r##"<a href="#top">Top</a><a href="javascript:void(0)">JS</a>
                <a href="mailto:a@b.c">Mail</a><a href="">Empty</a><a>No href</a>"##,
            "example.com",
        );
        assert!(facts.links.is_empty());
        assert!(facts.friendly);
    }

    #[test]
    fn underscore_and_file_links() {
        let facts = links(
            r#"<a href="/files/annual_report.PDF">Report</a><a href="/docs/guide.docx"></a><a href="/page.html">Page</a>"#,
            "example.com",
        );
        assert!(facts.has_underscore);
        assert_eq!(facts.file_link_count, 2);
        assert_eq!(facts.links[1].anchor_text, "");
    }

    #[test]
    fn anchor_text_is_decoded() {
        let facts = links(r#"<a href="/a">Fish &amp; <b>Chips</b></a>"#, "example.com");
        assert_eq!(facts.links[0].anchor_text, "Fish & Chips");
    }

    #[test]
    fn unknown_site_keeps_bare_paths_internal() {
        let facts = links(r#"<a href="/a">A</a><a href="https://example.com/">B</a>"#, "");
        assert_eq!(facts.internal_count, 1);
        assert_eq!(facts.external_dofollow_count, 1);
        assert_eq!(facts.links[0].url, "/a");
    }

    #[test]
    fn fragment_is_not_a_query() {
        let facts = links(r#"<a href="/a#section?x">A</a>"#, "example.com");
        assert!(facts.friendly);
        assert_eq!(facts.links[0].url, "http://example.com/a");
    }
}
