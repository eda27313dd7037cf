//! Analytics and tag-manager detection from script sources and inline
//! snippets.

#![allow(clippy::expect_used)]

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A recognised analytics provider. Serialized as its snake_case id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsProvider {
    GoogleAnalytics,
    GoogleTagManager,
    YandexMetrica,
    Matomo,
    Clicky,
    Hotjar,
    FacebookPixel,
    Plausible,
    CloudflareInsights,
    Mixpanel,
    BaiduTongji,
    Statcounter,
    Quantcast,
}

impl AnalyticsProvider {
    /// Stable identifier, identical to the serialized form.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::GoogleAnalytics => "google_analytics",
            Self::GoogleTagManager => "google_tag_manager",
            Self::YandexMetrica => "yandex_metrica",
            Self::Matomo => "matomo",
            Self::Clicky => "clicky",
            Self::Hotjar => "hotjar",
            Self::FacebookPixel => "facebook_pixel",
            Self::Plausible => "plausible",
            Self::CloudflareInsights => "cloudflare_insights",
            Self::Mixpanel => "mixpanel",
            Self::BaiduTongji => "baidu_tongji",
            Self::Statcounter => "statcounter",
            Self::Quantcast => "quantcast",
        }
    }
}

impl fmt::Display for AnalyticsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Provider signatures, matched case-insensitively against the raw markup.
static SIGNATURES: LazyLock<Vec<(AnalyticsProvider, Regex)>> = LazyLock::new(|| {
    [
        (
            AnalyticsProvider::GoogleAnalytics,
            r"google-analytics\.com/(?:ga|analytics|urchin)\.js|googletagmanager\.com/gtag/js|\bga\(\s*['\x22]create['\x22]|\bgtag\(\s*['\x22]config['\x22]\s*,\s*['\x22](?:UA|G)-",
        ),
        (
            AnalyticsProvider::GoogleTagManager,
            r"googletagmanager\.com/(?:gtm\.js|ns\.html)|['\x22]GTM-[A-Z0-9]+['\x22]",
        ),
        (AnalyticsProvider::YandexMetrica, r"mc\.yandex\.ru/metrika|\bym\(\s*\d+\s*,\s*['\x22]init['\x22]"),
        (AnalyticsProvider::Matomo, r"matomo\.(?:js|php)|piwik\.(?:js|php)|\b_paq\.push\("),
        (AnalyticsProvider::Clicky, r"static\.getclicky\.com|\bclicky_site_ids\b"),
        (AnalyticsProvider::Hotjar, r"static\.hotjar\.com|\b_hjSettings\b"),
        (AnalyticsProvider::FacebookPixel, r"connect\.facebook\.net/[^'\x22]*/fbevents\.js|\bfbq\(\s*['\x22]init['\x22]"),
        (AnalyticsProvider::Plausible, r"plausible\.io/js/"),
        (AnalyticsProvider::CloudflareInsights, r"static\.cloudflareinsights\.com/beacon"),
        (AnalyticsProvider::Mixpanel, r"cdn\.mxpnl\.com|cdn4\.mxpnl\.com|\bmixpanel\.init\("),
        (AnalyticsProvider::BaiduTongji, r"hm\.baidu\.com/hm\.js"),
        (AnalyticsProvider::Statcounter, r"statcounter\.com/counter/counter|\bsc_project\b"),
        (AnalyticsProvider::Quantcast, r"quantserve\.com/quant\.js|\b_qevents\b"),
    ]
    .into_iter()
    .map(|(provider, pattern)| {
        let regex = Regex::new(&format!("(?i){pattern}")).expect("analytics signature regex");
        (provider, regex)
    })
    .collect()
});

/// Providers whose signature appears anywhere in the markup.
#[must_use]
pub fn detect(html: &str) -> BTreeSet<AnalyticsProvider> {
    SIGNATURES
        .iter()
        .filter(|(_, regex)| regex.is_match(html))
        .map(|(provider, _)| *provider)
        .collect()
}
