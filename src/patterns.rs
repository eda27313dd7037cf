//! Compiled regex patterns for tag scanning and text processing.
//!
//! All patterns are compiled once at first use via `LazyLock`.
//! Patterns are organized by the extractor that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Markup Stripping Patterns
// =============================================================================

/// Matches HTML comments, including unterminated ones running to end of input.
pub static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|\z)").expect("COMMENT regex"));

/// Matches any tag, declaration or processing instruction.
pub static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("TAG regex"));

/// Matches a non-text block and its content.
///
/// The regex crate has no backreferences, so each block type gets its own
/// alternative.
pub static NON_TEXT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<script\b[^>]*>.*?(?:</script\s*>|\z)|<style\b[^>]*>.*?(?:</style\s*>|\z)|<noscript\b[^>]*>.*?(?:</noscript\s*>|\z)|<template\b[^>]*>.*?(?:</template\s*>|\z)",
    )
    .expect("NON_TEXT_BLOCK regex")
});

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// Document Structure Patterns
// =============================================================================

/// Matches a leading doctype declaration (after an optional XML prolog and comments).
pub static DOCTYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\A(?:\x{FEFF})?\s*(?:<\?xml[^>]*>\s*)?(?:<!--.*?-->\s*)*<!DOCTYPE\s+([^>]*)>")
        .expect("DOCTYPE regex")
});

/// Matches the opening of a deprecated presentational tag.
///
/// The trailing class consumes one delimiter so `<s>` does not match `<span>`.
pub static DEPRECATED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<(acronym|applet|basefont|big|blink|center|dir|font|frameset|frame|isindex|marquee|noframes|strike|s|tt|u)[\s/>]",
    )
    .expect("DEPRECATED_TAG regex")
});

/// Matches embedded Flash: SWF references, the shockwave MIME type or the Flash classid.
pub static FLASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<(?:object|embed|param)\b[^>]*?(?:\.swf\b|x-shockwave-flash|d27cdb6e-ae6d-11cf-96b8-444553540000)",
    )
    .expect("FLASH regex")
});

/// Matches an `@media print` rule inside inline stylesheets.
pub static MEDIA_PRINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@media[^{]*\bprint\b").expect("MEDIA_PRINT regex"));

// =============================================================================
// Text Content Patterns
// =============================================================================

/// Matches a plain-text email address.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}")
        .expect("EMAIL regex")
});

/// Matches a word token: letter/digit runs joined by inner apostrophes or hyphens.
pub static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’-][\p{L}\p{N}]+)*").expect("WORD regex")
});

/// Matches a `Sitemap:` directive line in robots.txt.
pub static ROBOTS_SITEMAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*sitemap\s*:\s*(\S+)\s*$").expect("ROBOTS_SITEMAP regex")
});
