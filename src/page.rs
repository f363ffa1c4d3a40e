//! Page-content envelope
//!
//! The browser side extracts a few regions of a page (title, meta
//! description, first heading, main content) and hands them over as plain
//! text. This module trims those regions and condenses the main content into
//! a short summary. DOM access stays with the caller; [`select_main_content`]
//! only encodes which regions to prefer.

use serde::{Deserialize, Serialize};

use crate::pipeline::runner::Summarizer;

/// Selectors tried for the main content region, most specific first
pub const MAIN_CONTENT_SELECTORS: [&str; 7] = [
    "article",
    "main",
    "#content",
    ".content",
    ".post-content",
    ".entry-content",
    ".article-content",
];

/// Region used when none of [`MAIN_CONTENT_SELECTORS`] matches
pub const FALLBACK_CONTENT_SELECTOR: &str = "body";

/// All content selectors in the order they should be tried
pub fn main_content_selectors() -> impl Iterator<Item = &'static str> {
    MAIN_CONTENT_SELECTORS
        .into_iter()
        .chain(std::iter::once(FALLBACK_CONTENT_SELECTOR))
}

/// Pick the main content text using `lookup`, which returns the text of the
/// first element matching a selector (or `None` if nothing matches).
///
/// The first selector that matches wins, even if its text is blank.
pub fn select_main_content<F>(mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    main_content_selectors()
        .find_map(|selector| lookup(selector))
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Raw text regions extracted from a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRegions {
    pub url: String,
    pub title: String,
    pub meta_description: String,
    pub h1: String,
    pub main_content: String,
}

/// Page content as sent to the UI, with the main content summarized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub url: String,
    pub title: String,
    pub meta_description: String,
    pub h1: String,
    pub main_content: String,
}

impl PageContent {
    /// Trim every region and summarize the main content with `summarizer`
    pub fn from_regions(regions: PageRegions, summarizer: &Summarizer) -> Self {
        let main_content = summarizer.summarize(regions.main_content.trim());
        Self {
            url: regions.url,
            title: regions.title.trim().to_string(),
            meta_description: regions.meta_description.trim().to_string(),
            h1: regions.h1.trim().to_string(),
            main_content,
        }
    }

    /// Summarize with the page profile (5 sentences, 10000-character cap)
    pub fn summarize_page(regions: PageRegions) -> Self {
        Self::from_regions(regions, &Summarizer::page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::splitter::split_sentences;

    fn long_body(count: usize) -> String {
        (0..count)
            .map(|i| format!("Paragraph {i} describes the harbor, the ships and the weather today."))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_selector_order() {
        let selectors: Vec<_> = main_content_selectors().collect();

        assert_eq!(selectors.first(), Some(&"article"));
        assert_eq!(selectors.last(), Some(&"body"));
        assert_eq!(selectors.len(), 8);
    }

    #[test]
    fn test_select_main_content_prefers_earlier_selector() {
        let text = select_main_content(|selector| match selector {
            "main" => Some("  main text ".to_string()),
            ".content" => Some("content text".to_string()),
            "body" => Some("body text".to_string()),
            _ => None,
        });

        assert_eq!(text, "main text");
    }

    #[test]
    fn test_select_main_content_falls_back_to_body() {
        let text = select_main_content(|selector| {
            (selector == "body").then(|| "whole page".to_string())
        });

        assert_eq!(text, "whole page");
    }

    #[test]
    fn test_select_main_content_nothing_found() {
        assert_eq!(select_main_content(|_| None), "");
    }

    #[test]
    fn test_from_regions_trims_and_keeps_short_content() {
        let regions = PageRegions {
            url: "https://example.com/a".to_string(),
            title: "  Title \n".to_string(),
            meta_description: " desc ".to_string(),
            h1: "Heading".to_string(),
            main_content: "  A short article.  ".to_string(),
        };

        let content = PageContent::summarize_page(regions);

        assert_eq!(content.title, "Title");
        assert_eq!(content.meta_description, "desc");
        assert_eq!(content.main_content, "A short article.");
    }

    #[test]
    fn test_long_content_summarized_to_five_sentences() {
        let regions = PageRegions {
            main_content: long_body(30),
            ..PageRegions::default()
        };

        let content = PageContent::summarize_page(regions);

        assert_eq!(split_sentences(&content.main_content).len(), 5);
    }

    #[test]
    fn test_serializes_camel_case() {
        let content = PageContent {
            meta_description: "d".to_string(),
            main_content: "m".to_string(),
            ..PageContent::default()
        };
        let json = serde_json::to_value(&content).unwrap();

        assert_eq!(json["metaDescription"], "d");
        assert_eq!(json["mainContent"], "m");
    }
}
