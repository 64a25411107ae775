//! Sitemap generation for the catalog.

use std::borrow::Cow;
use std::fmt::Write;

use crate::catalog::Catalog;

const URLSET_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build a sitemap XML document with one `<url>` entry per catalog
/// record, in storage order.
///
/// Each location is `{base_url}/video/{id}`; `base_url` must not carry a
/// trailing slash (enforced by config validation). Purely derived from
/// the catalog and deterministic.
pub fn build_sitemap(base_url: &str, catalog: &Catalog) -> String {
    let mut xml = String::with_capacity(128 + catalog.len() * 160);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = write!(xml, "<urlset xmlns=\"{}\">", URLSET_XMLNS);

    for record in catalog.records() {
        let _ = write!(
            xml,
            "\n\t<url>\n\t\t<loc>{}/video/{}</loc>\n\t\t<changefreq>daily</changefreq>\n\t\t<priority>0.8</priority>\n\t</url>",
            base_url,
            xml_escape(&record.id),
        );
    }

    xml.push_str("\n</urlset>");
    xml
}

/// Minimal escaping for XML text content.
fn xml_escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }

    let mut escaped = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoRecord;

    fn record(id: &str, title: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            title: title.to_string(),
            total_duration_seconds: 0,
            segments: Vec::new(),
            thumbnail_url: String::new(),
        }
    }

    #[test]
    fn test_one_url_entry_per_record_in_storage_order() {
        let catalog = Catalog::from_records(vec![
            record("a1", "Cats"),
            record("a2", "Dogs"),
        ]);
        let xml = build_sitemap("https://example.com", &catalog);

        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://example.com/video/a1</loc>"));
        assert!(xml.contains("<loc>https://example.com/video/a2</loc>"));

        let first = xml.find("/video/a1").unwrap();
        let second = xml.find("/video/a2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_document_envelope() {
        let catalog = Catalog::from_records(vec![record("a1", "Cats")]);
        let xml = build_sitemap("https://example.com", &catalog);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.ends_with("</urlset>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
    }

    #[test]
    fn test_empty_catalog_yields_empty_urlset() {
        let catalog = Catalog::from_records(Vec::new());
        let xml = build_sitemap("https://example.com", &catalog);

        assert!(!xml.contains("<url>"));
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn test_ids_are_xml_escaped() {
        let catalog = Catalog::from_records(vec![record("a&b<c>", "Odd Id")]);
        let xml = build_sitemap("https://example.com", &catalog);

        assert!(xml.contains("<loc>https://example.com/video/a&amp;b&lt;c&gt;</loc>"));
        assert!(!xml.contains("a&b<c>"));
    }
}
