use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use pretty_assertions::assert_eq;
use syllable_harvester::{inflate_if_gzip, parse_loc_entries, SitemapError};

const INDEX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap><loc>http://example.com/sitemaps/a.xml.gz</loc></sitemap>
  <sitemap>
    <loc>
      http://example.com/sitemaps/b.xml.gz
    </loc>
    <lastmod>2016-01-01</lastmod>
  </sitemap>
</sitemapindex>"#;

#[test]
fn loc_entries_are_listed_in_order_and_trimmed() {
    let entries = parse_loc_entries(INDEX.as_bytes()).unwrap();
    assert_eq!(
        entries,
        vec![
            "http://example.com/sitemaps/a.xml.gz",
            "http://example.com/sitemaps/b.xml.gz",
        ]
    );
}

#[test]
fn escaped_and_cdata_locations_are_decoded() {
    let xml = r#"<urlset>
        <url><loc>http://example.com/browse?a=1&amp;b=2</loc></url>
        <url><loc><![CDATA[http://example.com/browse/ka]]></loc></url>
    </urlset>"#;
    let entries = parse_loc_entries(xml.as_bytes()).unwrap();
    assert_eq!(
        entries,
        vec![
            "http://example.com/browse?a=1&b=2",
            "http://example.com/browse/ka",
        ]
    );
}

#[test]
fn namespaced_loc_is_recognised() {
    let xml = r#"<s:urlset xmlns:s="http://www.sitemaps.org/schemas/sitemap/0.9"><s:url><s:loc>http://example.com/x</s:loc></s:url></s:urlset>"#;
    assert_eq!(
        parse_loc_entries(xml.as_bytes()).unwrap(),
        vec!["http://example.com/x"]
    );
}

#[test]
fn empty_urlset_has_no_entries() {
    assert!(parse_loc_entries(b"<urlset></urlset>").unwrap().is_empty());
}

#[test]
fn mismatched_tags_are_a_parse_failure() {
    let err = parse_loc_entries(b"<urlset><url><loc>http://x</url></urlset>").unwrap_err();
    assert!(matches!(err, SitemapError::Xml(_)));
}

#[test]
fn gzip_sitemaps_are_inflated() {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(INDEX.as_bytes()).unwrap();
    let compressed = encoder.finish().unwrap();

    let inflated = inflate_if_gzip(&compressed).unwrap();
    assert_eq!(inflated.as_ref(), INDEX.as_bytes());
    assert_eq!(parse_loc_entries(&inflated).unwrap().len(), 2);
}
