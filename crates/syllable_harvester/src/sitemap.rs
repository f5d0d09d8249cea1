use std::borrow::Cow;
use std::io::Read;

use flate2::read::GzDecoder;
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SitemapError {
    #[error("robots.txt does not reference a sitemap")]
    MissingSitemap,
    #[error("gzip decompression failed: {0}")]
    Decompress(String),
    #[error("malformed sitemap xml: {0}")]
    Xml(String),
}

/// First absolute URL on the first robots.txt line that mentions a sitemap.
pub fn find_sitemap_url(robots_txt: &str) -> Option<String> {
    robots_txt
        .lines()
        .filter(|line| line.to_ascii_lowercase().contains("sitemap"))
        .find_map(|line| {
            let start = [line.find("http://"), line.find("https://")]
                .into_iter()
                .flatten()
                .min()?;
            line[start..].split_whitespace().next().map(str::to_string)
        })
}

/// Sitemaps may be served gzip-compressed without a Content-Encoding
/// header; detect that from the magic bytes.
pub fn inflate_if_gzip(bytes: &[u8]) -> Result<Cow<'_, [u8]>, SitemapError> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(Cow::Borrowed(bytes));
    }
    let mut decoder = GzDecoder::new(bytes);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(|err| SitemapError::Decompress(err.to_string()))?;
    Ok(Cow::Owned(inflated))
}

/// Text of every `<loc>` element, in document order.
pub fn parse_loc_entries(xml: &[u8]) -> Result<Vec<String>, SitemapError> {
    let mut reader = Reader::from_reader(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut entries = Vec::new();
    let mut current: Option<String> = None;
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(tag)) if tag.local_name().as_ref() == b"loc" => {
                current = Some(String::new());
            }
            Ok(Event::Text(text)) => {
                if let Some(loc) = current.as_mut() {
                    let unescaped = text
                        .unescape()
                        .map_err(|err| SitemapError::Xml(err.to_string()))?;
                    loc.push_str(&unescaped);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(loc) = current.as_mut() {
                    loc.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Ok(Event::End(tag)) if tag.local_name().as_ref() == b"loc" => {
                if let Some(loc) = current.take() {
                    let loc = loc.trim();
                    if !loc.is_empty() {
                        entries.push(loc.to_string());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(SitemapError::Xml(format!(
                    "at byte {}: {}",
                    reader.buffer_position(),
                    err
                )))
            }
        }
        buf.clear();
    }

    if current.is_some() {
        return Err(SitemapError::Xml("unterminated <loc> element".into()));
    }
    Ok(entries)
}
