use std::time::Duration;

use engine_logging::{engine_debug, engine_error, engine_info, engine_warn};
use rand::Rng;
use syllable_core::extract_syllables;
use url::Url;

use crate::{
    decode_text, find_sitemap_url, inflate_if_gzip, parse_loc_entries, FetchOutput, Fetcher,
    HarvestFailure, HarvestOutcome, HarvestSession, HarvestSettings, PageErrorPolicy,
    SitemapError, SyllableStoreWriter,
};

/// Where a run stopped before reaching the end of the sitemap.
enum Halt {
    Cancelled,
    Failed(HarvestFailure),
}

impl From<HarvestFailure> for Halt {
    fn from(failure: HarvestFailure) -> Self {
        Halt::Failed(failure)
    }
}

/// Run one harvest to completion, cancellation or failure.
///
/// Rebuilds the website store from scratch. Every failure is logged and
/// recorded in the session; nothing is propagated to the caller. The
/// session is no longer running when this returns.
pub async fn run_harvest(
    fetcher: &dyn Fetcher,
    settings: &HarvestSettings,
    session: &HarvestSession,
) -> HarvestOutcome {
    engine_info!(
        "Harvest started: site={} page_limit={}",
        settings.site_url,
        session.page_limit()
    );

    let store_path = settings.website_store_path();
    let outcome = match SyllableStoreWriter::create(&store_path) {
        Ok(mut writer) => {
            let halted = harvest_into(fetcher, settings, session, &mut writer).await;
            let closed = writer.finish();
            match (halted, closed) {
                (Err(Halt::Failed(failure)), _) => HarvestOutcome::Failed(failure),
                (_, Err(err)) => HarvestOutcome::Failed(HarvestFailure::Store(err.to_string())),
                (Err(Halt::Cancelled), Ok(_)) => HarvestOutcome::Cancelled,
                (Ok(()), Ok(_)) => HarvestOutcome::Completed,
            }
        }
        Err(err) => HarvestOutcome::Failed(HarvestFailure::Store(err.to_string())),
    };

    let progress = session.snapshot();
    match &outcome {
        HarvestOutcome::Completed => engine_info!(
            "Harvest complete: {}/{} pages read, {} syllables, {} pages in dictionary",
            progress.pages_read,
            progress.page_limit,
            progress.syllables_found,
            progress.total_pages_discovered
        ),
        HarvestOutcome::Cancelled => engine_info!(
            "Harvest stopped by request after {} pages, {} syllables",
            progress.pages_read,
            progress.syllables_found
        ),
        HarvestOutcome::Failed(failure) => engine_error!(
            "Harvest aborted after {} pages: {}",
            progress.pages_read,
            failure
        ),
    }

    session.finish(outcome.clone());
    outcome
}

async fn harvest_into(
    fetcher: &dyn Fetcher,
    settings: &HarvestSettings,
    session: &HarvestSession,
    writer: &mut SyllableStoreWriter,
) -> Result<(), Halt> {
    check_stop(session)?;

    let robots_url = robots_url(&settings.site_url)?;
    let robots = fetch(fetcher, &robots_url).await?;
    let robots_text = decode_text(&robots.bytes, robots.metadata.content_type.as_deref()).text;
    let sitemap_url = find_sitemap_url(&robots_text).ok_or_else(|| HarvestFailure::Sitemap {
        url: robots_url.clone(),
        source: SitemapError::MissingSitemap,
    })?;
    engine_info!("Resolved sitemap {}", sitemap_url);

    let nested_sitemaps = fetch_loc_entries(fetcher, &sitemap_url).await?;
    engine_debug!("Root sitemap lists {} nested sitemaps", nested_sitemaps.len());

    for nested in &nested_sitemaps {
        check_stop(session)?;
        let pages = fetch_loc_entries(fetcher, nested).await?;
        session.add_discovered(pages.len() as u64);
    }
    engine_info!(
        "Dictionary lists {} pages",
        session.total_pages_discovered()
    );

    let page_limit = session.page_limit();
    for nested in &nested_sitemaps {
        check_stop(session)?;
        if session.pages_read() >= page_limit {
            return Ok(());
        }
        let pages = fetch_loc_entries(fetcher, nested).await?;
        for page_url in &pages {
            check_stop(session)?;
            if session.pages_read() >= page_limit {
                return Ok(());
            }
            harvest_page(fetcher, settings, session, writer, page_url).await?;
        }
    }
    Ok(())
}

/// A stop request that arrives during the courtesy delay skips the page.
async fn harvest_page(
    fetcher: &dyn Fetcher,
    settings: &HarvestSettings,
    session: &HarvestSession,
    writer: &mut SyllableStoreWriter,
    page_url: &str,
) -> Result<(), Halt> {
    let cancel = session.cancellation_token();
    tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(Halt::Cancelled),
        _ = tokio::time::sleep(courtesy_delay(settings.courtesy_delay)) => {}
    }

    let page = match fetch(fetcher, page_url).await {
        Ok(page) => page,
        Err(failure) if settings.page_error_policy == PageErrorPolicy::Skip => {
            engine_warn!("Skipping page: {}", failure);
            session.record_page_read();
            return Ok(());
        }
        Err(failure) => return Err(failure.into()),
    };

    let decoded = decode_text(&page.bytes, page.metadata.content_type.as_deref());
    if decoded.had_errors {
        engine_debug!(
            "Page {} had malformed {} sequences",
            page_url,
            decoded.encoding_label
        );
    }

    let syllables = extract_syllables(&decoded.text);
    for syllable in &syllables {
        writer
            .append(syllable)
            .map_err(|err| HarvestFailure::Store(err.to_string()))?;
        session.record_syllable();
    }
    session.record_page_read();
    engine_debug!("Page {} yielded {} syllables", page_url, syllables.len());
    Ok(())
}

fn check_stop(session: &HarvestSession) -> Result<(), Halt> {
    if session.is_stop_requested() {
        Err(Halt::Cancelled)
    } else {
        Ok(())
    }
}

fn robots_url(site_url: &str) -> Result<String, HarvestFailure> {
    let invalid = |message: String| HarvestFailure::InvalidSite {
        url: site_url.to_string(),
        message,
    };
    let site = Url::parse(site_url).map_err(|err| invalid(err.to_string()))?;
    let robots = site
        .join("/robots.txt")
        .map_err(|err| invalid(err.to_string()))?;
    Ok(robots.to_string())
}

async fn fetch(fetcher: &dyn Fetcher, url: &str) -> Result<FetchOutput, HarvestFailure> {
    fetcher
        .fetch(url)
        .await
        .map_err(|source| HarvestFailure::Fetch {
            url: url.to_string(),
            source,
        })
}

async fn fetch_loc_entries(
    fetcher: &dyn Fetcher,
    url: &str,
) -> Result<Vec<String>, HarvestFailure> {
    let document = fetch(fetcher, url).await?;
    let sitemap_error = |source: SitemapError| HarvestFailure::Sitemap {
        url: url.to_string(),
        source,
    };
    let xml = inflate_if_gzip(&document.bytes).map_err(sitemap_error)?;
    parse_loc_entries(&xml).map_err(sitemap_error)
}

fn courtesy_delay(unit: Duration) -> Duration {
    if unit.is_zero() {
        return Duration::ZERO;
    }
    unit + unit.mul_f64(rand::rng().random::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courtesy_delay_stays_within_one_to_two_units() {
        let unit = Duration::from_millis(40);
        for _ in 0..100 {
            let delay = courtesy_delay(unit);
            assert!(delay >= unit && delay < unit * 2, "{delay:?}");
        }
        assert_eq!(courtesy_delay(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn robots_url_is_resolved_against_site_root() {
        assert_eq!(
            robots_url("http://www.example.com/some/page").unwrap(),
            "http://www.example.com/robots.txt"
        );
        assert!(matches!(
            robots_url("not a url"),
            Err(HarvestFailure::InvalidSite { .. })
        ));
    }
}
