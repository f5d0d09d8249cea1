use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use syllable_core::{generate_names, GenerateRequest};
use syllable_harvester::{load_sources, read_store, StoreRole};

pub fn run_generate(
    store_dir: &Path,
    request: &GenerateRequest,
    seed: Option<u64>,
) -> Result<Vec<String>> {
    let sources = load_sources(store_dir)
        .with_context(|| format!("Failed to load syllable stores from {:?}", store_dir))?;
    let names = match seed {
        Some(seed) => generate_names(&sources, request, &mut StdRng::seed_from_u64(seed)),
        None => generate_names(&sources, request, &mut rand::rng()),
    }
    .context("Failed to generate names")?;
    Ok(names)
}

/// One line per store role.
pub fn status_lines(store_dir: &Path) -> Result<Vec<String>> {
    StoreRole::ALL
        .iter()
        .map(|role| -> Result<String> {
            let path = role.path_in(store_dir);
            if !path.exists() {
                return Ok(format!("{} not found. {}", role.file_name(), role_hint(*role)));
            }
            let parsed = read_store(&path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            Ok(format!(
                "{} found: {} syllables. {}",
                role.file_name(),
                parsed.len(),
                role_hint(*role)
            ))
        })
        .collect()
}

fn role_hint(role: StoreRole) -> &'static str {
    match role {
        StoreRole::Website => "Run `namegen harvest` to rebuild it.",
        StoreRole::Occasional => "Their frequency is set with --occasional.",
        StoreRole::Mandatory => "One of these appears in every name.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllable_harvester::write_store;
    use tempfile::TempDir;

    fn request(count: usize) -> GenerateRequest {
        GenerateRequest {
            count,
            min_syllables: 2,
            max_syllables: 3,
            occasional_frequency: 0.0,
        }
    }

    #[test]
    fn generates_from_store_dir() {
        let temp = TempDir::new().unwrap();
        write_store(temp.path(), StoreRole::Website, &["ka", "ra", "tor"]).unwrap();

        let names = run_generate(temp.path(), &request(5), Some(4)).unwrap();
        assert_eq!(names.len(), 5);
        assert_eq!(names, run_generate(temp.path(), &request(5), Some(4)).unwrap());
    }

    #[test]
    fn empty_store_dir_reports_empty_source() {
        let temp = TempDir::new().unwrap();
        let err = run_generate(temp.path(), &request(1), None).unwrap_err();
        assert!(format!("{err:#}").contains("website syllable store is empty"));
    }

    #[test]
    fn status_reports_presence_and_counts() {
        let temp = TempDir::new().unwrap();
        write_store(temp.path(), StoreRole::Mandatory, &["om", "zu"]).unwrap();

        let lines = status_lines(temp.path()).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("syllables_website.csv not found."));
        assert!(lines[1].starts_with("syllables_occasional.csv not found."));
        assert!(lines[2].starts_with("syllables_mandatory.csv found: 2 syllables."));
    }
}
