use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

/// The three syllable pools a name is assembled from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyllableSources {
    /// Harvested syllables; the default pool for every slot.
    pub website: Vec<String>,
    /// Flavor syllables drawn instead of website ones at a configurable rate.
    pub occasional: Vec<String>,
    /// When non-empty, one of these fills one slot of every name.
    pub mandatory: Vec<String>,
}

impl SyllableSources {
    pub fn with_website(website: Vec<String>) -> Self {
        Self {
            website,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateRequest {
    pub count: usize,
    pub min_syllables: usize,
    pub max_syllables: usize,
    /// Probability in `[0, 1]` that a slot draws from the occasional pool.
    pub occasional_frequency: f64,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            count: 10,
            min_syllables: 3,
            max_syllables: 5,
            occasional_frequency: 0.5,
        }
    }
}

impl GenerateRequest {
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.min_syllables == 0 || self.min_syllables > self.max_syllables {
            return Err(GenerateError::InvalidRange {
                min: self.min_syllables,
                max: self.max_syllables,
            });
        }
        if !(0.0..=1.0).contains(&self.occasional_frequency) {
            return Err(GenerateError::InvalidFrequency(self.occasional_frequency));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("website syllable store is empty; run a harvest first")]
    EmptySource,
    #[error("invalid syllable range {min}..={max}; need 1 <= min <= max")]
    InvalidRange { min: usize, max: usize },
    #[error("occasional frequency {0} is outside 0.0..=1.0")]
    InvalidFrequency(f64),
}

/// Generate `request.count` names. The request is validated up front, so an
/// invalid range fails even when `count` is zero.
pub fn generate_names<R: Rng + ?Sized>(
    sources: &SyllableSources,
    request: &GenerateRequest,
    rng: &mut R,
) -> Result<Vec<String>, GenerateError> {
    request.validate()?;
    (0..request.count)
        .map(|_| build_name(sources, request, rng))
        .collect()
}

pub fn generate_name<R: Rng + ?Sized>(
    sources: &SyllableSources,
    request: &GenerateRequest,
    rng: &mut R,
) -> Result<String, GenerateError> {
    request.validate()?;
    build_name(sources, request, rng)
}

fn build_name<R: Rng + ?Sized>(
    sources: &SyllableSources,
    request: &GenerateRequest,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let slots = rng.random_range(request.min_syllables..=request.max_syllables);
    let mandatory_slot = (!sources.mandatory.is_empty()).then(|| rng.random_range(0..slots));

    let mut name = String::new();
    for slot in 0..slots {
        let syllable = if mandatory_slot == Some(slot) {
            draw(&sources.mandatory, rng)?
        } else if !sources.occasional.is_empty() && rng.random_bool(request.occasional_frequency)
        {
            draw(&sources.occasional, rng)?
        } else {
            draw(&sources.website, rng)?
        };
        name.push_str(syllable);
    }
    Ok(capitalize(&name))
}

fn draw<'a, R: Rng + ?Sized>(pool: &'a [String], rng: &mut R) -> Result<&'a str, GenerateError> {
    pool.choose(rng)
        .map(String::as_str)
        .ok_or(GenerateError::EmptySource)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("karator"), "Karator");
        assert_eq!(capitalize("kaRa"), "KaRa");
        assert_eq!(capitalize(""), "");
    }
}
