use rand::rngs::StdRng;
use rand::SeedableRng;
use syllable_core::{
    generate_name, generate_names, GenerateError, GenerateRequest, SyllableSources,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn request(count: usize, min: usize, max: usize, freq: f64) -> GenerateRequest {
    GenerateRequest {
        count,
        min_syllables: min,
        max_syllables: max,
        occasional_frequency: freq,
    }
}

/// Splits `name` into syllables from `pools`, returning the syllable count
/// of the first full decomposition found.
fn decompose(name: &str, pools: &[&[String]]) -> Option<usize> {
    if name.is_empty() {
        return Some(0);
    }
    pools
        .iter()
        .flat_map(|pool| pool.iter())
        .filter(|syllable| name.starts_with(syllable.as_str()))
        .find_map(|syllable| decompose(&name[syllable.len()..], pools).map(|n| n + 1))
}

#[test]
fn returns_exactly_count_names() {
    let sources = SyllableSources::with_website(strings(&["ka", "ra", "tor", "lin"]));
    let mut rng = StdRng::seed_from_u64(7);
    for count in [0, 1, 17, 1000] {
        let names = generate_names(&sources, &request(count, 1, 1, 0.0), &mut rng).unwrap();
        assert_eq!(names.len(), count);
    }
}

#[test]
fn three_syllable_names_from_website_store() {
    let website = strings(&["ka", "ra", "tor", "lin"]);
    let sources = SyllableSources::with_website(website.clone());
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let name = generate_name(&sources, &request(1, 3, 3, 0.0), &mut rng).unwrap();
        assert!(name.len() <= 12, "{name}");
        assert!(name.chars().next().unwrap().is_uppercase());
        assert!(name.chars().skip(1).all(|c| c.is_lowercase()));
        assert_eq!(decompose(&name.to_lowercase(), &[website.as_slice()]), Some(3), "{name}");
    }
}

#[test]
fn syllable_count_stays_within_range() {
    // Single-letter syllables make the count observable from the length.
    let sources = SyllableSources::with_website(strings(&["a", "e", "o"]));
    let mut rng = StdRng::seed_from_u64(3);
    let names = generate_names(&sources, &request(500, 2, 4, 0.0), &mut rng).unwrap();
    assert!(names.iter().all(|n| (2..=4).contains(&n.len())));
    for len in 2..=4 {
        assert!(names.iter().any(|n| n.len() == len), "length {len} never drawn");
    }
}

#[test]
fn every_website_syllable_is_eventually_used() {
    let website = strings(&["ka", "ra", "tor", "lin", "mu"]);
    let sources = SyllableSources::with_website(website.clone());
    let mut rng = StdRng::seed_from_u64(11);
    let names = generate_names(&sources, &request(2000, 3, 5, 0.0), &mut rng).unwrap();
    for syllable in &website {
        assert!(
            names.iter().any(|n| n.to_lowercase().contains(syllable.as_str())),
            "syllable {syllable} never used"
        );
    }
}

#[test]
fn zero_frequency_never_uses_occasional_syllables() {
    let sources = SyllableSources {
        website: strings(&["ka", "ra", "tor"]),
        occasional: strings(&["zyx", "qwv"]),
        mandatory: Vec::new(),
    };
    let mut rng = StdRng::seed_from_u64(5);
    let names = generate_names(&sources, &request(1000, 3, 5, 0.0), &mut rng).unwrap();
    for name in names {
        let lower = name.to_lowercase();
        assert!(!lower.contains("zyx") && !lower.contains("qwv"), "{name}");
    }
}

#[test]
fn full_frequency_uses_only_occasional_and_mandatory_syllables() {
    let occasional = strings(&["zyx", "qwv", "jjk"]);
    let mandatory = strings(&["om"]);
    let sources = SyllableSources {
        website: strings(&["ka", "ra"]),
        occasional: occasional.clone(),
        mandatory: Vec::new(),
    };
    let mut rng = StdRng::seed_from_u64(9);
    for name in generate_names(&sources, &request(1000, 3, 5, 1.0), &mut rng).unwrap() {
        assert!(decompose(&name.to_lowercase(), &[occasional.as_slice()]).is_some(), "{name}");
    }

    let sources = SyllableSources {
        mandatory: mandatory.clone(),
        ..sources
    };
    let pools = [occasional.as_slice(), mandatory.as_slice()];
    for name in generate_names(&sources, &request(1000, 3, 5, 1.0), &mut rng).unwrap() {
        assert!(decompose(&name.to_lowercase(), &pools).is_some(), "{name}");
    }
}

#[test]
fn full_frequency_falls_back_to_website_without_occasional_store() {
    let sources = SyllableSources::with_website(strings(&["ka"]));
    let mut rng = StdRng::seed_from_u64(1);
    let names = generate_names(&sources, &request(10, 2, 2, 1.0), &mut rng).unwrap();
    assert!(names.iter().all(|n| n == "Kaka"));
}

#[test]
fn mandatory_syllable_appears_in_every_name() {
    let mandatory = strings(&["zyx", "qwv", "jjk"]);
    let sources = SyllableSources {
        website: strings(&["ka", "ra", "tor"]),
        occasional: Vec::new(),
        mandatory: mandatory.clone(),
    };
    let mut rng = StdRng::seed_from_u64(13);
    for name in generate_names(&sources, &request(1000, 3, 5, 0.0), &mut rng).unwrap() {
        let lower = name.to_lowercase();
        assert!(mandatory.iter().any(|m| lower.contains(m.as_str())), "{name}");
    }
}

#[test]
fn mandatory_only_names_need_no_website_syllables() {
    let sources = SyllableSources {
        website: Vec::new(),
        occasional: Vec::new(),
        mandatory: strings(&["om"]),
    };
    let mut rng = StdRng::seed_from_u64(2);
    let names = generate_names(&sources, &request(3, 1, 1, 0.0), &mut rng).unwrap();
    assert_eq!(names, vec!["Om", "Om", "Om"]);
}

#[test]
fn empty_website_store_fails_with_empty_source() {
    let sources = SyllableSources::default();
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate_names(&sources, &request(1, 1, 1, 0.0), &mut rng).unwrap_err();
    assert_eq!(err, GenerateError::EmptySource);
}

#[test]
fn inverted_or_zero_range_is_rejected() {
    let sources = SyllableSources::with_website(strings(&["ka"]));
    let mut rng = StdRng::seed_from_u64(0);

    let err = generate_names(&sources, &request(1, 4, 2, 0.0), &mut rng).unwrap_err();
    assert_eq!(err, GenerateError::InvalidRange { min: 4, max: 2 });

    let err = generate_names(&sources, &request(0, 0, 2, 0.0), &mut rng).unwrap_err();
    assert_eq!(err, GenerateError::InvalidRange { min: 0, max: 2 });
}

#[test]
fn frequency_outside_unit_interval_is_rejected() {
    let sources = SyllableSources::with_website(strings(&["ka"]));
    let mut rng = StdRng::seed_from_u64(0);
    for freq in [-0.1, 1.5, f64::NAN] {
        let err = generate_names(&sources, &request(1, 1, 1, freq), &mut rng).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidFrequency(_)));
    }
}

#[test]
fn same_seed_gives_same_names() {
    let sources = SyllableSources::with_website(strings(&["ka", "ra", "tor", "lin"]));
    let req = GenerateRequest::default();
    let first = generate_names(&sources, &req, &mut StdRng::seed_from_u64(99)).unwrap();
    let second = generate_names(&sources, &req, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(first, second);
}
