//! Fixtures and seeded generators shared by HiringBrand tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hiringbrand_common::{Comparison, DimensionId, Employer};

pub use pretty_assertions::{assert_eq, assert_ne};

/// Dimension ids from plain strings.
pub fn dims(ids: &[&str]) -> Vec<DimensionId> {
    ids.iter().map(|&d| DimensionId::from(d)).collect()
}

/// Employer with the same score on every listed dimension.
pub fn flat_employer(name: &str, ids: &[&str], score: f64) -> Employer {
    ids.iter()
        .fold(Employer::new(name), |e, &d| e.with_score(d, score))
}

/// Employer from `(dimension, score)` pairs.
pub fn employer(name: &str, scores: &[(&str, f64)]) -> Employer {
    scores
        .iter()
        .fold(Employer::new(name), |e, &(d, s)| e.with_score(d, s))
}

/// Target at 9, a mid competitor at 5, and a weak competitor at 1 across
/// compensation, culture and growth. Group averages are exactly 5.
pub fn three_tier_comparison() -> Comparison {
    let ids = ["compensation", "culture", "growth"];
    Comparison::new(vec![
        flat_employer("A", &ids, 9.0).target(),
        flat_employer("B", &ids, 5.0),
        flat_employer("C", &ids, 1.0),
    ])
    .with_dimensions(dims(&ids))
}

/// Deterministic RNG for property-style tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A random comparison of `employers` members over `dimensions`.
///
/// Scores are drawn from [0, 10] in half-point steps. Roughly one score in
/// five is left out so the default substitution is exercised. The first
/// employer is the target.
pub fn random_comparison(rng: &mut StdRng, employers: usize, dimensions: &[DimensionId]) -> Comparison {
    let members = (0..employers)
        .map(|i| {
            let mut e = Employer::new(format!("Employer {i}"));
            e.is_target = i == 0;
            for dim in dimensions {
                if rng.gen_bool(0.8) {
                    let score = rng.gen_range(0..=20u32) as f64 / 2.0;
                    e = e.with_score(dim.as_str(), score);
                }
            }
            e
        })
        .collect();

    Comparison::new(members).with_dimensions(dimensions.to_vec())
}

/// Parse a JSON response body in tests.
pub fn json_body(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).expect("response body is not valid JSON")
}
