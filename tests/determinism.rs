use std::collections::HashSet;

use blake3::hash;
use rand::rngs::StdRng;
use rand::SeedableRng;
use treegen::{render_array, GeneratorConfig, TreeGenerator};

fn fingerprint(seed: u64) -> blake3::Hash {
    let mut generator =
        TreeGenerator::new(GeneratorConfig::default(), StdRng::seed_from_u64(seed))
            .expect("generator initialises");
    let array = generator.generate().expect("generation succeeds");
    let rendered = render_array(&array).expect("rendering succeeds");
    hash(rendered.as_bytes())
}

#[test]
fn seeded_generation_is_deterministic() {
    let fingerprints: HashSet<_> = (0..5).map(|_| fingerprint(1234)).collect();
    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}

#[test]
fn different_seeds_give_different_trees() {
    let fingerprints: HashSet<_> = (0..5).map(fingerprint).collect();
    assert_eq!(fingerprints.len(), 5, "distinct seeds collided");
}
