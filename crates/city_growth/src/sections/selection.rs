use rand::seq::SliceRandom;
use rand::Rng;

use super::finder::{SectionsBySize, ZoneSection};

/// Pick a section in two stages: first one random section from each size that
/// has any, then a uniformly random size among those candidates. Sizes are
/// weighted equally regardless of how many sections each offers.
pub fn pick_section<'a, R: Rng + ?Sized>(
    sections: &'a SectionsBySize,
    rng: &mut R,
) -> Option<&'a ZoneSection> {
    let candidates: Vec<&ZoneSection> = sections
        .iter()
        .filter_map(|list| list.choose(&mut *rng))
        .collect();
    candidates.choose(rng).copied()
}
