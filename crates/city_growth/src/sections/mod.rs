//! Section finding: partitions each zoning kind's unbuilt cells into
//! non-overlapping squares usable as building footprints.

mod finder;
mod selection;

pub use finder::{find_sections, SectionsBySize, ZoneSection, ZoneSections};
pub use selection::pick_section;
