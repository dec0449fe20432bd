//! Preferred-value (E-series) mantissa tables.
//!
//! Each table lists the three-significant-digit mantissas of one decade,
//! scaled so that the first entry is `100`. A resistance is produced by
//! multiplying a mantissa by a power of ten.
//!
//! Mixed stock (for example E24 parts alongside E96 parts) is described with
//! [`union`], which merges tables with set semantics.

/// E24 series (5 % tolerance class).
pub const E24: [u16; 24] = [
    100, 110, 120, 130, 150, 160, 180, 200, 220, 240, 270, 300, 330, 360, 390, 430, 470, 510, 560,
    620, 680, 750, 820, 910,
];

/// E48 series (2 % tolerance class).
pub const E48: [u16; 48] = [
    100, 105, 110, 115, 121, 127, 133, 140, 147, 154, 162, 169, 178, 187, 196, 205, 215, 226, 237,
    249, 261, 274, 287, 301, 316, 332, 348, 365, 383, 402, 422, 442, 464, 487, 511, 536, 562, 590,
    619, 649, 681, 715, 750, 787, 825, 866, 909, 953,
];

/// E96 series (1 % tolerance class).
pub const E96: [u16; 96] = [
    100, 102, 105, 107, 110, 113, 115, 118, 121, 124, 127, 130, 133, 137, 140, 143, 147, 150, 154,
    158, 162, 165, 169, 174, 178, 182, 187, 191, 196, 200, 205, 210, 215, 221, 226, 232, 237, 243,
    249, 255, 261, 267, 274, 280, 287, 294, 301, 309, 316, 324, 332, 340, 348, 357, 365, 374, 383,
    392, 402, 412, 422, 432, 442, 453, 464, 475, 487, 499, 511, 523, 536, 549, 562, 576, 590, 604,
    619, 634, 649, 665, 681, 698, 715, 732, 750, 768, 787, 806, 825, 845, 866, 887, 909, 931, 953,
    976,
];

/// Merges mantissa tables into one ascending table without repeats.
#[must_use]
pub fn union(tables: &[&[u16]]) -> Vec<u16> {
    let mut merged: Vec<u16> = tables.iter().flat_map(|t| t.iter().copied()).collect();
    merged.sort_unstable();
    merged.dedup();
    merged
}

/// E24 and E48 stock combined.
#[must_use]
pub fn e24_e48() -> Vec<u16> {
    union(&[&E24, &E48])
}

/// E24 and E96 stock combined.
#[must_use]
pub fn e24_e96() -> Vec<u16> {
    union(&[&E24, &E96])
}
