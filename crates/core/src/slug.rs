//! Public slug generation.
//!
//! Slugs are the public-facing identity of a playground: a fixed-length
//! random token over a URL-safe alphabet, distinct from the internal
//! numeric id and stable across updates.

use rand::Rng;

/// Slugs are always exactly this many characters.
pub const SLUG_LEN: usize = 21;

/// URL-safe alphabet (64 symbols), matching the tokens minted by the
/// original frontend links.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generate a fresh random slug of [`SLUG_LEN`] characters.
pub fn generate() -> String {
    let mut rng = rand::rng();
    (0..SLUG_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Whether `slug` has the exact length and alphabet of a generated slug.
pub fn is_well_formed(slug: &str) -> bool {
    slug.len() == SLUG_LEN && slug.bytes().all(|b| ALPHABET.contains(&b))
}
