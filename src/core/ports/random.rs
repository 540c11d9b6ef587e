//! Random source port
//!
//! The fallback verdict, the witty remark and the bonus fact are all drawn at
//! random. Drawing goes through this trait so tests can script the outcome.

/// Uniform index generator
pub trait RandomSource {
    /// Return an index in `0..len`; callers never pass `0`
    fn index(&mut self, len: usize) -> usize;
}

/// Pick one element of a non-empty slice
///
/// Returns `None` only for an empty slice.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len()))
}
