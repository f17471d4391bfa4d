//! Stable top-N ranking shared by the matchers.

/// Anything that carries a combined score.
pub trait Scored {
    fn score(&self) -> f64;
}

/// Sorts descending by score and keeps the first `top_n` entries.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_top<T: Scored>(mut entries: Vec<T>, top_n: usize) -> Vec<T> {
    entries.sort_by(|a, b| b.score().total_cmp(&a.score()));
    entries.truncate(top_n);
    entries
}
