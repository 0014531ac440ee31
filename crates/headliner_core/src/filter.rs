use crate::Headline;

/// Case-insensitive substring match of `query` against headline titles.
///
/// A blank query yields the full list unchanged; order is preserved.
/// Only the title participates in matching.
pub fn filter_headlines(query: &str, headlines: &[Headline]) -> Vec<Headline> {
    if query.trim().is_empty() {
        return headlines.to_vec();
    }

    let needle = query.to_lowercase();
    headlines
        .iter()
        .filter(|headline| headline.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
