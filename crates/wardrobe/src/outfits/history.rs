use super::domain::{ColorUsage, ColorUsageRecord};

/// Aggregates raw wear events (one color per worn garment) into a frequency-ordered history.
///
/// Colors are grouped case-insensitively and keep the spelling they were first seen with.
/// Equal counts stay in first-seen order.
pub fn tally_wear_events<I, S>(colors: I) -> ColorUsageRecord
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tallies: Vec<(String, ColorUsage)> = Vec::new();

    for color in colors {
        let color = color.as_ref().trim();
        if color.is_empty() {
            continue;
        }

        let key = color.to_lowercase();
        match tallies.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, usage)) => usage.usage_count += 1,
            None => tallies.push((key, ColorUsage::new(color, 1))),
        }
    }

    // stable sort keeps first-seen order among ties
    tallies.sort_by(|(_, a), (_, b)| b.usage_count.cmp(&a.usage_count));
    tallies.into_iter().map(|(_, usage)| usage).collect()
}
