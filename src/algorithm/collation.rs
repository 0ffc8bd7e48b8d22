//! Merging of adjacent split candidates and false positive filtering

use log::debug;

use crate::spatial::frame::Dimension;

/// Split candidate position with the number of times it was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOccurrence {
    /// Row or column index of the candidate
    pub position: Dimension,
    /// Detections accumulated across all analyzed frames
    pub count: u32,
}

/// Merge candidates detected on neighbouring lines into a single candidate
///
/// Anti-aliased tile borders tend to trip two or three consecutive lines. Each
/// nonzero position is merged with the next position and, when it survives,
/// with the position two steps ahead. The smaller count is absorbed into the
/// larger one; equal counts are absorbed into the later position.
///
/// The result is strictly ascending by position and holds no zero counts.
pub fn collate_adjacent_splits(mut occurrences: Vec<u32>) -> Vec<SplitOccurrence> {
    let mut collated = Vec::new();

    for index in 0..occurrences.len() {
        if occurrences.get(index).copied().unwrap_or(0) == 0 {
            continue;
        }

        absorb(&mut occurrences, index, index + 1);

        if occurrences.get(index).copied().unwrap_or(0) > 0 {
            absorb(&mut occurrences, index, index + 2);
        }

        let count = occurrences.get(index).copied().unwrap_or(0);
        if count > 0 {
            collated.push(SplitOccurrence {
                position: index as Dimension,
                count,
            });
        }
    }

    collated
}

// Moves the smaller of two nonzero counts onto the other position
fn absorb(occurrences: &mut [u32], current: usize, next: usize) {
    let (Some(&current_count), Some(&next_count)) = (occurrences.get(current), occurrences.get(next))
    else {
        return;
    };

    if current_count == 0 || next_count == 0 {
        return;
    }

    let (survivor, absorbed) = if current_count <= next_count {
        (next, current)
    } else {
        (current, next)
    };
    let merged = current_count.saturating_add(next_count);

    if let Some(count) = occurrences.get_mut(survivor) {
        *count = merged;
    }
    if let Some(count) = occurrences.get_mut(absorbed) {
        *count = 0;
    }

    debug!("collated value of position {absorbed} into position {survivor}, new match count is {merged}");
}

/// Drop candidates detected too rarely compared to the average candidate
///
/// Keeps positions whose count is at least `average / minimum_line_match_ratio`,
/// where the average is taken over every collated candidate.
pub fn drop_false_positive_splits(
    candidates: &[SplitOccurrence],
    minimum_line_match_ratio: f64,
) -> Vec<Dimension> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let sum: f64 = candidates
        .iter()
        .map(|candidate| f64::from(candidate.count))
        .sum();
    let total_average = sum / candidates.len() as f64;
    let minimum_count = total_average / minimum_line_match_ratio;

    candidates
        .iter()
        .filter_map(|candidate| {
            if f64::from(candidate.count) >= minimum_count {
                Some(candidate.position)
            } else {
                debug!(
                    "position {} is considered a false positive, occurred only {} times, vs average of {total_average}",
                    candidate.position, candidate.count
                );
                None
            }
        })
        .collect()
}
