//! Ordinal ranking of composite scores.

use std::cmp::Ordering;

/// Rank scores in descending order: the highest score gets rank 1.
///
/// Exactly equal scores share the average of the ordinal positions they
/// span, so two rows tied for positions 2 and 3 both get 2.5. NaN scores
/// keep a NaN rank and take no position.
/// Returns ranks in the same order as input.
pub fn rank_descending(scores: &[f64]) -> Vec<f64> {
    let mut ranks = vec![f64::NAN; scores.len()];

    let mut indexed: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, s)| !s.is_nan())
        .collect();

    // Stable sort keeps input order within ties.
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let n = indexed.len();
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && indexed[j + 1].1 == indexed[i].1 {
            j += 1;
        }
        // positions i+1 ..= j+1
        let avg_rank = (i + 1 + j + 1) as f64 / 2.0;
        for &(orig, _) in &indexed[i..=j] {
            ranks[orig] = avg_rank;
        }
        i = j + 1;
    }

    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_basic() {
        assert_eq!(rank_descending(&[10.0, 30.0, 20.0]), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_ties_share_average_position() {
        assert_eq!(rank_descending(&[0.5, 0.5, 0.1]), vec![1.5, 1.5, 3.0]);
        assert_eq!(rank_descending(&[0.9, 0.4, 0.4, 0.1]), vec![1.0, 2.5, 2.5, 4.0]);
        assert_eq!(rank_descending(&[1.0, 1.0, 1.0]), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_nan_scores_keep_nan_rank() {
        let ranks = rank_descending(&[f64::NAN, 0.2, 0.8]);
        assert!(ranks[0].is_nan());
        assert_eq!(&ranks[1..], &[2.0, 1.0]);
    }

    #[test]
    fn test_empty() {
        assert!(rank_descending(&[]).is_empty());
    }
}
