//! Row matching and target resolution for in-place updates

use thiserror::Error;

use super::loader::Dataset;

/// Caller-supplied filter criteria. Unset criteria always match.
#[derive(Debug, Default, Clone)]
pub struct RowFilter {
    pub candidate_id: Option<String>,
    pub candidate_name: Option<String>,
    pub job_offer_id: Option<String>,
}

/// Failure modes of target resolution, each with its own process exit
/// code so callers can tell them apart.
#[derive(Debug, Error)]
pub enum MatchError {
    /// No record satisfied the supplied filter.
    #[error("No matching record found.")]
    NotFound,

    /// Several records matched and no unique identifier narrowed them
    /// down.
    #[error("{count} records match. Narrow the filter with --candidate-id or --job-offer-id.")]
    Ambiguous {
        /// How many records matched the filter.
        count: usize,
    },
}

impl MatchError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            MatchError::NotFound => 2,
            MatchError::Ambiguous { .. } => 3,
        }
    }
}

/// Indexes of all rows satisfying every supplied criterion.
///
/// Comparison is exact string equality after trimming surrounding
/// whitespace on both sides; case is significant. Criteria left unset
/// are not checked.
pub fn find_matches(dataset: &Dataset, filter: &RowFilter) -> Vec<usize> {
    let criteria = [
        ("candidate_id", filter.candidate_id.as_deref()),
        ("candidate_name", filter.candidate_name.as_deref()),
        ("job_offer_id", filter.job_offer_id.as_deref()),
    ];

    (0..dataset.len())
        .filter(|&idx| {
            criteria.iter().all(|&(column, wanted)| match wanted {
                Some(wanted) => dataset.field(idx, column).unwrap_or("").trim() == wanted.trim(),
                None => true,
            })
        })
        .collect()
}

/// Decide which matched rows get updated.
///
/// A lone match is updated as-is. Several matches are rejected as
/// ambiguous unless an explicit candidate id was supplied, in which case
/// every match is updated (rows sharing a candidate id are treated as
/// intentional duplicates).
pub fn resolve_targets(
    matches: &[usize],
    has_candidate_id: bool,
) -> Result<Vec<usize>, MatchError> {
    match matches {
        [] => Err(MatchError::NotFound),
        [single] => Ok(vec![*single]),
        _ if has_candidate_id => Ok(matches.to_vec()),
        _ => Err(MatchError::Ambiguous {
            count: matches.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        let header = ["candidate_name", "job_title", "cv_text", "job_offer_id", "candidate_id"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows = vec![
            vec!["Jane Doe", "Engineer", "one", "JOB1", "C1"],
            vec!["Jane Doe", "Analyst", "two", "JOB2", "C2"],
            vec!["John Smith", "Manager", "three", "JOB3", "C3"],
            vec![" Padded Name ", "Clerk", "four", "JOB4", " C4 "],
        ]
        .into_iter()
        .map(|r| r.into_iter().map(|s| s.to_string()).collect())
        .collect();
        Dataset::from_parts(header, rows)
    }

    fn filter_by_name(name: &str) -> RowFilter {
        RowFilter {
            candidate_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_unset_criteria_match_everything() {
        let matches = find_matches(&dataset(), &RowFilter::default());
        assert_eq!(matches, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_name_filter_finds_all_homonyms() {
        let matches = find_matches(&dataset(), &filter_by_name("Jane Doe"));
        assert_eq!(matches, vec![0, 1]);
    }

    #[test]
    fn test_combined_criteria_narrow_the_match() {
        let filter = RowFilter {
            candidate_name: Some("Jane Doe".to_string()),
            job_offer_id: Some("JOB2".to_string()),
            ..Default::default()
        };
        assert_eq!(find_matches(&dataset(), &filter), vec![1]);
    }

    #[test]
    fn test_matching_trims_both_sides() {
        let matches = find_matches(&dataset(), &filter_by_name("Padded Name"));
        assert_eq!(matches, vec![3]);

        let filter = RowFilter {
            candidate_id: Some(" C4 ".to_string()),
            ..Default::default()
        };
        assert_eq!(find_matches(&dataset(), &filter), vec![3]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(find_matches(&dataset(), &filter_by_name("jane doe")).is_empty());
    }

    #[test]
    fn test_missing_column_never_matches() {
        let ds = Dataset::from_parts(
            vec!["candidate_name".to_string()],
            vec![vec!["Jane Doe".to_string()]],
        );
        let filter = RowFilter {
            candidate_id: Some("C1".to_string()),
            ..Default::default()
        };
        assert!(find_matches(&ds, &filter).is_empty());
    }

    #[test]
    fn test_resolve_zero_matches_is_not_found() {
        let err = resolve_targets(&[], true).unwrap_err();
        assert!(matches!(err, MatchError::NotFound));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_resolve_single_match() {
        assert_eq!(resolve_targets(&[5], false).unwrap(), vec![5]);
    }

    #[test]
    fn test_resolve_multiple_without_id_is_ambiguous() {
        let err = resolve_targets(&[0, 1], false).unwrap_err();
        assert!(matches!(err, MatchError::Ambiguous { count: 2 }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_resolve_multiple_with_id_updates_all() {
        assert_eq!(resolve_targets(&[0, 1], true).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_ambiguous_display_names_the_narrowing_flags() {
        let err = MatchError::Ambiguous { count: 2 };
        assert_eq!(
            err.to_string(),
            "2 records match. Narrow the filter with --candidate-id or --job-offer-id."
        );
    }
}
