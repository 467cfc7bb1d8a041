use crate::domain::model::{LookupResult, VerbRecord};
use tracing::debug;

/// Filter records by verb name
///
/// An empty query lists everything. Otherwise the match is exact and
/// case-insensitive; dataset order and duplicates are kept as they are.
pub fn lookup<'a>(records: &'a [VerbRecord], query: &str) -> LookupResult<'a> {
    let matches: Vec<&VerbRecord> = records
        .iter()
        .filter(|record| query.is_empty() || record.matches(query))
        .collect();
    let found = !matches.is_empty();

    debug!(query, matched = matches.len(), total = records.len(), "lookup done");
    LookupResult { matches, found }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<VerbRecord> {
        vec![
            VerbRecord::new("essere", &["ich bin"], &["io sono"]),
            VerbRecord::new("avere", &["ich habe"], &["io ho"]),
            VerbRecord::new("fare", &["ich mache"], &["io faccio"]),
        ]
    }

    #[test]
    fn test_empty_query_lists_all_in_order() {
        let records = dataset();
        let result = lookup(&records, "");

        assert!(result.found);
        let verbs: Vec<&str> = result.matches.iter().map(|r| r.verb.as_str()).collect();
        assert_eq!(verbs, vec!["essere", "avere", "fare"]);
    }

    #[test]
    fn test_case_insensitive_match() {
        let records = dataset();
        for query in ["ESSERE", "essere", "EsSeRe"] {
            let result = lookup(&records, query);
            assert!(result.found);
            assert_eq!(result.matches, vec![&records[0]]);
        }
    }

    #[test]
    fn test_no_substring_or_prefix_match() {
        let records = vec![VerbRecord::new("essere", &[], &[])];
        let result = lookup(&records, "esser");
        assert!(!result.found);
        assert!(result.matches.is_empty());

        assert!(!lookup(&records, "ess").found);
        assert!(!lookup(&records, "essereee").found);
    }

    #[test]
    fn test_unknown_verb_not_found() {
        let records = dataset();
        let result = lookup(&records, "dormire");
        assert!(!result.found);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_empty_dataset_never_found() {
        let records: Vec<VerbRecord> = Vec::new();
        assert!(!lookup(&records, "").found);
        assert!(!lookup(&records, "essere").found);
    }

    #[test]
    fn test_duplicates_all_match() {
        let records = vec![
            VerbRecord::new("fare", &["ich mache"], &[]),
            VerbRecord::new("essere", &[], &[]),
            VerbRecord::new("Fare", &["ich tue"], &[]),
        ];
        let result = lookup(&records, "fare");
        assert_eq!(result.matches, vec![&records[0], &records[2]]);
    }
}
