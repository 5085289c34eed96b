// Name search over the record store

use super::record::Celebrity;

/// True if the first or last name contains `query`, ignoring case.
/// An empty query matches every record.
pub fn matches(celebrity: &Celebrity, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    celebrity.first.to_lowercase().contains(&needle)
        || celebrity.last.to_lowercase().contains(&needle)
}

/// Records matching `query`, in store order
pub fn filter_records<'a>(records: &'a [Celebrity], query: &str) -> Vec<&'a Celebrity> {
    records.iter().filter(|c| matches(c, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn celeb(id: i64, first: &str, last: &str) -> Celebrity {
        Celebrity {
            id,
            first: first.to_string(),
            last: last.to_string(),
            dob: "1980-01-01".to_string(),
            gender: "Male".to_string(),
            email: String::new(),
            picture: String::new(),
            country: "Ireland".to_string(),
            description: String::new(),
        }
    }

    fn store() -> Vec<Celebrity> {
        vec![
            celeb(1, "Aidan", "Wang"),
            celeb(2, "Maria", "Jordan"),
            celeb(3, "Dan", "O'Brien"),
            celeb(4, "Zoë", "Kravitz"),
        ]
    }

    fn ids(rows: &[&Celebrity]) -> Vec<i64> {
        rows.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let records = store();
        assert_eq!(ids(&filter_records(&records, "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_matches_first_or_last_case_insensitive() {
        let records = store();
        // "dan" hits Aidan (first), Jordan (last) and Dan (first)
        assert_eq!(ids(&filter_records(&records, "DAN")), vec![1, 2, 3]);
        assert_eq!(ids(&filter_records(&records, "wang")), vec![1]);
    }

    #[test]
    fn test_does_not_match_across_first_and_last() {
        let records = store();
        assert!(filter_records(&records, "aidan wang").is_empty());
    }

    #[test]
    fn test_non_ascii_names() {
        let records = store();
        assert_eq!(ids(&filter_records(&records, "ZOË")), vec![4]);
    }

    #[test]
    fn test_empty_store() {
        assert!(filter_records(&[], "anything").is_empty());
        assert!(filter_records(&[], "").is_empty());
    }

    #[test]
    fn test_filter_matches_predicate_exactly() {
        let records = store();
        for query in ["a", "an", "o", "x", "'", "KRA"] {
            let visible = filter_records(&records, query);
            let expected: Vec<i64> = records
                .iter()
                .filter(|c| {
                    c.first.to_lowercase().contains(&query.to_lowercase())
                        || c.last.to_lowercase().contains(&query.to_lowercase())
                })
                .map(|c| c.id)
                .collect();
            assert_eq!(ids(&visible), expected, "query {:?}", query);
        }
    }
}
