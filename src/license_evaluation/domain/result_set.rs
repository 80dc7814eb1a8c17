use super::license_result::{LicenseResult, Outcome};
use serde::{Deserialize, Serialize};

/// Ordered collection of license results
///
/// Insertion order is render order; nothing in the crate re-sorts it.
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<LicenseResult>);

impl ResultSet {
    pub fn new(results: Vec<LicenseResult>) -> Self {
        Self(results)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LicenseResult> {
        self.0.iter()
    }

    /// Number of results with the given outcome
    pub fn count(&self, outcome: Outcome) -> usize {
        self.0.iter().filter(|r| r.outcome() == outcome).count()
    }
}

impl From<Vec<LicenseResult>> for ResultSet {
    fn from(results: Vec<LicenseResult>) -> Self {
        Self::new(results)
    }
}

impl FromIterator<LicenseResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = LicenseResult>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a LicenseResult;
    type IntoIter = std::slice::Iter<'a, LicenseResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultSet {
        ResultSet::new(vec![
            LicenseResult::new("zlib@1.2", "Zlib", Outcome::Allowed),
            LicenseResult::new("gpl-thing@2.0", "GPL-3.0", Outcome::Denied),
            LicenseResult::new("abc@0.1", "", Outcome::Unknown),
            LicenseResult::new("left-pad@1.0", "MIT", Outcome::Allowed),
        ])
    }

    #[test]
    fn test_preserves_insertion_order() {
        let set = sample();
        let names: Vec<&str> = set.iter().map(|r| r.dependency()).collect();
        assert_eq!(
            names,
            vec!["zlib@1.2", "gpl-thing@2.0", "abc@0.1", "left-pad@1.0"]
        );
    }

    #[test]
    fn test_counts_by_outcome() {
        let set = sample();
        assert_eq!(set.len(), 4);
        assert_eq!(set.count(Outcome::Allowed), 2);
        assert_eq!(set.count(Outcome::Denied), 1);
        assert_eq!(set.count(Outcome::Unknown), 1);
    }

    #[test]
    fn test_empty_set() {
        let set = ResultSet::empty();
        assert!(set.is_empty());
        assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
    }

    #[test]
    fn test_deserializes_from_array() {
        let set: ResultSet = serde_json::from_str(
            r#"[{"dependency":"a@1","license":"MIT","outcome":"allowed"},
                {"dependency":"b@2","license":"GPL-2.0","outcome":"denied"}]"#,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        let second = set.iter().nth(1).unwrap();
        assert_eq!(second.dependency(), "b@2");
        assert_eq!(second.outcome(), Outcome::Denied);
    }

    #[test]
    fn test_collect_from_iterator() {
        let set: ResultSet = vec![LicenseResult::new("a@1", "MIT", Outcome::Allowed)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }
}
