use serde::{Deserialize, Deserializer};

// A single dataset entry: an Italian infinitive with its conjugation lines
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerbRecord {
    pub verb: String,
    #[serde(rename = "de", default, deserialize_with = "null_as_empty")]
    pub german_forms: Vec<String>, // German conjugation lines, stored order
    #[serde(rename = "it", default, deserialize_with = "null_as_empty")]
    pub italian_forms: Vec<String>, // Italian conjugation lines, stored order
}

// `null` form lists read as empty ones
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl VerbRecord {
    #[cfg(test)]
    pub fn new(verb: &str, german_forms: &[&str], italian_forms: &[&str]) -> Self {
        Self {
            verb: verb.to_string(),
            german_forms: german_forms.iter().map(|s| s.to_string()).collect(),
            italian_forms: italian_forms.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Case-insensitive exact comparison against a query
    pub fn matches(&self, query: &str) -> bool {
        self.verb.to_lowercase() == query.to_lowercase()
    }
}

// Result of filtering the dataset by a query
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult<'a> {
    pub matches: Vec<&'a VerbRecord>,
    pub found: bool,
}

// Which summary line closes the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'q> {
    NotFound(&'q str),
    EmptyDataset,
    FullListing,
    Shown(&'q str),
}

impl<'q> Outcome<'q> {
    pub fn classify(query: &'q str, found: bool, dataset_len: usize) -> Self {
        match (query.is_empty(), found) {
            (false, false) => Outcome::NotFound(query),
            (false, true) => Outcome::Shown(query),
            (true, false) => {
                // an empty query matches every record, so nothing matched only if there was nothing
                debug_assert_eq!(dataset_len, 0);
                Outcome::EmptyDataset
            }
            (true, true) => Outcome::FullListing,
        }
    }
}
