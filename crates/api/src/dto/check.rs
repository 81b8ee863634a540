#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckQuery {
    pub domain: Option<String>,
}

impl CheckQuery {
    /// Builds the query from raw `key=value` pairs. A repeated `domain` keeps
    /// its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let domain = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "domain").then_some(value));

        Self { domain }
    }
}
