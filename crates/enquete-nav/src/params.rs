//! Captured path parameters

use smallvec::SmallVec;

/// Parameters captured from a matched path, in capture order.
///
/// Route patterns rarely declare more than a couple of captures, so the
/// pairs live inline until that assumption breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: SmallVec<[(String, String); 2]>,
}

impl Params {
    /// No captures
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a parameter value by name
    ///
    /// # Example
    /// ```
    /// use enquete_nav::Params;
    ///
    /// let params = Params::from(vec![("id".to_string(), "42".to_string())]);
    /// assert_eq!(params.get("id"), Some("42"));
    /// assert_eq!(params.get("missing"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of captured parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether anything was captured
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate (name, value) pairs in capture order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl From<Vec<(String, String)>> for Params {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            pairs: SmallVec::from_vec(pairs),
        }
    }
}
