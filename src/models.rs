use serde::{Deserialize, Serialize};

/// Everything collected from one page. Each list keeps the order in which its
/// selector matched; the lists are not aligned with each other.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedResult {
    pub titles: Vec<String>,
    pub prices: Vec<String>,
    pub images: Vec<String>,
}
