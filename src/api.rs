use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SearchResponse {
    pub response: ResponseBody,
}

#[derive(Deserialize)]
pub struct ResponseBody {
    pub docs: Vec<RawDoc>,
}

/// Fields the search API returns either as a scalar or as a list,
/// depending on the item.
#[derive(Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// One search-result document, limited to the requested field list.
#[derive(Clone, Default, Deserialize)]
pub struct RawDoc {
    pub identifier: Option<String>,
    pub title: Option<String>,
    pub description: Option<OneOrMany>,
    pub downloads: Option<u64>,
    pub subject: Option<OneOrMany>,
    pub publicdate: Option<String>,
    pub date: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: String,
    pub downloads: Option<u64>,
    pub image: String,
    pub backdrop: String,
    pub embed_url: String,
    pub date: String,
    pub topics: Vec<String>,
    /// Populated by a later enrichment step, never here.
    pub rating: Option<f64>,
    pub is_coming_soon: bool,
}
