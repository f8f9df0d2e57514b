pub mod api;
pub mod args;
pub mod error;
pub mod transform;

use std::fs;
use std::io;
use std::path::Path;

use crate::api::{OutputRecord, RawDoc, SearchResponse};
use crate::args::Args;
use crate::error::IngestError;
use crate::transform::{select_window, to_record};

pub const QUERY: &str = "collection:(feature_films) AND mediatype:(movies)";

pub const FIELDS: [&str; 7] = [
    "identifier",
    "title",
    "description",
    "downloads",
    "subject",
    "publicdate",
    "date",
];

/// Runs one fetch/transform/write cycle and returns how many records
/// were written. Fewer than a full window means the search returned a
/// short result list, not a failure.
pub async fn run(args: &Args) -> Result<usize, IngestError> {
    let docs = fetch_docs(&args.endpoint, args.rows).await?;
    let records: Vec<OutputRecord> = select_window(&docs).iter().map(to_record).collect();
    write_records(&args.output, &records)?;
    Ok(records.len())
}

pub fn search_params(rows: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("q", QUERY.to_string()),
        ("sort[]", "downloads desc".to_string()),
        ("output", "json".to_string()),
        ("rows", rows.to_string()),
    ];
    for field in FIELDS {
        params.push(("fl[]", field.to_string()));
    }
    params
}

async fn fetch_docs(endpoint: &str, rows: u32) -> Result<Vec<RawDoc>, IngestError> {
    let response = reqwest::Client::new()
        .get(endpoint)
        .query(&search_params(rows))
        .send()
        .await?
        .error_for_status()?;
    let body: SearchResponse = response.json().await?;
    Ok(body.response.docs)
}

fn write_records(path: &Path, records: &[OutputRecord]) -> Result<(), IngestError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records).map_err(io::Error::from)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::search_params;

    #[test]
    pub fn test_search_params_fixed_request() {
        let params = search_params(550);
        assert!(params.contains(&("q", "collection:(feature_films) AND mediatype:(movies)".to_string())));
        assert!(params.contains(&("sort[]", "downloads desc".to_string())));
        assert!(params.contains(&("rows", "550".to_string())));

        let fields: Vec<&str> = params
            .iter()
            .filter(|(key, _)| *key == "fl[]")
            .map(|(_, value)| value.as_str())
            .collect();
        let expected = vec![
            "identifier",
            "title",
            "description",
            "downloads",
            "subject",
            "publicdate",
            "date",
        ];
        assert_eq!(expected, fields);
    }
}
