use crate::api::{OneOrMany, OutputRecord, RawDoc};

/// The 50 items immediately after the top 500, zero-indexed, half-open.
pub const WINDOW_START: usize = 500;
pub const WINDOW_END: usize = 550;

/// Clamps the window to the list length, so a short result list yields
/// a short (possibly empty) slice rather than an error.
pub fn select_window(docs: &[RawDoc]) -> &[RawDoc] {
    let start = WINDOW_START.min(docs.len());
    let end = WINDOW_END.min(docs.len());
    &docs[start..end]
}

pub fn to_record(doc: &RawDoc) -> OutputRecord {
    // keeps the original's null-ish interpolation for missing identifiers
    let identifier = doc.identifier.as_deref().unwrap_or("null");
    let thumb = format!("https://archive.org/download/{identifier}/__ia_thumb.jpg");

    OutputRecord {
        id: doc.identifier.clone(),
        title: doc.title.clone(),
        description: flatten_description(doc.description.as_ref()),
        downloads: doc.downloads,
        image: thumb.clone(),
        backdrop: thumb,
        embed_url: format!("https://archive.org/embed/{identifier}"),
        date: release_date(doc),
        topics: normalize_topics(doc.subject.as_ref()),
        rating: None,
        is_coming_soon: true,
    }
}

fn flatten_description(description: Option<&OneOrMany>) -> String {
    match description {
        Some(OneOrMany::One(text)) => text.clone(),
        Some(OneOrMany::Many(parts)) => parts.join(" "),
        None => String::new(),
    }
}

fn release_date(doc: &RawDoc) -> String {
    doc.publicdate
        .clone()
        .or_else(|| doc.date.clone())
        .unwrap_or_else(|| "To be announced".to_string())
}

fn normalize_topics(subject: Option<&OneOrMany>) -> Vec<String> {
    match subject {
        Some(OneOrMany::One(topic)) => vec![topic.clone()],
        Some(OneOrMany::Many(topics)) => topics.clone(),
        None => Vec::new(),
    }
}
