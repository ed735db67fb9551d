use std::collections::HashSet;

use ulid::Ulid;

use crate::CandidateRecord;

/// Storage collaborator for candidate records. The matching engine only ever
/// reads; `add` exists for ingestion paths. Implementations may be backed by
/// anything that can hand back whole records.
pub trait CandidateStore: Send + Sync {
    fn list_all(&self) -> Vec<CandidateRecord>;

    /// Store a record and return its id.
    fn add(&mut self, record: CandidateRecord) -> String;

    /// Lexical search: rank stored records by shared-token count with the
    /// query and return up to `limit` hits with at least one shared token.
    fn search(&self, query: &str, limit: usize) -> Vec<CandidateRecord>;
}

struct StoredCandidate {
    id: String,
    searchable_text: String,
    record: CandidateRecord,
}

/// In-memory reference implementation. Token overlap only, no embeddings;
/// good enough for tests and small batches.
#[derive(Default)]
pub struct InMemoryCandidateStore {
    documents: Vec<StoredCandidate>,
}

impl InMemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CandidateRecord> {
        self.documents
            .iter()
            .find(|doc| doc.id == id)
            .map(|doc| &doc.record)
    }
}

fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

impl CandidateStore for InMemoryCandidateStore {
    fn list_all(&self) -> Vec<CandidateRecord> {
        self.documents.iter().map(|doc| doc.record.clone()).collect()
    }

    fn add(&mut self, record: CandidateRecord) -> String {
        let id = Ulid::new().to_string();
        self.documents.push(StoredCandidate {
            id: id.clone(),
            searchable_text: record.searchable_text(),
            record,
        });
        id
    }

    fn search(&self, query: &str, limit: usize) -> Vec<CandidateRecord> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            return vec![];
        }

        let mut scored: Vec<(usize, &StoredCandidate)> = self
            .documents
            .iter()
            .filter_map(|doc| {
                let overlap = tokenize(&doc.searchable_text)
                    .intersection(&query_tokens)
                    .count();
                (overlap > 0).then_some((overlap, doc))
            })
            .collect();

        // Insertion order breaks ties (stable sort on the overlap count).
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, doc)| doc.record.clone())
            .collect()
    }
}
