//! On-disk model formats
//!
//! The catalog is a headerless TSV of `id, title, year, vector`; everything
//! else is JSON or plain word lists, one entry per line.

use gamesage_core::{
    Catalog, CatalogEntry, Error, LsiProjection, Result, TermVocabulary, TfIdfModel,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::{BufRead, Read};

const CATALOG_FIELDS: usize = 4;

#[derive(Debug, Deserialize)]
struct VocabularyFile {
    token2id: HashMap<String, u32>,
}

#[derive(Debug, Deserialize)]
struct TfIdfFile {
    num_docs: u64,
    dfs: HashMap<u32, u64>,
    #[serde(default = "default_normalize")]
    normalize: bool,
}

fn default_normalize() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct LsiFile {
    num_terms: usize,
    num_topics: usize,
    u: Vec<Vec<f32>>,
    #[serde(default)]
    s: Vec<f32>,
    #[serde(default)]
    scaled: bool,
}

/// Parse the catalog TSV. Any bad row fails the whole catalog.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let mut tsv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries: Vec<CatalogEntry> = Vec::new();
    for (index, record) in tsv.records().enumerate() {
        let record = record.map_err(|e| Error::MalformedCatalogRecord {
            line: index + 1,
            reason: e.to_string(),
        })?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);

        if record.len() != CATALOG_FIELDS {
            return Err(Error::MalformedCatalogRecord {
                line,
                reason: format!("expected {} fields, got {}", CATALOG_FIELDS, record.len()),
            });
        }

        // Field 2 is the release year, which plays no part in similarity
        let entry = CatalogEntry::from_record(line, &record[0], &record[1], &record[3])?;
        if let Some(first) = entries.first() {
            if first.vector.dim() != entry.vector.dim() {
                return Err(Error::MalformedCatalogRecord {
                    line,
                    reason: format!(
                        "vector has {} dimensions, earlier records have {}",
                        entry.vector.dim(),
                        first.vector.dim()
                    ),
                });
            }
        }
        entries.push(entry);
    }

    Catalog::new(entries)
}

/// One lowercase entry per line; blank lines skipped
pub fn read_word_list<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_lowercase());
        }
    }
    Ok(words)
}

pub fn read_vocabulary<R: Read>(reader: R) -> Result<TermVocabulary> {
    let file: VocabularyFile = serde_json::from_reader(reader)
        .map_err(|e| Error::Serialization(format!("vocabulary: {}", e)))?;
    Ok(TermVocabulary::new(file.token2id))
}

pub fn read_tfidf<R: Read>(reader: R) -> Result<TfIdfModel> {
    let file: TfIdfFile = serde_json::from_reader(reader)
        .map_err(|e| Error::Serialization(format!("tf-idf model: {}", e)))?;
    TfIdfModel::from_document_frequencies(file.num_docs, file.dfs, file.normalize)
}

pub fn read_lsi<R: Read>(reader: R) -> Result<LsiProjection> {
    let file: LsiFile = serde_json::from_reader(reader)
        .map_err(|e| Error::Serialization(format!("lsi model: {}", e)))?;
    if file.u.len() != file.num_terms {
        return Err(Error::InvalidModel(format!(
            "lsi model declares {} terms but has {} rows",
            file.num_terms,
            file.u.len()
        )));
    }
    LsiProjection::new(file.num_topics, file.u, file.s, file.scaled)
}

/// Irregular forms, `inflected base [base...]` per line
pub fn read_lemma_exceptions<R: BufRead>(reader: R) -> Result<Vec<(String, Vec<String>)>> {
    let mut exceptions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace().map(str::to_lowercase);
        let Some(inflected) = fields.next() else {
            continue;
        };
        let bases: Vec<String> = fields.collect();
        if !bases.is_empty() {
            exceptions.push((inflected, bases));
        }
    }
    Ok(exceptions)
}
