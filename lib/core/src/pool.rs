use crate::error::{Error, Result};
use crate::record::{HeritageRecord, RecordId};
use ahash::AHashMap;
use serde::Deserialize;
use std::path::Path;

/// Accepted JSON layouts for a record file
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile {
    List(Vec<HeritageRecord>),
    /// `{"content": [...]}` as returned by the heritage listing endpoint
    Envelope { content: Vec<HeritageRecord> },
}

/// All heritage records loaded by the caller, indexed by id
#[derive(Debug, Clone, Default)]
pub struct RecordPool {
    records: Vec<HeritageRecord>,
    index: AHashMap<RecordId, usize>,
}

impl RecordPool {
    /// Build a pool, rejecting invalid records and repeated ids
    pub fn new(records: Vec<HeritageRecord>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            record.validate()?;
            if index.insert(record.id, pos).is_some() {
                return Err(Error::DuplicateRecordId(record.id));
            }
        }
        Ok(Self { records, index })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records = match serde_json::from_str::<RecordFile>(json)? {
            RecordFile::Envelope { content } => content,
            RecordFile::List(records) => records,
        };
        tracing::debug!(count = records.len(), "parsed heritage records");
        Self::new(records)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&HeritageRecord> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn records(&self) -> &[HeritageRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeritageRecord> {
        self.records.iter()
    }

    /// Split the pool into a target record and every other record
    pub fn split_target(&self, id: RecordId) -> Result<(&HeritageRecord, Vec<&HeritageRecord>)> {
        let target = self.get(id).ok_or(Error::RecordNotFound(id))?;
        let candidates = self.records.iter().filter(|r| r.id != id).collect();
        Ok((target, candidates))
    }
}
