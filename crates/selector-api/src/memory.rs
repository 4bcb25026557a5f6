//! In-memory [`SearchProvider`] over a fixed record list.
//!
//! Used for fixture files and tests. Matching is a case-insensitive substring
//! test against the label; records keep their original order.

use std::io::Read;

use crate::error::SearchError;
use crate::provider::SearchProvider;
use crate::types::Candidate;

/// Number of candidates returned when no explicit limit is configured.
pub const DEFAULT_MEMORY_LIMIT: usize = 20;

#[derive(Debug, Clone)]
pub struct MemoryProvider {
	records: Vec<Candidate>,
	limit: usize,
}

impl MemoryProvider {
	#[must_use]
	pub fn new(records: Vec<Candidate>) -> Self {
		Self {
			records,
			limit: DEFAULT_MEMORY_LIMIT,
		}
	}

	/// Cap the number of candidates a single search returns.
	#[must_use]
	pub fn with_limit(mut self, limit: usize) -> Self {
		self.limit = limit;
		self
	}

	/// Load records from a JSON array of `{"id": .., "label": ..}` objects.
	pub fn from_json_reader(reader: impl Read) -> Result<Self, SearchError> {
		let records: Vec<Candidate> = serde_json::from_reader(reader).map_err(SearchError::decode)?;
		Ok(Self::new(records))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl SearchProvider for MemoryProvider {
	fn search(&self, query: &str) -> Result<Vec<Candidate>, SearchError> {
		let needle = query.to_lowercase();
		Ok(self
			.records
			.iter()
			.filter(|record| record.label.to_lowercase().contains(&needle))
			.take(self.limit)
			.cloned()
			.collect())
	}

	fn fetch(&self, id: &str) -> Result<Option<Candidate>, SearchError> {
		Ok(self.records.iter().find(|record| record.id == id).cloned())
	}
}
