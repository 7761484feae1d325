//! Lookup table from documentation id to member.
//!
//! Comment files are keyed by id; [`DocIdIndex`] provides the reverse direction for a set of
//! members so that each parsed entry can be attached to the member it documents. Building the
//! index also checks the uniqueness of the encoding: two structurally distinct members that
//! produce the same id are recorded as a collision.

use dashmap::{mapref::entry::Entry, DashMap};
use rayon::prelude::*;

use crate::{
    docid::DocIdEncoder,
    typesystem::{MemberKind, MemberRefRc},
    Result,
};

/// Thread-safe map of documentation id to the member it identifies
///
/// Indexer accessors share the id of their property; they are never reported as colliding
/// with it, and the property is kept as the entry when both are inserted.
#[derive(Default)]
pub struct DocIdIndex {
    /// id -> member
    entries: DashMap<String, MemberRefRc>,
    /// id -> additional distinct members that produced the same id
    collisions: DashMap<String, Vec<MemberRefRc>>,
}

impl DocIdIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode all `members` in parallel with the default encoder and index them
    ///
    /// ## Arguments
    /// * 'members' - The members to index
    ///
    /// # Errors
    /// Returns the first error reported while encoding a member.
    pub fn build(members: &[MemberRefRc]) -> Result<Self> {
        Self::build_with(&DocIdEncoder::default(), members)
    }

    /// Encode all `members` in parallel with `encoder` and index them
    ///
    /// ## Arguments
    /// * 'encoder' - The encoder to compute ids with
    /// * 'members' - The members to index
    ///
    /// # Errors
    /// Returns the first error reported while encoding a member.
    pub fn build_with(encoder: &DocIdEncoder, members: &[MemberRefRc]) -> Result<Self> {
        let _span = tracing::trace_span!("docid_index", members = members.len()).entered();

        let index = Self::new();
        members.par_iter().try_for_each(|member| {
            let id = encoder.member_id(member)?;
            index.insert(id, member.clone());
            Ok(())
        })?;

        Ok(index)
    }

    /// Add a member under an already computed id
    ///
    /// ## Arguments
    /// * 'id'     - The documentation id of `member`
    /// * 'member' - The member to store
    pub fn insert(&self, id: String, member: MemberRefRc) {
        match self.entries.entry(id) {
            Entry::Vacant(entry) => {
                entry.insert(member);
            }
            Entry::Occupied(mut entry) => {
                let existing = entry.get();
                if **existing == *member {
                    return;
                }

                if existing.is_indexer_accessor() || member.is_indexer_accessor() {
                    if member.kind == MemberKind::Property {
                        entry.insert(member);
                    }
                    return;
                }

                tracing::warn!(
                    id = %entry.key(),
                    first = %existing.name,
                    second = %member.name,
                    "distinct members share a documentation id"
                );
                self.collisions
                    .entry(entry.key().clone())
                    .or_default()
                    .push(member);
            }
        }
    }

    /// Look up the member with the given id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<MemberRefRc> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    /// Is there a member with the given id
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of distinct ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Index holds no ids
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All ids in sorted order
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.entries.iter().map(|entry| entry.key().clone()).collect();
        ids.sort_unstable();
        ids
    }

    /// Ids that were claimed by more than one distinct member, in sorted order
    #[must_use]
    pub fn collisions(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .collisions
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        ids.sort_unstable();
        ids
    }
}
