//! In-memory entity store
//!
//! Members and clubs live in one shared state so that member records can
//! resolve their club references and clubs can derive their member lists.
//! Both collections keep insertion order.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::modules::clubs::models::Club;
use crate::modules::members::models::Member;

/// A member as stored: scalar fields plus the ordered club-id references
#[derive(Debug, Clone)]
pub(crate) struct MemberRecord {
    pub(crate) member: Member,
    pub(crate) club_ids: Vec<String>,
}

#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) members: Vec<MemberRecord>,
    pub(crate) clubs: Vec<Club>,
}

impl StoreState {
    pub(crate) fn club(&self, id: &str) -> Option<&Club> {
        self.clubs.iter().find(|club| club.has_id(id))
    }

    pub(crate) fn member(&self, id: &str) -> Option<&MemberRecord> {
        self.members.iter().find(|record| record.member.has_id(id))
    }

    /// Member with its club references resolved, in reference order
    pub(crate) fn member_with_clubs(&self, record: &MemberRecord) -> Member {
        let mut member = record.member.clone();
        member.clubs = record
            .club_ids
            .iter()
            .filter_map(|id| self.club(id).cloned())
            .collect();
        member
    }

    /// Club with the members that reference it, each listed once
    pub(crate) fn club_with_members(&self, club: &Club) -> Club {
        let mut club = club.clone();
        club.members = match club.id.as_deref() {
            Some(id) => self
                .members
                .iter()
                .filter(|record| record.club_ids.iter().any(|club_id| club_id == id))
                .map(|record| record.member.clone())
                .collect(),
            None => Vec::new(),
        };
        club
    }
}

/// Process-wide in-memory store handle; clones share the same state
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }

    /// Number of stored members and clubs
    pub async fn counts(&self) -> (usize, usize) {
        let state = self.state.read().await;
        (state.members.len(), state.clubs.len())
    }
}
