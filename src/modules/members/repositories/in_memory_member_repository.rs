//! In-memory member repository implementation

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::{AppError, Relations, Repository, Result};
use crate::modules::members::models::Member;
use crate::storage::in_memory::MemberRecord;
use crate::storage::InMemoryStore;

/// In-memory implementation of MemberRepository
#[derive(Debug, Clone)]
pub struct InMemoryMemberRepository {
    store: InMemoryStore,
}

impl InMemoryMemberRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Repository<Member> for InMemoryMemberRepository {
    async fn find_by_id(&self, id: &str, relations: Relations) -> Result<Option<Member>> {
        let state = self.store.read().await;
        Ok(state.member(id).map(|record| {
            if relations.is_load() {
                state.member_with_clubs(record)
            } else {
                record.member.clone()
            }
        }))
    }

    async fn find_all(&self, relations: Relations) -> Result<Vec<Member>> {
        let state = self.store.read().await;
        Ok(state
            .members
            .iter()
            .map(|record| {
                if relations.is_load() {
                    state.member_with_clubs(record)
                } else {
                    record.member.clone()
                }
            })
            .collect())
    }

    async fn save(&self, member: Member) -> Result<Member> {
        let mut state = self.store.write().await;
        let id = member.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
        let saved = Member {
            id: Some(id.clone()),
            ..member
        };

        let record = MemberRecord {
            member: saved.without_clubs(),
            club_ids: saved.club_ids(),
        };
        match state.members.iter().position(|existing| existing.member.has_id(&id)) {
            Some(index) => state.members[index] = record,
            None => state.members.push(record),
        }

        Ok(saved)
    }

    async fn remove(&self, member: &Member) -> Result<()> {
        let id = member
            .id
            .as_deref()
            .ok_or_else(|| AppError::internal("Cannot remove a member that was never saved"))?;

        let mut state = self.store.write().await;
        state.members.retain(|record| !record.member.has_id(id));

        Ok(())
    }
}
