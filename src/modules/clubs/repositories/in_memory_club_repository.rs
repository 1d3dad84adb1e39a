//! In-memory club repository implementation

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::{AppError, Relations, Repository, Result};
use crate::modules::clubs::models::Club;
use crate::storage::InMemoryStore;

/// In-memory implementation of ClubRepository
#[derive(Debug, Clone)]
pub struct InMemoryClubRepository {
    store: InMemoryStore,
}

impl InMemoryClubRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Repository<Club> for InMemoryClubRepository {
    async fn find_by_id(&self, id: &str, relations: Relations) -> Result<Option<Club>> {
        let state = self.store.read().await;
        Ok(state.club(id).map(|club| {
            if relations.is_load() {
                state.club_with_members(club)
            } else {
                club.clone()
            }
        }))
    }

    async fn find_all(&self, relations: Relations) -> Result<Vec<Club>> {
        let state = self.store.read().await;
        Ok(state
            .clubs
            .iter()
            .map(|club| {
                if relations.is_load() {
                    state.club_with_members(club)
                } else {
                    club.clone()
                }
            })
            .collect())
    }

    async fn save(&self, club: Club) -> Result<Club> {
        let mut state = self.store.write().await;
        let id = club.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
        let saved = Club {
            id: Some(id.clone()),
            ..club
        };

        let stored = saved.without_members();
        match state.clubs.iter().position(|existing| existing.has_id(&id)) {
            Some(index) => state.clubs[index] = stored,
            None => state.clubs.push(stored),
        }

        Ok(saved)
    }

    async fn remove(&self, club: &Club) -> Result<()> {
        let id = club
            .id
            .as_deref()
            .ok_or_else(|| AppError::internal("Cannot remove a club that was never saved"))?;

        let mut state = self.store.write().await;
        state.clubs.retain(|existing| !existing.has_id(id));
        // Same effect as the join-table cascade in MySQL
        for record in &mut state.members {
            record.club_ids.retain(|club_id| club_id != id);
        }

        Ok(())
    }
}
