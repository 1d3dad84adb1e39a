use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{AppError, Relations, Result};
use crate::modules::clubs::models::{Club, UpdateClub};
use crate::modules::clubs::repositories::ClubRepository;

pub const CLUB_NOT_FOUND: &str = "No se encontró el club con el ID dado";
pub const INVALID_CLUB_NAME: &str = "El nombre del club debe tener mas de 10 caracteres";

/// Club names must be longer than ten characters
pub fn is_valid_club_name(name: &str) -> bool {
    name.chars().count() > 10
}

/// Service for club CRUD
pub struct ClubService {
    club_repo: Arc<dyn ClubRepository>,
}

impl ClubService {
    pub fn new(club_repo: Arc<dyn ClubRepository>) -> Self {
        Self { club_repo }
    }

    /// All clubs with their members attached
    pub async fn list_all(&self) -> Result<Vec<Club>> {
        self.club_repo.find_all(Relations::Load).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Club> {
        self.club_repo
            .find_by_id(id, Relations::Load)
            .await?
            .ok_or_else(|| AppError::not_found(CLUB_NOT_FOUND))
    }

    pub async fn create(&self, club: Club) -> Result<Club> {
        ensure_valid_name(&club.name)?;

        let created = self.club_repo.save(club).await?;
        info!(club_id = ?created.id, name = %created.name, "Club created");

        Ok(created)
    }

    /// Validation runs before the existence lookup
    pub async fn update(&self, id: &str, changes: UpdateClub) -> Result<Club> {
        ensure_valid_name(&changes.name)?;

        let mut club = self
            .club_repo
            .find_by_id(id, Relations::Skip)
            .await?
            .ok_or_else(|| AppError::not_found(CLUB_NOT_FOUND))?;

        changes.apply_to(&mut club);
        let updated = self.club_repo.save(club).await?;
        info!(club_id = %id, "Club updated");

        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let club = self
            .club_repo
            .find_by_id(id, Relations::Skip)
            .await?
            .ok_or_else(|| AppError::not_found(CLUB_NOT_FOUND))?;

        self.club_repo.remove(&club).await?;
        info!(club_id = %id, "Club deleted");

        Ok(())
    }
}

fn ensure_valid_name(name: &str) -> Result<()> {
    if !is_valid_club_name(name) {
        warn!(name = %name, "Rejected club name");
        return Err(AppError::precondition_failed(INVALID_CLUB_NAME));
    }
    Ok(())
}
