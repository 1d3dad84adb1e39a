// Coordinates the many-to-many relation between members and clubs.
//
// Both endpoints are checked before anything is written. Where an operation
// takes a (member, club) pair the club is looked up first, so an unknown
// club wins over an unknown member. The member's club list is a sequence:
// adding the same club twice keeps both entries.

use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{AppError, Relations, Result};
use crate::modules::clubs::models::Club;
use crate::modules::clubs::repositories::ClubRepository;
use crate::modules::members::models::Member;
use crate::modules::members::repositories::MemberRepository;

pub const CLUB_NOT_FOUND: &str = "No se encontró el club con el Id dado";
pub const MEMBER_NOT_FOUND: &str = "No se encontró la socio con el Id dado";
/// Lower-case variant raised by `add_club` only
pub const MEMBER_NOT_FOUND_ON_ADD: &str = "no se encontró la socio con el Id dado";
pub const CLUB_NOT_ASSOCIATED: &str = "El club no se encuentra asociado a la socio";

/// Service for member/club association management
pub struct MembershipService {
    member_repo: Arc<dyn MemberRepository>,
    club_repo: Arc<dyn ClubRepository>,
}

impl MembershipService {
    pub fn new(member_repo: Arc<dyn MemberRepository>, club_repo: Arc<dyn ClubRepository>) -> Self {
        Self {
            member_repo,
            club_repo,
        }
    }

    /// Append a club to the member's clubs and persist
    pub async fn add_club(&self, member_id: &str, club_id: &str) -> Result<Member> {
        let club = self.require_club(club_id).await?;
        let mut member = self.require_member(member_id, MEMBER_NOT_FOUND_ON_ADD).await?;

        member.clubs.push(club);
        let saved = self.member_repo.save(member).await?;
        info!(
            member_id = %member_id,
            club_id = %club_id,
            clubs = saved.clubs.len(),
            "Club added to member"
        );

        Ok(saved)
    }

    /// The member's clubs in stored order
    pub async fn list_clubs(&self, member_id: &str) -> Result<Vec<Club>> {
        let member = self.require_member(member_id, MEMBER_NOT_FOUND).await?;
        Ok(member.clubs)
    }

    /// One club of the member
    pub async fn get_club(&self, member_id: &str, club_id: &str) -> Result<Club> {
        self.require_club(club_id).await?;
        let member = self.require_member(member_id, MEMBER_NOT_FOUND).await?;

        member
            .find_club(club_id)
            .cloned()
            .ok_or_else(|| not_associated(member_id, club_id))
    }

    /// Overwrite the member's clubs with `club_ids`, in order
    ///
    /// Every id is checked before anything is written; the first unknown one
    /// aborts the call.
    pub async fn replace_clubs(&self, member_id: &str, club_ids: &[String]) -> Result<Member> {
        let mut member = self.require_member(member_id, MEMBER_NOT_FOUND).await?;

        let mut clubs = Vec::with_capacity(club_ids.len());
        for club_id in club_ids {
            clubs.push(self.require_club(club_id).await?);
        }

        member.clubs = clubs;
        let saved = self.member_repo.save(member).await?;
        info!(
            member_id = %member_id,
            clubs = saved.clubs.len(),
            "Member clubs replaced"
        );

        Ok(saved)
    }

    /// Drop every entry of the club from the member's clubs
    pub async fn remove_club(&self, member_id: &str, club_id: &str) -> Result<()> {
        self.require_club(club_id).await?;
        let mut member = self.require_member(member_id, MEMBER_NOT_FOUND).await?;

        if member.detach_club(club_id) == 0 {
            return Err(not_associated(member_id, club_id));
        }

        self.member_repo.save(member).await?;
        info!(member_id = %member_id, club_id = %club_id, "Club removed from member");

        Ok(())
    }

    async fn require_club(&self, club_id: &str) -> Result<Club> {
        self.club_repo
            .find_by_id(club_id, Relations::Skip)
            .await?
            .ok_or_else(|| AppError::not_found(CLUB_NOT_FOUND))
    }

    async fn require_member(&self, member_id: &str, message: &str) -> Result<Member> {
        self.member_repo
            .find_by_id(member_id, Relations::Load)
            .await?
            .ok_or_else(|| AppError::not_found(message))
    }
}

fn not_associated(member_id: &str, club_id: &str) -> AppError {
    warn!(member_id = %member_id, club_id = %club_id, "Club not associated with member");
    AppError::precondition_failed(CLUB_NOT_ASSOCIATED)
}
