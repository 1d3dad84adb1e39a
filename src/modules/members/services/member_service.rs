use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{AppError, Relations, Result};
use crate::modules::members::models::{Member, UpdateMember};
use crate::modules::members::repositories::MemberRepository;

pub const MEMBER_NOT_FOUND: &str = "No se encontró la socio con el ID dado";
pub const EMAIL_NOT_PERMITTED: &str =
    "El correo de la socio ingresada no se encuentra dentro de los correoes permitidos";

/// Contact address check
///
/// Only rejects empty values; there is no allow-list behind it.
pub fn is_permitted_email(email: &str) -> bool {
    !email.is_empty()
}

/// Service for member CRUD
pub struct MemberService {
    member_repo: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub fn new(member_repo: Arc<dyn MemberRepository>) -> Self {
        Self { member_repo }
    }

    /// All members with their clubs attached
    pub async fn list_all(&self) -> Result<Vec<Member>> {
        self.member_repo.find_all(Relations::Load).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Member> {
        self.member_repo
            .find_by_id(id, Relations::Load)
            .await?
            .ok_or_else(|| AppError::not_found(MEMBER_NOT_FOUND))
    }

    pub async fn create(&self, member: Member) -> Result<Member> {
        ensure_permitted_email(&member.email)?;

        let created = self.member_repo.save(member).await?;
        info!(member_id = ?created.id, "Member created");

        Ok(created)
    }

    /// Validation runs before the existence lookup; club references survive
    pub async fn update(&self, id: &str, changes: UpdateMember) -> Result<Member> {
        ensure_permitted_email(&changes.email)?;

        let mut member = self
            .member_repo
            .find_by_id(id, Relations::Load)
            .await?
            .ok_or_else(|| AppError::not_found(MEMBER_NOT_FOUND))?;

        changes.apply_to(&mut member);
        let updated = self.member_repo.save(member).await?;
        info!(member_id = %id, "Member updated");

        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let member = self
            .member_repo
            .find_by_id(id, Relations::Skip)
            .await?
            .ok_or_else(|| AppError::not_found(MEMBER_NOT_FOUND))?;

        self.member_repo.remove(&member).await?;
        info!(member_id = %id, "Member deleted");

        Ok(())
    }
}

fn ensure_permitted_email(email: &str) -> Result<()> {
    if !is_permitted_email(email) {
        warn!("Rejected member contact address");
        return Err(AppError::precondition_failed(EMAIL_NOT_PERMITTED));
    }
    Ok(())
}
