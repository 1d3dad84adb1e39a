// MySQL persistence for members and the member-owned club references
//
// Club references live in `member_clubs`, keyed by (member_id, sort_order)
// so the same club can be referenced twice. Saving a member rewrites its
// references in one transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, Transaction};
use uuid::Uuid;

use crate::core::{AppError, Relations, Repository, Result};
use crate::modules::clubs::models::Club;
use crate::modules::clubs::repositories::club_repository::ClubRow;
use crate::modules::members::models::Member;

/// Entity store for members
pub trait MemberRepository: Repository<Member> {}

impl<T: Repository<Member>> MemberRepository for T {}

/// Repository for member database operations
#[derive(Clone)]
pub struct MySqlMemberRepository {
    pool: MySqlPool,
}

impl MySqlMemberRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn load_clubs(&self, member_id: &str) -> Result<Vec<Club>> {
        let rows = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT c.id, c.name, c.founding_date, c.image, c.description
            FROM member_clubs mc
            JOIN clubs c ON c.id = mc.club_id
            WHERE mc.member_id = ?
            ORDER BY mc.sort_order
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ClubRow::into_club).collect())
    }

    /// Replace the stored club references of a member within a transaction
    async fn write_club_refs(
        &self,
        tx: &mut Transaction<'_, MySql>,
        member_id: &str,
        club_ids: &[String],
    ) -> Result<()> {
        sqlx::query("DELETE FROM member_clubs WHERE member_id = ?")
            .bind(member_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to clear member clubs: {}", e)))?;

        for (position, club_id) in club_ids.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO member_clubs (member_id, sort_order, club_id)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(member_id)
            .bind(position as u32)
            .bind(club_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store member club: {}", e)))?;
        }

        Ok(())
    }
}

#[async_trait]
impl Repository<Member> for MySqlMemberRepository {
    async fn find_by_id(&self, id: &str, relations: Relations) -> Result<Option<Member>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name, email, birth_date
            FROM members
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut member = row.into_member();
        if relations.is_load() {
            member.clubs = self.load_clubs(id).await?;
        }

        Ok(Some(member))
    }

    async fn find_all(&self, relations: Relations) -> Result<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name, email, birth_date
            FROM members
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut members: Vec<Member> = rows.into_iter().map(MemberRow::into_member).collect();
        if !relations.is_load() {
            return Ok(members);
        }

        let club_rows = sqlx::query_as::<_, MemberClubRow>(
            r#"
            SELECT mc.member_id, c.id, c.name, c.founding_date, c.image, c.description
            FROM member_clubs mc
            JOIN clubs c ON c.id = mc.club_id
            ORDER BY mc.member_id, mc.sort_order
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_member: HashMap<String, Vec<Club>> = HashMap::new();
        for row in club_rows {
            let (member_id, club) = row.split();
            by_member.entry(member_id).or_default().push(club);
        }

        for member in &mut members {
            if let Some(clubs) = member.id.as_ref().and_then(|id| by_member.remove(id)) {
                member.clubs = clubs;
            }
        }

        Ok(members)
    }

    async fn save(&self, member: Member) -> Result<Member> {
        let id = member.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to start transaction: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO members (id, name, email, birth_date)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                name = VALUES(name),
                email = VALUES(email),
                birth_date = VALUES(birth_date)
            "#,
        )
        .bind(&id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.birth_date)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to save member: {}", e)))?;

        self.write_club_refs(&mut tx, &id, &member.club_ids()).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to commit transaction: {}", e)))?;

        Ok(Member {
            id: Some(id),
            ..member
        })
    }

    async fn remove(&self, member: &Member) -> Result<()> {
        let id = member
            .id
            .as_deref()
            .ok_or_else(|| AppError::internal("Cannot remove a member that was never saved"))?;

        // member_clubs rows go with it (ON DELETE CASCADE)
        sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to remove member: {}", e)))?;

        Ok(())
    }
}

// Helper structs for database mapping

#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: String,
    name: String,
    email: String,
    birth_date: String,
}

impl MemberRow {
    fn into_member(self) -> Member {
        Member {
            id: Some(self.id),
            name: self.name,
            email: self.email,
            birth_date: self.birth_date,
            clubs: Vec::new(),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MemberClubRow {
    member_id: String,
    id: String,
    name: String,
    founding_date: String,
    image: String,
    description: String,
}

impl MemberClubRow {
    fn split(self) -> (String, Club) {
        let club = ClubRow {
            id: self.id,
            name: self.name,
            founding_date: self.founding_date,
            image: self.image,
            description: self.description,
        }
        .into_club();
        (self.member_id, club)
    }
}
