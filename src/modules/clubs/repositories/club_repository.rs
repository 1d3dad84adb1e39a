// MySQL persistence for clubs
//
// The club side never owns membership rows; loading relations reads the
// member-owned `member_clubs` join table in reverse.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::{AppError, Relations, Repository, Result};
use crate::modules::clubs::models::Club;
use crate::modules::members::models::Member;

/// Entity store for clubs
pub trait ClubRepository: Repository<Club> {}

impl<T: Repository<Club>> ClubRepository for T {}

/// Repository for club database operations
#[derive(Clone)]
pub struct MySqlClubRepository {
    pool: MySqlPool,
}

impl MySqlClubRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn load_members(&self, club_id: &str) -> Result<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT m.id, m.name, m.email, m.birth_date
            FROM members m
            WHERE m.id IN (SELECT mc.member_id FROM member_clubs mc WHERE mc.club_id = ?)
            ORDER BY m.created_at, m.id
            "#,
        )
        .bind(club_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MemberRow::into_member).collect())
    }
}

#[async_trait]
impl Repository<Club> for MySqlClubRepository {
    async fn find_by_id(&self, id: &str, relations: Relations) -> Result<Option<Club>> {
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT id, name, founding_date, image, description
            FROM clubs
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut club = row.into_club();
        if relations.is_load() {
            club.members = self.load_members(id).await?;
        }

        Ok(Some(club))
    }

    async fn find_all(&self, relations: Relations) -> Result<Vec<Club>> {
        let rows = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT id, name, founding_date, image, description
            FROM clubs
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut clubs: Vec<Club> = rows.into_iter().map(ClubRow::into_club).collect();
        if !relations.is_load() {
            return Ok(clubs);
        }

        let member_rows = sqlx::query_as::<_, ClubMemberRow>(
            r#"
            SELECT DISTINCT mc.club_id, m.id, m.name, m.email, m.birth_date
            FROM member_clubs mc
            JOIN members m ON m.id = mc.member_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_club: HashMap<String, Vec<Member>> = HashMap::new();
        for row in member_rows {
            let (club_id, member) = row.split();
            by_club.entry(club_id).or_default().push(member);
        }

        for club in &mut clubs {
            if let Some(members) = club.id.as_ref().and_then(|id| by_club.remove(id)) {
                club.members = members;
            }
        }

        Ok(clubs)
    }

    async fn save(&self, club: Club) -> Result<Club> {
        let id = club.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());

        sqlx::query(
            r#"
            INSERT INTO clubs (id, name, founding_date, image, description)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                name = VALUES(name),
                founding_date = VALUES(founding_date),
                image = VALUES(image),
                description = VALUES(description)
            "#,
        )
        .bind(&id)
        .bind(&club.name)
        .bind(&club.founding_date)
        .bind(&club.image)
        .bind(&club.description)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to save club: {}", e)))?;

        Ok(Club {
            id: Some(id),
            ..club
        })
    }

    async fn remove(&self, club: &Club) -> Result<()> {
        let id = club
            .id
            .as_deref()
            .ok_or_else(|| AppError::internal("Cannot remove a club that was never saved"))?;

        // member_clubs rows go with it (ON DELETE CASCADE)
        sqlx::query("DELETE FROM clubs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to remove club: {}", e)))?;

        Ok(())
    }
}

// Helper structs for database mapping

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ClubRow {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) founding_date: String,
    pub(crate) image: String,
    pub(crate) description: String,
}

impl ClubRow {
    pub(crate) fn into_club(self) -> Club {
        Club {
            id: Some(self.id),
            name: self.name,
            founding_date: self.founding_date,
            image: self.image,
            description: self.description,
            members: Vec::new(),
        }
    }
}

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
struct ClubMemberRow {
    club_id: String,
    id: String,
    name: String,
    email: String,
    birth_date: String,
}

impl ClubMemberRow {
    fn split(self) -> (String, Member) {
        let member = MemberRow {
            id: self.id,
            name: self.name,
            email: self.email,
            birth_date: self.birth_date,
        }
        .into_member();
        (self.club_id, member)
    }
}
