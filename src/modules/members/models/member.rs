// A member ("socio") and the club references it owns.
//
// The membership relation is stored on this side only: `clubs` is an
// ordered sequence, not a set, so the same club may appear more than once.

use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::clubs::models::Club;

/// Represents a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique member ID (UUID), `None` until persisted
    pub id: Option<String>,

    /// Display name
    pub name: String,

    /// Contact address
    pub email: String,

    pub birth_date: String,

    /// Associated clubs in insertion order (only with `Relations::Load`)
    #[serde(default)]
    pub clubs: Vec<Club>,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            birth_date: birth_date.into(),
            clubs: Vec::new(),
        }
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// First associated club with the given id
    pub fn find_club(&self, club_id: &str) -> Option<&Club> {
        self.clubs.iter().find(|club| club.has_id(club_id))
    }

    /// Ids of the associated clubs, in order, duplicates included
    pub fn club_ids(&self) -> Vec<String> {
        self.clubs.iter().filter_map(|club| club.id.clone()).collect()
    }

    /// Drop every entry referencing `club_id`; returns how many were removed
    pub fn detach_club(&mut self, club_id: &str) -> usize {
        let before = self.clubs.len();
        self.clubs.retain(|club| !club.has_id(club_id));
        before - self.clubs.len()
    }

    /// Copy of the member without its relation
    pub fn without_clubs(&self) -> Self {
        Self {
            clubs: Vec::new(),
            ..self.clone()
        }
    }
}

/// Explicit set of updatable member fields
///
/// Applied over a persisted member; the club references are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMember {
    pub name: String,
    pub email: String,
    pub birth_date: String,
}

impl UpdateMember {
    pub fn apply_to(self, member: &mut Member) {
        member.name = self.name;
        member.email = self.email;
        member.birth_date = self.birth_date;
    }
}

/// Request body for POST /members and PUT /members/{member_id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRequest {
    pub name: String,
    pub email: String,
    pub birth_date: String,
}

impl MemberRequest {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("birth_date", &self.birth_date),
        ] {
            if value.is_empty() {
                return Err(AppError::validation(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }

    pub fn into_member(self) -> Member {
        Member::new(self.name, self.email, self.birth_date)
    }

    pub fn into_update(self) -> UpdateMember {
        UpdateMember {
            name: self.name,
            email: self.email,
            birth_date: self.birth_date,
        }
    }
}
