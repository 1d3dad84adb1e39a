// A club members can join. Its member list is a derived view of the
// member-owned references and is only filled when relations are loaded.

use serde::{Deserialize, Serialize};
use url::{Host, Url};

use crate::core::{AppError, Result};
use crate::modules::members::models::Member;

/// Represents a club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// Unique club ID (UUID), `None` until persisted
    pub id: Option<String>,

    pub name: String,

    /// Founding date as supplied by the client
    pub founding_date: String,

    /// Image reference
    pub image: String,

    /// URL-shaped description
    pub description: String,

    /// Members referencing this club (only with `Relations::Load`)
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Club {
    pub fn new(
        name: impl Into<String>,
        founding_date: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            founding_date: founding_date.into(),
            image: image.into(),
            description: description.into(),
            members: Vec::new(),
        }
    }

    /// Returns true when this club carries the given id
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Copy of the club without its relation
    pub fn without_members(&self) -> Self {
        Self {
            members: Vec::new(),
            ..self.clone()
        }
    }
}

/// Explicit set of updatable club fields
///
/// Applied over a persisted club; the members relation is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateClub {
    pub name: String,
    pub founding_date: String,
    pub image: String,
    pub description: String,
}

impl UpdateClub {
    pub fn apply_to(self, club: &mut Club) {
        club.name = self.name;
        club.founding_date = self.founding_date;
        club.image = self.image;
        club.description = self.description;
    }
}

/// Request body for POST /clubs and PUT /clubs/{club_id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubRequest {
    pub name: String,
    pub founding_date: String,
    pub image: String,
    pub description: String,
}

impl ClubRequest {
    /// Shape checks only; business rules live in `ClubService`
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("founding_date", &self.founding_date),
            ("image", &self.image),
            ("description", &self.description),
        ] {
            if value.is_empty() {
                return Err(AppError::validation(format!("{} must not be empty", field)));
            }
        }

        if !is_url(&self.description) {
            return Err(AppError::validation("description must be a URL"));
        }

        Ok(())
    }

    pub fn into_club(self) -> Club {
        Club::new(self.name, self.founding_date, self.image, self.description)
    }

    pub fn into_update(self) -> UpdateClub {
        UpdateClub {
            name: self.name,
            founding_date: self.founding_date,
            image: self.image,
            description: self.description,
        }
    }
}

/// URL check for club descriptions
///
/// The scheme is optional (http, https or ftp when present); the host needs
/// a top-level domain unless it is an IP address. Whitespace and angle
/// brackets are never accepted, even where `Url::parse` would encode them.
fn is_url(value: &str) -> bool {
    if value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '<' || c == '>') {
        return false;
    }

    let with_protocol = if value.contains("://") {
        value.to_string()
    } else {
        format!("https://{}", value)
    };

    let Ok(parsed) = Url::parse(&with_protocol) else {
        return false;
    };

    if !matches!(parsed.scheme(), "http" | "https" | "ftp") {
        return false;
    }

    match parsed.host() {
        Some(Host::Domain(domain)) => has_tld(domain),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

fn has_tld(domain: &str) -> bool {
    let mut labels = domain.trim_end_matches('.').rsplit('.');
    let tld = labels.next().unwrap_or_default();
    let has_label = labels.next().is_some_and(|label| !label.is_empty());

    has_label
        && tld.len() >= 2
        && (tld.chars().all(char::is_alphabetic) || tld.starts_with("xn--"))
}
