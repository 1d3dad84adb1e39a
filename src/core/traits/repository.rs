use async_trait::async_trait;

use crate::core::Result;

/// Whether a lookup should attach the entity's relation
///
/// Each entity has exactly one relation: a member's clubs, a club's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relations {
    #[default]
    Skip,
    Load,
}

impl Relations {
    pub fn is_load(self) -> bool {
        matches!(self, Relations::Load)
    }
}

/// Entity store contract shared by every backend
///
/// `save` inserts when the entity has no id (or an unknown one) and
/// updates in place otherwise, returning the persisted entity with its id
/// populated.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Find entity by ID
    async fn find_by_id(&self, id: &str, relations: Relations) -> Result<Option<T>>;

    /// List all entities in insertion order
    async fn find_all(&self, relations: Relations) -> Result<Vec<T>>;

    /// Insert or update an entity
    async fn save(&self, entity: T) -> Result<T>;

    /// Delete an entity
    async fn remove(&self, entity: &T) -> Result<()>;
}
