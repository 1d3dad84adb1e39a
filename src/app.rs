//! Application wiring
//!
//! Repositories are built once per process and handed to the services at
//! construction; the services are shared across actix workers.

use std::sync::Arc;

use actix_web::{web, HttpRequest};
use sqlx::MySqlPool;

use crate::core::AppError;
use crate::modules::clubs::{ClubRepository, ClubService, InMemoryClubRepository, MySqlClubRepository};
use crate::modules::members::{
    InMemoryMemberRepository, MemberRepository, MemberService, MySqlMemberRepository,
};
use crate::modules::memberships::MembershipService;
use crate::modules::{clubs, health, members, memberships};
use crate::storage::InMemoryStore;

/// Shared services plus the optional database pool
#[derive(Clone)]
pub struct AppState {
    pub clubs: Arc<ClubService>,
    pub members: Arc<MemberService>,
    pub memberships: Arc<MembershipService>,
    pub pool: Option<MySqlPool>,
}

impl AppState {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        club_repo: Arc<dyn ClubRepository>,
        pool: Option<MySqlPool>,
    ) -> Self {
        Self {
            clubs: Arc::new(ClubService::new(club_repo.clone())),
            members: Arc::new(MemberService::new(member_repo.clone())),
            memberships: Arc::new(MembershipService::new(member_repo, club_repo)),
            pool,
        }
    }

    /// Services backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self::new(
            Arc::new(InMemoryMemberRepository::new(store.clone())),
            Arc::new(InMemoryClubRepository::new(store)),
            None,
        )
    }

    /// Services backed by MySQL
    pub fn mysql(pool: MySqlPool) -> Self {
        Self::new(
            Arc::new(MySqlMemberRepository::new(pool.clone())),
            Arc::new(MySqlClubRepository::new(pool.clone())),
            Some(pool),
        )
    }

    pub fn storage_name(&self) -> &'static str {
        if self.pool.is_some() {
            "mysql"
        } else {
            "memory"
        }
    }

    /// Register shared data and every route
    ///
    /// Membership routes go first so the nested `/members/{id}/clubs` paths
    /// are matched before the member resources.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.clubs.clone()))
            .app_data(web::Data::new(self.members.clone()))
            .app_data(web::Data::new(self.memberships.clone()))
            .app_data(json_config());

        if let Some(pool) = &self.pool {
            cfg.app_data(web::Data::new(pool.clone()));
        }

        cfg.configure(health::configure)
            .configure(memberships::controllers::configure)
            .configure(members::controllers::configure)
            .configure(clubs::controllers::configure);
    }
}

/// Malformed JSON bodies surface as `AppError::Validation`
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::validation(err.to_string()).into()
    })
}
