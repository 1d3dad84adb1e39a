use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::core::error::AppError;
use crate::modules::memberships::services::MembershipService;

/// One entry of the PUT /members/{member_id}/clubs body
///
/// Only the id is read; any other club fields in the payload are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubReference {
    pub id: String,
}

/// Associate a club with a member
/// POST /members/{member_id}/clubs/{club_id}
pub async fn add_club(
    service: web::Data<Arc<MembershipService>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (member_id, club_id) = path.into_inner();
    let member = service.add_club(&member_id, &club_id).await?;
    Ok(HttpResponse::Created().json(member))
}

/// List the clubs of a member
/// GET /members/{member_id}/clubs
pub async fn list_clubs(
    service: web::Data<Arc<MembershipService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let clubs = service.list_clubs(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(clubs))
}

/// Get one club of a member
/// GET /members/{member_id}/clubs/{club_id}
pub async fn get_club(
    service: web::Data<Arc<MembershipService>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (member_id, club_id) = path.into_inner();
    let club = service.get_club(&member_id, &club_id).await?;
    Ok(HttpResponse::Ok().json(club))
}

/// Replace the clubs of a member
/// PUT /members/{member_id}/clubs
pub async fn replace_clubs(
    service: web::Data<Arc<MembershipService>>,
    path: web::Path<String>,
    request: web::Json<Vec<ClubReference>>,
) -> Result<HttpResponse, AppError> {
    let club_ids: Vec<String> = request.into_inner().into_iter().map(|c| c.id).collect();
    let member = service.replace_clubs(&path.into_inner(), &club_ids).await?;
    Ok(HttpResponse::Ok().json(member))
}

/// Remove a club from a member
/// DELETE /members/{member_id}/clubs/{club_id}
pub async fn remove_club(
    service: web::Data<Arc<MembershipService>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (member_id, club_id) = path.into_inner();
    service.remove_club(&member_id, &club_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure membership routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/members/{member_id}/clubs")
            .route(web::get().to(list_clubs))
            .route(web::put().to(replace_clubs)),
    )
    .service(
        web::resource("/members/{member_id}/clubs/{club_id}")
            .route(web::get().to(get_club))
            .route(web::post().to(add_club))
            .route(web::delete().to(remove_club)),
    );
}
