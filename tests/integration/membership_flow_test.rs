// Member/club association flows over HTTP
//
// Mirrors the service-level scenarios: a member seeded with five clubs,
// repeated adds, replacement, removal and every not-found/not-associated
// branch with its exact message.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test;
use helpers::*;

const CLUB_NOT_FOUND: &str = "No se encontró el club con el Id dado";
const MEMBER_NOT_FOUND: &str = "No se encontró la socio con el Id dado";
const MEMBER_NOT_FOUND_ON_ADD: &str = "no se encontró la socio con el Id dado";
const CLUB_NOT_ASSOCIATED: &str = "El club no se encuentra asociado a la socio";

/// Member associated with five fresh clubs, plus the club ids in order
async fn seeded_member<S>(app: &S) -> (String, Vec<String>)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let member_id = create_member(app, TestDataFactory::member_payload()).await;
    let mut club_ids = Vec::new();
    for _ in 0..5 {
        let club_id = create_club(app, TestDataFactory::club_payload()).await;
        add_club(app, &member_id, &club_id).await;
        club_ids.push(club_id);
    }
    (member_id, club_ids)
}

fn ids(clubs: &serde_json::Value) -> Vec<String> {
    clubs
        .as_array()
        .expect("club array")
        .iter()
        .filter_map(|club| club["id"].as_str().map(str::to_string))
        .collect()
}

#[actix_web::test]
async fn test_add_club_returns_member_with_club() {
    let app = init_app().await;
    let payload = TestDataFactory::club_payload();
    let club_id = create_club(&app, payload.clone()).await;
    let member_id = create_member(&app, TestDataFactory::member_payload()).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post().uri(&format!("/members/{}/clubs/{}", member_id, club_id)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], member_id.as_str());
    let clubs = body["clubs"].as_array().unwrap();
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0]["name"], payload["name"]);
    assert_eq!(clubs[0]["founding_date"], payload["founding_date"]);
    assert_eq!(clubs[0]["image"], payload["image"]);
    assert_eq!(clubs[0]["description"], payload["description"]);
}

#[actix_web::test]
async fn test_add_same_club_twice_keeps_both_entries() {
    let app = init_app().await;
    let club_id = create_club(&app, TestDataFactory::club_payload()).await;
    let member_id = create_member(&app, TestDataFactory::member_payload()).await;

    add_club(&app, &member_id, &club_id).await;
    add_club(&app, &member_id, &club_id).await;

    let (_, clubs) = send(
        &app,
        test::TestRequest::get().uri(&format!("/members/{}/clubs", member_id)),
    )
    .await;
    assert_eq!(ids(&clubs), vec![club_id.clone(), club_id]);
}

#[actix_web::test]
async fn test_add_unknown_club_is_not_found() {
    let app = init_app().await;
    let member_id = create_member(&app, TestDataFactory::member_payload()).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post().uri(&format!("/members/{}/clubs/0", member_id)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), CLUB_NOT_FOUND);
}

#[actix_web::test]
async fn test_add_club_to_unknown_member_uses_lower_case_message() {
    let app = init_app().await;
    let club_id = create_club(&app, TestDataFactory::club_payload()).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post().uri(&format!("/members/0/clubs/{}", club_id)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), MEMBER_NOT_FOUND_ON_ADD);
}

#[actix_web::test]
async fn test_unknown_club_wins_over_unknown_member() {
    let app = init_app().await;

    let (status, body) = send(&app, test::TestRequest::post().uri("/members/0/clubs/0")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), CLUB_NOT_FOUND);

    let (_, body) = send(&app, test::TestRequest::get().uri("/members/0/clubs/0")).await;
    assert_eq!(error_message(&body), CLUB_NOT_FOUND);

    let (_, body) = send(&app, test::TestRequest::delete().uri("/members/0/clubs/0")).await;
    assert_eq!(error_message(&body), CLUB_NOT_FOUND);
}

#[actix_web::test]
async fn test_list_clubs_of_seeded_member() {
    let app = init_app().await;
    let (member_id, club_ids) = seeded_member(&app).await;

    let (status, clubs) = send(
        &app,
        test::TestRequest::get().uri(&format!("/members/{}/clubs", member_id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&clubs), club_ids);
}

#[actix_web::test]
async fn test_list_clubs_of_unknown_member_is_not_found() {
    let app = init_app().await;

    let (status, body) = send(&app, test::TestRequest::get().uri("/members/0/clubs")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), MEMBER_NOT_FOUND);
}

#[actix_web::test]
async fn test_get_associated_club() {
    let app = init_app().await;
    let (member_id, club_ids) = seeded_member(&app).await;

    let (status, body) = send(
        &app,
        test::TestRequest::get().uri(&format!("/members/{}/clubs/{}", member_id, club_ids[2])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], club_ids[2].as_str());
}

#[actix_web::test]
async fn test_get_club_of_unknown_member_is_not_found() {
    let app = init_app().await;
    let club_id = create_club(&app, TestDataFactory::club_payload()).await;

    let (status, body) = send(
        &app,
        test::TestRequest::get().uri(&format!("/members/0/clubs/{}", club_id)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), MEMBER_NOT_FOUND);
}

#[actix_web::test]
async fn test_get_unassociated_club_is_precondition_failed() {
    let app = init_app().await;
    let (member_id, _) = seeded_member(&app).await;
    let other = create_club(&app, TestDataFactory::club_payload()).await;

    let (status, body) = send(
        &app,
        test::TestRequest::get().uri(&format!("/members/{}/clubs/{}", member_id, other)),
    )
    .await;

    assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    assert_eq!(error_message(&body), CLUB_NOT_ASSOCIATED);
}

#[actix_web::test]
async fn test_replace_clubs() {
    let app = init_app().await;
    let (member_id, club_ids) = seeded_member(&app).await;
    let fresh = create_club(&app, TestDataFactory::club_payload()).await;
    let new_ids = [fresh.as_str(), club_ids[0].as_str()];

    let (status, body) = send(
        &app,
        test::TestRequest::put()
            .uri(&format!("/members/{}/clubs", member_id))
            .set_json(TestDataFactory::club_references(&new_ids)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["clubs"]), new_ids);
    assert!(body["clubs"][0]["name"].as_str().is_some());

    let (_, clubs) = send(
        &app,
        test::TestRequest::get().uri(&format!("/members/{}/clubs", member_id)),
    )
    .await;
    assert_eq!(ids(&clubs), new_ids);
}

#[actix_web::test]
async fn test_replace_with_empty_list_clears_clubs() {
    let app = init_app().await;
    let (member_id, _) = seeded_member(&app).await;

    let (status, body) = send(
        &app,
        test::TestRequest::put()
            .uri(&format!("/members/{}/clubs", member_id))
            .set_json(serde_json::json!([])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clubs"], serde_json::json!([]));
}

#[actix_web::test]
async fn test_replace_with_unknown_club_changes_nothing() {
    let app = init_app().await;
    let (member_id, club_ids) = seeded_member(&app).await;
    let fresh = create_club(&app, TestDataFactory::club_payload()).await;

    let (status, body) = send(
        &app,
        test::TestRequest::put()
            .uri(&format!("/members/{}/clubs", member_id))
            .set_json(TestDataFactory::club_references(&[fresh.as_str(), "0"])),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), CLUB_NOT_FOUND);

    let (_, clubs) = send(
        &app,
        test::TestRequest::get().uri(&format!("/members/{}/clubs", member_id)),
    )
    .await;
    assert_eq!(ids(&clubs), club_ids);
}

#[actix_web::test]
async fn test_replace_clubs_of_unknown_member_is_not_found() {
    let app = init_app().await;
    let club_id = create_club(&app, TestDataFactory::club_payload()).await;

    let (status, body) = send(
        &app,
        test::TestRequest::put()
            .uri("/members/0/clubs")
            .set_json(TestDataFactory::club_references(&[club_id.as_str()])),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), MEMBER_NOT_FOUND);
}

#[actix_web::test]
async fn test_remove_club() {
    let app = init_app().await;
    let (member_id, club_ids) = seeded_member(&app).await;
    let uri = format!("/members/{}/clubs/{}", member_id, club_ids[0]);

    let (status, body) = send(&app, test::TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (_, clubs) = send(
        &app,
        test::TestRequest::get().uri(&format!("/members/{}/clubs", member_id)),
    )
    .await;
    assert_eq!(ids(&clubs), club_ids[1..].to_vec());

    let (status, body) = send(&app, test::TestRequest::get().uri(&uri)).await;
    assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    assert_eq!(error_message(&body), CLUB_NOT_ASSOCIATED);
}

#[actix_web::test]
async fn test_remove_drops_every_duplicate() {
    let app = init_app().await;
    let club_id = create_club(&app, TestDataFactory::club_payload()).await;
    let member_id = create_member(&app, TestDataFactory::member_payload()).await;
    add_club(&app, &member_id, &club_id).await;
    add_club(&app, &member_id, &club_id).await;

    let (status, _) = send(
        &app,
        test::TestRequest::delete().uri(&format!("/members/{}/clubs/{}", member_id, club_id)),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, clubs) = send(
        &app,
        test::TestRequest::get().uri(&format!("/members/{}/clubs", member_id)),
    )
    .await;
    assert!(ids(&clubs).is_empty());
}

#[actix_web::test]
async fn test_remove_unassociated_club_is_precondition_failed() {
    let app = init_app().await;
    let (member_id, club_ids) = seeded_member(&app).await;
    let other = create_club(&app, TestDataFactory::club_payload()).await;

    let (status, body) = send(
        &app,
        test::TestRequest::delete().uri(&format!("/members/{}/clubs/{}", member_id, other)),
    )
    .await;

    assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    assert_eq!(error_message(&body), CLUB_NOT_ASSOCIATED);

    let (_, clubs) = send(
        &app,
        test::TestRequest::get().uri(&format!("/members/{}/clubs", member_id)),
    )
    .await;
    assert_eq!(ids(&clubs), club_ids);
}

#[actix_web::test]
async fn test_remove_club_from_unknown_member_is_not_found() {
    let app = init_app().await;
    let club_id = create_club(&app, TestDataFactory::club_payload()).await;

    let (status, body) = send(
        &app,
        test::TestRequest::delete().uri(&format!("/members/0/clubs/{}", club_id)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), MEMBER_NOT_FOUND);
}
