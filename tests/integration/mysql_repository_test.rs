// MySQL repository round-trips
//
// Run with a reachable test database:
//   TEST_DATABASE_URL=mysql://... cargo test --test mysql_repository_test -- --ignored

#[path = "../helpers/mod.rs"]
mod helpers;

use clubhouse::core::{Relations, Repository};
use clubhouse::modules::clubs::{Club, MySqlClubRepository};
use clubhouse::modules::members::{Member, MySqlMemberRepository};
use helpers::*;
use uuid::Uuid;

fn club() -> Club {
    Club::new(
        format!("Club Social {}", Uuid::new_v4()),
        "1905-08-21",
        "https://img.example.com/club.png",
        "https://club.example.com",
    )
}

fn member() -> Member {
    Member::new(format!("Socio {}", Uuid::new_v4()), "socio@example.com", "1990-01-01")
}

#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_club_save_and_find() {
    let pool = create_test_pool().await;
    let repo = MySqlClubRepository::new(pool);

    let saved = repo.save(club()).await.unwrap();
    let id = saved.id.clone().unwrap();

    let found = repo.find_by_id(&id, Relations::Skip).await.unwrap().unwrap();
    assert_eq!(found.name, saved.name);
    assert!(found.members.is_empty());

    let mut changed = found.clone();
    changed.name = format!("{} renombrado", changed.name);
    repo.save(changed.clone()).await.unwrap();

    let found = repo.find_by_id(&id, Relations::Skip).await.unwrap().unwrap();
    assert_eq!(found.name, changed.name);

    repo.remove(&found).await.unwrap();
    assert!(repo.find_by_id(&id, Relations::Skip).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_member_clubs_keep_order_and_duplicates() {
    let pool = create_test_pool().await;
    let clubs = MySqlClubRepository::new(pool.clone());
    let members = MySqlMemberRepository::new(pool);

    let a = clubs.save(club()).await.unwrap();
    let b = clubs.save(club()).await.unwrap();

    let mut m = member();
    m.clubs = vec![b.clone(), a.clone(), b.clone()];
    let saved = members.save(m).await.unwrap();
    let member_id = saved.id.clone().unwrap();

    let found = members
        .find_by_id(&member_id, Relations::Load)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        found.club_ids(),
        vec![b.id.clone().unwrap(), a.id.clone().unwrap(), b.id.clone().unwrap()]
    );

    let club_a = clubs
        .find_by_id(a.id.as_deref().unwrap(), Relations::Load)
        .await
        .unwrap()
        .unwrap();
    assert!(club_a.members.iter().any(|m| m.has_id(&member_id)));

    // Deleting a club cascades its join rows
    clubs.remove(&b).await.unwrap();
    let found = members
        .find_by_id(&member_id, Relations::Load)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.club_ids(), vec![a.id.clone().unwrap()]);

    members.remove(&found).await.unwrap();
    clubs.remove(&a).await.unwrap();
    assert!(members
        .find_by_id(&member_id, Relations::Skip)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_member_update_rewrites_references() {
    let pool = create_test_pool().await;
    let clubs = MySqlClubRepository::new(pool.clone());
    let members = MySqlMemberRepository::new(pool);

    let a = clubs.save(club()).await.unwrap();
    let b = clubs.save(club()).await.unwrap();

    let mut m = member();
    m.clubs = vec![a.clone()];
    let mut saved = members.save(m).await.unwrap();

    saved.clubs = vec![b.clone()];
    saved.email = "otro@example.com".to_string();
    let updated = members.save(saved).await.unwrap();
    let member_id = updated.id.clone().unwrap();

    let found = members
        .find_by_id(&member_id, Relations::Load)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.email, "otro@example.com");
    assert_eq!(found.club_ids(), vec![b.id.clone().unwrap()]);

    members.remove(&found).await.unwrap();
    clubs.remove(&a).await.unwrap();
    clubs.remove(&b).await.unwrap();
}
