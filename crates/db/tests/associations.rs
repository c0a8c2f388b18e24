//! Integration tests for the association queries: franchise assignment,
//! movie character sets, and the franchise-to-characters traversal join.

use cinedex_db::models::character::CreateCharacter;
use cinedex_db::models::franchise::CreateFranchise;
use cinedex_db::models::movie::CreateMovie;
use cinedex_db::repositories::{CharacterRepo, FranchiseRepo, MovieRepo};
use sqlx::PgPool;

async fn franchise(pool: &PgPool, name: &str) -> i64 {
    FranchiseRepo::create(
        pool,
        &CreateFranchise {
            name: name.to_string(),
            description: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn movie(pool: &PgPool, title: &str, franchise_id: Option<i64>) -> i64 {
    MovieRepo::create(
        pool,
        &CreateMovie {
            title: title.to_string(),
            genre: None,
            release_year: None,
            director: None,
            picture_url: None,
            trailer_url: None,
            franchise_id,
        },
    )
    .await
    .unwrap()
    .id
}

async fn character(pool: &PgPool, full_name: &str) -> i64 {
    CharacterRepo::create(
        pool,
        &CreateCharacter {
            full_name: full_name.to_string(),
            alias: None,
            gender: None,
            picture_url: None,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Franchise assignment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_to_franchise_skips_unresolvable_ids(pool: PgPool) {
    let f = franchise(&pool, "F").await;
    let valid = movie(&pool, "Valid", None).await;

    let assigned = MovieRepo::assign_to_franchise(&pool, f, &[valid, 999_999])
        .await
        .unwrap();
    assert_eq!(assigned, 1);

    let ids = MovieRepo::ids_by_franchise(&pool, f).await.unwrap();
    assert_eq!(ids, vec![valid]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_to_franchise_with_empty_list_is_a_no_op(pool: PgPool) {
    let f = franchise(&pool, "F").await;

    let assigned = MovieRepo::assign_to_franchise(&pool, f, &[]).await.unwrap();
    assert_eq!(assigned, 0);
    assert!(MovieRepo::ids_by_franchise(&pool, f).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ids_by_franchises_pairs_owner_with_movie(pool: PgPool) {
    let f1 = franchise(&pool, "F1").await;
    let f2 = franchise(&pool, "F2").await;
    let m1 = movie(&pool, "M1", Some(f1)).await;
    let m2 = movie(&pool, "M2", Some(f2)).await;
    let m3 = movie(&pool, "M3", Some(f1)).await;

    let pairs = MovieRepo::ids_by_franchises(&pool, &[f1, f2]).await.unwrap();
    assert_eq!(pairs, vec![(f1, m1), (f1, m3), (f2, m2)]);
}

// ---------------------------------------------------------------------------
// Movie character sets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_characters_replaces_the_previous_set(pool: PgPool) {
    let m = movie(&pool, "M", None).await;
    let a = character(&pool, "A").await;
    let b = character(&pool, "B").await;

    MovieRepo::set_characters(&pool, m, &[a]).await.unwrap();
    assert_eq!(MovieRepo::character_ids(&pool, m).await.unwrap(), vec![a]);

    MovieRepo::set_characters(&pool, m, &[b]).await.unwrap();
    assert_eq!(MovieRepo::character_ids(&pool, m).await.unwrap(), vec![b]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_characters_absorbs_duplicates_and_unresolvable_ids(pool: PgPool) {
    let m = movie(&pool, "M", None).await;
    let a = character(&pool, "A").await;

    MovieRepo::set_characters(&pool, m, &[a, a, 999_999])
        .await
        .unwrap();
    assert_eq!(MovieRepo::character_ids(&pool, m).await.unwrap(), vec![a]);
}

// ---------------------------------------------------------------------------
// Traversal join
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_franchise_returns_one_row_per_appearance(pool: PgPool) {
    let f = franchise(&pool, "F").await;
    let m1 = movie(&pool, "M1", Some(f)).await;
    let m2 = movie(&pool, "M2", Some(f)).await;
    let shared = character(&pool, "Shared").await;
    let only_m2 = character(&pool, "Solo").await;

    MovieRepo::set_characters(&pool, m1, &[shared]).await.unwrap();
    MovieRepo::set_characters(&pool, m2, &[shared, only_m2])
        .await
        .unwrap();

    let rows = CharacterRepo::list_by_franchise(&pool, f).await.unwrap();
    let ids: Vec<i64> = rows.iter().map(|c| c.id).collect();

    // One row per (movie, character) pair, ordered by movie then character.
    assert_eq!(ids, vec![shared, shared, only_m2]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_franchise_ignores_other_franchises(pool: PgPool) {
    let f = franchise(&pool, "F").await;
    let other = franchise(&pool, "Other").await;
    let m = movie(&pool, "Theirs", Some(other)).await;
    let c = character(&pool, "Outsider").await;
    MovieRepo::set_characters(&pool, m, &[c]).await.unwrap();

    let rows = CharacterRepo::list_by_franchise(&pool, f).await.unwrap();
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_ids_by_characters_pairs_character_with_movie(pool: PgPool) {
    let m1 = movie(&pool, "M1", None).await;
    let m2 = movie(&pool, "M2", None).await;
    let c = character(&pool, "C").await;
    MovieRepo::set_characters(&pool, m1, &[c]).await.unwrap();
    MovieRepo::set_characters(&pool, m2, &[c]).await.unwrap();

    let pairs = CharacterRepo::movie_ids_by_characters(&pool, &[c])
        .await
        .unwrap();
    assert_eq!(pairs, vec![(c, m1), (c, m2)]);
}
