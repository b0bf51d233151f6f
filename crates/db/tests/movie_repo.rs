//! Integration tests for `MovieRepo`: denormalized reads, association
//! replacement, and delete behaviour of related rows.

use chrono::NaiveDate;
use cinema_db::models::actor::CreateActor;
use cinema_db::models::director::CreateDirector;
use cinema_db::models::genre::CreateGenre;
use cinema_db::models::movie::{CreateMovie, UpdateMovie};
use cinema_db::models::production_company::CreateProductionCompany;
use cinema_db::repositories::{
    ActorRepo, DirectorRepo, GenreRepo, MovieRepo, ProductionCompanyRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(title: &str) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        description: None,
        release_date: NaiveDate::from_ymd_opt(1995, 12, 15).unwrap(),
        budget: None,
        box_office: None,
        duration: None,
        director_id: None,
        production_company_id: None,
        actor_ids: None,
        genre_ids: None,
    }
}

async fn seed_actor(pool: &PgPool, first: &str, last: &str) -> i64 {
    ActorRepo::create(
        pool,
        &CreateActor {
            first_name: first.to_string(),
            last_name: last.to_string(),
            birth_date: None,
            nationality: None,
            biography: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_genre(pool: &PgPool, name: &str) -> i64 {
    GenreRepo::create(
        pool,
        &CreateGenre {
            name: name.to_string(),
            description: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_director(pool: &PgPool) -> i64 {
    DirectorRepo::create(
        pool,
        &CreateDirector {
            first_name: "Michael".to_string(),
            last_name: "Mann".to_string(),
            birth_date: None,
            nationality: None,
            biography: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_company(pool: &PgPool) -> i64 {
    ProductionCompanyRepo::create(
        pool,
        &CreateProductionCompany {
            name: "Forward Pass".to_string(),
            country: None,
            founding_date: None,
            description: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn link_count(pool: &PgPool, table: &str, movie_id: i64) -> i64 {
    let (count,): (i64,) =
        sqlx::query_as(&format!("SELECT COUNT(*) FROM {table} WHERE movie_id = $1"))
            .bind(movie_id)
            .fetch_one(pool)
            .await
            .unwrap();
    count
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_renders_display_strings(pool: PgPool) {
    let director_id = seed_director(&pool).await;
    let company_id = seed_company(&pool).await;
    let pacino = seed_actor(&pool, "Al", "Pacino").await;
    let de_niro = seed_actor(&pool, "Robert", "De Niro").await;
    let crime = seed_genre(&pool, "Crime").await;

    let view = MovieRepo::create(
        &pool,
        &CreateMovie {
            budget: Some(60_000_000.0),
            duration: Some(170),
            director_id: Some(director_id),
            production_company_id: Some(company_id),
            actor_ids: Some(vec![de_niro, pacino]),
            genre_ids: Some(vec![crime]),
            ..new_movie("Heat")
        },
    )
    .await
    .unwrap();

    assert_eq!(view.title, "Heat");
    assert_eq!(view.director.as_deref(), Some("Michael Mann"));
    assert_eq!(view.production_company.as_deref(), Some("Forward Pass"));
    // Ordered by actor id, not by request order.
    assert_eq!(view.actors, vec!["Al Pacino", "Robert De Niro"]);
    assert_eq!(view.genres, vec!["Crime"]);
    assert_eq!(view.budget, Some(60_000_000.0));
    assert_eq!(view.duration, Some(170));

    let found = MovieRepo::find_by_id(&pool, view.id).await.unwrap().unwrap();
    assert_eq!(found, view);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_movie_without_relations_has_empty_lists(pool: PgPool) {
    let view = MovieRepo::create(&pool, &new_movie("Thief")).await.unwrap();

    assert!(view.director.is_none());
    assert!(view.production_company.is_none());
    assert!(view.actors.is_empty());
    assert!(view.genres.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_is_ordered_by_id(pool: PgPool) {
    let first = MovieRepo::create(&pool, &new_movie("Thief")).await.unwrap();
    let second = MovieRepo::create(&pool, &new_movie("Collateral")).await.unwrap();

    let ids: Vec<i64> = MovieRepo::list(&pool).await.unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

// ---------------------------------------------------------------------------
// Associations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_association_ids_are_ignored(pool: PgPool) {
    let actor = seed_actor(&pool, "Al", "Pacino").await;

    let view = MovieRepo::create(
        &pool,
        &CreateMovie {
            actor_ids: Some(vec![9999, actor, actor]),
            genre_ids: Some(vec![9999]),
            ..new_movie("Heat")
        },
    )
    .await
    .unwrap();

    assert_eq!(view.actors, vec!["Al Pacino"]);
    assert!(view.genres.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_actor_set(pool: PgPool) {
    let a1 = seed_actor(&pool, "Al", "Pacino").await;
    let a2 = seed_actor(&pool, "Robert", "De Niro").await;
    let a3 = seed_actor(&pool, "Val", "Kilmer").await;

    let movie = MovieRepo::create(
        &pool,
        &CreateMovie {
            actor_ids: Some(vec![a1, a2]),
            ..new_movie("Heat")
        },
    )
    .await
    .unwrap();

    let patch = UpdateMovie {
        actor_ids: Some(Some(vec![a2, a3])),
        ..Default::default()
    };
    let updated = MovieRepo::update(&pool, movie.id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.actors, vec!["Robert De Niro", "Val Kilmer"]);

    // Applying the same patch again leaves the same state.
    let again = MovieRepo::update(&pool, movie.id, &patch).await.unwrap().unwrap();
    assert_eq!(again, updated);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_association_absent_null_and_empty(pool: PgPool) {
    let actor = seed_actor(&pool, "Al", "Pacino").await;
    let genre = seed_genre(&pool, "Crime").await;

    let movie = MovieRepo::create(
        &pool,
        &CreateMovie {
            actor_ids: Some(vec![actor]),
            genre_ids: Some(vec![genre]),
            ..new_movie("Heat")
        },
    )
    .await
    .unwrap();

    // Absent keys keep associations.
    let retitled = MovieRepo::update(
        &pool,
        movie.id,
        &UpdateMovie {
            title: Some("Heat (1995)".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(retitled.title, "Heat (1995)");
    assert_eq!(retitled.actors, vec!["Al Pacino"]);
    assert_eq!(retitled.genres, vec!["Crime"]);
    assert_eq!(retitled.release_date, movie.release_date);

    // `null` and `[]` both clear.
    let cleared = MovieRepo::update(
        &pool,
        movie.id,
        &UpdateMovie {
            actor_ids: Some(None),
            genre_ids: Some(Some(vec![])),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(cleared.actors.is_empty());
    assert!(cleared.genres.is_empty());
    assert_eq!(link_count(&pool, "movie_actors", movie.id).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_replace_actors_reports_links_written(pool: PgPool) {
    let a1 = seed_actor(&pool, "Al", "Pacino").await;
    let a2 = seed_actor(&pool, "Robert", "De Niro").await;
    let movie = MovieRepo::create(&pool, &new_movie("Heat")).await.unwrap();

    let mut conn = pool.acquire().await.unwrap();
    let written = MovieRepo::replace_actors(&mut conn, movie.id, &[a1, a2, 9999])
        .await
        .unwrap();
    assert_eq!(written, 2);

    let written = MovieRepo::replace_genres(&mut conn, movie.id, &[]).await.unwrap();
    assert_eq!(written, 0);
    drop(conn);

    assert_eq!(link_count(&pool, "movie_actors", movie.id).await, 2);
}

// ---------------------------------------------------------------------------
// Scalar updates and failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_clears_nullable_columns(pool: PgPool) {
    let director_id = seed_director(&pool).await;
    let movie = MovieRepo::create(
        &pool,
        &CreateMovie {
            budget: Some(1.5),
            director_id: Some(director_id),
            ..new_movie("Heat")
        },
    )
    .await
    .unwrap();

    let updated = MovieRepo::update(
        &pool,
        movie.id,
        &UpdateMovie {
            budget: Some(None),
            director_id: Some(None),
            box_office: Some(Some(187_400_000.0)),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert!(updated.budget.is_none());
    assert!(updated.director.is_none());
    assert_eq!(updated.box_office, Some(187_400_000.0));

    let stored_director: Option<i64> =
        sqlx::query_scalar("SELECT director_id FROM movie WHERE id = $1")
            .bind(movie.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(stored_director.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_movie_returns_none(pool: PgPool) {
    let result = MovieRepo::update(
        &pool,
        9999,
        &UpdateMovie {
            actor_ids: Some(Some(vec![1])),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_director_rolls_back_create(pool: PgPool) {
    let err = MovieRepo::create(
        &pool,
        &CreateMovie {
            director_id: Some(9999),
            ..new_movie("Heat")
        },
    )
    .await
    .unwrap_err();

    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
    assert!(MovieRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Deletes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_movie_removes_join_rows(pool: PgPool) {
    let actor = seed_actor(&pool, "Al", "Pacino").await;
    let genre = seed_genre(&pool, "Crime").await;
    let movie = MovieRepo::create(
        &pool,
        &CreateMovie {
            actor_ids: Some(vec![actor]),
            genre_ids: Some(vec![genre]),
            ..new_movie("Heat")
        },
    )
    .await
    .unwrap();

    assert!(MovieRepo::delete(&pool, movie.id).await.unwrap());
    assert!(MovieRepo::find_by_id(&pool, movie.id).await.unwrap().is_none());
    assert_eq!(link_count(&pool, "movie_actors", movie.id).await, 0);
    assert_eq!(link_count(&pool, "movie_genres", movie.id).await, 0);

    // Related entities survive.
    assert!(ActorRepo::find_by_id(&pool, actor).await.unwrap().is_some());
    assert!(!MovieRepo::delete(&pool, movie.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_related_rows_keeps_movie(pool: PgPool) {
    let director_id = seed_director(&pool).await;
    let company_id = seed_company(&pool).await;
    let actor = seed_actor(&pool, "Al", "Pacino").await;
    let genre = seed_genre(&pool, "Crime").await;
    let movie = MovieRepo::create(
        &pool,
        &CreateMovie {
            director_id: Some(director_id),
            production_company_id: Some(company_id),
            actor_ids: Some(vec![actor]),
            genre_ids: Some(vec![genre]),
            ..new_movie("Heat")
        },
    )
    .await
    .unwrap();

    assert!(DirectorRepo::delete(&pool, director_id).await.unwrap());
    assert!(ProductionCompanyRepo::delete(&pool, company_id).await.unwrap());
    assert!(ActorRepo::delete(&pool, actor).await.unwrap());
    assert!(GenreRepo::delete(&pool, genre).await.unwrap());

    let view = MovieRepo::find_by_id(&pool, movie.id).await.unwrap().unwrap();
    assert!(view.director.is_none());
    assert!(view.production_company.is_none());
    assert!(view.actors.is_empty());
    assert!(view.genres.is_empty());
}
