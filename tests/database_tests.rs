//! Database-level tests: migrations, relations and constraints

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbBackend, EntityTrait, ModelTrait,
    QueryFilter, Set, Statement, TransactionTrait,
};

use stagebook::db::entities::{artist, show, venue, Artist, Show, Venue};
use stagebook::db::repositories::{NewShow, ShowRepository, VenueRepository};
use stagebook::error::AppError;
use stagebook::test_utils::*;

#[tokio::test]
async fn test_create_and_query_venue() {
    let db = setup_test_db().await;

    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;

    assert!(venue.id > 0);
    assert_eq!(venue.genre_list(), vec!["Jazz".to_string()]);

    let found = Venue::find()
        .filter(venue::Column::City.eq("San Francisco"))
        .one(&db)
        .await
        .expect("Query should succeed");
    assert_eq!(found.map(|v| v.name), Some("The Musical Hop".to_string()));
}

#[tokio::test]
async fn test_genre_columns_are_unbounded_text() {
    let db = setup_test_db().await;

    for table in ["venues", "artists"] {
        let row = db
            .query_one(Statement::from_string(
                DbBackend::Sqlite,
                format!(
                    "SELECT type FROM pragma_table_info('{}') WHERE name = 'genres'",
                    table
                ),
            ))
            .await
            .unwrap()
            .expect("genres column should exist");
        let column_type: String = row.try_get("", "type").unwrap();
        assert!(
            column_type.eq_ignore_ascii_case("text"),
            "{}.genres is {}",
            table,
            column_type
        );
    }
}

#[tokio::test]
async fn test_show_requires_existing_artist() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;

    let invalid = show::ActiveModel {
        artist_id: Set(999),
        venue_id: Set(venue.id),
        start_time: Set(NaiveDate::from_ymd_opt(2099, 1, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()),
        ..Default::default()
    };

    // The foreign key still guards inserts that skip the repository check
    let result = invalid.insert(&db).await;
    assert!(result.is_err(), "Should fail to create show with invalid artist_id");
}

#[tokio::test]
async fn test_create_checked_reports_every_missing_id() {
    let db = setup_test_db().await;
    let start = NaiveDate::from_ymd_opt(2099, 1, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap();

    let result = ShowRepository::new(&db)
        .create_checked(NewShow {
            artist_id: 7,
            venue_id: 8,
            start_time: start,
        })
        .await;

    match result {
        Err(AppError::InvalidReference(missing)) => assert_eq!(
            missing,
            vec![
                "Artist ID 7 does not exist".to_string(),
                "Venue ID 8 does not exist".to_string(),
            ]
        ),
        other => panic!("expected InvalidReference, got {:?}", other),
    }
    assert!(Show::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_show_relations_load_both_parties() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    let start = NaiveDate::from_ymd_opt(2019, 5, 21)
        .unwrap()
        .and_hms_opt(21, 30, 0)
        .unwrap();
    let show = create_test_show(&db, artist.id, venue.id, start).await;

    let venue_shows = venue.find_related(Show).all(&db).await.unwrap();
    assert_eq!(venue_shows.len(), 1);
    assert_eq!(venue_shows[0].id, show.id);

    let booked: Option<artist::Model> = show.find_related(Artist).one(&db).await.unwrap();
    assert_eq!(booked.map(|a| a.name), Some("Guns N Petals".to_string()));
}

#[tokio::test]
async fn test_failed_transaction_rolls_back() {
    let db = setup_test_db().await;

    let result = db
        .transaction::<_, (), AppError>(|txn| {
            Box::pin(async move {
                let repo = VenueRepository::new(txn);
                let row = venue::ActiveModel {
                    name: Set("Ephemeral Hall".to_string()),
                    city: Set("Austin".to_string()),
                    state: Set("TX".to_string()),
                    address: Set("1 Main St".to_string()),
                    genres: Set("Jazz".to_string()),
                    seeking_talent: Set(false),
                    ..Default::default()
                };
                repo.create(row).await?;
                // Deleting a missing row fails and aborts the whole unit
                repo.delete(404).await
            })
        })
        .await;

    assert!(result.is_err());
    assert!(Venue::find().all(&db).await.unwrap().is_empty());
}
