//! Repository tests against a throwaway embedded database
//! Run: cargo test -p chart-server --test repository

use chart_server::db::DbService;
use chart_server::db::repository::{
    FloorTableRepository, GuestRepository, RepoError, SeatingChartRepository,
};
use shared::models::{
    FloorTableCreate, GuestCreate, SeatingChartCreate, TablePosition, TableShape,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

async fn open_db(tmp: &tempfile::TempDir) -> Surreal<Db> {
    DbService::new(&tmp.path().join("seating.db"))
        .await
        .unwrap()
        .db
}

fn chart_create(name: &str) -> SeatingChartCreate {
    SeatingChartCreate {
        wedding_id: "wedding:1".into(),
        name: name.into(),
        venue_name: None,
    }
}

fn table_create(chart_id: &str, number: Option<i64>) -> FloorTableCreate {
    FloorTableCreate {
        chart_id: chart_id.into(),
        table_number: number,
        name: None,
        shape: TableShape::Round,
        capacity: 8,
        x: 50.0,
        y: 75.0,
        rotation: 0.0,
        notes: None,
    }
}

#[tokio::test]
async fn chart_round_trip_and_wedding_scope() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = SeatingChartRepository::new(db);

    let created = repo.create(chart_create("plan a")).await.unwrap();
    let id = created.id.as_ref().unwrap().to_string();

    let found = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(found.name, "plan a");
    assert!(found.is_active);

    let mine = repo.find_by_wedding("wedding:1").await.unwrap();
    assert_eq!(mine.len(), 1);
    let theirs = repo.find_by_wedding("wedding:2").await.unwrap();
    assert!(theirs.is_empty());
}

#[tokio::test]
async fn table_numbers_auto_increment_per_chart() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let charts = SeatingChartRepository::new(db.clone());
    let tables = FloorTableRepository::new(db);

    let chart_a = charts.create(chart_create("plan a")).await.unwrap();
    let chart_b = charts.create(chart_create("plan b")).await.unwrap();
    let a = chart_a.id.unwrap().to_string();
    let b = chart_b.id.unwrap().to_string();

    let t1 = tables.create(table_create(&a, None)).await.unwrap();
    let t2 = tables.create(table_create(&a, None)).await.unwrap();
    assert_eq!(t1.table_number, 1);
    assert_eq!(t2.table_number, 2);

    // numbering is scoped per chart; reuse across charts is legal
    let other = tables.create(table_create(&b, Some(1))).await.unwrap();
    assert_eq!(other.table_number, 1);
}

#[tokio::test]
async fn duplicate_number_in_chart_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let charts = SeatingChartRepository::new(db.clone());
    let tables = FloorTableRepository::new(db);

    let chart = charts.create(chart_create("plan a")).await.unwrap();
    let chart_id = chart.id.unwrap().to_string();

    tables.create(table_create(&chart_id, Some(7))).await.unwrap();
    let err = tables
        .create(table_create(&chart_id, Some(7)))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn position_update_touches_only_geometry() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let charts = SeatingChartRepository::new(db.clone());
    let tables = FloorTableRepository::new(db);

    let chart = charts.create(chart_create("plan a")).await.unwrap();
    let chart_id = chart.id.unwrap().to_string();
    let table = tables.create(table_create(&chart_id, Some(1))).await.unwrap();
    let table_id = table.id.as_ref().unwrap().to_string();

    let moved = tables
        .update_position(&table_id, TablePosition { x: 300.0, y: 40.0 })
        .await
        .unwrap();
    assert_eq!((moved.x, moved.y), (300.0, 40.0));
    assert_eq!(moved.table_number, 1);
    assert_eq!(moved.capacity, 8);
    assert_eq!(moved.shape, TableShape::Round);
}

#[tokio::test]
async fn chart_delete_cascades_to_tables() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let charts = SeatingChartRepository::new(db.clone());
    let tables = FloorTableRepository::new(db);

    let chart = charts.create(chart_create("plan a")).await.unwrap();
    let chart_id = chart.id.unwrap().to_string();
    tables.create(table_create(&chart_id, Some(1))).await.unwrap();
    tables.create(table_create(&chart_id, Some(2))).await.unwrap();

    assert!(charts.delete(&chart_id).await.unwrap());
    assert!(charts.find_by_id(&chart_id).await.unwrap().is_none());
    assert!(tables.find_by_chart(&chart_id).await.unwrap().is_empty());

    let err = charts.delete(&chart_id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn guest_seat_updates_and_releases() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let guests = GuestRepository::new(db);

    let amy = guests
        .create(GuestCreate {
            wedding_id: "wedding:1".into(),
            name: "Amy".into(),
            group_name: Some("bride".into()),
            notes: None,
        })
        .await
        .unwrap();
    let id = amy.id.as_ref().unwrap().to_string();
    assert_eq!(amy.table_number, None);

    let seated = guests.update_seat(&id, Some(5)).await.unwrap();
    assert_eq!(seated.table_number, Some(5));

    let released = guests.update_seat(&id, None).await.unwrap();
    assert_eq!(released.table_number, None);

    let err = guests.update_seat("guest:missing", Some(1)).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let listed = guests.find_by_wedding("wedding:1").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].group_name.as_deref(), Some("bride"));
}

#[tokio::test]
async fn malformed_ids_fail_validation_not_queries() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let tables = FloorTableRepository::new(db);

    let err = tables.find_by_id("not-a-record-id").await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}
