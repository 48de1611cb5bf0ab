//! Full-stack test: seating engine driving a live chart-server
//! Run: cargo test -p chart-server --test api_flow

use chart_server::core::{Config, ServerState};
use seating_engine::{HttpGateway, SeatingEngine};
use shared::SeatingError;
use shared::models::{FloorTableCreate, SeatingChartCreate, TablePosition, TableShape};

async fn spawn_server(tmp: &tempfile::TempDir) -> String {
    let config = Config {
        work_dir: tmp.path().display().to_string(),
        http_port: 0,
        environment: "test".into(),
        log_level: "debug".into(),
        log_dir: None,
    };
    let state = ServerState::initialize(&config).await.unwrap();
    let app = chart_server::api::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn seed_guest(base_url: &str, name: &str) -> String {
    let client = reqwest::Client::new();
    let guest: shared::models::Guest = client
        .post(format!("{base_url}/api/guests"))
        .json(&serde_json::json!({
            "wedding_id": "wedding:1",
            "name": name,
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    guest.id.unwrap()
}

fn table_spec(number: i64, capacity: i32) -> FloorTableCreate {
    FloorTableCreate {
        chart_id: String::new(),
        table_number: Some(number),
        name: None,
        shape: TableShape::Rectangular,
        capacity,
        x: 80.0,
        y: 120.0,
        rotation: 0.0,
        notes: None,
    }
}

#[tokio::test]
async fn engine_session_against_live_server() {
    let tmp = tempfile::tempdir().unwrap();
    let base_url = spawn_server(&tmp).await;

    let mut engine = SeatingEngine::new("wedding:1", HttpGateway::new(&base_url));

    // empty wedding: nothing selected, empty slices
    engine.load_charts().await.unwrap();
    assert!(engine.state().selected_chart_id().is_none());

    // create a chart, lay out two tables
    engine
        .create_chart(SeatingChartCreate {
            wedding_id: String::new(),
            name: "reception".into(),
            venue_name: Some("Rosewood Barn".into()),
        })
        .await
        .unwrap();
    let t5 = engine.create_table(table_spec(5, 2)).await.unwrap();
    let t6 = engine.create_table(table_spec(6, 4)).await.unwrap();
    let t5_id = t5.id.unwrap();
    let t6_id = t6.id.unwrap();

    // duplicate numbers are rejected by the server as well
    let err = engine.create_table(table_spec(5, 8)).await.unwrap_err();
    assert_eq!(err, SeatingError::DuplicateTableNumber { table_number: 5 });

    // guests arrive through the guest-list feature
    let amy = seed_guest(&base_url, "Amy").await;
    let ben = seed_guest(&base_url, "Ben").await;
    let cara = seed_guest(&base_url, "Cara").await;
    engine.load_guests().await.unwrap();
    assert_eq!(engine.unassigned_guests().len(), 3);

    // fill table 5, then hit the capacity check
    engine.assign_guest(&amy, &t5_id).await.unwrap();
    engine.assign_guest(&ben, &t5_id).await.unwrap();
    let err = engine.assign_guest(&cara, &t5_id).await.unwrap_err();
    assert_eq!(
        err,
        SeatingError::CapacityExceeded {
            table_number: 5,
            capacity: 2
        }
    );

    // one-gesture move: ben's own seat never counts against him
    engine.begin_guest_drag(&ben).unwrap();
    let moved = engine.drop_guest_on_table(&t6_id).await.unwrap();
    assert_eq!(moved.table_number, Some(6));
    assert_eq!(engine.table_occupancy(&t5_id).unwrap().count(), 1);

    // drag table 6 across the canvas, persisted for a fresh engine
    engine.begin_table_drag(&t6_id).unwrap();
    let outcome = engine
        .drop_table(TablePosition { x: 640.0, y: 220.0 })
        .await
        .unwrap();
    assert!(outcome.is_committed());

    let mut fresh = SeatingEngine::new("wedding:1", HttpGateway::new(&base_url));
    fresh.load_charts().await.unwrap();
    fresh.load_tables().await.unwrap();
    fresh.load_guests().await.unwrap();
    let reloaded = fresh
        .state()
        .tables()
        .iter()
        .find(|t| t.id.as_deref() == Some(t6_id.as_str()))
        .expect("table 6 survived the reload");
    assert_eq!((reloaded.x, reloaded.y), (640.0, 220.0));
    assert_eq!(fresh.table_occupancy(&t6_id).unwrap().count(), 1);

    // deleting table 5 releases amy
    fresh.delete_table(&t5_id).await.unwrap();
    assert_eq!(fresh.state().tables().len(), 1);
    assert!(
        fresh
            .unassigned_guests()
            .iter()
            .any(|g| g.name == "Amy")
    );

    // deleting the chart releases ben and cascades the last table
    let chart_id = fresh.state().selected_chart_id().unwrap().to_string();
    fresh.delete_chart(&chart_id).await.unwrap();
    assert!(fresh.state().charts().is_empty());
    assert!(fresh.state().selected_chart_id().is_none());
    assert_eq!(fresh.unassigned_guests().len(), 3);
}

#[tokio::test]
async fn http_errors_map_to_typed_failures() {
    let tmp = tempfile::tempdir().unwrap();
    let base_url = spawn_server(&tmp).await;

    let mut engine = SeatingEngine::new("wedding:1", HttpGateway::new(&base_url));
    engine.load_charts().await.unwrap();
    engine
        .create_chart(SeatingChartCreate {
            wedding_id: String::new(),
            name: "reception".into(),
            venue_name: None,
        })
        .await
        .unwrap();

    // blank chart names never reach storage
    let err = engine
        .create_chart(SeatingChartCreate {
            wedding_id: String::new(),
            name: "   ".into(),
            venue_name: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SeatingError::PersistenceFailure { .. }));

    // a seat write for an unknown guest surfaces the server's not-found
    use seating_engine::PersistenceGateway;
    let gateway = HttpGateway::new(&base_url);
    let err = gateway
        .update_guest_seat("guest:missing", Some(1))
        .await
        .unwrap_err();
    assert!(matches!(err, seating_engine::GatewayError::NotFound(_)));
}
