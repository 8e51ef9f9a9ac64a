//! Integration tests for the legacy snapshot model.
//!
//! Exercises `PlaygroundVersionRepo` against a real database:
//! - Create writes a version-0 snapshot with a fresh id
//! - `create_version` appends max+1 and leaves prior snapshots untouched
//! - `create_version` reports absence when the base id does not exist
//! - `find` returns the exact snapshot for (id, version)

use assert_matches::assert_matches;
use sqlx::PgPool;

use playground_db::models::playground_version::CreateLegacyPlayground;
use playground_db::repositories::PlaygroundVersionRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_legacy(name: &str, contents: &str) -> CreateLegacyPlayground {
    CreateLegacyPlayground {
        name: Some(name.to_string()),
        description: None,
        author: Some("tester".to_string()),
        contents: Some(contents.to_string()),
        pixi_version: Some("4.8.0".to_string()),
        is_public: false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_writes_version_zero(pool: PgPool) {
    let row = PlaygroundVersionRepo::create(&pool, &new_legacy("demo", "base"))
        .await
        .unwrap();

    assert_eq!(row.version, 0);
    assert_eq!(row.name, "demo");
    assert_eq!(row.contents, "base");
}

#[sqlx::test(migrations = "./migrations")]
async fn created_playgrounds_get_distinct_ids(pool: PgPool) {
    let a = PlaygroundVersionRepo::create(&pool, &new_legacy("a", "x"))
        .await
        .unwrap();
    let b = PlaygroundVersionRepo::create(&pool, &new_legacy("b", "y"))
        .await
        .unwrap();
    assert_ne!(a.playground_id, b.playground_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_version_appends_next_number(pool: PgPool) {
    let base = PlaygroundVersionRepo::create(&pool, &new_legacy("demo", "v0"))
        .await
        .unwrap();

    let v1 = PlaygroundVersionRepo::create_version(
        &pool,
        base.playground_id,
        &new_legacy("demo", "v1"),
    )
    .await
    .unwrap()
    .expect("base exists");
    assert_eq!(v1.version, 1);

    let v2 = PlaygroundVersionRepo::create_version(
        &pool,
        base.playground_id,
        &new_legacy("demo", "v2"),
    )
    .await
    .unwrap()
    .expect("base exists");
    assert_eq!(v2.version, 2);

    // Earlier snapshots are immutable and still readable.
    let original = PlaygroundVersionRepo::find(&pool, base.playground_id, 0)
        .await
        .unwrap()
        .expect("version 0 exists");
    assert_eq!(original.contents, "v0");
}

#[sqlx::test(migrations = "./migrations")]
async fn create_version_requires_existing_base(pool: PgPool) {
    let result = PlaygroundVersionRepo::create_version(&pool, 424242, &new_legacy("demo", "v1"))
        .await
        .unwrap();
    assert_matches!(result, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn find_returns_exact_snapshot(pool: PgPool) {
    let base = PlaygroundVersionRepo::create(&pool, &new_legacy("demo", "v0"))
        .await
        .unwrap();
    PlaygroundVersionRepo::create_version(&pool, base.playground_id, &new_legacy("demo", "v1"))
        .await
        .unwrap()
        .expect("base exists");

    let snapshot = PlaygroundVersionRepo::find(&pool, base.playground_id, 1)
        .await
        .unwrap()
        .expect("version 1 exists");
    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.contents, "v1");

    let missing = PlaygroundVersionRepo::find(&pool, base.playground_id, 7)
        .await
        .unwrap();
    assert_matches!(missing, None);
}
