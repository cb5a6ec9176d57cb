use academy_landing::db::run_pending_migrations;
use diesel::connection::SimpleConnection;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn migrations_are_idempotent() {
    let test_db = common::TestDb::new();
    run_pending_migrations(&test_db.pool()).expect("second run should be a no-op");
}

#[test]
fn foreign_keys_are_enforced() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire connection");
    let result = conn.batch_execute(
        "INSERT INTO courses \
         (category_id, title, slug, description, language, difficulty_level, estimated_duration) \
         VALUES (99, 't', 's', 'd', 'python', 'beginner', 10);",
    );
    assert!(result.is_err());
}
