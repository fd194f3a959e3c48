use labtrack_core::db::migrations::latest_version;
use labtrack_core::db::open_db_in_memory;
use labtrack_core::{
    RepoError, Scientist, ScientistRepository, ScientistService, SqliteScientistRepository,
};
use rusqlite::Connection;
use uuid::Uuid;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScientistRepository::try_new(&conn).unwrap();

    let scientist = Scientist::new("Ada Lovelace", "Mathematics");
    let id = repo.create_scientist(&scientist).unwrap();

    let loaded = repo.get_scientist(id).unwrap().unwrap();
    assert_eq!(loaded, scientist);
}

#[test]
fn create_with_blank_field_is_rejected_and_not_persisted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScientistRepository::try_new(&conn).unwrap();

    let scientist = Scientist::new("Ada Lovelace", "  ");
    let err = repo.create_scientist(&scientist).unwrap_err();
    match err {
        RepoError::Validation(errors) => {
            assert_eq!(errors.messages(), ["Field can't be blank"]);
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(count_rows(&conn, "scientists"), 0);
}

#[test]
fn update_existing_scientist() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScientistRepository::try_new(&conn).unwrap();

    let mut scientist = Scientist::new("Ada Lovelace", "Mathematics");
    repo.create_scientist(&scientist).unwrap();

    scientist.name = "Ada Byron".to_string();
    scientist.touch();
    repo.update_scientist(&scientist).unwrap();

    let loaded = repo.get_scientist(scientist.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Ada Byron");
    assert_eq!(loaded.field, "Mathematics");
    assert_eq!(loaded.updated_at, scientist.updated_at);
}

#[test]
fn update_with_blank_name_is_rejected_and_not_persisted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScientistRepository::try_new(&conn).unwrap();

    let mut scientist = Scientist::new("Ada Lovelace", "Mathematics");
    repo.create_scientist(&scientist).unwrap();

    scientist.name = String::new();
    let err = repo.update_scientist(&scientist).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let loaded = repo.get_scientist(scientist.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Ada Lovelace");
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScientistRepository::try_new(&conn).unwrap();

    let scientist = Scientist::new("Nobody", "Nowhere");
    let err = repo.update_scientist(&scientist).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == scientist.id));
}

#[test]
fn list_returns_scientists_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScientistRepository::try_new(&conn).unwrap();

    let first = Scientist::new("Ada Lovelace", "Mathematics");
    let second = Scientist::new("Marie Curie", "Physics");
    repo.create_scientist(&first).unwrap();
    repo.create_scientist(&second).unwrap();

    let listed = repo.list_scientists().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
}

#[test]
fn delete_missing_scientist_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScientistRepository::try_new(&conn).unwrap();

    let err = repo.delete_scientist(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScientistRepository::try_new(&conn).unwrap();
    let service = ScientistService::new(repo);

    let scientist = Scientist::new("Ada Lovelace", "Mathematics");
    let id = service.create_scientist(&scientist).unwrap();

    let fetched = service.get_scientist(id).unwrap().unwrap();
    assert_eq!(fetched.name, "Ada Lovelace");

    service.delete_scientist(id).unwrap();
    assert!(service.get_scientist(id).unwrap().is_none());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteScientistRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteScientistRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("scientists"))
    ));
}

#[test]
fn corrupt_stored_id_is_rejected_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO scientists (id, name, field, created_at, updated_at)
         VALUES ('not-a-uuid', 'Ada', 'Mathematics', 0, 0);",
        [],
    )
    .unwrap();

    let repo = SqliteScientistRepository::try_new(&conn).unwrap();
    let err = repo.list_scientists().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
