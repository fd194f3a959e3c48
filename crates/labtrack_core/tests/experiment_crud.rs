use labtrack_core::db::open_db_in_memory;
use labtrack_core::{
    Experiment, ExperimentRepository, ExperimentService, RepoError, Scientist,
    ScientistRepository, SqliteExperimentRepository, SqliteScientistRepository,
};
use rusqlite::Connection;
use uuid::Uuid;

fn seed_scientist(conn: &Connection) -> Scientist {
    let repo = SqliteScientistRepository::try_new(conn).unwrap();
    let scientist = Scientist::new("Ada Lovelace", "Mathematics");
    repo.create_scientist(&scientist).unwrap();
    scientist
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let scientist = seed_scientist(&conn);
    let repo = SqliteExperimentRepository::try_new(&conn).unwrap();

    let experiment = Experiment::new(scientist.id, "Tool Use Study");
    let id = repo.create_experiment(&experiment).unwrap();

    let loaded = repo.get_experiment(id).unwrap().unwrap();
    assert_eq!(loaded, experiment);
    assert_eq!(loaded.scientist_id, scientist.id);
}

#[test]
fn create_with_blank_title_is_rejected_and_not_persisted() {
    let conn = open_db_in_memory().unwrap();
    let scientist = seed_scientist(&conn);
    let repo = SqliteExperimentRepository::try_new(&conn).unwrap();

    let experiment = Experiment::new(scientist.id, "");
    let err = repo.create_experiment(&experiment).unwrap_err();
    match err {
        RepoError::Validation(errors) => {
            assert_eq!(errors.messages(), ["Title can't be blank"]);
        }
        other => panic!("unexpected error: {other}"),
    }

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM experiments;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn create_under_missing_scientist_fails_at_the_store() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteExperimentRepository::try_new(&conn).unwrap();

    let experiment = Experiment::new(Uuid::new_v4(), "orphan");
    let err = repo.create_experiment(&experiment).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn update_changes_title_only() {
    let conn = open_db_in_memory().unwrap();
    let scientist = seed_scientist(&conn);
    let repo = SqliteExperimentRepository::try_new(&conn).unwrap();

    let mut experiment = Experiment::new(scientist.id, "draft protocol");
    repo.create_experiment(&experiment).unwrap();

    experiment.title = "final protocol".to_string();
    experiment.touch();
    repo.update_experiment(&experiment).unwrap();

    let loaded = repo.get_experiment(experiment.id).unwrap().unwrap();
    assert_eq!(loaded.title, "final protocol");
    assert_eq!(loaded.scientist_id, scientist.id);
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let scientist = seed_scientist(&conn);
    let repo = SqliteExperimentRepository::try_new(&conn).unwrap();

    let experiment = Experiment::new(scientist.id, "never saved");
    let err = repo.update_experiment(&experiment).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == experiment.id));
}

#[test]
fn list_scoped_to_scientist_excludes_other_owners() {
    let conn = open_db_in_memory().unwrap();
    let scientists = SqliteScientistRepository::try_new(&conn).unwrap();
    let ada = Scientist::new("Ada Lovelace", "Mathematics");
    let marie = Scientist::new("Marie Curie", "Physics");
    scientists.create_scientist(&ada).unwrap();
    scientists.create_scientist(&marie).unwrap();

    let repo = SqliteExperimentRepository::try_new(&conn).unwrap();
    let ada_exp = Experiment::new(ada.id, "Analytical Engine Notes");
    let marie_exp = Experiment::new(marie.id, "Radium Decay");
    repo.create_experiment(&ada_exp).unwrap();
    repo.create_experiment(&marie_exp).unwrap();

    let scoped = repo.list_experiments(Some(ada.id)).unwrap();
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].id, ada_exp.id);

    let all = repo.list_experiments(None).unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let scientist = seed_scientist(&conn);
    let repo = SqliteExperimentRepository::try_new(&conn).unwrap();
    let service = ExperimentService::new(repo);

    let experiment = Experiment::new(scientist.id, "Tool Use Study");
    let id = service.create_experiment(&experiment).unwrap();

    let fetched = service.get_experiment(id).unwrap().unwrap();
    assert_eq!(fetched.title, "Tool Use Study");

    service.delete_experiment(id).unwrap();
    assert!(service.get_experiment(id).unwrap().is_none());
}
