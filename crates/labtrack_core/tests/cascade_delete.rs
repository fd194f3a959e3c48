use labtrack_core::db::open_db_in_memory;
use labtrack_core::{
    Experiment, ExperimentRepository, LabResult, ResultRepository, Scientist,
    ScientistRepository, SqliteExperimentRepository, SqliteResultRepository,
    SqliteScientistRepository,
};
use rusqlite::Connection;

fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn deleting_a_scientist_removes_its_whole_subtree() {
    let conn = open_db_in_memory().unwrap();
    let scientists = SqliteScientistRepository::try_new(&conn).unwrap();
    let experiments = SqliteExperimentRepository::try_new(&conn).unwrap();
    let results = SqliteResultRepository::try_new(&conn).unwrap();

    let ada = Scientist::new("Ada Lovelace", "Mathematics");
    let marie = Scientist::new("Marie Curie", "Physics");
    scientists.create_scientist(&ada).unwrap();
    scientists.create_scientist(&marie).unwrap();

    // Ada owns 2 experiments with 3 results total; Marie owns 1 with 1.
    let ada_a = Experiment::new(ada.id, "Trial A");
    let ada_b = Experiment::new(ada.id, "Trial B");
    let marie_a = Experiment::new(marie.id, "Radium Decay");
    experiments.create_experiment(&ada_a).unwrap();
    experiments.create_experiment(&ada_b).unwrap();
    experiments.create_experiment(&marie_a).unwrap();

    results.create_result(&LabResult::new(ada_a.id, "r1")).unwrap();
    results.create_result(&LabResult::new(ada_a.id, "r2")).unwrap();
    results.create_result(&LabResult::new(ada_b.id, "r3")).unwrap();
    results.create_result(&LabResult::new(marie_a.id, "r4")).unwrap();

    scientists.delete_scientist(ada.id).unwrap();

    assert_eq!(count_rows(&conn, "scientists"), 1);
    assert_eq!(count_rows(&conn, "experiments"), 1);
    assert_eq!(count_rows(&conn, "results"), 1);

    // Marie's subtree is untouched.
    assert!(scientists.get_scientist(marie.id).unwrap().is_some());
    assert!(experiments.get_experiment(marie_a.id).unwrap().is_some());
}

#[test]
fn deleting_an_experiment_removes_only_its_results() {
    let conn = open_db_in_memory().unwrap();
    let scientists = SqliteScientistRepository::try_new(&conn).unwrap();
    let experiments = SqliteExperimentRepository::try_new(&conn).unwrap();
    let results = SqliteResultRepository::try_new(&conn).unwrap();

    let ada = Scientist::new("Ada Lovelace", "Mathematics");
    scientists.create_scientist(&ada).unwrap();

    let keep = Experiment::new(ada.id, "kept");
    let doomed = Experiment::new(ada.id, "dropped");
    experiments.create_experiment(&keep).unwrap();
    experiments.create_experiment(&doomed).unwrap();

    let kept_result = LabResult::new(keep.id, "still here");
    results.create_result(&kept_result).unwrap();
    results.create_result(&LabResult::new(doomed.id, "gone")).unwrap();
    results.create_result(&LabResult::new(doomed.id, "also gone")).unwrap();

    experiments.delete_experiment(doomed.id).unwrap();

    assert_eq!(count_rows(&conn, "experiments"), 1);
    assert_eq!(count_rows(&conn, "results"), 1);
    assert!(results.get_result(kept_result.id).unwrap().is_some());
    assert_eq!(count_rows(&conn, "scientists"), 1);
}

#[test]
fn failed_scientist_delete_rolls_back_child_deletes() {
    let conn = open_db_in_memory().unwrap();
    let scientists = SqliteScientistRepository::try_new(&conn).unwrap();
    let experiments = SqliteExperimentRepository::try_new(&conn).unwrap();

    let ada = Scientist::new("Ada Lovelace", "Mathematics");
    scientists.create_scientist(&ada).unwrap();
    experiments
        .create_experiment(&Experiment::new(ada.id, "Trial A"))
        .unwrap();

    // Delete a scientist that never existed; the transaction must leave
    // Ada's subtree untouched.
    let missing = Scientist::new("Ghost", "Spectroscopy");
    assert!(scientists.delete_scientist(missing.id).is_err());

    assert_eq!(count_rows(&conn, "scientists"), 1);
    assert_eq!(count_rows(&conn, "experiments"), 1);
}
