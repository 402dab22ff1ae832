use std::fs;
use std::path::PathBuf;

use credmail::Session;
use credmail::profiles::LoadError;
use credmail::template::RenderError;
use tempfile::TempDir;

const HEADER: &str = "First Name,Last Name,Email,Username,Password\n";

fn write_roster(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("write roster");
    path
}

fn loaded(rows: &str) -> (TempDir, Session) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_roster(&dir, "2026cohort.csv", &format!("{HEADER}{rows}"));
    let mut session = Session::new();
    session.load_file(&path).expect("roster should load");
    (dir, session)
}

#[test]
fn navigation_length_matches_distinct_last_names() {
    let (_dir, session) = loaded(
        "Alex,Lee,alex@example.com,alee,p1\n\
         Sam,Park,sam@example.com,spark,p2\n\
         Jo,Kim,jo@example.com,jkim,p3\n",
    );

    assert_eq!(session.store().len(), 3);
    assert!(session.current().is_some());
    assert_eq!(session.source_name(), "2026cohort");
}

#[test]
fn blank_lines_between_rows_are_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_roster(
        &dir,
        "spaced.csv",
        &format!(
            "{HEADER}\n\nAlex,Lee,alex@example.com,alee,p1\r\n\r\n\nSam,Park,sam@example.com,spark,p2\n\n"
        ),
    );

    let mut session = Session::new();
    assert_eq!(session.load_file(&path).expect("load"), 2);
    assert_eq!(session.next().map(|r| r.last_name.as_str()), Some("Park"));
}

#[test]
fn header_only_file_loads_empty() {
    let (_dir, mut session) = loaded("");

    assert!(session.store().is_empty());
    assert!(session.current().is_none());
    assert!(session.next().is_none());
}

#[test]
fn advancing_len_times_returns_to_start() {
    let (_dir, mut session) = loaded(
        "Alex,Lee,alex@example.com,alee,p1\n\
         Sam,Park,sam@example.com,spark,p2\n\
         Jo,Kim,jo@example.com,jkim,p3\n",
    );
    let start = session.current().cloned().expect("current");

    for _ in 0..session.store().len() {
        session.next();
    }
    assert_eq!(session.current(), Some(&start));
}

#[test]
fn single_profile_wraps_onto_itself() {
    let (_dir, mut session) = loaded("Alex,Lee,alex@example.com,alee,p1\n");

    assert_eq!(session.next().map(|r| r.last_name.as_str()), Some("Lee"));
    assert_eq!(session.store().cursor(), 0);
}

#[test]
fn lookup_is_case_insensitive() {
    let (_dir, session) = loaded("Alex,SMITH,alex@example.com,asmith,p1\n");

    let upper = session.find_by_last_name("Smith").expect("found");
    let lower = session.find_by_last_name("smith").expect("found");
    assert_eq!(upper, lower);
    assert_eq!(upper.last_name, "SMITH");
}

#[test]
fn renders_default_template_with_recipient_prefix() {
    let (_dir, session) = loaded("Alex,Lee,alex@example.com,alee,p@ss\n");
    let record = session.current().expect("current");

    let text = session.render(record).expect("render");
    assert!(text.starts_with(
        "alex@example.com\n\nUPEI Off-Campus Student Credentials - IB 2026cohort class of 2026\n"
    ));
    assert!(text.lines().any(|line| line == "username: alee"));
    assert!(text.lines().any(|line| line == "password: p@ss"));
    assert_eq!(text, session.render(record).expect("render again"));
}

#[test]
fn failed_load_keeps_previous_roster() {
    let (dir, mut session) = loaded("Alex,Lee,alex@example.com,alee,p1\n");
    session.next();
    let broken = write_roster(
        &dir,
        "broken.csv",
        "First Name,Last Name,Email,Username\nSam,Park,sam@example.com,spark\n",
    );

    let err = session.load_file(&broken).expect_err("missing column");
    assert!(matches!(err, LoadError::MissingColumn(ref name) if name == "Password"));
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.source_name(), "2026cohort");
    assert_eq!(session.current().map(|r| r.last_name.as_str()), Some("Lee"));
}

#[test]
fn unreadable_file_is_an_io_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = Session::new();

    let err = session
        .load_file(&dir.path().join("absent.csv"))
        .expect_err("file does not exist");
    assert!(matches!(err, LoadError::Io(_)));
    assert!(session.source_path().is_none());
}

#[test]
fn unknown_placeholder_is_reported_by_name() {
    let (_dir, mut session) = loaded("Alex,Lee,alex@example.com,alee,p1\n");
    session.set_template("Hi {Nickname}");
    let record = session.current().cloned().expect("current");

    assert_eq!(
        session.render(&record),
        Err(RenderError::UnknownPlaceholder("Nickname".to_string()))
    );

    session.reset_template();
    assert!(session.render(&record).is_ok());
}

// Duplicate last names collapse into one navigation entry at the position
// the name first appeared, carrying the later row's values.
#[test]
fn duplicate_last_name_keeps_one_entry_with_later_values() {
    let (_dir, mut session) = loaded(
        "Alex,Lee,alex@example.com,alee,first\n\
         Sam,Park,sam@example.com,spark,p2\n\
         Jamie,Lee,jamie@example.com,jlee,second\n",
    );

    let names = session
        .store()
        .iter()
        .map(|record| record.last_name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Lee", "Park"]);

    let lee = session.find_by_last_name("Lee").expect("found");
    assert_eq!(lee.first_name, "Jamie");
    assert_eq!(lee.password, "second");

    assert_eq!(session.current().map(|r| r.first_name.as_str()), Some("Jamie"));
    session.next();
    session.next();
    assert_eq!(session.current().map(|r| r.first_name.as_str()), Some("Jamie"));
}

#[test]
fn last_names_differing_only_in_case_stay_distinct() {
    let (_dir, session) = loaded(
        "Alex,Lee,alex@example.com,alee,p1\n\
         Jamie,LEE,jamie@example.com,jlee,p2\n",
    );

    assert_eq!(session.store().len(), 2);
    assert_eq!(
        session.find_by_last_name("lee").map(|r| r.first_name.as_str()).ok(),
        Some("Jamie")
    );
}

#[test]
fn search_miss_lists_known_names() {
    let (_dir, session) = loaded(
        "Sam,Park,sam@example.com,spark,p2\n\
         Alex,Lee,alex@example.com,alee,p1\n",
    );

    let miss = session.find_by_last_name("Kim").expect_err("not found");
    assert_eq!(miss.candidates, ["Lee", "Park"]);
    assert!(miss.to_string().contains("Kim"));
}
