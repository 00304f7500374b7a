//! End-to-end checks of the record store against real files on disk.

use std::fs;

use student_marks_manager::{Grade, RecordStore, SortKey, StoreError, StudentDraft};

fn draft(number: &str, name: &str, marks: [&str; 4]) -> StudentDraft {
    StudentDraft {
        number: number.to_string(),
        name: name.to_string(),
        coursework: [
            marks[0].to_string(),
            marks[1].to_string(),
            marks[2].to_string(),
        ],
        exam: marks[3].to_string(),
    }
}

#[test]
fn full_session_against_a_seeded_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studentMarks.txt");
    fs::write(&path, "1,Alice,10,20,15,50\n2,Bob,30,30,30,80\n").unwrap();

    let mut store = RecordStore::open(&path).unwrap();
    assert_eq!(store.len(), 2);

    // Derived values follow the fixed 160-mark scale.
    let alice = &store.records()[0];
    assert_eq!(alice.coursework_total(), 45);
    assert_eq!(alice.overall_total(), 95);
    assert_eq!(alice.percentage(), 59.375);
    assert_eq!(alice.grade(), Grade::C);

    let bob = &store.records()[1];
    assert_eq!(bob.overall_total(), 170);
    assert_eq!(bob.percentage(), 106.25);
    assert_eq!(bob.grade(), Grade::A);

    let summary = store.summary();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.average_percentage, 82.8125);

    let extremes = store.extremes().unwrap();
    assert_eq!(extremes.highest.name, "Bob");
    assert_eq!(extremes.lowest.name, "Alice");

    // One add, one update, one delete, each persisted as it happens.
    store.add(&draft("3", "Carol", ["5", "6", "7", "8"])).unwrap();
    store
        .update("2", &draft("2", "Bob", ["30", "30", "30", "90"]))
        .unwrap();
    store.delete("1").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "2,Bob,30,30,30,90\n3,Carol,5,6,7,8\n");

    // A fresh store sees exactly what the file holds.
    let reopened = RecordStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.records()[0].exam, 90);
    assert_eq!(reopened.records()[1].name, "Carol");
}

#[test]
fn missing_file_surfaces_unavailable_and_recovers_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studentMarks.txt");

    let err = RecordStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Unavailable { .. }));

    let mut store = RecordStore::empty(&path);
    assert!(store.is_empty());
    assert!(matches!(store.extremes(), Err(StoreError::EmptyCollection)));
    assert_eq!(store.summary().count, 0);
    assert_eq!(store.summary().average_percentage, 0.0);

    // The first successful add creates the file.
    store
        .add(&draft("1", "Alice", ["10", "20", "15", "50"]))
        .unwrap();
    assert!(path.exists());
    assert_eq!(RecordStore::open(&path).unwrap().len(), 1);
}

#[test]
fn sorted_views_never_touch_the_file_or_the_canonical_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studentMarks.txt");
    let seeded = "9,Cara,10,10,10,10\n3,Abe,20,20,20,20\n7,Bess,5,5,5,5\n";
    fs::write(&path, seeded).unwrap();

    let store = RecordStore::open(&path).unwrap();
    let by_name = store.sorted(SortKey::NameAsc);
    let names: Vec<&str> = by_name.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Abe", "Bess", "Cara"]);

    let by_percent = store.sorted(SortKey::PercentDesc);
    assert_eq!(by_percent[0].name, "Abe");
    assert_eq!(by_percent[2].name, "Bess");

    // Canonical order and file bytes stay in load order.
    let numbers: Vec<&str> = store.records().iter().map(|r| r.number.as_str()).collect();
    assert_eq!(numbers, ["9", "3", "7"]);
    assert_eq!(fs::read_to_string(&path).unwrap(), seeded);
}

#[test]
fn unreadable_lines_survive_edits_to_other_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studentMarks.txt");
    fs::write(
        &path,
        "1,Alice,10,20,15,50\n# scribbled note\n2,Bob,30,30,30,80\n",
    )
    .unwrap();

    let mut store = RecordStore::open(&path).unwrap();
    assert_eq!(store.len(), 2);

    store
        .update("1", &draft("1", "Alice", ["10", "20", "15", "60"]))
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "1,Alice,10,20,15,60\n# scribbled note\n2,Bob,30,30,30,80\n"
    );
}
