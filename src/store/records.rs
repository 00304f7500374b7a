//! The record store proper: an in-memory list of students mirroring a flat
//! marks file, plus every query and mutation the UI drives. Mutations write
//! the file first and only then touch the list, so a failed write never
//! leaves the two views disagreeing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::StudentRecord;
use crate::store::error::{StoreError, ValidationError};
use crate::store::source::replace_file;

#[derive(Debug)]
/// File-backed student collection. The list keeps file order; that order is
/// the canonical one and queries never rearrange it.
pub struct RecordStore {
    path: PathBuf,
    records: Vec<StudentRecord>,
}

#[derive(Debug, Clone, Default)]
/// Raw form input for add and update flows. Fields stay strings until
/// validation turns them into a `StudentRecord`, so the form can hold
/// whatever the user has typed so far.
pub struct StudentDraft {
    pub number: String,
    pub name: String,
    pub coursework: [String; 3],
    pub exam: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The orderings offered by the sort menu.
pub enum SortKey {
    NameAsc,
    NameDesc,
    PercentAsc,
    PercentDesc,
    Number,
    Coursework,
    Exam,
    Total,
}

impl SortKey {
    /// Menu order for the sort popup.
    pub const ALL: [SortKey; 8] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PercentAsc,
        SortKey::PercentDesc,
        SortKey::Number,
        SortKey::Coursework,
        SortKey::Exam,
        SortKey::Total,
    ];

    /// Label shown in the sort popup.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A → Z)",
            SortKey::NameDesc => "Name (Z → A)",
            SortKey::PercentAsc => "Percentage (Low → High)",
            SortKey::PercentDesc => "Percentage (High → Low)",
            SortKey::Number => "Student Number",
            SortKey::Coursework => "Coursework Marks",
            SortKey::Exam => "Exam Marks",
            SortKey::Total => "Total Marks",
        }
    }

    /// Reorder `records` in place. Every arm uses a stable sort, so records
    /// that compare equal keep their incoming order. The mark-based keys
    /// put the highest scores first.
    pub fn apply(&self, records: &mut [StudentRecord]) {
        match self {
            SortKey::NameAsc => {
                records.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            SortKey::NameDesc => {
                records.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
            }
            SortKey::PercentAsc => {
                records.sort_by(|a, b| a.percentage().total_cmp(&b.percentage()));
            }
            SortKey::PercentDesc => {
                records.sort_by(|a, b| b.percentage().total_cmp(&a.percentage()));
            }
            SortKey::Number => {
                records.sort_by_key(|record| numeric_number(record));
            }
            SortKey::Coursework => {
                records.sort_by(|a, b| b.coursework_total().cmp(&a.coursework_total()));
            }
            SortKey::Exam => {
                records.sort_by(|a, b| b.exam.cmp(&a.exam));
            }
            SortKey::Total => {
                records.sort_by(|a, b| b.overall_total().cmp(&a.overall_total()));
            }
        }
    }
}

/// Numeric sort key for a student number. Identifiers that do not parse as
/// integers sort after every numeric one; stability keeps their relative
/// order.
fn numeric_number(record: &StudentRecord) -> u64 {
    record.number.parse().unwrap_or(u64::MAX)
}

#[derive(Debug, Clone)]
/// Best and worst records by overall total.
pub struct Extremes {
    pub highest: StudentRecord,
    pub lowest: StudentRecord,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Collection-level figures shown under the records table.
pub struct Summary {
    pub count: usize,
    pub average_percentage: f64,
}

impl RecordStore {
    /// Open the store over `path`, loading every readable line. A missing
    /// file comes back as `Unavailable` so the caller can choose to carry
    /// on with an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let mut store = RecordStore {
            path: path.into(),
            records: Vec::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// An empty store over `path`, the recovery path after `Unavailable`.
    /// The file appears on disk with the first successful add.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        RecordStore {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Re-read the backing file from scratch. Lines that do not parse are
    /// skipped, and a line repeating an earlier line's number is skipped
    /// too, keeping numbers unique in memory no matter what the file holds.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::Unavailable {
                    path: self.path.clone(),
                });
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        let mut records: Vec<StudentRecord> = Vec::new();
        for line in contents.lines() {
            let record = match StudentRecord::parse_line(line) {
                Ok(record) => record,
                Err(_) => continue,
            };
            if records.iter().any(|existing| existing.number == record.number) {
                continue;
            }
            records.push(record);
        }
        self.records = records;
        Ok(())
    }

    /// Records in canonical (file) order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Case-insensitive substring search over number and name. A blank
    /// query matches everything; hits keep canonical order.
    pub fn search(&self, query: &str) -> Vec<StudentRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.records.clone();
        }
        self.records
            .iter()
            .filter(|record| {
                record.number.to_lowercase().contains(&needle)
                    || record.name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Every record whose number or name equals `identifier` exactly. Name
    /// comparison is case-sensitive. Students sharing a name are all
    /// returned so the caller presents the full set instead of guessing.
    pub fn exact_lookup(&self, identifier: &str) -> Vec<StudentRecord> {
        self.records
            .iter()
            .filter(|record| record.number == identifier || record.name == identifier)
            .cloned()
            .collect()
    }

    /// A copy of the records ordered by `key`. The store's canonical order
    /// is untouched.
    pub fn sorted(&self, key: SortKey) -> Vec<StudentRecord> {
        let mut records = self.records.clone();
        key.apply(&mut records);
        records
    }

    /// Highest and lowest records by overall total. Ties keep the earliest
    /// record in canonical order.
    pub fn extremes(&self) -> Result<Extremes, StoreError> {
        let first = match self.records.first() {
            Some(first) => first,
            None => return Err(StoreError::EmptyCollection),
        };
        let mut highest = first;
        let mut lowest = first;
        for record in &self.records[1..] {
            if record.overall_total() > highest.overall_total() {
                highest = record;
            }
            if record.overall_total() < lowest.overall_total() {
                lowest = record;
            }
        }
        Ok(Extremes {
            highest: highest.clone(),
            lowest: lowest.clone(),
        })
    }

    /// Record count and mean percentage. An empty store reports an average
    /// of zero rather than dividing by the count.
    pub fn summary(&self) -> Summary {
        let count = self.records.len();
        if count == 0 {
            return Summary {
                count: 0,
                average_percentage: 0.0,
            };
        }
        let total: f64 = self.records.iter().map(|record| record.percentage()).sum();
        Summary {
            count,
            average_percentage: total / count as f64,
        }
    }

    /// Validate `draft` and append the new record to the file and the list,
    /// returning the hydrated record so the caller can select it. The file
    /// is created on the first add; a validation failure writes nothing.
    pub fn add(&mut self, draft: &StudentDraft) -> Result<StudentRecord, StoreError> {
        let record = validate_draft(draft)?;
        if self
            .records
            .iter()
            .any(|existing| existing.number == record.number)
        {
            return Err(StoreError::DuplicateNumber(record.number));
        }

        let mut contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(StoreError::Io(err)),
        };
        // A hand-edited file may end without a newline; start a fresh line
        // before appending so the last record is not glued onto it.
        if !contents.is_empty() && !contents.ends_with('\n') {
            contents.push('\n');
        }
        contents.push_str(&record.to_line());
        contents.push('\n');
        replace_file(&self.path, &contents)?;

        self.records.push(record.clone());
        Ok(record)
    }

    /// Validate `draft` and replace the record holding `old_number`. Only
    /// the first file line parsing to that number changes; every other
    /// line, malformed ones included, is copied through byte for byte. The
    /// list is then reloaded from the rewritten file so both views agree.
    pub fn update(
        &mut self,
        old_number: &str,
        draft: &StudentDraft,
    ) -> Result<StudentRecord, StoreError> {
        if !self
            .records
            .iter()
            .any(|record| record.number == old_number)
        {
            return Err(StoreError::NotFound(old_number.to_string()));
        }
        let record = validate_draft(draft)?;
        if record.number != old_number
            && self
                .records
                .iter()
                .any(|existing| existing.number == record.number)
        {
            return Err(StoreError::DuplicateNumber(record.number));
        }

        let contents = fs::read_to_string(&self.path)?;
        let mut rewritten = String::with_capacity(contents.len());
        let mut replaced = false;
        for line in contents.split_inclusive('\n') {
            if !replaced {
                if let Ok(existing) = StudentRecord::parse_line(line) {
                    if existing.number == old_number {
                        rewritten.push_str(&record.to_line());
                        rewritten.push('\n');
                        replaced = true;
                        continue;
                    }
                }
            }
            rewritten.push_str(line);
        }
        if !replaced {
            return Err(StoreError::NotFound(old_number.to_string()));
        }
        replace_file(&self.path, &rewritten)?;
        self.reload()?;

        Ok(record)
    }

    /// Remove the record holding `number`, rewriting the file from the
    /// remaining records. Survivors keep their three coursework components
    /// because components are what the store holds; nothing is ever
    /// reconstructed from a total. The list only changes once the rewrite
    /// has succeeded.
    pub fn delete(&mut self, number: &str) -> Result<StudentRecord, StoreError> {
        let position = match self
            .records
            .iter()
            .position(|record| record.number == number)
        {
            Some(position) => position,
            None => return Err(StoreError::NotFound(number.to_string())),
        };

        let mut contents = String::new();
        for (index, record) in self.records.iter().enumerate() {
            if index == position {
                continue;
            }
            contents.push_str(&record.to_line());
            contents.push('\n');
        }
        replace_file(&self.path, &contents)?;

        Ok(self.records.remove(position))
    }
}

/// Turn raw form input into a record, checking in a fixed order: presence
/// of all six fields, number format, name format, mark format, mark range.
/// The first failure wins so the user fixes one thing at a time.
fn validate_draft(draft: &StudentDraft) -> Result<StudentRecord, ValidationError> {
    let number = draft.number.trim();
    let name = draft.name.trim();
    let marks = [
        ("Coursework mark 1", draft.coursework[0].trim()),
        ("Coursework mark 2", draft.coursework[1].trim()),
        ("Coursework mark 3", draft.coursework[2].trim()),
        ("Exam mark", draft.exam.trim()),
    ];

    if number.is_empty() {
        return Err(ValidationError::MissingField("Student number"));
    }
    if name.is_empty() {
        return Err(ValidationError::MissingField("Name"));
    }
    for (label, value) in marks {
        if value.is_empty() {
            return Err(ValidationError::MissingField(label));
        }
    }

    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NumberFormat);
    }
    if name.chars().any(|c| c.is_ascii_digit()) || name.contains(',') {
        return Err(ValidationError::NameFormat);
    }

    let mut parsed = [0i64; 4];
    for (slot, (label, value)) in parsed.iter_mut().zip(marks) {
        *slot = value.parse().map_err(|_| ValidationError::MarkFormat(label))?;
    }
    for (value, (label, _)) in parsed.iter().zip(marks) {
        if !(0..=100).contains(value) {
            return Err(ValidationError::MarkRange {
                field: label,
                value: *value,
            });
        }
    }

    Ok(StudentRecord {
        number: number.to_string(),
        name: name.to_string(),
        coursework: [parsed[0], parsed[1], parsed[2]],
        exam: parsed[3],
    })
}
