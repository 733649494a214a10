use std::fmt;

use serde::{Deserialize, Serialize};

use crate::protocol::{parse_int_prefix, StudentPayload};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_newtype!(RollNo);

/// A student as stored by the records service. Field names match the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub roll_no: RollNo,
    pub marks: i64,
    pub grade: String,
}

impl StudentRecord {
    /// One-line rendering used by both front ends.
    pub fn summary_line(&self) -> String {
        format!(
            "{} (Roll No: {}) - {} Marks [{}]",
            self.name, self.roll_no, self.marks, self.grade
        )
    }
}

/// User-entered form text, not validated beyond presence of every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub roll_no: String,
    pub marks: String,
    pub grade: String,
}

impl StudentDraft {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.roll_no, &self.marks, &self.grade]
            .iter()
            .all(|field| !field.is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Coerces the numeric fields; text that does not start with an integer becomes `None`.
    pub fn to_payload(&self) -> StudentPayload {
        StudentPayload {
            name: self.name.clone(),
            roll_no: parse_int_prefix(&self.roll_no),
            marks: parse_int_prefix(&self.marks),
            grade: self.grade.clone(),
        }
    }
}
