use serde::{Deserialize, Serialize};

/// A persisted exam row.
///
/// `filename` is the name of the attachment inside the upload directory. It is
/// empty only for rows that were never given a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub title: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub year: String,
    pub filename: String,
    pub userid: i64,
}

/// Descriptive fields of an exam as submitted on creation.
///
/// The attachment name is not part of it: it is taken from the uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExam {
    pub title: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub year: String,
    pub userid: i64,
}

/// Partial update of an exam. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub userid: Option<i64>,
}

impl Exam {
    pub fn apply(&mut self, update: ExamUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(code) = update.code {
            self.code = code;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(filename) = update.filename {
            self.filename = filename;
        }
        if let Some(userid) = update.userid {
            self.userid = userid;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midterm() -> Exam {
        Exam {
            id: 3,
            title: "T".to_string(),
            code: "C101".to_string(),
            kind: "midterm".to_string(),
            year: "2024".to_string(),
            filename: "t.pdf".to_string(),
            userid: 7,
        }
    }

    #[test]
    fn apply_merges_field_by_field() {
        let mut exam = midterm();
        exam.apply(ExamUpdate {
            year: Some("2025".to_string()),
            userid: Some(9),
            ..Default::default()
        });
        assert_eq!(exam.year, "2025");
        assert_eq!(exam.userid, 9);
        assert_eq!(exam.title, "T");
        assert_eq!(exam.filename, "t.pdf");
    }

    #[test]
    fn kind_serializes_as_type() {
        let value = serde_json::to_value(midterm()).unwrap();
        assert_eq!(value["type"], "midterm");
        assert!(value.get("kind").is_none());
    }
}
