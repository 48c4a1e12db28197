mod parser;

use super::domain::UserAnswer;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answer sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer sheet CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// All answers recorded for one respondent, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerSheet {
    pub respondent: String,
    pub answers: Vec<UserAnswer>,
}

pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<AnswerSheet>, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<AnswerSheet>, AnswerImportError> {
        let mut sheets: Vec<AnswerSheet> = Vec::new();

        for row in parser::parse_rows(reader)? {
            let answer = UserAnswer {
                question_id: row.question_id,
                selected_options: row.selected_options,
            };

            match sheets
                .iter_mut()
                .find(|sheet| sheet.respondent == row.respondent)
            {
                Some(sheet) => sheet.answers.push(answer),
                None => sheets.push(AnswerSheet {
                    respondent: row.respondent,
                    answers: vec![answer],
                }),
            }
        }

        Ok(sheets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn importer_groups_rows_by_respondent_in_first_seen_order() {
        let csv = "Respondent,Question,Selected Options\n\
acme,q1,mature\n\
globex,q2,zero\n\
acme,q5,sam_only; gsa_schedule\n";

        let sheets = AnswerSheetImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].respondent, "acme");
        assert_eq!(
            sheets[0].answers,
            vec![
                UserAnswer::new("q1", ["mature"]),
                UserAnswer::new("q5", ["sam_only", "gsa_schedule"]),
            ]
        );
        assert_eq!(sheets[1].respondent, "globex");
    }

    #[test]
    fn importer_keeps_unknown_identifiers_verbatim() {
        let csv = "Respondent,Question,Selected Options\nacme,q99,nope|also_nope\n";
        let sheets = AnswerSheetImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(
            sheets[0].answers,
            vec![UserAnswer::new("q99", ["nope", "also_nope"])]
        );
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = AnswerSheetImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            AnswerImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn importer_rejects_rows_missing_required_columns() {
        let csv = "Respondent,Selected Options\nacme,mature\n";
        let error = AnswerSheetImporter::from_reader(Cursor::new(csv)).expect_err("csv error");
        assert!(matches!(error, AnswerImportError::Csv(_)));
    }
}
