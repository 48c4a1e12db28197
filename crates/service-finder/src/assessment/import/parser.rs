use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct AnswerRow {
    pub(crate) respondent: String,
    pub(crate) question_id: String,
    pub(crate) selected_options: Vec<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<AnswerRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<SheetRow>() {
        let row = record?;
        rows.push(AnswerRow {
            respondent: clean_identifier(&row.respondent),
            question_id: clean_identifier(&row.question),
            selected_options: split_options(row.selected_options.as_deref().unwrap_or_default()),
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Respondent")]
    respondent: String,
    #[serde(rename = "Question")]
    question: String,
    #[serde(rename = "Selected Options", default)]
    selected_options: Option<String>,
}

fn clean_identifier(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}

fn split_options(value: &str) -> Vec<String> {
    value
        .split([';', '|'])
        .map(clean_identifier)
        .filter(|token| !token.is_empty())
        .collect()
}
