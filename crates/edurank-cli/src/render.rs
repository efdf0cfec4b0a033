//! Presentation of ranking results as text, CSV, or JSON.

use edurank_common::{OutputConfig, OutputFormat, Result};
use edurank_ranker::{CriterionTable, RankedRow, RankedTable};
use serde_json::{Map, Number, Value};

pub const SCORE_COLUMN: &str = "MOORA Score";
pub const RANK_COLUMN: &str = "Rank";

/// Render `ranked` per the output settings. With `top_n` the rows are sorted
/// by rank and truncated; otherwise they stay in input order.
pub fn render(ranked: &RankedTable, output: &OutputConfig) -> Result<String> {
    let rows: Vec<RankedRow<'_>> = match output.top_n {
        Some(n) => ranked.top(n),
        None => ranked.rows().collect(),
    };
    let identifier = ranked.table().identifier();

    match output.format {
        OutputFormat::Table => Ok(render_table(identifier, &rows, output.precision)),
        OutputFormat::Csv => render_csv(identifier, &rows),
        OutputFormat::Json => render_json(identifier, &rows),
    }
}

fn render_table(identifier: &str, rows: &[RankedRow<'_>], precision: usize) -> String {
    let scores: Vec<String> = rows.iter().map(|r| format!("{:.precision$}", r.score)).collect();
    let ranks: Vec<String> = rows.iter().map(|r| r.rank.to_string()).collect();

    let id_w = width(identifier, rows.iter().map(|r| r.id));
    let score_w = width(SCORE_COLUMN, scores.iter().map(String::as_str));
    let rank_w = width(RANK_COLUMN, ranks.iter().map(String::as_str));

    let mut out = format!(
        "{identifier:<id_w$}  {SCORE_COLUMN:>score_w$}  {RANK_COLUMN:>rank_w$}\n"
    );
    out.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(id_w),
        "-".repeat(score_w),
        "-".repeat(rank_w)
    ));
    for ((row, score), rank) in rows.iter().zip(&scores).zip(&ranks) {
        out.push_str(&format!(
            "{:<id_w$}  {score:>score_w$}  {rank:>rank_w$}\n",
            row.id
        ));
    }
    out
}

fn render_csv(identifier: &str, rows: &[RankedRow<'_>]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([identifier, SCORE_COLUMN, RANK_COLUMN])?;
    for row in rows {
        writer.write_record([row.id.to_string(), row.score.to_string(), row.rank.to_string()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| edurank_common::EduRankError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn render_json(identifier: &str, rows: &[RankedRow<'_>]) -> Result<String> {
    let values: Vec<Value> = rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            obj.insert(identifier.to_string(), Value::String(row.id.to_string()));
            obj.insert(SCORE_COLUMN.to_string(), number_or_null(row.score));
            obj.insert(RANK_COLUMN.to_string(), number_or_null(row.rank));
            Value::Object(obj)
        })
        .collect();
    let mut out = serde_json::to_string_pretty(&values)?;
    out.push('\n');
    Ok(out)
}

/// The parsed input table, identifier plus every criterion column.
pub fn render_input(table: &CriterionTable) -> String {
    let mut header: Vec<String> = vec![table.identifier().to_string()];
    header.extend(table.criteria().iter().cloned());

    let body: Vec<Vec<String>> = (0..table.n_rows())
        .map(|i| {
            let mut cells = vec![table.ids()[i].clone()];
            cells.extend(
                table
                    .columns()
                    .iter()
                    .map(|col| col[i].to_string()),
            );
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|c| width(&header[c], body.iter().map(|r| r[c].as_str())))
        .collect();

    let mut out = String::new();
    for line in std::iter::once(&header).chain(&body) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn number_or_null(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

fn width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(|c| c.chars().count()).fold(header.chars().count(), usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use edurank_ranker::{rank, WeightVector};
    use pretty_assertions::assert_eq;

    fn ranked() -> RankedTable {
        let table = CriterionTable::from_rows(
            "Technology",
            vec!["Cost".into(), "Innovation".into()],
            vec![("Quiz App", vec![1.0, 1.0]), ("VR", vec![0.0, 0.0]), ("LMS", vec![1.0, 1.0])],
        )
        .unwrap();
        rank(&table, &WeightVector::equal(2)).unwrap()
    }

    #[test]
    fn test_table_output() {
        let out = render(&ranked(), &OutputConfig::default()).unwrap();
        let expected = "\
Technology  MOORA Score  Rank
----------  -----------  ----
Quiz App         1.0000   1.5
VR               0.0000     3
LMS              1.0000   1.5
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_csv_output_with_top_n() {
        let output = OutputConfig { format: OutputFormat::Csv, top_n: Some(2), ..Default::default() };
        let out = render(&ranked(), &output).unwrap();
        assert_eq!(out, "Technology,MOORA Score,Rank\nQuiz App,1,1.5\nLMS,1,1.5\n");
    }

    #[test]
    fn test_json_output_nan_is_null() {
        let table = CriterionTable::from_rows(
            "Technology",
            vec!["Cost".into()],
            vec![("A", vec![2.0]), ("B", vec![2.0])],
        )
        .unwrap();
        let ranked = rank(&table, &WeightVector::equal(1)).unwrap();
        let output = OutputConfig { format: OutputFormat::Json, ..Default::default() };
        let out = render(&ranked, &output).unwrap();

        let parsed: Value = serde_json::from_str(&out).unwrap();
        let first = &parsed[0];
        assert_eq!(first["Technology"], "A");
        assert!(first["MOORA Score"].is_null());
        assert!(first["Rank"].is_null());
    }

    #[test]
    fn test_json_keys_follow_column_order() {
        let output = OutputConfig { format: OutputFormat::Json, top_n: Some(1), ..Default::default() };
        let out = render(&ranked(), &output).unwrap();
        let expected = "\
[
  {
    \"Technology\": \"Quiz App\",
    \"MOORA Score\": 1.0,
    \"Rank\": 1.5
  }
]
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_input_preview() {
        let table = CriterionTable::from_rows(
            "Technology",
            vec!["Cost".into()],
            vec![("LMS", vec![7.0]), ("VR", vec![9.5])],
        )
        .unwrap();
        assert_eq!(render_input(&table), "Technology  Cost\nLMS         7\nVR          9.5\n");
    }
}
