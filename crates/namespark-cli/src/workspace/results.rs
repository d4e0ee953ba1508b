use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use namespark_core::FormInput;
use namespark_generate::GenerationReport;

use super::{WorkspaceResult, write_json_atomic};

/// Result file written by `generate --out`.
#[derive(Debug, Serialize)]
pub struct GenerationRecord<'a> {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub input: &'a FormInput,
    pub names: &'a [String],
    pub report: &'a GenerationReport,
}

pub fn write_record(path: &Path, record: &GenerationRecord<'_>) -> WorkspaceResult<()> {
    write_json_atomic(path, record)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use namespark_generate::{PatternId, PatternOutcome};

    use super::*;

    #[test]
    fn record_file_carries_run_metadata_and_camel_case_input() {
        let dir = std::env::temp_dir().join(format!("namespark_record_{}", uuid::Uuid::new_v4()));
        let path = dir.join("result.json");

        let input = FormInput::new("budget planner", "Finance", "Premium", "money");
        let names = vec!["EliteBudget".to_string(), "FinanceSpark".to_string()];
        let mut report = GenerationReport::default();
        report.record(
            PatternId::IndustrySpark,
            PatternOutcome::Produced {
                name: "FinanceSpark".to_string(),
            },
        );
        let record = GenerationRecord {
            run_id: "run-1".to_string(),
            generated_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            seed: None,
            input: &input,
            names: &names,
            report: &report,
        };

        write_record(&path, &record).expect("write record");
        let written = std::fs::read_to_string(&path).expect("read record");
        let value: serde_json::Value = serde_json::from_str(&written).expect("parse record");

        assert_eq!(value["run_id"], "run-1");
        assert_eq!(value["generated_at"], "2026-01-02T03:04:05Z");
        assert!(value.get("seed").is_none());
        assert_eq!(value["input"]["coreConcept"], "budget planner");
        assert_eq!(value["input"]["industry"], "Finance");
        assert_eq!(value["names"], serde_json::json!(["EliteBudget", "FinanceSpark"]));
        assert_eq!(value["report"]["patterns"][0]["pattern"], "industry_spark");

        std::fs::remove_dir_all(&dir).expect("cleanup");
    }
}
