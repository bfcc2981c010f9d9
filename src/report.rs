use serde::Serialize;
use uuid::Uuid;

use crate::patch::{MatchSite, PatchOutcome};

/// Printed on every successful run, whether or not anything matched
pub const SUCCESS_MESSAGE: &str = "文件修改完成!";

/// Generate a unique identifier for one invocation
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Machine-readable summary of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub run_id: String,
    pub success: bool,
    pub path: String,
    pub matches: usize,
    pub sites: Vec<MatchSite>,
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum_after: Option<String>,
    pub byte_shift: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PatchReport {
    pub fn from_outcome(run_id: String, outcome: &PatchOutcome) -> Self {
        Self {
            run_id,
            success: true,
            path: outcome.path.clone(),
            matches: outcome.match_count(),
            sites: outcome.sites.clone(),
            written: outcome.written,
            checksum_before: Some(outcome.checksum_before.clone()),
            checksum_after: Some(outcome.checksum_after.clone()),
            byte_shift: outcome.byte_shift,
            error: None,
        }
    }

    pub fn failure(run_id: String, path: impl Into<String>, error: impl ToString) -> Self {
        Self {
            run_id,
            success: false,
            path: path.into(),
            matches: 0,
            sites: Vec::new(),
            written: false,
            checksum_before: None,
            checksum_after: None,
            byte_shift: 0,
            error: Some(error.to_string()),
        }
    }

    /// Human-readable form: the fixed confirmation line, a dry-run summary,
    /// or the error
    pub fn to_human(&self) -> String {
        if !self.success {
            format!("Error: {}", self.error.as_deref().unwrap_or("Unknown error"))
        } else if !self.written {
            format!(
                "Dry run: {} match(es) in {}, file not written",
                self.matches, self.path
            )
        } else {
            SUCCESS_MESSAGE.to_string()
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{Position, Span};

    fn outcome(sites: Vec<MatchSite>) -> PatchOutcome {
        let shift = -(sites.iter().map(|s| s.span.len()).sum::<usize>() as i64);
        PatchOutcome {
            path: "src/ui/app.rs".to_string(),
            sites,
            checksum_before: "aa".to_string(),
            checksum_after: "bb".to_string(),
            byte_shift: shift,
            written: true,
        }
    }

    #[test]
    fn test_human_output_same_with_and_without_matches() {
        let site = MatchSite {
            span: Span::from(2..14),
            start: Position { line: 2, column: 1 },
            end: Position { line: 3, column: 1 },
        };
        let hit = PatchReport::from_outcome(generate_run_id(), &outcome(vec![site]));
        let miss = PatchReport::from_outcome(generate_run_id(), &outcome(vec![]));

        assert_eq!(hit.to_human(), SUCCESS_MESSAGE);
        assert_eq!(miss.to_human(), SUCCESS_MESSAGE);
        assert_eq!(hit.matches, 1);
        assert_eq!(miss.matches, 0);
    }

    #[test]
    fn test_dry_run_human_output_reports_matches() {
        let site = MatchSite {
            span: Span::from(2..14),
            start: Position { line: 2, column: 1 },
            end: Position { line: 3, column: 1 },
        };
        let mut dry = outcome(vec![site]);
        dry.written = false;

        let human = PatchReport::from_outcome(generate_run_id(), &dry).to_human();

        assert_ne!(human, SUCCESS_MESSAGE);
        assert_eq!(human, "Dry run: 1 match(es) in src/ui/app.rs, file not written");
    }

    #[test]
    fn test_failure_report() {
        let report =
            PatchReport::failure(generate_run_id(), "missing.rs", "File not found: missing.rs");

        assert!(!report.success);
        assert_eq!(report.to_human(), "Error: File not found: missing.rs");
    }

    #[test]
    fn test_json_shape() {
        let site = MatchSite {
            span: Span::from(2..14),
            start: Position { line: 2, column: 1 },
            end: Position { line: 3, column: 1 },
        };
        let report = PatchReport::from_outcome("run-1".to_string(), &outcome(vec![site]));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["run_id"], "run-1");
        assert_eq!(json["success"], true);
        assert_eq!(json["matches"], 1);
        assert_eq!(json["byte_shift"], -12);
        assert_eq!(json["sites"][0]["span"]["byte_start"], 2);
        assert_eq!(json["sites"][0]["start"]["line"], 2);
        assert_eq!(json["sites"][0]["end"]["line"], 3);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_run_ids_are_unique() {
        let a = generate_run_id();
        let b = generate_run_id();

        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
