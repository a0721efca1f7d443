//! End-of-run summary.

use crate::cohort::FilterStatistics;
use crate::enrich::EnrichedRow;
use crate::scales::PowerClassification;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub filter: FilterStatistics,
    /// Retained rows per classification label
    pub classifications: BTreeMap<String, usize>,
    /// Retained rows that matched no classification rule
    pub unclassified: usize,
}

impl RunSummary {
    pub fn new(
        input: PathBuf,
        output: PathBuf,
        filter: FilterStatistics,
        retained: &[EnrichedRow],
    ) -> Self {
        let mut classifications: BTreeMap<String, usize> = PowerClassification::ALL
            .iter()
            .map(|c| (c.label().to_string(), 0))
            .collect();
        let mut unclassified = 0;
        for row in retained {
            match row.derived.classification {
                Some(class) => *classifications.entry(class.label().to_string()).or_default() += 1,
                None => unclassified += 1,
            }
        }
        Self {
            input,
            output,
            filter,
            classifications,
            unclassified,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_terminal(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} See {}\n",
            "All scales computed.".green().bold(),
            self.output.display()
        ));
        out.push_str(&format!(
            "  Rows read: {}  retained: {}  ({:.1}%)\n",
            self.filter.total_rows,
            self.filter.retained,
            self.filter.retention_rate()
        ));
        out.push_str(&format!(
            "  Dropped: {} ({} incomplete IMS, {} excluded gender)\n",
            self.filter.total_dropped(),
            self.filter.dropped_incomplete,
            self.filter.dropped_by_gender
        ));
        out.push_str(&format!("  {}\n", "Cross-classification:".bold()));
        for (label, count) in &self.classifications {
            out.push_str(&format!("    {:<16} {}\n", label, count));
        }
        if self.unclassified > 0 {
            out.push_str(&format!(
                "    {:<16} {}\n",
                "unclassified".yellow(),
                self.unclassified
            ));
        }
        out
    }
}
