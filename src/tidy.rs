//! Reformatting clang-tidy logs: findings are deduplicated and grouped by file.

use std::collections::BTreeSet;
use std::fmt;
use std::io::{BufRead, Write};

use regex::Regex;

use crate::error::{Error, Result};

/// Line format of a clang-tidy finding: `path:line:col: kind: message [checks]`.
pub const FINDING_PATTERN: &str = r"^(.*):(\d+):(\d+):\s(warning|error):\s(.+)\s\[(.*)\]$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One clang-tidy diagnostic. Ordered by path, then line, then column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finding {
    pub path: String,
    pub line: u32,
    pub column: u32,
    pub severity: Severity,
    pub message: String,
    pub checks: String,
}

pub struct TidyLogParser {
    re: Regex,
}

impl TidyLogParser {
    pub fn new() -> Result<Self> {
        let re = Regex::new(FINDING_PATTERN).map_err(|e| Error::PatternError(e.to_string()))?;
        Ok(Self { re })
    }

    /// Parses a single log line, `None` for anything that is not a finding.
    pub fn parse_line(&self, line: &str) -> Option<Finding> {
        let caps = self.re.captures(line.trim_end_matches(['\r', '\n']))?;
        let severity = match &caps[4] {
            "error" => Severity::Error,
            _ => Severity::Warning,
        };
        Some(Finding {
            path: caps[1].to_string(),
            line: caps[2].parse().ok()?,
            column: caps[3].parse().ok()?,
            severity,
            message: caps[5].to_string(),
            checks: caps[6].to_string(),
        })
    }

    /// Collects the distinct findings of a whole log, sorted.
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<BTreeSet<Finding>> {
        let mut findings = BTreeSet::new();
        for line in reader.lines() {
            if let Some(finding) = self.parse_line(&line?) {
                findings.insert(finding);
            }
        }
        Ok(findings)
    }
}

/// Prints findings grouped under their file path.
pub fn write_report<'a, W, I>(mut out: W, findings: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Finding>,
{
    let mut last_path: Option<&str> = None;
    for finding in findings {
        if last_path != Some(finding.path.as_str()) {
            writeln!(out, "{}", finding.path)?;
            last_path = Some(finding.path.as_str());
        }
        writeln!(
            out,
            "  {}:{} ({}) {} [{}]",
            finding.line, finding.column, finding.severity, finding.message, finding.checks
        )?;
    }
    Ok(())
}
