//! Batch accuracy harness.
//!
//! Reads a CSV of test cases, runs each question through the full chart
//! pipeline, and scores the rendered answer against an expected phrase by
//! case-insensitive substring containment.
//!
//! Expected header: `name,date,time,lat,lon,timezone,question,expected`.

use prashna_chart::{BirthInput, run_question};
use prashna_core::EphemerisSource;

pub const CSV_HEADER: &str = "name,date,time,lat,lon,timezone,question,expected";

/// One row of the accuracy CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyCase {
    pub name: String,
    pub date: String,
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub question: String,
    pub expected: String,
}

/// Split one CSV line into fields.
///
/// Double quotes wrap fields containing commas; `""` inside a quoted field
/// is a literal quote. No escape character beyond that.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// Parse the whole CSV text into cases.
///
/// The first non-empty line must be the header. Blank lines are skipped;
/// a malformed row aborts with a message naming the line.
pub fn parse_cases(text: &str) -> Result<Vec<AccuracyCase>, String> {
    let mut cases = Vec::new();
    let mut saw_header = false;
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if !saw_header {
            if line.trim() != CSV_HEADER {
                return Err(format!(
                    "line {}: expected header '{CSV_HEADER}', got '{line}'",
                    lineno + 1
                ));
            }
            saw_header = true;
            continue;
        }
        let fields = split_csv_line(line);
        if fields.len() != 8 {
            return Err(format!(
                "line {}: expected 8 fields, got {}",
                lineno + 1,
                fields.len()
            ));
        }
        let latitude: f64 = fields[3]
            .trim()
            .parse()
            .map_err(|e| format!("line {}: bad latitude '{}': {e}", lineno + 1, fields[3]))?;
        let longitude: f64 = fields[4]
            .trim()
            .parse()
            .map_err(|e| format!("line {}: bad longitude '{}': {e}", lineno + 1, fields[4]))?;
        cases.push(AccuracyCase {
            name: fields[0].trim().to_string(),
            date: fields[1].trim().to_string(),
            time: fields[2].trim().to_string(),
            latitude,
            longitude,
            timezone: fields[5].trim().to_string(),
            question: fields[6].trim().to_string(),
            expected: fields[7].trim().to_string(),
        });
    }
    if !saw_header {
        return Err("empty file: missing header".to_string());
    }
    Ok(cases)
}

/// Aggregate result of one harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccuracyReport {
    pub total: usize,
    pub passed: usize,
}

impl AccuracyReport {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.passed as f64 / self.total as f64
        }
    }
}

/// Score one case: the answer must contain the expected phrase,
/// case-insensitively. An empty expected phrase always passes.
pub fn case_passes(answer: &str, expected: &str) -> bool {
    answer.to_lowercase().contains(&expected.trim().to_lowercase())
}

/// Run every case and print one PASS/FAIL line per row.
///
/// Rows whose birth input fails to parse are counted as failures, not
/// aborts, so one bad row never sinks the batch.
pub fn run_harness(
    source: &dyn EphemerisSource,
    cases: &[AccuracyCase],
    evaluation_jd: f64,
) -> AccuracyReport {
    let mut passed = 0;
    for case in cases {
        let answer = match BirthInput::parse(
            &case.date,
            &case.time,
            &case.timezone,
            case.latitude,
            case.longitude,
        ) {
            Ok(birth) => run_question(source, &birth, evaluation_jd, &case.question),
            Err(e) => {
                log::warn!("case '{}' has invalid birth input: {e}", case.name);
                format!("invalid birth input: {e}")
            }
        };
        let ok = case_passes(&answer, &case.expected);
        if ok {
            passed += 1;
        }
        println!(
            "{:<4} {:<20} expected '{}'",
            if ok { "PASS" } else { "FAIL" },
            case.name,
            case.expected
        );
    }
    AccuracyReport { total: cases.len(), passed }
}
