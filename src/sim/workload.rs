//! Process-set sources: the line-oriented list format, seeded random
//! generation, and the four-process reference fixture.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

use crate::core::{Process, ProcessError, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingField { line: usize, field: &'static str },
    BadNumber { line: usize, field: &'static str },
    DuplicateId { line: usize, id: String },
    BadProcess { line: usize, source: ProcessError },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingField { line, field } => {
                write!(f, "line {line}: missing {field} field")
            }
            ParseError::BadNumber { line, field } => {
                write!(f, "line {line}: {field} is not a valid number")
            }
            ParseError::DuplicateId { line, id } => {
                write!(f, "line {line}: duplicate process id {id}")
            }
            ParseError::BadProcess { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::BadProcess { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parses a process list, one process per line:
/// `ID arrival burst priority [deadline]`, whitespace separated. A deadline
/// of 0 (or none) means "derive it". Blank lines and `#` comments are
/// skipped. The result is sorted by arrival time, stable on input order.
pub fn parse(text: &str) -> Result<Vec<Process>, ParseError> {
    let mut procs = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for (lineno, raw) in text.lines().enumerate() {
        let line = lineno + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let id = next_field(&mut fields, line, "id")?;
        let arrival: Ticks = number(next_field(&mut fields, line, "arrival")?, line, "arrival")?;
        let burst: Ticks = number(next_field(&mut fields, line, "burst")?, line, "burst")?;
        let priority: i32 = number(next_field(&mut fields, line, "priority")?, line, "priority")?;
        let deadline = match fields.next() {
            None => None,
            Some(s) => match number::<Ticks>(s, line, "deadline")? {
                0 => None,
                d => Some(d),
            },
        };

        if !seen.insert(id.to_owned()) {
            return Err(ParseError::DuplicateId {
                line,
                id: id.to_owned(),
            });
        }
        let process = Process::new(id, arrival, burst, priority, deadline)
            .map_err(|source| ParseError::BadProcess { line, source })?;
        procs.push(process);
    }

    procs.sort_by_key(|p| p.arrival_time);
    Ok(procs)
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    fields.next().ok_or(ParseError::MissingField { line, field })
}

fn number<T: FromStr>(s: &str, line: usize, field: &'static str) -> Result<T, ParseError> {
    s.parse().map_err(|_| ParseError::BadNumber { line, field })
}

/// Generates `count` processes P1..Pn with arrival in 0..=20, burst in
/// 1..=10 and priority in 1..=5, sorted by arrival time.
pub fn random(count: usize, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut procs: Vec<Process> = (0..count)
        .map(|i| {
            let burst = rng.random_range(1..=10);
            Process {
                id: format!("P{}", i + 1),
                arrival_time: rng.random_range(0..=20),
                burst_time: burst,
                priority: rng.random_range(1..=5),
                deadline: None,
                remaining_time: burst,
                waiting_time: 0,
                turnaround_time: 0,
            }
        })
        .collect();
    procs.sort_by_key(|p| p.arrival_time);
    procs
}

/// The four-process fixture the end-to-end scenarios run against.
pub fn reference_set() -> Vec<Process> {
    [
        ("P1", 0, 8, 2),
        ("P2", 1, 4, 1),
        ("P3", 2, 9, 3),
        ("P4", 3, 5, 4),
    ]
    .into_iter()
    .map(|(id, arrival_time, burst_time, priority)| Process {
        id: id.to_owned(),
        arrival_time,
        burst_time,
        priority,
        deadline: None,
        remaining_time: burst_time,
        waiting_time: 0,
        turnaround_time: 0,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_and_five_field_lines() {
        let text = "\
# id arrival burst priority [deadline]
P1 0 8 2
P2 1 4 1 9

P3 2 9 3 0
";
        let procs = parse(text).unwrap();
        assert_eq!(procs.len(), 3);
        assert_eq!(procs[0].id, "P1");
        assert_eq!(procs[0].deadline, None);
        assert_eq!(procs[1].deadline, Some(9));
        // A zero deadline counts as unset.
        assert_eq!(procs[2].deadline, None);
    }

    #[test]
    fn output_is_sorted_by_arrival() {
        let procs = parse("B 5 2 1\nA 1 2 1\n").unwrap();
        assert_eq!(procs[0].id, "A");
        assert_eq!(procs[1].id, "B");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = parse("P1 0 4 1\nP1 1 2 1\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateId {
                line: 2,
                id: "P1".to_owned()
            }
        );
    }

    #[test]
    fn rejects_malformed_fields() {
        assert_eq!(
            parse("P1 0 4\n").unwrap_err(),
            ParseError::MissingField {
                line: 1,
                field: "priority"
            }
        );
        assert_eq!(
            parse("P1 zero 4 1\n").unwrap_err(),
            ParseError::BadNumber {
                line: 1,
                field: "arrival"
            }
        );
        assert_eq!(
            parse("P1 -1 4 1\n").unwrap_err(),
            ParseError::BadNumber {
                line: 1,
                field: "arrival"
            }
        );
    }

    #[test]
    fn rejects_zero_burst() {
        let err = parse("P1 0 0 1\n").unwrap_err();
        assert!(matches!(err, ParseError::BadProcess { line: 1, .. }));
    }

    #[test]
    fn random_sets_are_reproducible_per_seed() {
        let a = random(5, 7);
        let b = random(5, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        assert!(a.iter().all(|p| (1..=10).contains(&p.burst_time)));
        assert!(a.windows(2).all(|w| w[0].arrival_time <= w[1].arrival_time));
    }

    #[test]
    fn reference_set_matches_the_scenario_fixture() {
        let procs = reference_set();
        assert_eq!(procs.len(), 4);
        assert_eq!(procs[1].id, "P2");
        assert_eq!(procs[1].arrival_time, 1);
        assert_eq!(procs[1].burst_time, 4);
        assert_eq!(procs[1].priority, 1);
    }
}
