/*!
 * Process Description Loader
 * Parses the text description of a process population
 *
 * Format: the first non-blank line holds the descriptor count, followed by
 * one line per process with four non-negative integers:
 *
 * ```text
 * <id> <cpuBurst> <ioBurst> <arrivalTime>
 * ```
 */

use super::types::ProcessDescriptor;
use crate::core::errors::{ConfigError, InputError};
use crate::core::types::{Pid, SimResult};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

const FIELDS_PER_LINE: usize = 4;

/// Shortest possible record line: four digits and three separators
const MIN_RECORD_LEN: usize = 7;

/// Parse a process description held in memory
pub fn parse(input: &str) -> Result<Vec<ProcessDescriptor>, InputError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, count_text) = lines.next().ok_or(InputError::MissingCount)?;
    let expected: usize = count_text.parse().map_err(|_| InputError::InvalidCount {
        line: count_line,
        value: count_text.to_string(),
    })?;

    // The count is unverified until the records are read
    let mut descriptors = Vec::with_capacity(expected.min(input.len() / MIN_RECORD_LEN));

    for (line, text) in lines {
        if descriptors.len() == expected {
            return Err(InputError::TooManyRecords { expected, line });
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != FIELDS_PER_LINE {
            return Err(InputError::FieldCount {
                line,
                expected: FIELDS_PER_LINE,
                found: fields.len(),
            });
        }

        let descriptor = ProcessDescriptor::new(
            field::<Pid>(line, "id", fields[0])?,
            field(line, "cpu burst", fields[1])?,
            field(line, "I/O burst", fields[2])?,
            field(line, "arrival time", fields[3])?,
        );

        descriptors.push(descriptor);
    }

    if descriptors.len() < expected {
        return Err(InputError::TooFewRecords {
            expected,
            found: descriptors.len(),
        });
    }

    Ok(descriptors)
}

/// Read and parse a process description file
pub fn load_file(path: impl AsRef<Path>) -> SimResult<Vec<ProcessDescriptor>> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::UnreadableInput {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let descriptors = parse(&contents)?;
    debug!(path = %path.display(), count = descriptors.len(), "Loaded process description");
    Ok(descriptors)
}

fn field<T: FromStr>(line: usize, name: &str, value: &str) -> Result<T, InputError> {
    value.parse().map_err(|_| InputError::InvalidField {
        line,
        field: name.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::table::ProcessTable;

    #[test]
    fn test_parse_basic() {
        let input = "2\n0 4 0 0\n1 5 2 3\n";
        let descriptors = parse(input).unwrap();
        assert_eq!(
            descriptors,
            vec![
                ProcessDescriptor::new(0, 4, 0, 0),
                ProcessDescriptor::new(1, 5, 2, 3),
            ]
        );
    }

    #[test]
    fn test_blank_lines_and_padding_ignored() {
        let input = "\n  1 \n\n   7   3 1  2\n\n";
        let descriptors = parse(input).unwrap();
        assert_eq!(descriptors, vec![ProcessDescriptor::new(7, 3, 1, 2)]);
    }

    #[test]
    fn test_zero_count() {
        assert!(parse("0\n").unwrap().is_empty());
    }

    #[test]
    fn test_missing_count() {
        assert_eq!(parse("").unwrap_err(), InputError::MissingCount);
        assert_eq!(parse("  \n\n").unwrap_err(), InputError::MissingCount);
    }

    #[test]
    fn test_invalid_count() {
        assert_eq!(
            parse("two\n").unwrap_err(),
            InputError::InvalidCount {
                line: 1,
                value: "two".to_string()
            }
        );
        assert!(matches!(
            parse("-1\n").unwrap_err(),
            InputError::InvalidCount { .. }
        ));
    }

    #[test]
    fn test_non_numeric_field() {
        let err = parse("1\n0 x 0 0\n").unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidField {
                line: 2,
                field: "cpu burst".to_string(),
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_negative_field_rejected() {
        let err = parse("1\n0 3 -1 0\n").unwrap_err();
        assert!(matches!(err, InputError::InvalidField { line: 2, .. }));
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(
            parse("1\n0 3 1\n").unwrap_err(),
            InputError::FieldCount {
                line: 2,
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_count_mismatch() {
        assert_eq!(
            parse("3\n0 1 0 0\n1 1 0 0\n").unwrap_err(),
            InputError::TooFewRecords {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            parse("1\n0 1 0 0\n1 1 0 0\n").unwrap_err(),
            InputError::TooManyRecords {
                expected: 1,
                line: 3
            }
        );
    }

    #[test]
    fn test_huge_count_fails_without_allocating() {
        assert_eq!(
            parse("18446744073709551615\n1 1 0 0\n").unwrap_err(),
            InputError::TooFewRecords {
                expected: usize::MAX,
                found: 1
            }
        );
    }

    #[test]
    fn test_duplicate_ids_left_to_table() {
        let descriptors = parse("2\n4 1 0 0\n4 2 0 1\n").unwrap();
        assert_eq!(
            ProcessTable::new(&descriptors, true).unwrap_err(),
            InputError::DuplicatePid { pid: 4, record: 2 }
        );
    }
}
