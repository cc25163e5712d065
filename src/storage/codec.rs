//! # Task File Codec
//!
//! Reads and writes the line-oriented task file:
//!
//! ```text
//! [YEAR] 2025
//! 11 29 Finish assignment
//! 12 25 Christmas Day
//! [YEAR] 2026
//! 1 1 New Year's Day
//! ```
//!
//! Task ids are not stored; re-inserting the lines in order rebuilds them.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::{
    calendar::Calendar,
    constants::YEAR_HEADER,
    error::{CalendarError, CalendarResult},
};

/// One parsed line of the task file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `[YEAR] <n>`
    Year(i32),
    /// `<month> <day> <description>`
    Task {
        month: u32,
        day: u32,
        description: &'a str,
    },
    /// Anything else; skipped.
    Unrecognized,
}

/// Classifies a single line (without its terminator).
pub fn parse_line(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix(YEAR_HEADER) {
        if let Some(year) = split_token(rest.trim_start()).and_then(|(t, _)| t.parse().ok()) {
            return Line::Year(year);
        }
    }

    parse_task(line).unwrap_or(Line::Unrecognized)
}

fn parse_task(line: &str) -> Option<Line<'_>> {
    let (month, rest) = split_token(line.trim_start())?;
    let (day, rest) = split_token(rest.trim_start())?;

    Some(Line::Task {
        month: month.parse().ok()?,
        day: day.parse().ok()?,
        // One separator after the day; further whitespace belongs to the description
        description: rest.strip_prefix([' ', '\t']).unwrap_or(rest),
    })
}

/// Splits off the first whitespace-delimited token.
fn split_token(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some(s.split_at(end))
}

/// Writes the whole calendar.
///
/// Years ascending, each followed by its tasks ordered by month, day and
/// list position. Years without tasks still get a header.
pub fn write_calendar<W: Write>(calendar: &Calendar, out: &mut W) -> io::Result<()> {
    for year in calendar.years() {
        writeln!(out, "{YEAR_HEADER} {}", year.number())?;
        for (month, day, task) in year.entries() {
            writeln!(
                out,
                "{} {} {}",
                month.number(),
                day.number(),
                task.description()
            )?;
        }
    }
    out.flush()
}

/// Rebuilds a calendar from task file content.
///
/// Lines before the first year header, unparseable lines, and task lines
/// whose month or day is out of range are skipped; none of them abort the
/// load. Invalid UTF-8 is decoded lossily.
pub fn read_calendar<R: BufRead>(mut reader: R) -> CalendarResult<Calendar> {
    let mut calendar = Calendar::new();
    let mut current_year: Option<i32> = None;
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    let mut loaded = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);

        match parse_line(line) {
            Line::Year(year) => {
                calendar.find_or_add_year(year)?;
                current_year = Some(year);
            }
            Line::Task {
                month,
                day,
                description,
            } => {
                let Some(year) = current_year else {
                    warn!("line {line_no}: task before any {YEAR_HEADER} header, skipped");
                    continue;
                };
                match calendar.add_task(year, month, day, description) {
                    Ok(_) => loaded += 1,
                    Err(err @ CalendarError::AllocationFailure) => return Err(err),
                    Err(err) => warn!("line {line_no}: {err}, skipped"),
                }
            }
            Line::Unrecognized => {
                if !line.trim().is_empty() {
                    warn!("line {line_no}: unrecognized, skipped");
                }
            }
        }
    }

    debug!(
        "loaded {loaded} tasks in {} years from {line_no} lines",
        calendar.len()
    );
    Ok(calendar)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(calendar: &Calendar) -> String {
        let mut out = Vec::new();
        write_calendar(calendar, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_year_header() {
        assert_eq!(parse_line("[YEAR] 2025"), Line::Year(2025));
        assert_eq!(parse_line("[YEAR]2026"), Line::Year(2026));
        assert_eq!(parse_line("[YEAR]   2027  "), Line::Year(2027));
        assert_eq!(parse_line("[YEAR] abc"), Line::Unrecognized);
        assert_eq!(parse_line("[YEAR]"), Line::Unrecognized);
    }

    #[test]
    fn test_parse_task_line() {
        assert_eq!(
            parse_line("12 25 Christmas Day"),
            Line::Task {
                month: 12,
                day: 25,
                description: "Christmas Day"
            }
        );
        assert_eq!(
            parse_line("1 1"),
            Line::Task {
                month: 1,
                day: 1,
                description: ""
            }
        );
        assert_eq!(
            parse_line("3\t4   spaced  out "),
            Line::Task {
                month: 3,
                day: 4,
                description: "  spaced  out "
            }
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_line(""), Line::Unrecognized);
        assert_eq!(parse_line("hello world"), Line::Unrecognized);
        assert_eq!(parse_line("12"), Line::Unrecognized);
        assert_eq!(parse_line("12 x desc"), Line::Unrecognized);
        assert_eq!(parse_line("-1 5 desc"), Line::Unrecognized);
    }

    #[test]
    fn test_write_format() {
        let mut cal = Calendar::new();
        cal.add_task(2026, 1, 1, "New Year's Day").unwrap();
        cal.add_task(2025, 12, 25, "Christmas Day").unwrap();
        cal.add_task(2025, 11, 29, "Finish assignment").unwrap();
        cal.add_task(2025, 12, 25, "Dinner at 6").unwrap();

        assert_eq!(
            to_string(&cal),
            "[YEAR] 2025\n\
             11 29 Finish assignment\n\
             12 25 Christmas Day\n\
             12 25 Dinner at 6\n\
             [YEAR] 2026\n\
             1 1 New Year's Day\n"
        );
    }

    #[test]
    fn test_write_empty_year() {
        let mut cal = Calendar::new();
        cal.find_or_add_year(2030).unwrap();
        assert_eq!(to_string(&cal), "[YEAR] 2030\n");
    }

    #[test]
    fn test_read_skips_bad_lines() {
        let input = "\
orphan line before header
5 5 also before header
[YEAR] 2025
13 1 bad month
2 30 bad day
not a task
2 28 good one

[YEAR] 2024
2 29 leap day
";
        let cal = read_calendar(input.as_bytes()).unwrap();

        assert_eq!(cal.len(), 2);
        assert_eq!(cal.year(2025).unwrap().task_count(), 1);
        assert_eq!(cal.list_tasks(2025, 2, 28), vec![(1, "good one")]);
        assert_eq!(cal.list_tasks(2024, 2, 29), vec![(1, "leap day")]);
        assert!(cal.list_tasks(2025, 5, 5).is_empty());
    }

    #[test]
    fn test_read_crlf() {
        let cal = read_calendar("[YEAR] 2025\r\n1 2 Windows line\r\n".as_bytes()).unwrap();
        assert_eq!(cal.list_tasks(2025, 1, 2), vec![(1, "Windows line")]);
    }

    #[test]
    fn test_read_without_trailing_newline() {
        let cal = read_calendar("[YEAR] 2025\n1 2 last".as_bytes()).unwrap();
        assert_eq!(cal.list_tasks(2025, 1, 2), vec![(1, "last")]);
    }

    #[test]
    fn test_read_invalid_utf8_is_lossy() {
        let mut input = b"[YEAR] 2025\n1 2 caf".to_vec();
        input.push(0xff);
        input.push(b'\n');
        let cal = read_calendar(input.as_slice()).unwrap();
        assert_eq!(cal.list_tasks(2025, 1, 2), vec![(1, "caf\u{fffd}")]);
    }

    #[test]
    fn test_round_trip() {
        let mut cal = Calendar::new();
        cal.add_task(2025, 12, 25, "Christmas Day").unwrap();
        cal.add_task(2025, 12, 25, "Dinner at 6").unwrap();
        cal.add_task(2026, 1, 1, "New Year's Day").unwrap();

        let text = to_string(&cal);
        let loaded = read_calendar(text.as_bytes()).unwrap();

        assert_eq!(
            loaded.list_tasks(2025, 12, 25),
            vec![(1, "Christmas Day"), (2, "Dinner at 6")]
        );
        assert_eq!(loaded.list_tasks(2026, 1, 1), vec![(1, "New Year's Day")]);
        assert_eq!(to_string(&loaded), text);
    }

    #[test]
    fn test_round_trip_after_delete() {
        let mut cal = Calendar::new();
        for desc in ["a", "b", "c"] {
            cal.add_task(2025, 6, 1, desc).unwrap();
        }
        cal.delete_task(2025, 6, 1, 1).unwrap();

        let loaded = read_calendar(to_string(&cal).as_bytes()).unwrap();
        assert_eq!(loaded.list_tasks(2025, 6, 1), vec![(1, "b"), (2, "c")]);
    }

    #[test]
    fn test_round_trip_keeps_leading_whitespace() {
        let mut cal = Calendar::new();
        cal.add_task(2025, 1, 1, "  indented").unwrap();
        cal.add_task(2025, 1, 1, "\ttabbed").unwrap();

        let text = to_string(&cal);
        assert_eq!(text, "[YEAR] 2025\n1 1   indented\n1 1 \ttabbed\n");

        let loaded = read_calendar(text.as_bytes()).unwrap();
        assert_eq!(
            loaded.list_tasks(2025, 1, 1),
            vec![(1, "  indented"), (2, "\ttabbed")]
        );
    }
}
