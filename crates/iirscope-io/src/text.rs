//! Plain-text loaders.
//!
//! All three formats share the same conventions: blank lines are ignored,
//! `#` starts a comment that runs to the end of the line, and errors carry
//! the 1-based line number of the offending row.

use crate::{IoError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A sampled signal with explicit time stamps.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    /// Time stamp of each sample in seconds, strictly increasing.
    pub time: Vec<f64>,
    /// Sample values.
    pub values: Vec<f64>,
    /// Sample rate in Hz, `1 / (t1 - t0)`.
    pub sample_rate: f64,
}

impl TimeSeries {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no samples. Loaded series always have at least two.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read an impulse response: real numbers separated by whitespace.
///
/// Values may be spread over any number of lines.
pub fn read_impulse_response<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let samples = parse_impulse_response(open(path)?, path)?;
    tracing::debug!(path = %path.display(), samples = samples.len(), "loaded impulse response");
    Ok(samples)
}

/// Read a `time;value` series, with an optional header row.
///
/// The sample rate is derived from the first two time stamps.
pub fn read_time_series<P: AsRef<Path>>(path: P) -> Result<TimeSeries> {
    let path = path.as_ref();
    let series = parse_time_series(open(path)?, path)?;
    tracing::debug!(
        path = %path.display(),
        samples = series.len(),
        sample_rate = series.sample_rate,
        "loaded time series"
    );
    Ok(series)
}

/// Read second-order sections, one `b0 b1 b2 a0 a1 a2` row per line.
///
/// Columns may be separated by whitespace or commas.
pub fn read_sos<P: AsRef<Path>>(path: P) -> Result<Vec<[f64; 6]>> {
    let path = path.as_ref();
    let rows = parse_sos(open(path)?, path)?;
    tracing::debug!(path = %path.display(), sections = rows.len(), "loaded SOS table");
    Ok(rows)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| IoError::read(path, source))
}

/// Yields `(line_number, content)` for every line with data left after
/// stripping comments and surrounding whitespace.
fn content_lines<R: BufRead>(
    reader: R,
    path: &Path,
) -> impl Iterator<Item = Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(index, line)| match line {
            Err(source) => Some(Err(IoError::read(path, source))),
            Ok(line) => {
                let content = line.split('#').next().unwrap_or_default().trim();
                (!content.is_empty()).then(|| Ok((index + 1, content.to_string())))
            }
        })
}

fn parse_number(token: &str, path: &Path, line: usize) -> Result<f64> {
    token.trim().parse::<f64>().map_err(|_| IoError::Parse {
        path: path.to_path_buf(),
        line,
        token: token.trim().to_string(),
    })
}

fn parse_impulse_response<R: BufRead>(reader: R, path: &Path) -> Result<Vec<f64>> {
    let mut samples = Vec::new();
    for entry in content_lines(reader, path) {
        let (line, content) = entry?;
        for token in content.split_whitespace() {
            samples.push(parse_number(token, path, line)?);
        }
    }
    if samples.is_empty() {
        return Err(IoError::Empty(path.to_path_buf()));
    }
    Ok(samples)
}

fn parse_time_series<R: BufRead>(reader: R, path: &Path) -> Result<TimeSeries> {
    let mut time: Vec<f64> = Vec::new();
    let mut values = Vec::new();
    let mut first_row = true;

    for entry in content_lines(reader, path) {
        let (line, content) = entry?;
        let fields: Vec<&str> = content.split(';').collect();
        if fields.len() != 2 {
            return Err(IoError::Malformed {
                path: path.to_path_buf(),
                line,
                reason: format!("expected `time;value`, found {} field(s)", fields.len()),
            });
        }

        // A leading row whose time column is not numeric is a header.
        if first_row && fields[0].trim().parse::<f64>().is_err() {
            first_row = false;
            continue;
        }
        first_row = false;

        let t = parse_number(fields[0], path, line)?;
        let value = parse_number(fields[1], path, line)?;
        if let Some(&previous) = time.last().filter(|&&previous| t <= previous) {
            return Err(IoError::Malformed {
                path: path.to_path_buf(),
                line,
                reason: format!("time {t} does not increase past {previous}"),
            });
        }
        time.push(t);
        values.push(value);
    }

    match time.len() {
        0 => Err(IoError::Empty(path.to_path_buf())),
        1 => Err(IoError::SampleRate {
            path: path.to_path_buf(),
            reason: "at least two rows are needed".to_string(),
        }),
        _ => {
            let sample_rate = 1.0 / (time[1] - time[0]);
            if !sample_rate.is_finite() {
                return Err(IoError::SampleRate {
                    path: path.to_path_buf(),
                    reason: format!("time step {} is too small", time[1] - time[0]),
                });
            }
            Ok(TimeSeries {
                time,
                values,
                sample_rate,
            })
        }
    }
}

fn parse_sos<R: BufRead>(reader: R, path: &Path) -> Result<Vec<[f64; 6]>> {
    let mut rows = Vec::new();
    for entry in content_lines(reader, path) {
        let (line, content) = entry?;
        let tokens: Vec<&str> = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() != 6 {
            return Err(IoError::Malformed {
                path: path.to_path_buf(),
                line,
                reason: format!("expected 6 coefficients, found {}", tokens.len()),
            });
        }
        let mut row = [0.0; 6];
        for (slot, token) in row.iter_mut().zip(&tokens) {
            *slot = parse_number(token, path, line)?;
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(IoError::Empty(path.to_path_buf()));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("mem.txt")
    }

    #[test]
    fn impulse_response_spans_lines_and_skips_comments() {
        let text = "# filter output\n1.0 0.5\n\n  0.25  # tail\n-1e-3\n";
        let samples = parse_impulse_response(text.as_bytes(), path()).unwrap();
        assert_eq!(samples, vec![1.0, 0.5, 0.25, -1e-3]);
    }

    #[test]
    fn impulse_response_reports_bad_token() {
        let text = "1.0\n2.0 abc\n";
        match parse_impulse_response(text.as_bytes(), path()) {
            Err(IoError::Parse { line, token, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn impulse_response_without_samples_is_empty() {
        assert!(matches!(
            parse_impulse_response("# nothing\n\n".as_bytes(), path()),
            Err(IoError::Empty(_))
        ));
    }

    #[test]
    fn time_series_with_header() {
        let text = "time;signal\n0.000;1.0\n0.004;-0.5\n0.008;0.25\n";
        let series = parse_time_series(text.as_bytes(), path()).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.values, vec![1.0, -0.5, 0.25]);
        assert!((series.sample_rate - 250.0).abs() < 1e-9);
    }

    #[test]
    fn time_series_without_header() {
        let text = "0;0\n0.5;1\n";
        let series = parse_time_series(text.as_bytes(), path()).unwrap();
        assert_eq!(series.time, vec![0.0, 0.5]);
        assert_eq!(series.sample_rate, 2.0);
    }

    #[test]
    fn time_series_needs_two_rows() {
        assert!(matches!(
            parse_time_series("0.0;1.0\n".as_bytes(), path()),
            Err(IoError::SampleRate { .. })
        ));
        assert!(matches!(
            parse_time_series("time;signal\n".as_bytes(), path()),
            Err(IoError::Empty(_))
        ));
    }

    #[test]
    fn time_series_rejects_non_increasing_time() {
        let text = "0.0;1\n0.1;2\n0.1;3\n";
        match parse_time_series(text.as_bytes(), path()) {
            Err(IoError::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected malformed row, got {other:?}"),
        }
    }

    #[test]
    fn time_series_rejects_wrong_field_count() {
        let text = "0.0;1.0\n0.1;2.0;3.0\n";
        assert!(matches!(
            parse_time_series(text.as_bytes(), path()),
            Err(IoError::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn time_series_header_only_allowed_first() {
        let text = "0.0;1.0\ntime;signal\n";
        assert!(matches!(
            parse_time_series(text.as_bytes(), path()),
            Err(IoError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn sos_rows_accept_commas_and_spaces() {
        let text = "1 2 0 1 -0.5 0\n0.5, 0.5, 0, 1, 0, 0\n";
        let rows = parse_sos(text.as_bytes(), path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], [1.0, 2.0, 0.0, 1.0, -0.5, 0.0]);
        assert_eq!(rows[1][0], 0.5);
    }

    #[test]
    fn sos_row_with_wrong_width_is_malformed() {
        assert!(matches!(
            parse_sos("1 2 3 4 5\n".as_bytes(), path()),
            Err(IoError::Malformed { line: 1, .. })
        ));
    }
}
