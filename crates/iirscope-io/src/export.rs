//! CSV and plain-text writers.
//!
//! CSV files use `;` as the separator and a one-line header, matching the
//! layout the filter test suites read back.

use crate::{IoError, Result};
use iirscope_analysis::FrequencyResponse;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Paths written by [`write_response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFiles {
    /// `frequency;magnitude_db` table.
    pub magnitude: PathBuf,
    /// `frequency;group_delay` table.
    pub group_delay: PathBuf,
}

fn write_to<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|source| IoError::write(path, source))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| IoError::write(path, source))
}

/// Export a filtered signal as `time;signal` rows.
///
/// Time is written with 4 decimals, the signal with 5.
///
/// # Example
///
/// ```rust,ignore
/// use iirscope_io::write_filtered;
///
/// write_filtered("butterworth-lowpass-LC_200-HC_300-Order_4.csv", &time, &filtered)?;
/// ```
pub fn write_filtered(path: impl AsRef<Path>, time: &[f64], signal: &[f64]) -> Result<()> {
    if time.len() != signal.len() {
        return Err(IoError::LengthMismatch {
            time: time.len(),
            signal: signal.len(),
        });
    }
    let path = path.as_ref();
    write_to(path, |w| {
        writeln!(w, "time;signal")?;
        for (t, s) in time.iter().zip(signal) {
            writeln!(w, "{t:.4};{s:.5}")?;
        }
        Ok(())
    })?;
    tracing::info!(path = %path.display(), rows = signal.len(), "wrote filtered signal");
    Ok(())
}

/// Export the magnitude response from 0 to Nyquist.
pub fn write_magnitude_response(
    path: impl AsRef<Path>,
    response: &FrequencyResponse,
) -> Result<()> {
    let path = path.as_ref();
    let (frequencies, magnitude) = response.magnitude_up_to_nyquist();
    write_to(path, |w| {
        writeln!(w, "frequency;magnitude_db")?;
        for (f, m) in frequencies.iter().zip(magnitude) {
            writeln!(w, "{f:.6};{m:.6}")?;
        }
        Ok(())
    })?;
    tracing::info!(path = %path.display(), rows = frequencies.len(), "wrote magnitude response");
    Ok(())
}

/// Export the group delay from 0 to Nyquist.
///
/// Values are not clamped to the display window.
pub fn write_group_delay(path: impl AsRef<Path>, response: &FrequencyResponse) -> Result<()> {
    let path = path.as_ref();
    let (frequencies, delay) = response.delays_up_to_nyquist();
    write_to(path, |w| {
        writeln!(w, "frequency;group_delay")?;
        for (f, d) in frequencies.iter().zip(delay) {
            writeln!(w, "{f:.6};{d:.9}")?;
        }
        Ok(())
    })?;
    tracing::info!(path = %path.display(), rows = frequencies.len(), "wrote group delay");
    Ok(())
}

/// Write `<stem>_magnitude.csv` and `<stem>_group_delay.csv` into `dir`.
///
/// The directory is created if needed.
pub fn write_response(
    dir: impl AsRef<Path>,
    stem: &str,
    response: &FrequencyResponse,
) -> Result<ResponseFiles> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| IoError::write(dir, source))?;
    let files = ResponseFiles {
        magnitude: dir.join(format!("{stem}_magnitude.csv")),
        group_delay: dir.join(format!("{stem}_group_delay.csv")),
    };
    write_magnitude_response(&files.magnitude, response)?;
    write_group_delay(&files.group_delay, response)?;
    Ok(files)
}

/// Write an impulse response, one value per line.
///
/// Values use the shortest representation that reads back exactly.
pub fn write_impulse_response(path: impl AsRef<Path>, samples: &[f64]) -> Result<()> {
    let path = path.as_ref();
    write_to(path, |w| {
        for sample in samples {
            writeln!(w, "{sample}")?;
        }
        Ok(())
    })?;
    tracing::info!(path = %path.display(), samples = samples.len(), "wrote impulse response");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use iirscope_analysis::SampleRate;
    use tempfile::tempdir;

    #[test]
    fn filtered_rows_use_fixed_decimals() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_filtered(&path, &[0.0, 0.004], &[0.123456, -1.0]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "time;signal\n0.0000;0.12346\n0.0040;-1.00000\n");
    }

    #[test]
    fn filtered_length_mismatch_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let err = write_filtered(&path, &[0.0, 1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, IoError::LengthMismatch { time: 2, signal: 1 }));
        assert!(!path.exists());
    }

    #[test]
    fn response_tables_stop_at_nyquist() {
        let dir = tempdir().unwrap();
        let mut impulse = vec![0.0; 16];
        impulse[0] = 1.0;
        let response = FrequencyResponse::analyze(&impulse, SampleRate::Hz(160.0)).unwrap();
        let files = write_response(dir.path().join("nested"), "lp", &response).unwrap();

        let magnitude = std::fs::read_to_string(&files.magnitude).unwrap();
        let mut lines = magnitude.lines();
        assert_eq!(lines.next(), Some("frequency;magnitude_db"));
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), response.magnitude_up_to_nyquist().0.len());
        for row in &rows {
            let (_, db) = row.split_once(';').unwrap();
            assert!(db.parse::<f64>().unwrap().abs() < 1e-6, "row {row}");
        }

        let delay = std::fs::read_to_string(&files.group_delay).unwrap();
        assert!(delay.starts_with("frequency;group_delay\n"));
        assert_eq!(
            delay.lines().count() - 1,
            response.delays_up_to_nyquist().0.len()
        );
    }

    #[test]
    fn impulse_response_one_value_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("h.txt");
        write_impulse_response(&path, &[0.0, 0.5, -0.125]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0\n0.5\n-0.125\n");
    }

    #[test]
    fn unwritable_path_reports_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(matches!(
            write_impulse_response(&path, &[1.0]),
            Err(IoError::Write { .. })
        ));
    }
}
