//! Ingestion batch job.
//!
//! Reads an extracted GTFS feed directory (`trips.txt`,
//! `stop_times.txt`), normalizes it to the Bahía zone and publishes the
//! schedule dataset atomically. Downloading and unzipping the upstream
//! archive happens outside this binary.
//!
//! Usage: `build_dataset <feed-dir> [output-file]`
//!
//! Any failure to read the feed or publish the dataset exits non-zero
//! without touching a previously published document.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use bahia_server::feed::{Dataset, DatasetError, FeedError, normalize, read_stop_times, read_trips};
use bahia_server::registry::StationRegistry;

/// Default output location, matching what the server loads.
const DEFAULT_OUTPUT: &str = "data/schedules_cadiz.json";

#[derive(Debug, thiserror::Error)]
enum JobError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(feed_dir) = args.next() else {
        eprintln!("usage: build_dataset <feed-dir> [output-file]");
        return ExitCode::FAILURE;
    };
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    match run(Path::new(&feed_dir), Path::new(&output)) {
        Ok(count) => {
            tracing::info!(services = count, output = %output, "dataset published");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "dataset build failed, nothing published");
            ExitCode::FAILURE
        }
    }
}

fn run(feed_dir: &Path, output: &Path) -> Result<usize, JobError> {
    let trips = read_trips(open(feed_dir.join("trips.txt"))?)?;
    let stop_times = read_stop_times(open(feed_dir.join("stop_times.txt"))?)?;
    tracing::info!(
        trips = trips.len(),
        stop_times = stop_times.len(),
        "feed tables read"
    );

    let registry = StationRegistry::bahia();
    let services = normalize(&trips, &stop_times, &registry);
    let dataset = Dataset::new(services);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| JobError::OutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    dataset.write_atomic(output)?;

    Ok(dataset.services.len())
}

fn open(path: PathBuf) -> Result<File, JobError> {
    File::open(&path).map_err(|source| JobError::Open { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIPS: &str = "\
route_id,service_id,trip_id
20C1,LAB,T1
20C1A,LAB,T2
";

    // T1: three zone stops; T2: branch trip; T3: only one zone stop
    const STOP_TIMES: &str = "\
trip_id,arrival_time,departure_time,stop_id,stop_sequence
T1,08:00:00,08:00:00,51405,1
T1,08:15:10,08:15:30,51306,2
T1,08:45:00,08:45:00,51201,3
T2,09:00:00,09:00:00,51303,1
T2,09:08:00,09:08:00,51310,2
T3,10:00:00,10:00:00,51405,1
T3,11:00:00,11:00:00,17000,2
";

    fn write_feed(dir: &Path) {
        std::fs::write(dir.join("trips.txt"), TRIPS).unwrap();
        std::fs::write(dir.join("stop_times.txt"), STOP_TIMES).unwrap();
    }

    #[test]
    fn run_publishes_normalized_dataset() {
        let dir = tempfile::tempdir().unwrap();
        write_feed(dir.path());
        let output = dir.path().join("out/schedules_cadiz.json");

        let count = run(dir.path(), &output).unwrap();
        assert_eq!(count, 2);

        let dataset = Dataset::load(&output).unwrap();
        assert_eq!(dataset.services.len(), 2);

        let t1 = &dataset.services[0];
        assert_eq!(t1.id, "T1");
        assert_eq!(t1.stops.len(), 3);
        assert_eq!(t1.stops[1].time.to_string(), "08:15");

        let t2 = &dataset.services[1];
        assert_eq!(t2.id, "T2");
        assert_eq!(t2.line, bahia_server::domain::Line::C1a);
    }

    #[test]
    fn run_fails_without_feed_files_and_publishes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("schedules_cadiz.json");

        let err = run(dir.path(), &output).unwrap_err();
        assert!(matches!(err, JobError::Open { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn failed_run_keeps_previous_dataset() {
        let dir = tempfile::tempdir().unwrap();
        write_feed(dir.path());
        let output = dir.path().join("schedules_cadiz.json");

        run(dir.path(), &output).unwrap();
        let before = Dataset::load(&output).unwrap();

        // Second run against a feed dir with no tables must fail and
        // leave the published document alone
        let empty = tempfile::tempdir().unwrap();
        assert!(run(empty.path(), &output).is_err());

        let after = Dataset::load(&output).unwrap();
        assert_eq!(after, before);
    }
}
