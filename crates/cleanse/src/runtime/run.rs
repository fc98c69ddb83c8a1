//! Run — the stdin to stdout line loop.

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::{info, warn};

use crate::classify::Classifier;

/// Drive the classifier over stdin, one line per call, writing accepted
/// records to stdout. A line that fails classification is logged and
/// skipped; the stream never aborts because of one line.
pub async fn run(classifier: &Classifier) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = BufReader::new(io::stdin());
    let mut stdout = BufWriter::new(io::stdout());
    let mut lines = stdin.lines();

    let mut seen: u64 = 0;
    let mut emitted: u64 = 0;
    while let Some(line) = lines.next_line().await? {
        seen += 1;
        match classifier.classify(&line) {
            Ok(Some(record)) => {
                stdout.write_all(record.to_line().as_bytes()).await?;
                emitted += 1;
            }
            Ok(None) => {}
            Err(e) => warn!("line {}: {}", seen, e),
        }
    }
    stdout.flush().await?;

    info!("Processed {} lines, emitted {} records", seen, emitted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::classify::Classifier;
    use crate::conf::CleanseConfig;

    // The loop above is a thin adapter; what matters is that one bad line
    // leaves the classifier usable for the next one.
    #[test]
    fn test_classifier_survives_a_bad_line() {
        let classifier = Classifier::new(&CleanseConfig::default()).unwrap();

        let bad = "<132>Oct 11 23:50:53 2013 aruba-1 stm[1512]: <5abc> <WARN> noise";
        assert!(classifier.classify(bad).is_err());

        let good = "<132>Oct 11 23:50:53 2013 aruba-1 stm[1512]: <501091> <WARN> \
            |AP XXY-3F-09@10.186.1.7 stm| Auth request: 6c:71:d9:6d:8c:4d: \
            AP 10.186.1.7-d8:c7:c8:47:82:68-XXY-3F-09";
        assert!(classifier.classify(good).unwrap().is_some());
    }
}
