//! Event Logger
//!
//! Append-only JSONL event logging.

use sim_events::Event;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::SimError;

/// Writes events to a JSONL file, one event per line
pub struct EventLogger {
    sink: Option<(PathBuf, BufWriter<File>)>,
    event_count: u64,
}

impl EventLogger {
    /// Create (or truncate) the log file at `path`
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref().to_path_buf();
        let writer = BufWriter::new(File::create(&path)?);
        Ok(Self {
            sink: Some((path, writer)),
            event_count: 0,
        })
    }

    /// Logger that only counts
    pub fn null() -> Self {
        Self {
            sink: None,
            event_count: 0,
        }
    }

    /// Events seen so far, written or not
    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    pub fn path(&self) -> Option<&Path> {
        self.sink.as_ref().map(|(path, _)| path.as_path())
    }

    pub fn log(&mut self, event: &Event) -> Result<(), SimError> {
        self.event_count += 1;
        if let Some((_, writer)) = self.sink.as_mut() {
            writeln!(writer, "{}", event.to_jsonl()?)?;
        }
        Ok(())
    }

    /// Log one day's events in order
    pub fn log_batch(&mut self, events: &[Event]) -> Result<(), SimError> {
        events.iter().try_for_each(|event| self.log(event))
    }

    pub fn flush(&mut self) -> Result<(), SimError> {
        if let Some((_, writer)) = self.sink.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for EventLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush event logger: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_events::*;
    use std::io::BufRead;

    fn sample_events() -> Vec<Event> {
        let grudge = CreatureRef::new(CreatureId(1), Species::Grudge, Position::new(1.0, 2.0));
        let hawk = CreatureRef::new(CreatureId(2), Species::Hawk, Position::new(3.0, 4.0));
        vec![
            create_encounter_event(
                generate_event_id(1),
                1,
                hawk.clone(),
                Species::Hawk,
                1.5,
                grudge.clone(),
                Species::Dove,
                0.5,
            ),
            create_grudge_event(generate_event_id(2), 1, grudge, hawk, 1),
        ]
    }

    #[test]
    fn test_event_logging() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");

        let mut logger = EventLogger::new(&path).unwrap();
        logger.log_batch(&sample_events()).unwrap();
        logger.flush().unwrap();
        assert_eq!(logger.event_count(), 2);

        assert_eq!(logger.path(), Some(path.as_path()));

        let reader = std::io::BufReader::new(File::open(&path).unwrap());
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);

        let parsed = Event::from_jsonl(&lines[1]).unwrap();
        assert_eq!(parsed.event_id, "evt_00000002");
        assert_eq!(parsed.event_type, EventType::GrudgeFormed);
        assert_eq!(parsed.actors.primary.creature_id, CreatureId(1));
    }

    #[test]
    fn test_null_logger() {
        let mut logger = EventLogger::null();
        for event in sample_events() {
            logger.log(&event).unwrap();
        }
        assert_eq!(logger.event_count(), 2);
        assert!(logger.path().is_none());
    }
}
