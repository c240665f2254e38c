//! Append-only JSON-lines log of game events.
//!
//! One object per line. The first write error closes the log so a full disk
//! or vanished file never interrupts play.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::GameConfig;
use crate::types::LockEvent;

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum LogRecord<'a> {
    #[serde(rename_all = "camelCase")]
    Session { seed: u32, level_step_ms: u32 },
    #[serde(rename_all = "camelCase")]
    Lock {
        t_ms: u64,
        #[serde(flatten)]
        event: &'a LockEvent,
    },
}

pub struct EventLog<W: Write = BufWriter<File>> {
    sink: Option<W>,
    buf: Vec<u8>,
    records: u64,
}

impl EventLog {
    /// Open `path` for appending; `None` gives a disabled log.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {path}"))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
            records: 0,
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            sink: Some(writer),
            buf: Vec::with_capacity(256),
            records: 0,
        }
    }

    pub fn enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Lines written so far
    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn session_start(&mut self, config: &GameConfig) {
        self.write(&LogRecord::Session {
            seed: config.seed,
            level_step_ms: config.level_step_ms,
        });
    }

    pub fn record_lock(&mut self, t_ms: u64, event: &LockEvent) {
        self.write(&LogRecord::Lock { t_ms, event });
    }

    pub fn flush(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            if sink.flush().is_err() {
                self.sink = None;
            }
        }
    }

    /// Give back the writer, if the log is still open
    pub fn into_inner(self) -> Option<W> {
        self.sink
    }

    fn write(&mut self, record: &LogRecord<'_>) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if sink.write_all(&self.buf).is_err() {
            self.sink = None;
            return;
        }
        self.records += 1;
    }
}
