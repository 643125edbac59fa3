use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead};
use std::path::Path;

use crate::error::Result;
use crate::report::CardReport;

/// Reduce a card list line to the bare card name.
///
/// Drops set/number annotations starting at `(`, comments starting at `//`
/// and every digit (quantity prefixes). Returns `None` for lines that end up
/// empty or are section headers.
pub fn parse_card_line(line: &str) -> Option<String> {
    let without_set = line.split('(').next().unwrap_or_default();
    let without_comment = without_set.split("//").next().unwrap_or_default();
    let name: String = without_comment
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect();
    let name = name.trim();

    if name.is_empty() || name == "Deck" || name == "Sideboard" {
        return None;
    }
    Some(name.to_string())
}

pub fn read_cardlist<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);
    let mut cards = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(name) = parse_card_line(&line) {
            cards.push(name);
        }
    }

    Ok(cards)
}

/// Destination for finished card reports
pub trait ReportSink {
    fn write(&mut self, report: &CardReport) -> Result<()>;
}

impl ReportSink for Vec<CardReport> {
    fn write(&mut self, report: &CardReport) -> Result<()> {
        self.push(report.clone());
        Ok(())
    }
}

/// Appends reports to a `;`-separated CSV file, one flushed row per card.
///
/// The header is only written when the file is new or empty, so earlier runs'
/// rows stay intact.
pub struct ReportWriter {
    writer: csv::Writer<File>,
}

impl ReportWriter {
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                log::info!("Created directory: {}", parent.display());
            }
        }

        let is_new = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .has_headers(is_new)
            .from_writer(file);

        Ok(Self { writer })
    }
}

impl ReportSink for ReportWriter {
    fn write(&mut self, report: &CardReport) -> Result<()> {
        self.writer.serialize(report)?;
        self.writer.flush()?;
        Ok(())
    }
}
