//! Corpus acquisition: fetch a verse dataset over HTTP and store it as a
//! flat text file, one verse per line.
//!
//! This is the only file I/O in the crate; the suggestion model itself
//! never persists its trained state.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::types::{KalimatError, KalimatResult};

/// The quran-simple edition of the alquran.cloud API.
pub const DEFAULT_CORPUS_URL: &str = "http://api.alquran.cloud/v1/quran/quran-simple";

#[derive(Deserialize)]
struct QuranPayload {
    data: QuranData,
}

#[derive(Deserialize)]
struct QuranData {
    surahs: Vec<Surah>,
}

#[derive(Deserialize)]
struct Surah {
    ayahs: Vec<Ayah>,
}

#[derive(Deserialize)]
struct Ayah {
    text: String,
}

/// Decode a quran-edition JSON body and flatten it to one verse string
/// per entry, in reading order. A body that decodes but carries no verses
/// is an error, not an empty corpus.
pub fn parse_corpus(body: &str) -> KalimatResult<Vec<String>> {
    let payload: QuranPayload = serde_json::from_str(body)?;

    let verses: Vec<String> = payload
        .data
        .surahs
        .into_iter()
        .flat_map(|surah| surah.ayahs)
        .map(|ayah| ayah.text)
        .collect();

    if verses.is_empty() {
        return Err(KalimatError::MalformedCorpus(
            "payload contained no verses".to_string(),
        ));
    }
    Ok(verses)
}

/// Fetch a quran-edition JSON payload from `url` and flatten it with
/// [`parse_corpus`].
pub fn fetch_corpus(url: &str) -> KalimatResult<Vec<String>> {
    info!("fetching corpus from {url}");
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    let verses = parse_corpus(&body)?;
    info!("fetched {} verses", verses.len());
    Ok(verses)
}

/// Write verses to `path`, one per line.
pub fn write_corpus<P: AsRef<Path>>(path: P, verses: &[String]) -> KalimatResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for verse in verses {
        writeln!(writer, "{verse}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a corpus file back, one document per non-empty line.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> KalimatResult<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut docs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            docs.push(line);
        }
    }
    Ok(docs)
}
