//! Request log with SQLite persistence and an in-memory fallback.
//!
//! Every durable operation opens its own connection and lets SQLite handle
//! cross-request concurrency. Storage failures never reach the caller:
//!
//! - if the schema cannot be created at construction, the store is memory-only
//!   for its whole lifetime;
//! - if a single insert fails later, that record is kept in the memory buffer
//!   and merged into every read until the logs are cleared;
//! - if a read fails, it is served from the memory buffer alone.
//!
//! Ids come from one sequence per store, whichever backing holds the record.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, types::Type, Connection, Row};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

/// Maximum number of characters of original/translated text kept per record.
pub const EXCERPT_LENGTH: usize = 100;

/// How many target languages the statistics report.
const POPULAR_LANGUAGE_LIMIT: usize = 5;

/// How long SQLite waits on a locked database before giving up.
const BUSY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS translations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        original_text TEXT NOT NULL,
        translated_text TEXT NOT NULL,
        source_lang TEXT NOT NULL,
        target_lang TEXT NOT NULL,
        char_count INTEGER NOT NULL,
        timestamp TEXT NOT NULL,
        ip_address TEXT,
        user_agent TEXT
    );

    CREATE INDEX IF NOT EXISTS idx_translations_timestamp
        ON translations(timestamp DESC);

    CREATE INDEX IF NOT EXISTS idx_translations_target_lang
        ON translations(target_lang);
";

/// One logged translation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationRecord {
    /// Sequence number assigned by the store.
    pub id: i64,
    /// First [`EXCERPT_LENGTH`] characters of the input text.
    #[serde(rename = "original_text")]
    pub original_excerpt: String,
    /// First [`EXCERPT_LENGTH`] characters of the translation.
    #[serde(rename = "translated_text")]
    pub translated_excerpt: String,
    /// Source language code, `"auto"` when the caller gave none.
    pub source_language: String,
    pub target_language: String,
    /// Length of the full, untruncated input in characters.
    pub character_count: u64,
    pub timestamp: DateTime<Utc>,
    pub client_address: Option<String>,
    pub client_agent: Option<String>,
}

/// Number of translations into one target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: u64,
}

/// Aggregate view over the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_translations: u64,
    pub total_characters: u64,
    /// Up to five target languages, most used first.
    pub popular_languages: Vec<LanguageCount>,
    pub translations_last_24h: u64,
}

/// SQLite adapter. Each method opens a fresh connection.
#[derive(Debug)]
struct SqliteLog {
    path: PathBuf,
}

impl SqliteLog {
    /// Creates the schema at `path`.
    fn open(path: &Path) -> Result<Self> {
        let log = Self {
            path: path.to_path_buf(),
        };

        let conn = log.connect()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to enable WAL mode")?;
        conn.execute_batch(SCHEMA)
            .context("Failed to initialize log schema")?;

        Ok(log)
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)
            .with_context(|| format!("Failed to open log database {:?}", self.path))?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .context("Failed to set busy timeout")?;
        Ok(conn)
    }

    /// Inserts `record` and returns its row id, which is always above `floor`.
    fn insert(&self, record: &TranslationRecord, floor: i64) -> Result<i64> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT INTO translations
                (id, original_text, translated_text, source_lang, target_lang,
                 char_count, timestamp, ip_address, user_agent)
             VALUES (
                MAX(COALESCE((SELECT seq FROM sqlite_sequence WHERE name = 'translations'), 0), ?9) + 1,
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.original_excerpt,
                record.translated_excerpt,
                record.source_language,
                record.target_language,
                to_sql_int(record.character_count),
                encode_timestamp(&record.timestamp),
                record.client_address,
                record.client_agent,
                floor,
            ],
        )
        .context("Failed to insert translation log")?;

        Ok(conn.last_insert_rowid())
    }

    /// Most recent records first.
    fn page(&self, limit: usize, offset: usize) -> Result<Vec<TranslationRecord>> {
        let conn = self.connect()?;

        let mut stmt = conn
            .prepare(
                "SELECT id, original_text, translated_text, source_lang, target_lang,
                        char_count, timestamp, ip_address, user_agent
                 FROM translations
                 ORDER BY timestamp DESC, id DESC
                 LIMIT ?1 OFFSET ?2",
            )
            .context("Failed to prepare log query")?;

        let records = stmt
            .query_map(
                params![to_sql_int(limit as u64), to_sql_int(offset as u64)],
                record_from_row,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read translation logs")?;

        Ok(records)
    }

    fn tally(&self, since: DateTime<Utc>) -> Result<Tally> {
        let conn = self.connect()?;

        let (total, characters): (i64, i64) = conn
            .query_row(
                "SELECT COUNT(*), COALESCE(SUM(char_count), 0) FROM translations",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .context("Failed to count translations")?;

        let mut stmt = conn.prepare(
            "SELECT target_lang, COUNT(*) FROM translations GROUP BY target_lang",
        )?;
        let languages = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, from_sql_int(row.get(1)?)))
            })?
            .collect::<rusqlite::Result<HashMap<_, _>>>()
            .context("Failed to group translations by language")?;

        let recent: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM translations WHERE timestamp > ?1",
                params![encode_timestamp(&since)],
                |row| row.get(0),
            )
            .context("Failed to count recent translations")?;

        Ok(Tally {
            total: from_sql_int(total),
            characters: from_sql_int(characters),
            languages,
            recent: from_sql_int(recent),
        })
    }

    fn clear(&self) -> Result<usize> {
        let conn = self.connect()?;
        conn.execute("DELETE FROM translations", [])
            .context("Failed to clear translation logs")
    }
}

/// Counts gathered from one backing, combined before ranking languages.
#[derive(Debug, Default)]
struct Tally {
    total: u64,
    characters: u64,
    languages: HashMap<String, u64>,
    recent: u64,
}

impl Tally {
    fn absorb(&mut self, other: Tally) {
        self.total += other.total;
        self.characters += other.characters;
        self.recent += other.recent;
        for (language, count) in other.languages {
            *self.languages.entry(language).or_default() += count;
        }
    }

    fn into_statistics(self) -> Statistics {
        let mut popular_languages: Vec<LanguageCount> = self
            .languages
            .into_iter()
            .map(|(language, count)| LanguageCount { language, count })
            .collect();
        popular_languages.sort_by(|a, b| b.count.cmp(&a.count).then(a.language.cmp(&b.language)));
        popular_languages.truncate(POPULAR_LANGUAGE_LIMIT);

        Statistics {
            total_translations: self.total,
            total_characters: self.characters,
            popular_languages,
            translations_last_24h: self.recent,
        }
    }
}

/// Records held in process memory.
///
/// `last_id` is the highest id the store has handed out from either backing.
#[derive(Debug, Default)]
struct MemoryLog {
    records: Vec<TranslationRecord>,
    last_id: i64,
}

impl MemoryLog {
    fn push(&mut self, mut record: TranslationRecord) -> TranslationRecord {
        self.last_id += 1;
        record.id = self.last_id;
        self.records.push(record.clone());
        record
    }

    fn page(&self, limit: usize, offset: usize) -> Vec<TranslationRecord> {
        self.records
            .iter()
            .rev()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    fn tally(&self, since: DateTime<Utc>) -> Tally {
        let mut tally = Tally::default();
        for record in &self.records {
            tally.total += 1;
            tally.characters += record.character_count;
            if record.timestamp > since {
                tally.recent += 1;
            }
            *tally
                .languages
                .entry(record.target_language.clone())
                .or_default() += 1;
        }
        tally
    }
}

/// The translation log used by the request pipeline.
#[derive(Debug)]
pub struct LogStore {
    /// `None` when running memory-only.
    durable: Option<SqliteLog>,
    /// Memory-only storage, or overflow for failed durable inserts.
    memory: Mutex<MemoryLog>,
}

impl LogStore {
    /// Opens a SQLite-backed store at `path`.
    ///
    /// If the database cannot be initialized the store logs the failure and
    /// stays memory-only for its entire lifetime.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let durable = match SqliteLog::open(path) {
            Ok(log) => {
                info!("Translation log database initialized at {:?}", path);
                Some(log)
            }
            Err(e) => {
                error!("Failed to initialize log database: {:#}", e);
                warn!("Falling back to in-memory translation logging");
                None
            }
        };

        Self {
            durable,
            memory: Mutex::new(MemoryLog::default()),
        }
    }

    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        info!("Translation log running in memory");
        Self {
            durable: None,
            memory: Mutex::new(MemoryLog::default()),
        }
    }

    /// Whether records are being written to SQLite.
    pub fn is_durable(&self) -> bool {
        self.durable.is_some()
    }

    fn memory(&self) -> MutexGuard<'_, MemoryLog> {
        self.memory.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records one translation. Never fails.
    ///
    /// Both texts are cut to [`EXCERPT_LENGTH`] characters; `character_count`
    /// is stored as given.
    pub fn log(
        &self,
        original_text: &str,
        translated_text: &str,
        source_language: &str,
        target_language: &str,
        character_count: usize,
    ) -> TranslationRecord {
        let mut record = TranslationRecord {
            id: 0,
            original_excerpt: excerpt(original_text),
            translated_excerpt: excerpt(translated_text),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            character_count: character_count as u64,
            timestamp: Utc::now().trunc_subsecs(6),
            client_address: None,
            client_agent: None,
        };

        // Held across the insert so both backings draw from one id sequence.
        let mut memory = self.memory();

        if let Some(db) = &self.durable {
            match db.insert(&record, memory.last_id) {
                Ok(id) => {
                    memory.last_id = memory.last_id.max(id);
                    record.id = id;
                    debug!("Logged translation #{} ({})", id, target_language);
                    return record;
                }
                Err(e) => error!("Failed to log to database: {:#}", e),
            }
        }

        memory.push(record)
    }

    /// Up to `limit` records after skipping `offset`, most recent first.
    pub fn get_logs(&self, limit: usize, offset: usize) -> Vec<TranslationRecord> {
        if let Some(db) = &self.durable {
            let overflow = self.memory().records.clone();

            let result = if overflow.is_empty() {
                db.page(limit, offset)
            } else {
                db.page(limit.saturating_add(offset), 0).map(|mut records| {
                    records.extend(overflow);
                    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
                    records.into_iter().skip(offset).take(limit).collect()
                })
            };

            match result {
                Ok(records) => return records,
                Err(e) => error!("Failed to retrieve logs from database: {:#}", e),
            }
        }

        self.memory().page(limit, offset)
    }

    /// Totals, top target languages and the last 24 hours' count.
    pub fn get_statistics(&self) -> Statistics {
        let since = Utc::now() - Duration::hours(24);

        if let Some(db) = &self.durable {
            match db.tally(since) {
                Ok(mut tally) => {
                    tally.absorb(self.memory().tally(since));
                    return tally.into_statistics();
                }
                Err(e) => error!("Failed to get statistics from database: {:#}", e),
            }
        }

        self.memory().tally(since).into_statistics()
    }

    /// Deletes every record from both backings. The id sequence is kept.
    pub fn clear_logs(&self) {
        if let Some(db) = &self.durable {
            match db.clear() {
                Ok(rows) => info!("Cleared {} database log entries", rows),
                Err(e) => error!("Failed to clear database logs: {:#}", e),
            }
        }

        let mut memory = self.memory();
        if !memory.records.is_empty() {
            info!("Cleared {} in-memory log entries", memory.records.len());
        }
        memory.records.clear();
    }
}

/// First [`EXCERPT_LENGTH`] characters of `text`.
fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_LENGTH).collect()
}

/// Fixed-width RFC 3339 so that text order matches time order.
fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<TranslationRecord> {
    let raw_timestamp: String = row.get(6)?;
    let timestamp = DateTime::parse_from_rfc3339(&raw_timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

    Ok(TranslationRecord {
        id: row.get(0)?,
        original_excerpt: row.get(1)?,
        translated_excerpt: row.get(2)?,
        source_language: row.get(3)?,
        target_language: row.get(4)?,
        character_count: from_sql_int(row.get(5)?),
        timestamp,
        client_address: row.get(7)?,
        client_agent: row.get(8)?,
    })
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn from_sql_int(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Creates a SQLite-backed store in a fresh temporary directory.
    fn create_test_store() -> (TempDir, LogStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::open(dir.path().join("logs.db"));
        assert!(store.is_durable());
        (dir, store)
    }

    fn drop_table(dir: &TempDir) {
        let conn = Connection::open(dir.path().join("logs.db")).unwrap();
        conn.execute_batch("DROP TABLE translations;").unwrap();
    }

    fn rename_table(dir: &TempDir, from: &str, to: &str) {
        let conn = Connection::open(dir.path().join("logs.db")).unwrap();
        conn.execute_batch(&format!("ALTER TABLE {from} RENAME TO {to};"))
            .unwrap();
    }

    fn recreate_table(dir: &TempDir) {
        let conn = Connection::open(dir.path().join("logs.db")).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
    }

    #[test]
    fn test_log_and_read_back() {
        let (_dir, store) = create_test_store();

        let record = store.log("hello", "வணக்கம்", "en", "ta", 5);
        assert_eq!(record.id, 1);
        assert_eq!(record.source_language, "en");

        let logs = store.get_logs(10, 0);
        assert_eq!(logs, vec![record]);
    }

    #[test]
    fn test_logs_most_recent_first_with_paging() {
        let (_dir, store) = create_test_store();
        for i in 0..5 {
            store.log(&format!("text {i}"), "x", "en", "ta", 6);
        }

        let all: Vec<i64> = store.get_logs(10, 0).iter().map(|r| r.id).collect();
        assert_eq!(all, vec![5, 4, 3, 2, 1]);

        let page: Vec<i64> = store.get_logs(2, 1).iter().map(|r| r.id).collect();
        assert_eq!(page, vec![4, 3]);

        assert!(store.get_logs(10, 5).is_empty());
    }

    #[test]
    fn test_truncation_keeps_full_character_count() {
        let (_dir, store) = create_test_store();
        let long = "அ".repeat(150);

        let record = store.log(&long, &long, "auto", "ta", long.chars().count());
        assert_eq!(record.original_excerpt.chars().count(), EXCERPT_LENGTH);
        assert_eq!(record.translated_excerpt.chars().count(), EXCERPT_LENGTH);
        assert_eq!(record.character_count, 150);

        let stored = &store.get_logs(1, 0)[0];
        assert_eq!(stored.original_excerpt, "அ".repeat(EXCERPT_LENGTH));
        assert_eq!(stored.character_count, 150);
    }

    #[test]
    fn test_statistics_from_database() {
        let (_dir, store) = create_test_store();
        store.log("a", "a", "en", "ta", 10);
        store.log("b", "b", "en", "ta", 20);
        store.log("c", "c", "en", "hi", 30);

        let stats = store.get_statistics();
        assert_eq!(stats.total_translations, 3);
        assert_eq!(stats.total_characters, 60);
        assert_eq!(stats.translations_last_24h, 3);
        assert_eq!(
            stats.popular_languages,
            vec![
                LanguageCount { language: "ta".into(), count: 2 },
                LanguageCount { language: "hi".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_statistics_top_five_only() {
        let (_dir, store) = create_test_store();
        for lang in ["ta", "hi", "kn", "bn", "es", "fr"] {
            store.log("x", "x", "en", lang, 1);
        }
        store.log("x", "x", "en", "fr", 1);

        let stats = store.get_statistics();
        assert_eq!(stats.popular_languages.len(), 5);
        assert_eq!(stats.popular_languages[0].language, "fr");
        assert_eq!(stats.popular_languages[0].count, 2);
    }

    #[test]
    fn test_recent_count_excludes_old_rows() {
        let (dir, store) = create_test_store();
        store.log("new", "new", "en", "ta", 3);

        let old = encode_timestamp(&(Utc::now() - Duration::days(2)));
        let conn = Connection::open(dir.path().join("logs.db")).unwrap();
        conn.execute(
            "INSERT INTO translations
                (original_text, translated_text, source_lang, target_lang, char_count, timestamp)
             VALUES ('old', 'old', 'en', 'ta', 3, ?1)",
            params![old],
        )
        .unwrap();

        let stats = store.get_statistics();
        assert_eq!(stats.total_translations, 2);
        assert_eq!(stats.translations_last_24h, 1);
    }

    #[test]
    fn test_clear_logs_database() {
        let (_dir, store) = create_test_store();
        store.log("a", "a", "en", "ta", 1);
        store.log("b", "b", "en", "ta", 1);

        store.clear_logs();
        assert!(store.get_logs(10, 0).is_empty());
        assert_eq!(store.get_statistics().total_translations, 0);

        store.log("c", "c", "en", "ta", 1);
        assert_eq!(store.get_statistics().total_translations, 1);
    }

    #[test]
    fn test_init_failure_is_sticky_memory_mode() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::open(dir.path().join("missing").join("logs.db"));
        assert!(!store.is_durable());

        let record = store.log("hello", "hola", "en", "es", 5);
        assert_eq!(record.id, 1);
        assert_eq!(store.get_logs(10, 0), vec![record]);
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn test_insert_failure_is_per_call() {
        let (dir, store) = create_test_store();
        drop_table(&dir);

        let fallback = store.log("hello", "hola", "en", "es", 5);
        assert_eq!(fallback.original_excerpt, "hello");
        assert!(store.is_durable());

        // Reads fail too and are served from memory.
        assert_eq!(store.get_logs(10, 0), vec![fallback.clone()]);
        assert_eq!(store.get_statistics().total_translations, 1);

        recreate_table(&dir);
        let durable = store.log("bye", "adiós", "en", "es", 3);
        assert!(durable.id > fallback.id);
        assert_eq!(store.get_logs(10, 0), vec![durable, fallback]);
        assert_eq!(store.get_statistics().total_translations, 2);
    }

    #[test]
    fn test_fallback_records_stay_visible_after_recovery() {
        let (dir, store) = create_test_store();
        let first = store.log("hello", "hola", "en", "es", 5);

        rename_table(&dir, "translations", "translations_offline");
        let fallback = store.log("thank you", "gracias", "en", "es", 9);
        rename_table(&dir, "translations_offline", "translations");

        let last = store.log("goodbye", "au revoir", "en", "fr", 7);

        assert_eq!(
            store.get_logs(10, 0),
            vec![last.clone(), fallback.clone(), first.clone()]
        );
        assert_eq!(store.get_logs(1, 1), vec![fallback]);
        assert_eq!(store.get_logs(5, 2), vec![first]);

        let stats = store.get_statistics();
        assert_eq!(stats.total_translations, 3);
        assert_eq!(stats.total_characters, 21);
        assert_eq!(stats.translations_last_24h, 3);
        assert_eq!(
            stats.popular_languages,
            vec![
                LanguageCount { language: "es".into(), count: 2 },
                LanguageCount { language: "fr".into(), count: 1 },
            ]
        );

        store.clear_logs();
        assert!(store.get_logs(10, 0).is_empty());
        assert_eq!(store.get_statistics().total_translations, 0);
        assert_eq!(last.id, 3);
    }

    #[test]
    fn test_ids_are_one_sequence_across_backings() {
        let (dir, store) = create_test_store();
        let a = store.log("a", "a", "en", "ta", 1);
        let b = store.log("b", "b", "en", "ta", 1);
        assert_eq!((a.id, b.id), (1, 2));

        drop_table(&dir);
        let c = store.log("c", "c", "en", "ta", 1);
        assert_eq!(c.id, 3);

        // The recreated table starts a fresh SQLite sequence.
        recreate_table(&dir);
        let d = store.log("d", "d", "en", "ta", 1);
        assert_eq!(d.id, 4);

        store.clear_logs();
        assert_eq!(store.log("e", "e", "en", "ta", 1).id, 5);
    }

    #[test]
    fn test_in_memory_store() {
        let store = LogStore::in_memory();
        assert!(!store.is_durable());

        for i in 1..=4 {
            let record = store.log(&"x".repeat(i), "y", "auto", "ta", i);
            assert_eq!(record.id, i as i64);
        }

        let ids: Vec<i64> = store.get_logs(2, 1).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2]);

        let stats = store.get_statistics();
        assert_eq!(stats.total_translations, 4);
        assert_eq!(stats.total_characters, 10);
        assert_eq!(stats.translations_last_24h, 4);
        assert_eq!(
            stats.popular_languages,
            vec![LanguageCount { language: "ta".into(), count: 4 }]
        );
    }

    #[test]
    fn test_in_memory_clear_keeps_id_sequence() {
        let store = LogStore::in_memory();
        store.log("a", "a", "en", "ta", 1);
        store.clear_logs();

        assert!(store.get_logs(10, 0).is_empty());
        assert_eq!(store.get_statistics().total_translations, 0);
        assert_eq!(store.log("b", "b", "en", "ta", 1).id, 2);
    }

    #[test]
    fn test_in_memory_statistics_tie_break() {
        let store = LogStore::in_memory();
        store.log("a", "a", "en", "ta", 1);
        store.log("b", "b", "en", "hi", 1);

        let languages: Vec<String> = store
            .get_statistics()
            .popular_languages
            .into_iter()
            .map(|l| l.language)
            .collect();
        assert_eq!(languages, vec!["hi", "ta"]);
    }

    #[test]
    fn test_concurrent_memory_appends() {
        let store = std::sync::Arc::new(LogStore::in_memory());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.log("t", "t", "en", "ta", 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get_statistics().total_translations, 200);
        let mut ids: Vec<i64> = store.get_logs(500, 0).iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=200).collect::<Vec<_>>());
    }
}
