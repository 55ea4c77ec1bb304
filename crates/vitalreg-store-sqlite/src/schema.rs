//! SQL schema for the registry SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- One row per vital-event record. `seq` preserves registration order.
CREATE TABLE IF NOT EXISTS records (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,
    category    TEXT NOT NULL,   -- 'birth' | 'death' | 'marriage' | 'divorce'
    regno       TEXT NOT NULL,
    record_json TEXT NOT NULL,   -- untagged record body, metadata included
    status      TEXT NOT NULL,   -- mirrors record_json for indexed lookups
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    UNIQUE (category, regno)
);

CREATE TABLE IF NOT EXISTS persons (
    seq          INTEGER PRIMARY KEY AUTOINCREMENT,
    person_id    TEXT NOT NULL UNIQUE,
    details_json TEXT NOT NULL,
    created_at   TEXT NOT NULL,
    updated_at   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS records_category_idx ON records(category);
CREATE INDEX IF NOT EXISTS records_status_idx   ON records(status);

PRAGMA user_version = 1;
";
