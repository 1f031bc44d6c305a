//! SQL schema for the RSVP SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA busy_timeout = 5000;

-- Rows are strictly append-only.
CREATE TABLE IF NOT EXISTS rsvp_responses (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name     TEXT    NOT NULL,
    last_name      TEXT    NOT NULL,
    email          TEXT,
    is_attending   INTEGER NOT NULL CHECK (is_attending IN (0, 1)),
    guest_count    INTEGER NOT NULL CHECK (guest_count BETWEEN 1 AND 10),
    message        TEXT    CHECK (message IS NULL OR length(message) <= 500),
    timestamp      TEXT    NOT NULL,   -- RFC 3339 UTC; submission time
    created_at     TEXT    NOT NULL,
    updated_at     TEXT    NOT NULL,
    -- Unicode-lowercased copies used for duplicate detection. SQLite's own
    -- lower() only folds ASCII.
    first_name_key TEXT    NOT NULL,
    last_name_key  TEXT    NOT NULL,
    email_key      TEXT,
    UNIQUE (first_name_key, last_name_key),
    UNIQUE (email_key)
);

CREATE INDEX IF NOT EXISTS rsvp_created_idx   ON rsvp_responses(created_at);
CREATE INDEX IF NOT EXISTS rsvp_attending_idx ON rsvp_responses(is_attending);

CREATE TRIGGER IF NOT EXISTS rsvp_responses_no_update
BEFORE UPDATE ON rsvp_responses
BEGIN
    SELECT RAISE(ABORT, 'rsvp_responses is append-only');
END;

CREATE TRIGGER IF NOT EXISTS rsvp_responses_no_delete
BEFORE DELETE ON rsvp_responses
BEGIN
    SELECT RAISE(ABORT, 'rsvp_responses is append-only');
END;

PRAGMA user_version = 1;
";
