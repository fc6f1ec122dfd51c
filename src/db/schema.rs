//! Database schema and migrations for ScanExpress.
//!
//! The account tables are owned by the registration system; these
//! migrations recreate the same layout for development and test stores.

/// Database migrations.
///
/// Each migration is a SQL script executed in order.
/// The schema_version table tracks which migrations have been applied.
#[cfg(feature = "sqlite")]
pub const MIGRATIONS: &[&str] = &[
    // v1: organizations and accounts
    r#"
CREATE TABLE condominios (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    nome    TEXT NOT NULL
);

CREATE TABLE usuarios (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    nome_completo   TEXT NOT NULL,
    email           TEXT NOT NULL UNIQUE,
    senha_hash      TEXT NOT NULL,           -- werkzeug or PHC hash
    condominio_id   INTEGER REFERENCES condominios(id) ON DELETE SET NULL
);

CREATE INDEX idx_usuarios_condominio_id ON usuarios(condominio_id);
"#,
    // v2: case-insensitive email uniqueness (login lookup uses LOWER(email))
    r#"
CREATE UNIQUE INDEX idx_usuarios_email_lower ON usuarios(LOWER(email));
"#,
];

/// Database migrations.
#[cfg(all(feature = "postgres", not(feature = "sqlite")))]
pub const MIGRATIONS: &[&str] = &[
    // v1: organizations and accounts
    r#"
CREATE TABLE condominios (
    id      BIGSERIAL PRIMARY KEY,
    nome    TEXT NOT NULL
);

CREATE TABLE usuarios (
    id              BIGSERIAL PRIMARY KEY,
    nome_completo   TEXT NOT NULL,
    email           TEXT NOT NULL UNIQUE,
    senha_hash      TEXT NOT NULL,
    condominio_id   BIGINT REFERENCES condominios(id) ON DELETE SET NULL
);

CREATE INDEX idx_usuarios_condominio_id ON usuarios(condominio_id);
"#,
    // v2: case-insensitive email uniqueness (login lookup uses LOWER(email))
    r#"
CREATE UNIQUE INDEX idx_usuarios_email_lower ON usuarios(LOWER(email));
"#,
];
