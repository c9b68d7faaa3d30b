// SQLite database layer
// Connection management and schema migrations.

pub mod connection;
pub mod migrations;

pub use connection::Database;
