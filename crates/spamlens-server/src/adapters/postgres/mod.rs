//! PostgreSQL Repository Implementations

mod message_repository;

pub use message_repository::PgMessageRepository;
