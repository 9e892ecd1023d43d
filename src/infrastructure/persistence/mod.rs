mod in_memory_repository;
mod sqlite_repository;

pub use in_memory_repository::InMemoryInterviewRepository;
pub use sqlite_repository::SqliteInterviewRepository;
