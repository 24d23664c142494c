//! In-memory adapters for the task context.

mod task;

pub use task::InMemoryTaskRepository;
