//! In-memory adapters for the board context.

mod board;

pub use board::InMemoryBoardRepository;
