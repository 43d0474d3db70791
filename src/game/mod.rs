//! Word arithmetic: sessions, guesses, scoring

pub mod evaluator;
pub mod hints;
pub mod rank;
pub mod session;

pub use evaluator::{accept_guess, evaluate, signed_embeddings, vector_sum, Evaluation, Guess, Rejection};
pub use hints::hints;
pub use rank::{goal_rank, is_solved, ordinal, progress};
pub use session::Session;
