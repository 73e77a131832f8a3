pub mod round;

pub use round::{build_capital_round, QuizRound};
