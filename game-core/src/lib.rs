pub mod fairness;
pub mod random;
pub mod report;
pub mod roster;
pub mod round_generator;
pub mod selection;
pub mod session;
pub mod troll;
pub mod word_bank;

// Re-export main components
pub use fairness::*;
pub use random::*;
pub use report::*;
pub use roster::*;
pub use round_generator::*;
pub use selection::*;
pub use session::*;
pub use troll::*;
pub use word_bank::*;
