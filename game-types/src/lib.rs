pub mod errors;
pub mod game;
pub mod history;
pub mod settings;
pub mod user;
pub mod words;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use history::*;
pub use settings::*;
pub use user::*;
pub use words::*;
