pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::MazeApp;
pub use args::{Args, Strategy};
pub use search::{SearchResult, execute_searches};
pub use utils::format_number;
