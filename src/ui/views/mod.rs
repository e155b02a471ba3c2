pub mod error;
pub mod playing;
pub mod results;
pub mod welcome;
