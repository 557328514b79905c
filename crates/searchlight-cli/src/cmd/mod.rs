pub mod score;
pub mod trend;
