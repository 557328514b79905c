mod tables;

pub use self::tables::{scoreboard as print_scoreboard, trends as print_trends};
