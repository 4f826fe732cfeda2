pub mod actions;
pub mod latest;
pub mod summary;

mod clock;

pub use actions::ClockButtons;
pub use clock::Clock;
pub use latest::LatestAttendance;
pub use summary::GreetingCard;
