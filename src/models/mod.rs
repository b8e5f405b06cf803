pub mod class;
pub mod connection;
pub mod schedule;
pub mod user;

pub use class::{Class, ClassFilters, ClassListing, NewClass};
pub use connection::{ConnectionsTotal, NewConnection, UserConnection};
pub use schedule::{ScheduleEntry, ScheduleItem};
pub use user::User;
