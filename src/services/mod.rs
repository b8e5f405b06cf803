pub mod classes;
pub mod connections;
