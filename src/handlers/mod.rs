pub mod classes;
pub mod connections;
pub mod health;
