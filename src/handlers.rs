pub mod controls;
pub mod forecast;
pub mod health;
