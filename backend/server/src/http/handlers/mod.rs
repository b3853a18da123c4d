pub mod callbacks;
pub mod health;
pub mod payments;
pub mod settings;
