pub mod health;
pub mod interpret;
pub mod inventory;
pub mod score;
