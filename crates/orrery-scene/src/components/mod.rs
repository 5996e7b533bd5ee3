pub mod asteroid;
pub mod body;
