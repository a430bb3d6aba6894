pub mod types;
pub mod track;
pub mod verify;
pub mod movement;
pub mod challenge;
pub mod state;
pub mod tests;
