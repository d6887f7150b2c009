pub mod cards;
pub mod common;
pub mod empty_state;
pub mod error;
pub mod forms;
pub mod guard;
pub mod layout;
