pub mod settings;
pub mod sign;
pub mod snapshot;
pub mod swap;
pub mod tab;
pub mod token;
pub mod view;
