pub mod action;
pub mod history;
pub mod pmp;
pub mod sample;
