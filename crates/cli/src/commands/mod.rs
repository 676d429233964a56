pub mod action;
pub mod actions;
pub mod run;
