pub mod display;
pub mod form;
pub mod parser;
pub mod schedule;
pub mod web;
