mod cast;
mod catalog;
mod config;
mod narration;
