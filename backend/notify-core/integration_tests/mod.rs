mod config;
mod error;
mod scanner;
mod sender;
