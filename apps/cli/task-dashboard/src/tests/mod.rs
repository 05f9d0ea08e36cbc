mod cli;
mod error;
mod output;
