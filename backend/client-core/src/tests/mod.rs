mod config;
mod tasks;
