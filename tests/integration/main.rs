mod cli;
mod common;
mod export;
