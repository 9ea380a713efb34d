pub mod cli;
pub mod config;
pub mod github;
pub mod humanize;
pub mod logging;
pub mod output;
pub mod render;
pub mod report;
pub mod run;
