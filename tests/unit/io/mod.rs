mod cli;
mod configuration;
mod logging;
