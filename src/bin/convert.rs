//! `convert <input-path> <output-path>`: Markdown subset to HTML fragment

use markdown_html_converter::cli;
use std::{env, process};

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    match cli::run(env::args_os()) {
        Ok(stats) => {
            log::info!("{} lines converted", stats.lines_read);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.code());
        }
    }
}
