//! # readerprefs
//!
//! Terminal preview of the settings screen. Builds a screen (the built-in one
//! or a TOML definition), decorates it and prints what the user would see:
//! summaries, enabled states and the reactions wired behind each key.
//!
//! ```text
//! readerprefs                                   # same as `show`
//! readerprefs set viewmode=single_page animationType=curler
//! readerprefs --group render reactions
//! readerprefs --screen my-screen.toml --json show
//! ```
//!
//! All logic lives in the `readerprefs` library; `cli/` only parses
//! arguments, loads configuration and formats output.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
