//! Strictly Games - console checkers
//!
//! Front end for the [`strictly_checkers`] engine.
//!
//! # Architecture
//!
//! - **Cli**: command-line parsing
//! - **Settings**: TOML settings file with rule and display options
//! - **Console**: menu, instructions, and the turn loop over any
//!   `BufRead`/`Write` pair
//!
//! # Example
//!
//! ```
//! use strictly_games::{Console, DisplaySettings, Settings};
//!
//! let settings = Settings::new(Default::default(), DisplaySettings::plain());
//! let mut console = Console::new("q\n".as_bytes(), Vec::new(), settings);
//! console.run_menu().unwrap();
//! let output = String::from_utf8(console.into_output()).unwrap();
//! assert!(output.contains("BYE BYE"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod settings;

pub use cli::{Cli, Command};
pub use console::{
    Console, INVALID_COORDINATE, MenuKey, parse_coordinate, parse_menu_key, render_board,
};
pub use settings::{ConfigError, DEFAULT_SETTINGS_FILE, DisplaySettings, Settings};
