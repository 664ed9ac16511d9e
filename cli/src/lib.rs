#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod console;
mod filters;
mod pager;
mod report;
mod session;

use std::io::{stdin, stdout};

use anyhow::Result;

use tripdata::DataSources;

pub use self::console::Console;
pub use self::session::Session;

/// Explores the bikeshare files in the working directory, over stdin and stdout
pub fn run() -> Result<()> {
    abstutil::logger::setup();

    let session = Session::new(DataSources::default());
    let mut console = Console::new(stdin().lock(), stdout().lock());
    session.run(&mut console)
}
