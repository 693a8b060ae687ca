mod entry;
mod system;

use servebench::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
