mod collection;
mod menu;
mod models;
mod storage;

use anyhow::Result;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the menu.
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .try_init();

    let mut collection = collection::BookCollection::open_default();
    menu::run(&mut collection)
}
