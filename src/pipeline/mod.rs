//! Pipeline entry points.
//!
//! - `run_cycle`: one scrape -> extract -> dedup -> publish pass
//! - `run_loop`: hourly worker loop with cooldown retry on failure

pub mod cycle;
pub mod dedup;
pub mod feed;

pub use cycle::{run_cycle, run_loop};
pub use dedup::dedup_entries;
pub use feed::build_feed;
