//! Prints the number of logical processors the operating system reports as online.
//!
//! Trace-level logging is enabled, so the log output shows which platform answered the query.

use logical_cpus::logical_cpu_count;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let count = logical_cpu_count();

    println!("{count} logical processors are online");
}
