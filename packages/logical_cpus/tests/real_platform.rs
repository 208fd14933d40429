//! Exercises the public API against the operating system the tests run on.

#![cfg(not(miri))] // Miri cannot execute the FFI calls, there is nothing real to test.

use std::thread;

use logical_cpus::{logical_cpu_count, logical_cpu_count_nonzero};

#[test]
fn at_least_one() {
    assert!(logical_cpu_count() >= 1);
}

#[test]
fn nonzero_agrees() {
    assert_eq!(logical_cpu_count_nonzero().get(), logical_cpu_count());
}

#[test]
fn stable_between_calls() {
    // Processors are not expected to go online or offline while tests are running.
    let first = logical_cpu_count();
    let second = logical_cpu_count();

    assert_eq!(first, second);
}

#[cfg(unix)]
#[test]
fn matches_processors_online() {
    // SAFETY: No safety requirements beyond passing a valid name.
    let online = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };

    let expected = usize::try_from(online).unwrap_or(0).max(1);

    assert_eq!(logical_cpu_count(), expected);
}

#[test]
fn callable_from_many_threads() {
    let expected = logical_cpu_count();

    let threads = (0..8)
        .map(|_| thread::spawn(logical_cpu_count))
        .collect::<Vec<_>>();

    for thread in threads {
        let count = thread.join().expect("querying the count does not panic");
        assert_eq!(count, expected);
    }
}

#[test]
fn usable_as_divisor() {
    let work_items = 1000_usize;

    let per_worker = work_items.div_ceil(logical_cpu_count());

    assert!(per_worker >= 1);
    assert!(per_worker <= work_items);
}

#[cfg(feature = "c-abi")]
#[test]
fn c_abi_matches() {
    let expected = u32::try_from(logical_cpu_count()).unwrap_or(u32::MAX);

    assert_eq!(logical_cpus::c_abi::logical_cpus_count(), expected);
}
