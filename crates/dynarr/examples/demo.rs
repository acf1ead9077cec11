//! Console walkthrough of the DynamicArray API.
//!
//! Demonstrates:
//!   1. Appending with geometric growth
//!   2. Checked access and in-place modification
//!   3. Removal and insertion with shifting
//!   4. Emplacing and shrinking capacity to fit
//!
//! Element listings go to stdout; reallocation events are traced to
//! stderr when enabled.
//!
//! Run with:
//!   RUST_LOG=dynarr=trace cargo run -p dynarr --example demo

use std::error::Error;
use std::fmt::Display;

use dynarr::DynamicArray;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn print_array<T: Display>(arr: &DynamicArray<T>) {
    println!("{}", arr.spaced());
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    let mut arr = DynamicArray::new();
    for i in 0..20 {
        arr.push(i);
    }
    print_array(&arr);
    println!("{}", arr.len());

    let front = arr.front().ok_or("array is empty")?;
    let back = arr.back().ok_or("array is empty")?;
    println!("{front}{back}");
    println!("{}", arr.at(2)?);

    *arr.at_mut(2)? = 22;
    print_array(&arr);
    println!("{}", arr.capacity());
    println!("{}", arr.len());
    println!("{}", arr.is_empty());

    arr.remove(2)?;
    print_array(&arr);
    arr.insert(2, 2)?;
    print_array(&arr);
    arr.remove_last();
    print_array(&arr);
    arr.emplace_with(|| 19);
    print_array(&arr);

    arr.shrink_to_fit();
    println!("{}{}", arr.len(), arr.capacity());

    let stats = arr.stats();
    println!(
        "reallocations: {}, memory: {} bytes",
        stats.reallocations, stats.memory_bytes
    );
    Ok(())
}
