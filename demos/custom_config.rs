use chrono::{TimeZone, Utc};
use distid::{Allocator, AllocatorConfig};

fn main() {
    // 8 worker bits, no datacenter bits, 10 sequence bits, 2024 epoch
    let config = AllocatorConfig::builder()
        .epoch_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .worker_id_bits(8)
        .datacenter_id_bits(0)
        .sequence_bits(10)
        .build()
        .unwrap();

    let allocator = Allocator::with_config(config, 200, 0).unwrap();
    let id = allocator.next_id().unwrap();
    let parts = allocator.extract.decompose(id);

    println!("Timestamp bits: {}", config.timestamp_bits());
    println!("Max worker ID: {}", config.max_worker_id());
    println!("IDs per millisecond: {}", config.max_sequence() + 1);
    println!("Generated ID: {id}");
    println!(
        "Components: timestamp={}, worker={}, sequence={}",
        parts.timestamp, parts.worker_id, parts.sequence
    );

    // Out-of-range worker IDs are rejected at construction
    match Allocator::with_config(config, 256, 0) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("Rejected worker 256: {err}"),
    }
}
