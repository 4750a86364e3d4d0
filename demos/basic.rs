use distid::Allocator;

fn main() {
    // Worker 1 in datacenter 2
    let allocator = Allocator::with_defaults(1, 2).unwrap();

    let id1 = allocator.next_id().unwrap();
    let id2 = allocator.next_id().unwrap();
    let id3 = allocator.next_string_id().unwrap();

    println!("Generated IDs (increasing within one allocator):");
    print_id(id1, &allocator);
    print_id(id2, &allocator);
    println!("  As string: {id3}");

    // Or extract components individually
    let ts = allocator.extract.timestamp(id2);
    let worker = allocator.extract.worker_id(id2);
    let datacenter = allocator.extract.datacenter_id(id2);
    let seq = allocator.extract.sequence(id2);
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {ts} ms since epoch");
    println!("  Datacenter ID: {datacenter}");
    println!("  Worker ID: {worker}");
    println!("  Sequence: {seq}");

    // The process-wide default allocator
    println!("\nGlobal ID: {}", distid::next_id().unwrap());
}

fn print_id(id: i64, allocator: &Allocator) {
    let parts = allocator.extract.decompose(id);
    let timestamp = allocator.extract.unix_millis(id);
    let datetime = allocator
        .extract
        .datetime(id)
        .map(|at| at.to_rfc3339())
        .unwrap_or_default();

    println!(
        "  ID: {id}, Timestamp: {timestamp}, Human date: {datetime}, Datacenter ID: {}, Worker ID: {}, Sequence: {}",
        parts.datacenter_id, parts.worker_id, parts.sequence
    );
}
