use distid::Allocator;
use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // One shared allocator per node; threads share it without extra locking
    let nodes: Vec<_> = (0..2)
        .map(|datacenter_id| Arc::new(Allocator::with_defaults(1, datacenter_id).unwrap()))
        .collect();
    let mut handles = vec![];

    for thread_id in 0..4 {
        let allocator = Arc::clone(&nodes[thread_id % nodes.len()]);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = allocator.next_id().unwrap();
                let parts = allocator.extract.decompose(id);

                println!(
                    "Thread {} generated ID {} (ts={}, dc={}, worker={}, seq={})",
                    thread_id, i, parts.timestamp, parts.datacenter_id, parts.worker_id, parts.sequence
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        let thread_ids = handle.join().unwrap();
        all_ids.extend(thread_ids);
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 20, "IDs collided across nodes!");
    println!("All IDs are unique across nodes and threads!");
}
