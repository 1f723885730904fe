use byte_buckets::chained;
use byte_buckets::hash::HashFn;
use byte_buckets::probed;
use std::time::Instant;

fn print_result(key: &str, result: Option<i64>) {
    match result {
        Some(value) => println!("Count of {}: {}", key, value),
        None => println!("Key '{}' not found", key),
    }
}

fn main() {
    let keyval_pairs: [(&str, i64); 3] = [("puppy", 5), ("kitty", 8), ("horsie", 12)];

    println!("-- separate chaining --");
    let mut counts = chained::HashTable::with_capacity(100, HashFn::Djb2);
    for (key, value) in keyval_pairs {
        counts.insert(key.as_bytes(), value);
    }
    counts.insert(b"puppy", 7); // Update a key
    for (key, _) in keyval_pairs {
        print_result(key, counts.get(key.as_bytes()));
    }
    print_result("wolfie", counts.get(b"wolfie"));
    println!("size {} capacity {}", counts.len(), counts.capacity());

    println!("-- linear probing --");
    let mut counts = probed::HashTable::with_capacity(40, HashFn::Fnv1a);
    for (key, value) in keyval_pairs {
        if let Err(e) = counts.insert(key.as_bytes(), value) {
            panic!("{}", e);
        }
    }
    if let Err(e) = counts.insert(b"puppy", 7) {
        panic!("{}", e);
    }
    for (key, _) in keyval_pairs {
        print_result(key, counts.get(key.as_bytes()));
    }
    print_result("wolfie", counts.get(b"wolfie"));
    println!("size {} capacity {}", counts.len(), counts.capacity());

    const CAPACITY: usize = 50000;
    const SAMPLE_SIZE: usize = 40000;

    let mut samples: Vec<[u8; 8]> = Vec::with_capacity(SAMPLE_SIZE);
    for _ in 0..SAMPLE_SIZE {
        samples.push(rand::random::<u64>().to_le_bytes());
    }

    println!("-- chained stress, {} random keys, {} slots --", SAMPLE_SIZE, CAPACITY);
    let mut table = chained::HashTable::with_capacity(CAPACITY, HashFn::Fnv1a);
    let now: Instant = Instant::now();
    for sample in &samples {
        table.insert(sample, 1);
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;
    println!("Entries {} load factor {}", table.len(), table.load_factor());
    println!("Avg time to insert {}", elapsed as f64 / SAMPLE_SIZE as f64);

    let now: Instant = Instant::now();
    for sample in &samples {
        match table.get(sample) {
            Some(_) => (),
            None => panic!("Failed to get key {:?}", sample),
        }
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;
    println!("Avg time to lookup {}", elapsed as f64 / SAMPLE_SIZE as f64);

    println!("-- probed stress, {} random keys, {} slots --", SAMPLE_SIZE, CAPACITY);
    let mut table = probed::HashTable::with_capacity(CAPACITY, HashFn::Fnv1a);
    for sample in &samples {
        if let Err(e) = table.insert(sample, 1) {
            panic!("{}", e);
        }
    }
    println!("Entries {} load factor {}", table.len(), table.load_factor());

    let now: Instant = Instant::now();
    for sample in &samples {
        match table.get(sample) {
            Some(_) => (),
            None => panic!("Failed to get key {:?}", sample),
        }
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;
    println!("Avg time to lookup {}", elapsed as f64 / SAMPLE_SIZE as f64);
}
