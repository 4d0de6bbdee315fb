/// Example queries offered as one-click chips
pub const EXAMPLE_QUERIES: [&str; 5] = [
    "Biryani",
    "Chicken Karahi",
    "Nihari",
    "Haleem",
    "Chapli Kabab",
];

/// Look up an example by zero-based position
pub fn by_index(index: usize) -> Option<&'static str> {
    EXAMPLE_QUERIES.get(index).copied()
}

/// Look up an example by name, ignoring ASCII case
pub fn by_name(name: &str) -> Option<&'static str> {
    EXAMPLE_QUERIES
        .iter()
        .find(|example| example.eq_ignore_ascii_case(name.trim()))
        .copied()
}

/// Resolve a chip reference given either as a 1-based number or a name
pub fn resolve(reference: &str) -> Option<&'static str> {
    match reference.trim().parse::<usize>() {
        Ok(n) if n >= 1 => by_index(n - 1),
        Ok(_) => None,
        Err(_) => by_name(reference),
    }
}
