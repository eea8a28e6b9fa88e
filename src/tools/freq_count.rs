use rustc_hash::FxHashMap;

/// Returns a frequency count of the input data: one entry per distinct byte
/// value, each count at least 1. Empty input yields an empty count.
pub fn freqs(data: &[u8]) -> FxHashMap<u8, u32> {
    let mut freqs = FxHashMap::default();
    data.iter().for_each(|&el| *freqs.entry(el).or_insert(0) += 1);
    freqs
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn freqs_test() {
        let counts = freqs(b"aaabbc");
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&b'a'], 3);
        assert_eq!(counts[&b'b'], 2);
        assert_eq!(counts[&b'c'], 1);
    }

    #[test]
    fn freqs_empty_test() {
        assert!(freqs(b"").is_empty());
    }

    #[test]
    fn freqs_full_range_test() {
        let data: Vec<u8> = (0..=255).collect();
        let counts = freqs(&data);
        assert_eq!(counts.len(), 256);
        assert!(counts.values().all(|&count| count == 1));
    }
}
