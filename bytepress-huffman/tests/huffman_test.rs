//! Huffman integration tests: roundtrips, stream self-description, and
//! corrupt-header handling.

use bytepress_huffman::{HuffmanError, compress, compress_to, expand, expand_from};

/// Deterministic pseudo-random bytes for incompressible-input tests.
fn random_bytes(len: usize) -> Vec<u8> {
    let mut state: u64 = 0x123456789ABCDEF0;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect()
}

#[test]
fn test_huffman_roundtrip_simple() {
    let original = b"it was the best of times it was the worst of times";
    let compressed = compress(original).expect("compression failed");
    let decompressed = expand(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_huffman_empty_input() {
    let compressed = compress(b"").expect("compression failed");
    assert!(compressed.is_empty());

    let decompressed = expand(&compressed).expect("decompression failed");
    assert!(decompressed.is_empty());
}

#[test]
fn test_huffman_single_byte() {
    let compressed = compress(b"Z").expect("compression failed");
    let decompressed = expand(&compressed).expect("decompression failed");

    assert_eq!(decompressed, b"Z");
}

#[test]
fn test_huffman_lone_symbol_run() {
    // one distinct symbol means zero-length codewords: the whole stream
    // is the 9-bit tree plus the 32-bit count, regardless of run length
    let original = vec![b'Q'; 10_000];
    let compressed = compress(&original).expect("compression failed");

    assert_eq!(compressed.len(), 6);
    assert_eq!(expand(&compressed).expect("decompression failed"), original);
}

#[test]
fn test_huffman_all_byte_values() {
    let original: Vec<u8> = (0..=255).collect();
    let compressed = compress(&original).expect("compression failed");
    let decompressed = expand(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_huffman_random_roundtrip() {
    let original = random_bytes(50_000);
    let compressed = compress(&original).expect("compression failed");
    let decompressed = expand(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_huffman_text_compresses() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(100);
    let compressed = compress(&original).expect("compression failed");

    println!(
        "text: {} -> {} bytes ({:.1}%)",
        original.len(),
        compressed.len(),
        (compressed.len() as f64 / original.len() as f64) * 100.0
    );

    assert!(compressed.len() < original.len());

    let decompressed = expand(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_huffman_deterministic_output() {
    let original = b"deterministic streams make testable streams".to_vec();
    let first = compress(&original).expect("compression failed");
    let second = compress(&original).expect("compression failed");

    assert_eq!(first, second);
}

#[test]
fn test_huffman_streaming_io() {
    let original = b"Pack my box with five dozen liquor jugs. ".repeat(25);

    let mut sink = Vec::new();
    compress_to(&original, &mut sink).expect("compression failed");

    let decompressed =
        expand_from(std::io::Cursor::new(&sink)).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_huffman_truncated_stream() {
    let mut compressed = compress(b"hello world").expect("compression failed");
    compressed.pop();

    assert!(matches!(
        expand(&compressed),
        Err(HuffmanError::Truncated { .. })
    ));
}

#[test]
fn test_huffman_malformed_header() {
    // an endless run of internal-node markers
    assert!(matches!(
        expand(&[0x00; 64]),
        Err(HuffmanError::MalformedTree(_))
    ));
}
