use huffman_coder::{
    Error, Node, build_code_table, build_frequency_table, build_huffman_tree, compress,
    decompress,
};
use quickcheck_macros::quickcheck;

#[test]
fn sample_text_roundtrips() {
    let input = b"abcdeffg";
    let result = compress(input);
    let table = build_code_table(result.tree().unwrap());

    assert_eq!(decompress(&result).unwrap(), input);
    assert_eq!(Some(result.bit_len()), table.encoded_len(input));
    for &symbol in input {
        assert!(!table.get(symbol).unwrap().is_empty());
    }
}

#[test]
fn empty_input_has_no_tree() {
    let result = compress(b"");
    assert!(result.is_empty());
    assert!(result.tree().is_none());
    assert_eq!(decompress(&result).unwrap(), b"");
}

#[test]
fn repeated_symbol_gets_one_bit_codes() {
    let result = compress(b"aaaa");
    let tree = result.tree().unwrap();
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(build_code_table(tree).get(b'a'), Some("1"));
    assert_eq!(result.bits(), "1111");
    assert_eq!(decompress(&result).unwrap(), b"aaaa");
}

#[test]
fn repeated_nul_roundtrips() {
    let input = [0u8; 5];
    let result = compress(&input);
    assert_eq!(result.tree().unwrap().leaf_count(), 2);
    assert_eq!(decompress(&result).unwrap(), input);
}

#[test]
fn malformed_bits_are_reported() {
    let (bits, tree) = compress(b"abcdeffg").into_parts();
    let mut corrupt = bits.clone();
    corrupt.replace_range(3..4, "2");
    let result = huffman_coder::EncodedResult::new(corrupt, tree.clone());
    assert_eq!(
        decompress(&result),
        Err(Error::InvalidBit { position: 3, found: '2' })
    );

    let truncated = huffman_coder::EncodedResult::new(bits[..bits.len() - 1].to_owned(), tree);
    assert!(matches!(
        decompress(&truncated),
        Err(Error::TruncatedStream { .. })
    ));
}

#[test]
fn result_survives_json() {
    let result = compress(b"hello, huffman");
    let json = serde_json::to_string(&result).unwrap();
    let back: huffman_coder::EncodedResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
    assert_eq!(decompress(&back).unwrap(), b"hello, huffman");
}

#[quickcheck]
fn roundtrip(data: Vec<u8>) -> bool {
    decompress(&compress(&data)).unwrap() == data
}

#[quickcheck]
fn compress_is_deterministic(data: Vec<u8>) -> bool {
    compress(&data) == compress(&data)
}

#[quickcheck]
fn counts_sum_to_length(data: Vec<u8>) -> bool {
    build_frequency_table(&data).total() == data.len() as u64
}

#[quickcheck]
fn codes_are_prefix_free(data: Vec<u8>) -> bool {
    let Some(tree) = build_huffman_tree(&build_frequency_table(&data)) else {
        return data.is_empty();
    };
    let table = build_code_table(&tree);
    let codes: Vec<(u8, &str)> = table.iter().collect();
    codes.iter().all(|&(a, code_a)| {
        !code_a.is_empty()
            && codes
                .iter()
                .all(|&(b, code_b)| a == b || !code_b.starts_with(code_a))
    })
}

#[quickcheck]
fn tree_weight_is_input_length(data: Vec<u8>) -> bool {
    let frequencies = build_frequency_table(&data);
    match build_huffman_tree(&frequencies) {
        None => data.is_empty(),
        Some(tree @ Node::Internal { .. }) if frequencies.distinct() == 1 => {
            tree.weight() == data.len() as u64 + 1
        }
        Some(tree) => tree.weight() == data.len() as u64 && tree.leaf_count() == frequencies.distinct(),
    }
}
