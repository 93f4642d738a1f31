use cipherkit_crypto::{extract, extract_and_erase, Iv, KeyMaterial};

#[test]
fn extract_copies_range_and_leaves_source() {
    let source: Vec<u8> = (0u8..32).collect();
    let copy = extract(&source, 4, 8).unwrap();

    assert_eq!(copy, (4u8..12).collect::<Vec<_>>());
    assert_eq!(source, (0u8..32).collect::<Vec<_>>());
}

#[test]
fn extract_and_erase_zeroes_only_the_range() {
    let mut source: Vec<u8> = (1u8..=32).collect();
    let copy = extract_and_erase(&mut source, 8, 16).unwrap();

    assert_eq!(copy.as_slice(), (9u8..=24).collect::<Vec<_>>().as_slice());
    assert!(source[8..24].iter().all(|&b| b == 0));
    assert_eq!(&source[..8], &(1u8..=8).collect::<Vec<_>>()[..]);
    assert_eq!(&source[24..], &(25u8..=32).collect::<Vec<_>>()[..]);
}

#[test]
fn full_range_is_valid() {
    let mut source = vec![0xEEu8; 16];
    assert_eq!(extract(&source, 0, 16).unwrap().len(), 16);
    let copy = extract_and_erase(&mut source, 0, 16).unwrap();
    assert_eq!(copy.len(), 16);
    assert_eq!(source, vec![0u8; 16]);
}

#[test]
fn zero_count_yields_none() {
    let mut source = vec![1u8; 8];
    assert!(extract(&source, 0, 0).is_none());
    assert!(extract_and_erase(&mut source, 0, 0).is_none());
}

#[test]
fn out_of_range_yields_none_and_leaves_source() {
    let mut source = vec![7u8; 8];
    assert!(extract(&source, 4, 5).is_none());
    assert!(extract(&source, 9, 1).is_none());
    assert!(extract(&source, usize::MAX, 2).is_none());
    assert!(extract_and_erase(&mut source, 6, 4).is_none());
    assert_eq!(source, vec![7u8; 8]);
}

#[test]
fn empty_source_yields_none() {
    assert!(extract(&[], 0, 1).is_none());
}

#[test]
fn relocating_key_and_iv_out_of_a_packet() {
    let mut packet = vec![0x11u8; 16];
    packet.extend_from_slice(&[0x22u8; 16]);
    packet.extend_from_slice(b"ciphertext...");

    let key = KeyMaterial::from_slice(&extract_and_erase(&mut packet, 0, 16).unwrap());
    let iv = Iv::from_slice(&extract_and_erase(&mut packet, 16, 16).unwrap()).unwrap();

    assert_eq!(key.as_bytes(), &[0x11u8; 16]);
    assert_eq!(iv.as_bytes(), &[0x22u8; 16]);
    assert!(packet[..32].iter().all(|&b| b == 0));
    assert_eq!(&packet[32..], b"ciphertext...");
}
