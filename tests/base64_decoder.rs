use radiospot::audio::base64::{decode_base64, encode_base64};
use radiospot::error::Error;

#[test]
fn test_decode_zero_bytes() {
    assert_eq!(decode_base64("AAAAAA==").unwrap(), vec![0u8, 0, 0, 0]);
}

#[test]
fn test_decode_empty_string() {
    assert!(decode_base64("").unwrap().is_empty());
}

#[test]
fn test_round_trip_preserves_length_and_text() {
    for len in [1usize, 2, 3, 4, 5, 255, 1000] {
        let bytes: Vec<u8> = (0..len).map(|i| (i * 37 % 256) as u8).collect();
        let text = encode_base64(&bytes);
        let decoded = decode_base64(&text).unwrap();
        assert_eq!(decoded.len(), len);
        assert_eq!(encode_base64(&decoded), text);
    }
}

#[test]
fn test_unpadded_input_decodes() {
    assert_eq!(decode_base64("AAAAAA").unwrap(), vec![0u8, 0, 0, 0]);
    assert_eq!(decode_base64("/38").unwrap(), vec![0xFF, 0x7F]);
}

#[test]
fn test_round_trip_modulo_padding() {
    for len in [1usize, 2, 3, 4, 5, 100] {
        let bytes: Vec<u8> = (0..len).map(|i| (i * 91 % 256) as u8).collect();
        let padded = encode_base64(&bytes);
        let unpadded = padded.trim_end_matches('=');

        let decoded = decode_base64(unpadded).unwrap();
        assert_eq!(decoded, bytes);
        assert_eq!(encode_base64(&decoded), padded);
    }
}

#[test]
fn test_interior_whitespace_is_ignored() {
    // Line-wrapped base64 (MIME style) decodes like the browser's atob
    assert_eq!(decode_base64("AA AA\nAA==").unwrap(), vec![0u8, 0, 0, 0]);
    assert_eq!(decode_base64("AA AA").unwrap(), vec![0u8, 0, 0]);
}

#[test]
fn test_malformed_input_is_decode_error() {
    for bad in ["AAAA!AAA", "A", "AAAAA===", "AAAAA", "=AAA"] {
        match decode_base64(bad) {
            Err(Error::Decode(_)) => {}
            other => panic!("expected decode error for {:?}, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_decode_error_does_not_poison_later_calls() {
    assert!(decode_base64("%%%%").is_err());
    assert_eq!(decode_base64("/38=").unwrap(), vec![0xFF, 0x7F]);
}
