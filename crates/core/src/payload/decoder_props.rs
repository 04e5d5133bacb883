//! Property-based tests for payload decoding.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use proptest::prelude::*;

use super::{PayloadError, decode};

/// Strategy for a media type accepted in a data URI prefix.
fn media_type() -> impl Strategy<Value = String> {
    "[a-z]{1,12}/[a-z0-9+.-]{1,16}"
}

/// Strategy for a string holding at least one character outside the base64 alphabet
/// (and outside whitespace, which is stripped).
fn foreign_text() -> impl Strategy<Value = String> {
    (
        "[A-Za-z0-9+/]{0,16}",
        prop::sample::select(vec!['-', '_', '@', '!', '*', '.', ':', ',', '%', 'é', '~']),
        "[A-Za-z0-9+/]{0,16}",
    )
        .prop_map(|(head, bad, tail)| format!("{head}{bad}{tail}"))
}

proptest! {
    #[test]
    fn prop_plain_round_trip(bytes in prop::collection::vec(any::<u8>(), 1..512)) {
        let decoded = decode(&STANDARD.encode(&bytes)).expect("valid base64 should decode");
        prop_assert_eq!(&decoded.bytes[..], &bytes[..]);
        prop_assert_eq!(decoded.declared_type, "");
    }

    #[test]
    fn prop_unpadded_round_trip(bytes in prop::collection::vec(any::<u8>(), 1..512)) {
        let decoded = decode(&STANDARD_NO_PAD.encode(&bytes)).expect("unpadded base64 should decode");
        prop_assert_eq!(&decoded.bytes[..], &bytes[..]);
    }

    #[test]
    fn prop_data_uri_round_trip(
        bytes in prop::collection::vec(any::<u8>(), 1..512),
        media in media_type(),
    ) {
        let input = format!("data:{media};base64,{}", STANDARD.encode(&bytes));
        let decoded = decode(&input).expect("data URI should decode");
        prop_assert_eq!(&decoded.bytes[..], &bytes[..]);
        prop_assert_eq!(decoded.declared_type, media);
    }

    #[test]
    fn prop_wrapped_round_trip(
        bytes in prop::collection::vec(any::<u8>(), 1..512),
        width in 4usize..80,
    ) {
        let encoded = STANDARD.encode(&bytes);
        let wrapped = encoded
            .as_bytes()
            .chunks(width)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join("\n");
        let decoded = decode(&wrapped).expect("wrapped base64 should decode");
        prop_assert_eq!(&decoded.bytes[..], &bytes[..]);
    }

    #[test]
    fn prop_partial_padding_rejected(
        bytes in prop::collection::vec(any::<u8>(), 1..512)
            .prop_filter("needs two padding characters", |b| b.len() % 3 == 1),
    ) {
        let mut encoded = STANDARD.encode(&bytes);
        encoded.pop();
        let result = decode(&encoded);
        prop_assert!(matches!(result, Err(PayloadError::Malformed(_))), "got {:?}", result);
    }

    #[test]
    fn prop_foreign_characters_rejected(text in foreign_text()) {
        prop_assert_eq!(decode(&text), Err(PayloadError::InvalidEncoding));
    }
}
