//! Fuzz target for subsequence matching.
//!
//! Tests that find_subsequence never panics and that its answer agrees with
//! a greedy re-check of the reported cursor.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexcheck::verify::find_subsequence;

#[derive(Arbitrary, Debug)]
struct Input {
    actual: Vec<u8>,
    expected: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Narrow the alphabet so matches are common.
    let actual: Vec<u8> = input.actual.iter().map(|b| b % 4).collect();
    let expected: Vec<u8> = input.expected.iter().map(|b| b % 4).collect();

    match find_subsequence(&actual, &expected) {
        Ok(cursor) => {
            assert!(cursor <= actual.len());
            assert!(find_subsequence(&actual[..cursor], &expected).is_ok());
        }
        Err(missing) => {
            assert!(missing.expected_index < expected.len());
            assert!(!actual[missing.searched_from..].contains(&expected[missing.expected_index]));
        }
    }

    // A stream always contains itself.
    assert_eq!(find_subsequence(&actual, &actual), Ok(actual.len()));
});
