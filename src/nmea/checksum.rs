// src/nmea/checksum.rs
//! Sentence checksum validation

/// XOR of every byte of `body`, skipping any `$` characters.
pub fn xor_reduction(body: &str) -> u8 {
    body.bytes().filter(|&b| b != b'$').fold(0, |acc, b| acc ^ b)
}

/// Check that the text after the first `*` equals the hex XOR reduction of
/// the text before it.
///
/// The computed value is rendered without zero padding, so a reduction of
/// `0x05` only matches a claimed checksum of `5`. Comparison ignores case.
/// A sentence without `*` is checked against an empty checksum and so never
/// validates.
pub fn is_valid_sentence(sentence: &str) -> bool {
    let (body, claimed) = match sentence.split_once('*') {
        Some((body, claimed)) => (body, claimed),
        None => (sentence, ""),
    };

    let computed = format!("{:X}", xor_reduction(body));
    computed == claimed.to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a sentence whose checksum matches its body.
    fn with_checksum(body: &str) -> String {
        format!("${}*{:X}", body, xor_reduction(body))
    }

    #[test]
    fn test_known_good_sentences() {
        assert!(is_valid_sentence("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47"));
        assert!(is_valid_sentence("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A"));
    }

    #[test]
    fn test_round_trip_and_corruption() {
        let sentence = with_checksum("GPGLL,5425.32,N,00102.4,E");
        assert!(is_valid_sentence(&sentence));

        let corrupted = sentence.replace("5425.32", "5425.33");
        assert!(!is_valid_sentence(&corrupted));
    }

    #[test]
    fn test_checksum_is_case_insensitive() {
        assert!(is_valid_sentence("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6a"));
    }

    #[test]
    fn test_every_dollar_is_stripped() {
        let body = "GPGLL,54$25.32,N";
        let sentence = format!("${}*{:X}", body, xor_reduction("GPGLL,5425.32,N"));
        assert!(is_valid_sentence(&sentence));
    }

    #[test]
    fn test_no_zero_padding() {
        // 'A' ^ 'D' == 0x05
        assert_eq!(xor_reduction("AD"), 0x05);
        assert!(is_valid_sentence("$AD*5"));
        assert!(!is_valid_sentence("$AD*05"));
    }

    #[test]
    fn test_zero_reduction() {
        assert!(is_valid_sentence("$AA*0"));
        assert!(!is_valid_sentence("$AA*00"));
    }

    #[test]
    fn test_malformed_input() {
        assert!(!is_valid_sentence(""));
        assert!(!is_valid_sentence("$GPGLL,5425.32,N,00102.4,E"));
        assert!(!is_valid_sentence("*"));
        assert!(!is_valid_sentence("$GPGLL,,,,*"));
    }

    #[test]
    fn test_trailing_text_after_checksum_fails() {
        let sentence = format!("{}\r", with_checksum("GPGLL,5425.32,N,00102.4,E"));
        assert!(!is_valid_sentence(&sentence));
    }
}
