use bloom_bits::{ArchiveFormat, BitArray, BitArrayError, Config, DecodePolicy};
use proptest::prelude::*;
use rand::Rng;

fn random_bits(count: usize) -> BitArray {
    let mut rng = rand::thread_rng();
    let mut bits = BitArray::new(count);
    for i in 0..=bits.count() {
        bits.set_bit(i, rng.gen_bool(0.3)).unwrap();
    }
    bits
}

fn assert_same_bits(a: &BitArray, b: &BitArray) {
    assert_eq!(a.count(), b.count());
    for i in 0..=a.count() {
        assert_eq!(a.get_bit(i).unwrap(), b.get_bit(i).unwrap(), "bit {i}");
    }
}

proptest! {
    #[test]
    fn roundtrip_any_words(words in prop::collection::vec(any::<u64>(), 1..32)) {
        let bits = BitArray::from_words(words).unwrap();
        for format in [ArchiveFormat::Keyed, ArchiveFormat::Compact] {
            let bytes = bits.to_bytes(format).unwrap();
            let back = BitArray::from_bytes(&bytes, &Config::strict(format)).unwrap();
            prop_assert_eq!(back.words(), bits.words());
        }
    }
}

#[test]
fn random_pattern_survives_both_formats() {
    let bits = random_bits(1000);
    for format in [ArchiveFormat::Keyed, ArchiveFormat::Compact] {
        let cfg = Config {
            decode_policy: DecodePolicy::Lenient,
            format,
        };
        let back = BitArray::from_bytes(&bits.to_bytes(format).unwrap(), &cfg).unwrap();
        assert_same_bits(&bits, &back);
    }
}

#[test]
fn save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let bits = random_bits(300);
    for (name, format) in [("bits.json", ArchiveFormat::Keyed), ("bits.bin", ArchiveFormat::Compact)] {
        let path = dir.path().join(name);
        bits.save(&path, format).unwrap();
        let back = BitArray::load(&path, &Config::strict(format)).unwrap();
        assert_eq!(back, bits);
    }
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match BitArray::load(&path, &Config::default()) {
        Err(BitArrayError::Io(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
            assert!(e.to_string().contains("absent.json"));
        }
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn wrong_format_is_a_decode_error() {
    let bits = random_bits(64);
    let compact = bits.to_bytes(ArchiveFormat::Compact).unwrap();
    assert!(matches!(
        BitArray::from_bytes(&compact, &Config::default()),
        Err(BitArrayError::Decode(_))
    ));
}

#[test]
fn lenient_and_strict_policies_on_missing_field() {
    let blob = br#"{"bits":[1]}"#;
    let lenient = BitArray::deserialize(blob).unwrap();
    assert_eq!(lenient.count(), 63);
    assert_eq!(lenient.count_ones(), 0);
    assert!(matches!(
        BitArray::from_bytes(blob, &Config::strict(ArchiveFormat::Keyed)),
        Err(BitArrayError::Decode(_))
    ));
}
