use bloom_bits::{ArchiveFormat, BitArray, Config, DecodePolicy};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            for format in [ArchiveFormat::Keyed, ArchiveFormat::Compact] {
                for decode_policy in [DecodePolicy::Lenient, DecodePolicy::Strict] {
                    let cfg = Config { decode_policy, format };
                    if let Ok(bits) = BitArray::from_bytes(data, &cfg) {
                        assert!(bits.word_count() >= 1);
                        let again = bits.to_bytes(format).unwrap();
                        assert_eq!(BitArray::from_bytes(&again, &cfg).unwrap(), bits);
                    }
                }
            }
        });
    }
}
