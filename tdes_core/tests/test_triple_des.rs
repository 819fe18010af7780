#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use quickcheck::quickcheck;
    use tdes_core::crypto::des::DES;
    use tdes_core::crypto::des_key_expansion::KeySchedule;
    use tdes_core::crypto::key::{Key, KeyTriple};
    use tdes_core::crypto::triple_des::TripleDES;
    use tdes_core::BlockCipher;

    fn block(bytes: &[u8]) -> u64 {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        u64::from_be_bytes(buf)
    }

    fn triple(k1: u64, k2: u64, k3: u64) -> KeyTriple {
        KeyTriple::new(
            Key::from_key_block(k1),
            Key::from_key_block(k2),
            Key::from_key_block(k3),
        )
    }

    #[test]
    fn test_all_zero_known_answer() {
        let cipher = TripleDES::new(&KeyTriple::from_values(&[0, 0, 0]).unwrap());
        assert_eq!(cipher.encrypt_block(0), block(&hex!("8C A6 4D E9 C1 B1 23 A7")));
        assert_eq!(cipher.decrypt_block(block(&hex!("8C A6 4D E9 C1 B1 23 A7"))), 0);
    }

    #[test]
    fn test_equal_keys_degenerate_to_single_des() {
        let keys = triple(0x1334_5779_9BBC_DFF1, 0x1334_5779_9BBC_DFF1, 0x1334_5779_9BBC_DFF1);
        assert!(keys.is_degenerate());
        let cipher = TripleDES::new(&keys);
        let plaintext = block(&hex!("01 23 45 67 89 AB CD EF"));

        assert_eq!(cipher.encrypt_block(plaintext), block(&hex!("85 E8 13 54 0F 0A B4 05")));

        let des = DES::default();
        let schedule = KeySchedule::new(keys.keys()[0]);
        for value in [0u64, 1, 0xFFFF_0000_FFFF_0000, u64::MAX] {
            assert_eq!(cipher.encrypt_block(value), des.encrypt(value, &schedule));
            assert_eq!(cipher.decrypt_block(value), des.decrypt(value, &schedule));
        }
    }

    #[test]
    fn test_three_key_known_answer() {
        let keys = triple(0x0123_4567_89AB_CDEF, 0x2345_6789_ABCD_EF01, 0x4567_89AB_CDEF_0123);
        let cipher = TripleDES::new(&keys);

        let plaintext = b"The qufck brown fox jump";
        let expected = hex!("A8 26 FD 8C E5 3B 85 5F CC E2 1C 81 12 25 6F E6 68 D5 C0 5D D9 B6 B9 00");

        for (p, c) in plaintext.chunks(8).zip(expected.chunks(8)) {
            assert_eq!(cipher.encrypt_block(block(p)), block(c));
            assert_eq!(cipher.decrypt_block(block(c)), block(p));
        }
    }

    #[test]
    fn test_ede_order_matters() {
        let forward = TripleDES::new(&KeyTriple::from_values(&[1, 2, 3]).unwrap());
        let reversed = TripleDES::new(&KeyTriple::from_values(&[3, 2, 1]).unwrap());
        assert_ne!(forward.encrypt_block(0), reversed.encrypt_block(0));
        // decrypting with the reversed triple is not the inverse either
        assert_ne!(reversed.decrypt_block(forward.encrypt_block(0)), 0);
    }

    #[test]
    fn test_two_key_variant_is_ede() {
        // k1 = k3: E(k1, D(k2, E(k1, x)))
        let keys = KeyTriple::from_values(&[0x0011_2233_4455_66, 0x0066_5544_3322_11, 0x0011_2233_4455_66]).unwrap();
        let cipher = TripleDES::new(&keys);
        let des = DES::default();
        let [k1, k2, _] = (*keys.keys()).map(KeySchedule::new);

        let x = 0xCAFE_BABE_DEAD_BEEF;
        assert_eq!(cipher.encrypt_block(x), des.encrypt(des.decrypt(des.encrypt(x, &k1), &k2), &k1));
    }

    quickcheck! {
        fn prop_triple_des_roundtrip(a: u64, b: u64, c: u64, x: u64) -> bool {
            let mask = (1u64 << 56) - 1;
            let keys = KeyTriple::from_values(&[a & mask, b & mask, c & mask]).unwrap();
            let cipher = TripleDES::new(&keys);
            cipher.decrypt_block(cipher.encrypt_block(x)) == x
        }
    }
}
