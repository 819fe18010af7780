use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::des::DES;
use crate::crypto::des_key_expansion::KeySchedule;
use crate::crypto::key::KeyTriple;

/// Three-key Triple DES in EDE form.
///
/// Encryption is E(k3, D(k2, E(k1, x))) and decryption the exact inverse.
/// With k1 = k2 = k3 the middle steps cancel and this is single DES.
pub struct TripleDES {
    des: DES,
    schedules: [KeySchedule; 3],
}

impl TripleDES {
    pub fn new(keys: &KeyTriple) -> Self {
        Self::with_des(DES::default(), keys)
    }

    pub fn with_des(des: DES, keys: &KeyTriple) -> Self {
        let [k1, k2, k3] = *keys.keys();
        Self {
            des,
            schedules: [KeySchedule::new(k1), KeySchedule::new(k2), KeySchedule::new(k3)],
        }
    }
}

impl BlockCipher for TripleDES {
    fn encrypt_block(&self, block: u64) -> u64 {
        let [k1, k2, k3] = &self.schedules;
        let des = &self.des;
        des.encrypt(des.decrypt(des.encrypt(block, k1), k2), k3)
    }

    fn decrypt_block(&self, block: u64) -> u64 {
        let [k1, k2, k3] = &self.schedules;
        let des = &self.des;
        des.decrypt(des.encrypt(des.decrypt(block, k3), k2), k1)
    }
}
