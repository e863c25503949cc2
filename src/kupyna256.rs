use crate::compress::KUPYNA_256;
use crate::error::Result;
use crate::kmac::Kmac;
use crate::kupyna::Kupyna;

/// The size in bytes of the Kupyna-256 checksum.
pub const DIGEST_SIZE: usize = 32;

/// Block size, in bytes, of the Kupyna-256 hash function.
pub const DIGEST_BLOCK_SIZE: usize = 64;

/// new returns a streaming Kupyna-256 hasher.
pub fn new() -> Kupyna {
    Kupyna::new(&KUPYNA_256)
}

/// hash returns the Kupyna-256 digest of `data`.
pub fn hash(data: &[u8]) -> Vec<u8> {
    new().update(data).digest()
}

/// kmac returns a KMAC-256 instance. The key must be 32 bytes long.
pub fn kmac(key: &[u8]) -> Result<Kmac<Kupyna>> {
    Kmac::new(new(), key)
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::error::Error;

    struct TestElement<'a> {
        input: &'a str,
        output: &'a str,
    }

    fn incrementing(len: usize) -> String {
        hex::encode((0..len).map(|i| i as u8).collect::<Vec<_>>())
    }

    #[test]
    fn test_vector() -> anyhow::Result<()> {
        let n512 = incrementing(64);
        let n1024 = incrementing(128);
        let n2048 = incrementing(256);
        let n760 = incrementing(95);
        let test_vector = [
            TestElement {
                input: "",
                output: "CD5101D1CCDF0D1D1F4ADA56E888CD724CA1A0838A3521E7131D4FB78D0F5EB6",
            },
            TestElement {
                input: "FF",
                output: "EA7677CA4526555680441C117982EA14059EA6D0D7124D6ECDB3DEEC49E890F4",
            },
            TestElement {
                input: &n512,
                output: "08F4EE6F1BE6903B324C4E27990CB24EF69DD58DBE84813EE0A52F6631239875",
            },
            TestElement {
                input: &n760,
                output: "1075C8B0CB910F116BDA5FA1F19C29CF8ECC75CAFF7208BA2994B68FC56E8D16",
            },
            TestElement {
                input: &n1024,
                output: "0A9474E645A7D25E255E9E89FFF42EC7EB31349007059284F0B182E452BDA882",
            },
            TestElement {
                input: &n2048,
                output: "D305A32B963D149DC765F68594505D4077024F836C1BF03806E1624CE176C08F",
            },
        ];

        for (i, element) in test_vector.iter().enumerate() {
            let sum = hex::encode_upper(hash(&hex::decode(element.input)?));
            assert_eq!(
                element.output, sum,
                "test vector element mismatched on index {} failed! got {}, want {}",
                i, sum, element.output
            );
        }
        Ok(())
    }

    #[test]
    fn sizes() {
        let h = new();
        assert_eq!(h.size(), DIGEST_SIZE);
        assert_eq!(h.block_size(), DIGEST_BLOCK_SIZE);
    }

    #[test]
    fn kmac_vector() -> anyhow::Result<()> {
        let key = hex::decode("1f1e1d1c1b1a191817161514131211100f0e0d0c0b0a09080706050403020100")?;
        let msg = hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e")?;

        let mut mac = kmac(&key)?;
        let tag = hex::encode_upper(mac.update(&msg).digest());
        assert_eq!(
            tag,
            "B60594D56FA79BA210314C72C2495087CCD0A99FC04ACFE2A39EF669925D98EE"
        );
        Ok(())
    }

    #[test]
    fn kmac_key_length() {
        assert_eq!(
            kmac(&[0; 64]).unwrap_err(),
            Error::InvalidKeyLength {
                expected: 32,
                actual: 64
            }
        );
        assert!(kmac(&[0; 32]).is_ok());
    }
}
