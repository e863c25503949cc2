use crate::compress::KUPYNA_512;
use crate::error::Result;
use crate::kmac::Kmac;
use crate::kupyna::Kupyna;

/// The size in bytes of the Kupyna-512 checksum.
pub const DIGEST_SIZE: usize = 64;

/// Block size, in bytes, of the Kupyna-512 hash function.
pub const DIGEST_BLOCK_SIZE: usize = 128;

/// new returns a streaming Kupyna-512 hasher.
pub fn new() -> Kupyna {
    Kupyna::new(&KUPYNA_512)
}

/// hash returns the Kupyna-512 digest of `data`.
pub fn hash(data: &[u8]) -> Vec<u8> {
    new().update(data).digest()
}

/// kmac returns a KMAC-512 instance. The key must be 64 bytes long.
pub fn kmac(key: &[u8]) -> Result<Kmac<Kupyna>> {
    Kmac::new(new(), key)
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::error::Error;

    fn incrementing(len: usize) -> Vec<u8> {
        (0..len).map(|i| i as u8).collect()
    }

    #[test]
    fn test_vector() {
        let test_vector = [
            (0, "656B2F4CD71462388B64A37043EA55DBE445D452AECD46C3298343314EF04019BCFA3F04265A9857F91BE91FCE197096187CEDA78C9C1C021C294A0689198538"),
            (64, "3813E2109118CDFB5A6D5E72F7208DCCC80A2DFB3AFDFB02F46992B5EDBE536B3560DD1D7E29C6F53978AF58B444E37BA685C0DD910533BA5D78EFFFC13DE62A"),
            (128, "76ED1AC28B1D0143013FFA87213B4090B356441263C13E03FA060A8CADA32B979635657F256B15D5FCA4A174DE029F0B1B4387C878FCC1C00E8705D783FD7FFE"),
            (256, "0DD03D7350C409CB3C29C25893A0724F6B133FA8B9EB90A64D1A8FA93B56556611EB187D715A956B107E3BFC76482298133A9CE8CBC0BD5E1436A5B197284F7E"),
        ];

        test_vector.iter().for_each(|(len, output)| {
            let sum = hex::encode_upper(hash(&incrementing(*len)));
            assert_eq!(
                *output, sum,
                "{} byte message: got {}, want {}",
                len, sum, output
            );
        })
    }

    #[test]
    fn sizes() {
        let h = new();
        assert_eq!(h.size(), DIGEST_SIZE);
        assert_eq!(h.block_size(), DIGEST_BLOCK_SIZE);
    }

    #[test]
    fn kmac_vector() -> anyhow::Result<()> {
        let key: Vec<u8> = (0..64u8).rev().collect();
        let msg = incrementing(31);

        let mut mac = kmac(&key)?;
        mac.update(&msg);
        assert_eq!(
            hex::encode_upper(mac.digest()),
            "F270043C06A5C37E65D9D791C5FBFB966E5EE709F8F54019C9A55B76CA40B70100579F269CEC24E347A9D864614CF3ABBF6610742E4DB3BD2ABC000387C49D24"
        );
        Ok(())
    }

    #[test]
    fn kmac_key_length() {
        for l in [0, 32, 48, 65] {
            assert_eq!(
                kmac(&vec![0; l]).unwrap_err(),
                Error::InvalidKeyLength {
                    expected: 64,
                    actual: l
                }
            );
        }
    }
}
