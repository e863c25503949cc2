use crate::compress::VariantConfig;
use crate::kupyna::Kupyna;
use std::{fmt, io};

/// Window is the byte range of a full-width digest kept by a truncated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// start is the first kept byte of the base digest.
    pub start: usize,
    /// len is the number of kept bytes.
    pub len: usize,
}

/// Truncated produces a non-standard output width by slicing a fixed window out of a
/// full-width digest. Input is streamed into the base hasher as it arrives, so memory
/// use does not grow with the message.
#[derive(Clone)]
pub struct Truncated {
    inner: Kupyna,
    window: Window,
}

impl Truncated {
    /// new returns a truncated hasher over the given base state.
    ///
    /// Panics if the window does not fit into the base digest.
    pub fn new(config: &'static VariantConfig, window: Window) -> Self {
        let inner = Kupyna::new(config);
        assert!(
            window.start + window.len <= inner.size(),
            "window {:?} exceeds the {} byte base digest",
            window,
            inner.size()
        );
        Truncated { inner, window }
    }

    /// reset discards everything written so far.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// size returns the truncated digest length in bytes.
    pub fn size(&self) -> usize {
        self.window.len
    }

    /// block_size returns the block length of the base hasher.
    pub fn block_size(&self) -> usize {
        self.inner.block_size()
    }

    /// update absorbs `p`.
    pub fn update(&mut self, p: &[u8]) -> &mut Self {
        self.inner.update(p);
        self
    }

    /// digest returns the windowed slice of the base digest.
    pub fn digest(&self) -> Vec<u8> {
        let full = self.inner.digest();
        full[self.window.start..self.window.start + self.window.len].to_vec()
    }
}

impl fmt::Debug for Truncated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Truncated")
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

impl io::Write for Truncated {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::compress::{KUPYNA_256, KUPYNA_512};

    #[test]
    #[should_panic]
    fn window_out_of_range() {
        Truncated::new(&KUPYNA_256, Window { start: 30, len: 6 });
    }

    #[test]
    fn tail_window() {
        let msg = b"The quick brown fox jumps over the lazy dog";
        let mut t = Truncated::new(&KUPYNA_512, Window { start: 60, len: 4 });
        t.update(msg);

        let mut base = Kupyna::new(&KUPYNA_512);
        base.update(msg);

        assert_eq!(t.size(), 4);
        assert_eq!(t.block_size(), 128);
        assert_eq!(t.digest(), base.digest()[60..].to_vec());
    }

    #[test]
    fn clone_and_reset() {
        let mut t = Truncated::new(&KUPYNA_256, Window { start: 26, len: 6 });
        t.update(b"foo");
        let mut c = t.clone();
        c.update(b"bar");
        t.update(b"bar");
        assert_eq!(t.digest(), c.digest());

        t.reset();
        let empty = Truncated::new(&KUPYNA_256, Window { start: 26, len: 6 });
        assert_eq!(t.digest(), empty.digest());
    }
}
