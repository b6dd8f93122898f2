use crate::{Error, Fixed, MAX_WINDOW};

/// Descriptor for a string stored in a record's trailing region.
///
/// The descriptor occupies 8 bytes of the fixed body: a `u32` offset from the
/// start of the record buffer followed by a `u32` byte length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct String {
    offset: u32,
    length: u32,
}

impl String {
    /// Appends `value` to `b` and points this descriptor at the new bytes.
    ///
    /// Fails with [`Error::WindowOverflow`] if the bytes would end past
    /// [`MAX_WINDOW`]; `b` is left untouched in that case.
    pub fn encode(&mut self, value: &str, b: &mut Vec<u8>) -> Result<(), Error> {
        let offset = b.len();
        let end = offset + value.len();
        if end > MAX_WINDOW {
            return Err(Error::WindowOverflow {
                end,
                max: MAX_WINDOW,
            });
        }

        // Both fit in u32: end <= MAX_WINDOW.
        self.offset = offset as u32;
        self.length = value.len() as u32;
        b.extend_from_slice(value.as_bytes());
        Ok(())
    }

    pub fn bytes<'a>(&self, window: &'a [u8]) -> Result<&'a [u8], Error> {
        let start = self.offset as usize;
        let length = self.length as usize;
        start
            .checked_add(length)
            .and_then(|end| window.get(start..end))
            .ok_or(Error::OutOfWindow {
                offset: start,
                length,
                window: window.len(),
            })
    }

    pub fn string<'a>(&self, window: &'a [u8]) -> Result<&'a str, Error> {
        Ok(std::str::from_utf8(self.bytes(window)?)?)
    }

    pub fn offset(&self) -> usize {
        self.offset as usize
    }

    pub fn len(&self) -> usize {
        self.length as usize
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl Fixed for String {
    const SIZE: usize = 8;

    fn put(&self, b: &mut [u8]) {
        self.offset.put(&mut b[..4]);
        self.length.put(&mut b[4..]);
    }

    fn get(b: &[u8]) -> Self {
        String {
            offset: u32::get(&b[..4]),
            length: u32::get(&b[4..]),
        }
    }
}
