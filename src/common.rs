/// Line-level access to an 8-bit output port.
///
/// Masks address bits of the port, bit `n` being line `n`.  Implementations must only ever touch
/// the bits named in a mask; all other lines of the port belong to someone else.
pub trait PortDriver {
    type Error;

    /// Set all lines in `mask_high` to HIGH and all lines in `mask_low` to LOW.
    ///
    /// The driver should implement this as a single read-modify-write of the port.
    fn set(&mut self, mask_high: u8, mask_low: u8) -> Result<(), Self::Error>;

    /// Check whether lines in `mask_high` were set HIGH and lines in `mask_low` were set LOW.
    ///
    /// For each line in either of the masks, the returned `u8` should have a 1 if it meets the
    /// expected state and a 0 otherwise.  All other bits MUST always stay 0.
    ///
    /// If a bit is set in both `mask_high` and `mask_low`, the resulting bit must be 1.
    fn is_set(&mut self, mask_high: u8, mask_low: u8) -> Result<u8, Self::Error>;

    fn toggle(&mut self, mask: u8) -> Result<(), Self::Error> {
        // for all lines which are currently low, make them high.
        let mask_high = self.is_set(0, mask)?;
        // for all lines which are currently high, make them low.
        let mask_low = self.is_set(mask, 0)?;
        self.set(mask_high, mask_low)
    }
}

#[cfg(test)]
mod tests {
    use super::PortDriver;

    struct Latch(u8);

    impl PortDriver for Latch {
        type Error = core::convert::Infallible;

        fn set(&mut self, mask_high: u8, mask_low: u8) -> Result<(), Self::Error> {
            self.0 = (self.0 | mask_high) & !mask_low;
            Ok(())
        }

        fn is_set(&mut self, mask_high: u8, mask_low: u8) -> Result<u8, Self::Error> {
            Ok((self.0 & mask_high) | (!self.0 & mask_low))
        }
    }

    #[test]
    fn toggle_flips_only_masked_lines() {
        let mut port = Latch(0b1010_0101);
        port.toggle(0b0000_1111).unwrap();
        assert_eq!(port.0, 0b1010_1010);
        port.toggle(0b0000_1111).unwrap();
        assert_eq!(port.0, 0b1010_0101);
    }
}
