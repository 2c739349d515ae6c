use crate::Register;

/// An 8-bit GPIO output port.
///
/// `Port` does not cache the line states: every operation reads the output register, so writes
/// made to other bits of the same register by unrelated code are never undone.
pub struct Port<R> {
    out: R,
}

impl<R: Register> Port<R> {
    pub fn new(out: R) -> Self {
        Self { out }
    }

    /// Current raw value of the output register.
    pub fn value(&self) -> u8 {
        self.out.read()
    }

    pub fn register(&self) -> &R {
        &self.out
    }

    pub fn register_mut(&mut self) -> &mut R {
        &mut self.out
    }

    pub fn into_inner(self) -> R {
        self.out
    }
}

impl<R: Register> crate::PortDriver for Port<R> {
    type Error = core::convert::Infallible;

    fn set(&mut self, mask_high: u8, mask_low: u8) -> Result<(), Self::Error> {
        self.out.modify(mask_high, mask_low);
        Ok(())
    }

    fn is_set(&mut self, mask_high: u8, mask_low: u8) -> Result<u8, Self::Error> {
        let value = self.out.read();
        Ok((value & mask_high) | (!value & mask_low))
    }
}

#[cfg(test)]
mod tests {
    use crate::PortDriver;

    #[test]
    fn set_is_read_modify_write() {
        let mut port = super::Port::new(0b1000_0001u8);
        port.set(0b0000_0110, 0b0000_0001).unwrap();
        assert_eq!(port.value(), 0b1000_0110);
        port.set(0, 0b0000_0100).unwrap();
        assert_eq!(port.value(), 0b1000_0010);
    }

    #[test]
    fn is_set_reports_only_masked_lines() {
        let mut port = super::Port::new(0b1111_0000u8);
        assert_eq!(port.is_set(0b0001_0001, 0).unwrap(), 0b0001_0000);
        assert_eq!(port.is_set(0, 0b0001_0001).unwrap(), 0b0000_0001);
        assert_eq!(port.is_set(0b0000_0001, 0b0000_0001).unwrap(), 0b0000_0001);
    }

    #[test]
    fn does_not_cache_register_value() {
        let mut reg: u8 = 0x00;
        {
            let mut port = super::Port::new(&mut reg);
            port.set(0b0000_0001, 0).unwrap();
        }
        // someone else drives bit 7 in the meantime
        reg |= 0b1000_0000;
        let mut port = super::Port::new(&mut reg);
        port.set(0, 0b0000_0001).unwrap();
        assert_eq!(port.value(), 0b1000_0000);
    }

    #[test]
    fn register_access() {
        let mut port = super::Port::new(0x0fu8);
        assert_eq!(*port.register(), 0x0f);
        *port.register_mut() = 0xf0;
        port.set(0x01, 0x10).unwrap();
        assert_eq!(port.into_inner(), 0xe1);
    }
}
