/// An 8-bit hardware register.
///
/// This is the only place where the crate touches memory that represents physical lines.  Both
/// the output port (`PORTx`) and the direction register (`DDRx`) of a GPIO port are modeled
/// through it.
pub trait Register {
    fn read(&self) -> u8;
    fn write(&mut self, value: u8);

    /// Set the bits in `mask_set`, then clear the bits in `mask_clear`.  All other bits keep
    /// their value.
    fn modify(&mut self, mask_set: u8, mask_clear: u8) {
        let value = self.read();
        self.write((value | mask_set) & !mask_clear);
    }
}

/// Plain memory, e.g. for simulating a port on the host.
impl Register for u8 {
    fn read(&self) -> u8 {
        *self
    }

    fn write(&mut self, value: u8) {
        *self = value;
    }
}

impl<R: Register + ?Sized> Register for &mut R {
    fn read(&self) -> u8 {
        (**self).read()
    }

    fn write(&mut self, value: u8) {
        (**self).write(value)
    }
}

/// A memory-mapped register, accessed with volatile reads and writes.
#[derive(Debug)]
pub struct Mmio {
    ptr: *mut u8,
}

impl Mmio {
    /// Wrap the register at `address`.
    ///
    /// # Safety
    /// `address` must be the data-space address of a valid, byte-wide register for as long as the
    /// returned value lives.  On an ATmega328 for example, `PORTB` lives at `0x25` and `DDRB` at
    /// `0x24`.
    pub const unsafe fn new(address: usize) -> Self {
        Self {
            ptr: address as *mut u8,
        }
    }
}

impl Register for Mmio {
    fn read(&self) -> u8 {
        // SAFETY: validity of the address is guaranteed by the caller of `Mmio::new()`.
        unsafe { core::ptr::read_volatile(self.ptr) }
    }

    fn write(&mut self, value: u8) {
        // SAFETY: validity of the address is guaranteed by the caller of `Mmio::new()`.
        unsafe { core::ptr::write_volatile(self.ptr, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::{Mmio, Register};

    #[test]
    fn modify_preserves_other_bits() {
        let mut reg: u8 = 0b1100_0011;
        reg.modify(0b0001_0000, 0b0000_0001);
        assert_eq!(reg, 0b1101_0010);
    }

    #[test]
    fn clear_wins_over_set() {
        let mut reg: u8 = 0x00;
        reg.modify(0b0000_0110, 0b0000_0100);
        assert_eq!(reg, 0b0000_0010);
    }

    #[test]
    fn mmio_accesses_memory() {
        let mut backing: u8 = 0x0f;
        let mut reg = unsafe { Mmio::new(&mut backing as *mut u8 as usize) };
        reg.modify(0xf0, 0x01);
        assert_eq!(reg.read(), 0xfe);
        assert_eq!(backing, 0xfe);
    }
}
