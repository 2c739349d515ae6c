use embedded_hal::digital as hal_digital;

/// One output line of a shared port.
///
/// A `Pin` only borrows the port: any number of pins (and other code) may address the same port
/// mutex, each of them touching nothing but its own bit.
pub struct Pin<'a, MUTEX> {
    pin_mask: u8,
    port_driver: &'a MUTEX,
}

impl<'a, MUTEX, PD> Pin<'a, MUTEX>
where
    PD: crate::PortDriver,
    MUTEX: crate::PortMutex<Port = PD>,
{
    /// Address line `pin_number` of the port behind `port_driver`.
    ///
    /// # Panics
    /// If `pin_number` does not name a line of an 8-bit port.
    pub fn new(pin_number: u8, port_driver: &'a MUTEX) -> Self {
        assert!(pin_number < 8);
        Self {
            pin_mask: 1 << pin_number,
            port_driver,
        }
    }

    pub fn pin_mask(&self) -> u8 {
        self.pin_mask
    }

    pub fn set_high(&mut self) -> Result<(), PD::Error> {
        self.port_driver.lock(|drv| drv.set(self.pin_mask, 0))
    }

    pub fn set_low(&mut self) -> Result<(), PD::Error> {
        self.port_driver.lock(|drv| drv.set(0, self.pin_mask))
    }

    pub fn is_set_high(&self) -> Result<bool, PD::Error> {
        self.port_driver
            .lock(|drv| drv.is_set(self.pin_mask, 0))
            .map(|mask| mask != 0)
    }

    pub fn is_set_low(&self) -> Result<bool, PD::Error> {
        self.port_driver
            .lock(|drv| drv.is_set(0, self.pin_mask))
            .map(|mask| mask != 0)
    }

    pub fn toggle(&mut self) -> Result<(), PD::Error> {
        self.port_driver.lock(|drv| drv.toggle(self.pin_mask))
    }
}

impl<'a, MUTEX, PD> hal_digital::ErrorType for Pin<'a, MUTEX>
where
    PD: crate::PortDriver,
    PD::Error: hal_digital::Error,
    MUTEX: crate::PortMutex<Port = PD>,
{
    type Error = PD::Error;
}

impl<'a, MUTEX, PD> hal_digital::OutputPin for Pin<'a, MUTEX>
where
    PD: crate::PortDriver,
    PD::Error: hal_digital::Error,
    MUTEX: crate::PortMutex<Port = PD>,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Pin::set_low(self)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Pin::set_high(self)
    }
}

impl<'a, MUTEX, PD> hal_digital::StatefulOutputPin for Pin<'a, MUTEX>
where
    PD: crate::PortDriver,
    PD::Error: hal_digital::Error,
    MUTEX: crate::PortMutex<Port = PD>,
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Pin::is_set_high(self)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Pin::is_set_low(self)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        Pin::toggle(self)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;
    use embedded_hal::digital::{OutputPin, StatefulOutputPin};

    #[test]
    fn pins_share_one_port() {
        let port = RefCell::new(crate::Port::new(0b0100_0000u8));
        let mut p0 = super::Pin::new(0, &port);
        let mut p3 = super::Pin::new(3, &port);

        p0.set_high().unwrap();
        p3.set_high().unwrap();
        assert_eq!(port.borrow().value(), 0b0100_1001);

        p0.set_low().unwrap();
        assert_eq!(port.borrow().value(), 0b0100_1000);

        assert!(p3.is_set_high().unwrap());
        assert!(p0.is_set_low().unwrap());

        p3.toggle().unwrap();
        assert_eq!(port.borrow().value(), 0b0100_0000);
    }

    #[test]
    fn hal_traits_forward() {
        let port = std::sync::Mutex::new(crate::Port::new(0u8));
        let mut p5 = super::Pin::new(5, &port);

        OutputPin::set_high(&mut p5).unwrap();
        assert!(StatefulOutputPin::is_set_high(&mut p5).unwrap());
        StatefulOutputPin::toggle(&mut p5).unwrap();
        assert!(StatefulOutputPin::is_set_low(&mut p5).unwrap());
        assert_eq!(port.lock().unwrap().value(), 0);
    }

    #[test]
    #[should_panic]
    fn pin_number_out_of_range() {
        let port = RefCell::new(crate::Port::new(0u8));
        let _ = super::Pin::new(8, &port);
    }
}
