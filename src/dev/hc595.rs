//! Support for the 74HC595 "8-bit serial-in, serial or parallel-out shift register with output
//! latches"
//!
//! The register samples `DS` on each rising edge of `SH_CP` and copies its shift chain to the
//! output latches on a rising edge of `ST_CP`.
use embedded_hal::digital::{OutputPin, PinState};

/// Order in which the bits of a byte are put on the data line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Bit 7 first, bit 0 last.
    #[default]
    MostSignificantFirst,
    /// Bit 0 first, bit 7 last.
    LeastSignificantFirst,
}

/// Per-transmission settings.
///
/// The default sends the most significant bit first and does not invert.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub bit_order: BitOrder,
    /// Complement the byte before sending, for active-low output stages.
    pub invert: bool,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            bit_order: BitOrder::MostSignificantFirst,
            invert: false,
        }
    }

    pub const fn bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    pub const fn msb_first(self) -> Self {
        self.bit_order(BitOrder::MostSignificantFirst)
    }

    pub const fn lsb_first(self) -> Self {
        self.bit_order(BitOrder::LeastSignificantFirst)
    }

    pub const fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Level of the data line for the `index`-th bit sent out of `byte`.
    fn data_level(&self, byte: u8, index: u8) -> PinState {
        let byte = if self.invert { !byte } else { byte };
        let bit = match self.bit_order {
            BitOrder::MostSignificantFirst => (byte >> (7 - index)) & 1,
            BitOrder::LeastSignificantFirst => (byte >> index) & 1,
        };
        PinState::from(bit != 0)
    }
}

/// Errors when setting up the driver on a shared port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The line number does not exist on an 8-bit port.
    PinOutOfRange(u8),
    /// The line number was given for more than one signal.
    PinConflict(u8),
    /// The port itself failed.
    Port(E),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Port(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::PinOutOfRange(n) => write!(f, "line {} does not exist on an 8-bit port", n),
            Error::PinConflict(n) => write!(f, "line {} is assigned to more than one signal", n),
            Error::Port(e) => write!(f, "port error: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for Error<E> {}

/// `74HC595` shift register driven over three output lines.
pub struct Hc595<SH, ST, DS> {
    shift_clock: SH,
    latch_clock: ST,
    data: DS,
}

impl<SH, ST, DS, E> Hc595<SH, ST, DS>
where
    SH: OutputPin<Error = E>,
    ST: OutputPin<Error = E>,
    DS: OutputPin<Error = E>,
{
    /// Take over three output lines and put both clocks into their idle (LOW) state.
    pub fn new(shift_clock: SH, latch_clock: ST, data: DS) -> Result<Self, E> {
        let mut hc595 = Self {
            shift_clock,
            latch_clock,
            data,
        };
        hc595.shift_clock.set_low()?;
        hc595.latch_clock.set_low()?;
        crate::trace!("hc595: lines idle");
        Ok(hc595)
    }

    /// Give back the three lines.
    pub fn release(self) -> (SH, ST, DS) {
        (self.shift_clock, self.latch_clock, self.data)
    }

    /// Shift `byte` out and latch it onto the outputs.
    pub fn transmit(&mut self, byte: u8, config: Config) -> Result<(), E> {
        self.transmit_with_latch(byte, config)
    }

    /// Shift `byte` out and latch it onto the outputs.  Same as [`Hc595::transmit()`].
    pub fn transmit_with_latch(&mut self, byte: u8, config: Config) -> Result<(), E> {
        self.shift(byte, config)?;
        self.latch()
    }

    /// Hold the latch clock HIGH while shifting `byte` out, then bring it LOW.
    ///
    /// The latch clock still sees exactly one falling edge when the call returns and the outputs
    /// have been updated on the initial rising edge.  To send several bytes before a single
    /// latch, use [`Hc595::shift()`] and [`Hc595::latch()`] or [`Hc595::transmit_chain()`].
    pub fn transmit_without_latch(&mut self, byte: u8, config: Config) -> Result<(), E> {
        self.latch_clock.set_high()?;
        self.shift(byte, config)?;
        self.latch()
    }

    /// Shift all `bytes` out in order, then latch once.
    ///
    /// With daisy-chained registers, the first byte ends up in the register furthest from the
    /// controller.
    pub fn transmit_chain(&mut self, bytes: &[u8], config: Config) -> Result<(), E> {
        for &byte in bytes {
            self.shift(byte, config)?;
        }
        self.latch()
    }

    /// Clock `byte` into the shift chain without touching the latch clock.
    pub fn shift(&mut self, byte: u8, config: Config) -> Result<(), E> {
        crate::trace!("hc595: shifting {=u8:#x}", byte);
        for index in 0..8 {
            self.data.set_state(config.data_level(byte, index))?;
            // rising edge samples DS
            self.shift_clock.set_high()?;
            self.shift_clock.set_low()?;
        }
        Ok(())
    }

    /// Pulse the latch clock, making the shift chain visible on the outputs.
    pub fn latch(&mut self) -> Result<(), E> {
        self.latch_clock.set_high()?;
        self.latch_clock.set_low()
    }
}

impl<'a, MUTEX, PD> Hc595<crate::Pin<'a, MUTEX>, crate::Pin<'a, MUTEX>, crate::Pin<'a, MUTEX>>
where
    PD: crate::PortDriver,
    PD::Error: embedded_hal::digital::Error,
    MUTEX: crate::PortMutex<Port = PD>,
{
    /// Set up the driver on three lines of the shared `port`.
    ///
    /// The three lines are switched to outputs in the direction register `ddr` (all other bits of
    /// it are left alone) and both clocks are driven LOW.  `ddr` is not kept.
    ///
    /// ## Example
    /// ```
    /// use core::cell::RefCell;
    /// use hc595::{Config, Hc595, Port};
    ///
    /// let mut ddrb: u8 = 0x00;
    /// let portb = RefCell::new(Port::new(0x00u8));
    ///
    /// let mut hc595 = Hc595::from_port(&portb, &mut ddrb, 0, 1, 2).unwrap();
    /// hc595.transmit(0b1011_0010, Config::default()).unwrap();
    ///
    /// assert_eq!(ddrb, 0b0000_0111);
    /// ```
    pub fn from_port<D: crate::Register>(
        port: &'a MUTEX,
        ddr: &mut D,
        shift_clock: u8,
        latch_clock: u8,
        data: u8,
    ) -> Result<Self, Error<PD::Error>> {
        let mut mask = 0u8;
        for pin in [shift_clock, latch_clock, data] {
            if pin >= 8 {
                return Err(Error::PinOutOfRange(pin));
            }
            if mask & (1 << pin) != 0 {
                return Err(Error::PinConflict(pin));
            }
            mask |= 1 << pin;
        }

        ddr.modify(mask, 0);
        Self::new(
            crate::Pin::new(shift_clock, port),
            crate::Pin::new(latch_clock, port),
            crate::Pin::new(data, port),
        )
        .map_err(Error::Port)
    }
}
