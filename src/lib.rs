//! Bit-banged driver for the `74HC595` serial-in/parallel-out shift register.
//!
//! The register is driven over three lines of an 8-bit GPIO port: the shift clock (`SH_CP`), the
//! storage/latch clock (`ST_CP`) and the serial data input (`DS`).  The lines can be any
//! [`embedded_hal::digital::OutputPin`]s, or bits of a port that is shared with other code, see
//! [`Hc595::from_port()`].
//!
//! ```
//! use core::cell::RefCell;
//! use hc595::{Config, Hc595, Port};
//!
//! let mut ddrb: u8 = 0x00;
//! let portb = RefCell::new(Port::new(0b1000_0000u8));
//!
//! let mut leds = Hc595::from_port(&portb, &mut ddrb, 0, 1, 2).unwrap();
//! leds.transmit(0x0f, Config::default()).unwrap();
//! leds.transmit(0x0f, Config::new().lsb_first().inverted(true)).unwrap();
//!
//! // bit 7 belongs to someone else
//! assert_eq!(portb.borrow().value() & 0x80, 0x80);
//! ```
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "std")]
extern crate std;

mod common;
pub mod dev;
mod mutex;
mod pin;
mod port;
mod register;

pub use common::PortDriver;
pub use dev::hc595::{BitOrder, Config, Error, Hc595};
pub use mutex::PortMutex;
pub use pin::Pin;
pub use port::Port;
pub use register::{Mmio, Register};

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)*) => {
        defmt::trace!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

pub(crate) use trace;
