//! Registration route and the gate that runs in front of it

mod flash;
mod gate;
mod handler;

#[cfg(test)]
pub(crate) use flash::read_flash;
pub use flash::{redirect_with_flash, FLASH_COOKIE, FLASH_HEADER};
pub use gate::{registration_gate, RegistrationForm};
pub use handler::accept_registration;
