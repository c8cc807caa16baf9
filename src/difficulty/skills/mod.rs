pub use self::{aim::Aim, tap::Tap};

mod aim;
mod tap;
