mod advisor;
mod appointment;
mod client;
mod nps;
mod operating_hours;
mod reminder;
mod service;
mod vehicle;
mod workshop;

#[allow(unused)]
pub use advisor::*;
#[allow(unused)]
pub use appointment::*;
#[allow(unused)]
pub use client::*;
#[allow(unused)]
pub use nps::*;
#[allow(unused)]
pub use operating_hours::*;
#[allow(unused)]
pub use reminder::*;
#[allow(unused)]
pub use service::*;
#[allow(unused)]
pub use vehicle::*;
#[allow(unused)]
pub use workshop::*;
