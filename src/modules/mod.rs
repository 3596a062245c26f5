pub mod appointments;
pub mod availability;
pub mod clients;
pub mod nps;
pub mod reminders;
pub mod vehicles;
