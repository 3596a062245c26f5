mod appointment_repository;
mod client_repository;
mod nps_repository;
mod reminder_repository;
mod scheduling_repository;
mod vehicle_repository;
mod workshop_repository;

pub use appointment_repository::{AppointmentInsert, AppointmentRepository};
pub use client_repository::ClientRepository;
pub use nps_repository::NpsRepository;
pub use reminder_repository::ReminderRepository;
pub use scheduling_repository::SchedulingRepository;
pub use vehicle_repository::VehicleRepository;
pub use workshop_repository::WorkshopRepository;
