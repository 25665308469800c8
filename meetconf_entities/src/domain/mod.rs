pub mod participant;

pub use participant::Participant;
