//! Ready-made forms with fixed field ids, for tests and demos.

pub mod bootcamp_registration;
pub mod contact;
pub mod event_rsvp;

pub use bootcamp_registration::bootcamp_registration;
pub use contact::contact_form;
pub use event_rsvp::{event_rsvp, rsvp_answers};
