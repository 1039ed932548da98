mod broad_phase;
mod contact;

pub use broad_phase::pairs_sap;
pub use contact::{Contact, contact, circle_circle, circle_box, box_box};
