pub mod buildability;
