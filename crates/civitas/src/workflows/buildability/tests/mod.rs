mod common;
mod topics;
