pub mod appeal_handler;

pub use appeal_handler::{__path_create_appeal, create_appeal};
