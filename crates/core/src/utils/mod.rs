pub mod path;

pub use path::{display_path, is_interface_name, normalize};
