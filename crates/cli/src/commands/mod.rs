pub mod generate;
pub mod init;
pub mod show;

pub use generate::generate_command;
pub use init::init_command;
pub use show::show_command;
