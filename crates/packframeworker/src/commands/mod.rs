mod build;
mod release;
pub mod settings;

pub use build::build_pack;
pub use release::promote_release;
pub use settings::change_settings;
