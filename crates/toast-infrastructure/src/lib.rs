//! Infrastructure adapters for the Toast login flow: file locations, TOML
//! configuration and state, and the Yggdrasil verification backend.

pub mod config_service;
pub mod paths;
pub mod toml_file;
pub mod toml_state_repository;
pub mod yggdrasil;

pub use config_service::ConfigService;
pub use paths::ToastPaths;
pub use toml_state_repository::TomlStateRepository;
pub use yggdrasil::YggdrasilBackend;
