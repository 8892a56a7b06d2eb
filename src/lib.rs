pub mod error;
pub mod ini;
pub mod instance;
pub mod paths;

pub use error::{AppError, AppResult};
pub use ini::{ConfigFile, Section};
pub use instance::{
    DEFAULT_INSTANCE_KEY, DEFAULT_INSTANCE_SECTION, INSTANCE_SECTION_PREFIX, InstanceProfile,
    InstanceTable, resolve_name,
};
pub use paths::ConfigPaths;

pub fn load_config() -> AppResult<ConfigFile> {
    let paths = ConfigPaths::discover()?;
    ini::load(paths.config_file())
}

pub fn list_instances() -> AppResult<InstanceTable> {
    let config = load_config()?;
    instance::list_instances(&config)
}

pub fn get_instance(name: Option<&str>) -> AppResult<InstanceProfile> {
    let config = load_config()?;
    instance::get_instance(&config, name)
}
