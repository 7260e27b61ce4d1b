pub mod format;
pub(crate) mod hwmon;
