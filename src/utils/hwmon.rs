use std::fs::{read_dir, File};
use std::io::Read;
use std::path::{Path, PathBuf};

pub const HWMON_ROOT: &str = "/sys/class/hwmon";

const CORETEMP: &str = "coretemp";

/// Read per-core temperatures from every `coretemp` hwmon device under
/// `root`, in device order and then core order.
///
/// Only `tempN_input` files whose `tempN_label` reads `Core K` are used, the
/// package sensor is skipped. Returns `None` when no `coretemp` device exists.
///
/// Kernel hwmon API: https://www.kernel.org/doc/html/latest/hwmon/hwmon-kernel-api.html
/// Coretemp driver: https://www.kernel.org/doc/html/latest/hwmon/coretemp.html
pub fn coretemp_readings(root: &Path) -> Option<Vec<f32>> {
    let mut devices: Vec<PathBuf> = read_dir(root)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            get_file_line(&path.join("name"), 16).is_some_and(|name| name == CORETEMP)
        })
        .collect();
    if devices.is_empty() {
        return None;
    }
    devices.sort();

    let mut readings = Vec::new();
    for device in devices {
        readings.extend(device_cores(&device).into_iter().map(|(_, temp)| temp));
    }
    Some(readings)
}

fn device_cores(folder: &Path) -> Vec<(u32, f32)> {
    let Ok(dir) = read_dir(folder) else {
        return Vec::new();
    };

    let mut cores = Vec::new();
    for entry in dir.flatten() {
        if !entry.file_type().is_ok_and(|file_type| !file_type.is_dir()) {
            continue;
        }

        let filename = entry.file_name();
        let Some(filename) = filename.to_str() else {
            continue;
        };
        let Some(id) = filename
            .strip_prefix("temp")
            .and_then(|f| f.strip_suffix("_input"))
        else {
            continue;
        };

        let label = get_file_line(&folder.join(format!("temp{id}_label")), 16).unwrap_or_default();
        let Some(core) = parse_core_label(&label) else {
            continue;
        };
        if let Some(temperature) = get_temperature_from_file(&entry.path()) {
            cores.push((core, temperature));
        }
    }
    cores.sort_by_key(|(core, _)| *core);
    cores
}

/// `"Core 3"` → `Some(3)`, anything else → `None`.
pub fn parse_core_label(label: &str) -> Option<u32> {
    label.trim().strip_prefix("Core ")?.trim().parse().ok()
}

// Read arbitrary string data.
fn get_file_line(file: &Path, capacity: usize) -> Option<String> {
    let mut reader = String::with_capacity(capacity);
    let mut f = File::open(file).ok()?;
    f.read_to_string(&mut reader).ok()?;
    reader.truncate(reader.trim_end().len());
    Some(reader)
}

/// Designed at first for reading an `i32` aka `c_long` from a
/// `/sys/class/hwmon` sysfs file.
fn read_number_from_file<N>(file: &Path) -> Option<N>
where
    N: std::str::FromStr,
{
    let mut reader = [0u8; 32];
    let mut f = File::open(file).ok()?;
    let n = f.read(&mut reader).ok()?;
    // parse and trim would complain about `\0`.
    let number = std::str::from_utf8(&reader[..n]).ok()?;
    number.trim_matches(|c: char| c.is_whitespace() || c == '\0').parse().ok()
}

// Number in the file is in milli-celsius.
#[inline]
fn get_temperature_from_file(file: &Path) -> Option<f32> {
    read_number_from_file::<i32>(file).map(|n| (n as f32) / 1000f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_sensor(device: &Path, id: u32, label: &str, millidegrees: i32) {
        fs::write(device.join(format!("temp{id}_label")), format!("{label}\n")).unwrap();
        fs::write(device.join(format!("temp{id}_input")), format!("{millidegrees}\n")).unwrap();
    }

    fn device(root: &Path, dir: &str, name: &str) -> PathBuf {
        let path = root.join(dir);
        fs::create_dir(&path).unwrap();
        fs::write(path.join("name"), format!("{name}\n")).unwrap();
        path
    }

    #[test]
    fn test_parse_core_label() {
        assert_eq!(parse_core_label("Core 0"), Some(0));
        assert_eq!(parse_core_label("Core 12\n"), Some(12));
        assert_eq!(parse_core_label("Package id 0"), None);
        assert_eq!(parse_core_label(""), None);
    }

    #[test]
    fn test_reads_cores_in_order_and_skips_package() {
        let root = TempDir::new().unwrap();
        let coretemp = device(root.path(), "hwmon2", "coretemp");
        write_sensor(&coretemp, 1, "Package id 0", 60000);
        write_sensor(&coretemp, 3, "Core 1", 55500);
        write_sensor(&coretemp, 2, "Core 0", 48000);

        let readings = coretemp_readings(root.path()).unwrap();
        assert_eq!(readings, vec![48.0, 55.5]);
    }

    #[test]
    fn test_ignores_other_devices() {
        let root = TempDir::new().unwrap();
        let nvme = device(root.path(), "hwmon0", "nvme");
        write_sensor(&nvme, 1, "Composite", 40000);

        assert_eq!(coretemp_readings(root.path()), None);
    }

    #[test]
    fn test_missing_root_is_none() {
        let root = TempDir::new().unwrap();
        assert_eq!(coretemp_readings(&root.path().join("absent")), None);
    }
}
