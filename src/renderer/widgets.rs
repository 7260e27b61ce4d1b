use crate::models::{CoreInfo, DiskInfo, GpuInfo, MemoryInfo, NetworkInfo, Snapshot};
use crate::renderer::table::{Cell, Table, Tone};
use crate::utils::format::{classify, scale_bytes, TEMPERATURE_THRESHOLD, USAGE_THRESHOLD};

fn usage_cell(percent: f32) -> Cell {
    Cell::new(
        format!("{:.1}%", percent),
        Tone::Status(classify(percent, USAGE_THRESHOLD)),
    )
}

fn bytes_cell(bytes: u64) -> Cell {
    Cell::new(scale_bytes(bytes), Tone::Bytes)
}

pub fn cpu_row(index: usize, core: &CoreInfo, frequency: u64) -> Vec<Cell> {
    let temperature = match core.temperature {
        Some(temp) => Cell::new(
            format!("{:.1}°C", temp),
            Tone::Status(classify(temp, TEMPERATURE_THRESHOLD)),
        ),
        None => Cell::new("N/A", Tone::Plain),
    };

    vec![
        Cell::new(format!("Core {}", index), Tone::Label),
        usage_cell(core.usage),
        Cell::new(format!("{:.2}MHz", frequency as f64), Tone::Info),
        temperature,
    ]
}

pub fn memory_row(memory: &MemoryInfo) -> Vec<Cell> {
    vec![
        usage_cell(memory.ram.percent()),
        bytes_cell(memory.ram.used),
        bytes_cell(memory.ram.total),
        usage_cell(memory.swap.percent()),
        bytes_cell(memory.swap.used),
        bytes_cell(memory.swap.total),
    ]
}

pub fn disk_row(disk: &DiskInfo) -> Vec<Cell> {
    vec![
        Cell::new(disk.device.as_str(), Tone::Label),
        Cell::new(disk.mount_point.as_str(), Tone::Info),
        usage_cell(disk.percent()),
        bytes_cell(disk.used),
        bytes_cell(disk.total),
    ]
}

pub fn network_row(network: &NetworkInfo) -> Vec<Cell> {
    vec![
        bytes_cell(network.bytes_sent),
        bytes_cell(network.bytes_recv),
        Cell::new(network.packets_sent.to_string(), Tone::Label),
        Cell::new(network.packets_recv.to_string(), Tone::Label),
    ]
}

pub fn gpu_row(gpu: &GpuInfo) -> Vec<Cell> {
    let load = match gpu.load {
        Some(load) => usage_cell(load),
        None => Cell::new("N/A", Tone::Plain),
    };
    let temperature = match gpu.temperature {
        Some(temp) => Cell::new(
            format!("{:.0}°C", temp),
            Tone::Status(classify(temp, TEMPERATURE_THRESHOLD)),
        ),
        None => Cell::new("N/A", Tone::Plain),
    };

    vec![
        Cell::new(gpu.name.as_str(), Tone::Label),
        load,
        temperature,
        Cell::new(format!("{}MB", gpu.memory_used), Tone::Bytes),
        Cell::new(format!("{}MB", gpu.memory_total), Tone::Bytes),
        Cell::new(gpu.driver.as_str(), Tone::Info),
    ]
}

/// Tables for one cycle in display order. The GPU table is left out when no
/// GPU was reported.
pub fn build_tables(snapshot: &Snapshot) -> Vec<Table> {
    let mut tables = Vec::with_capacity(5);

    if !snapshot.gpus.is_empty() {
        tables.push(Table {
            title: "GPU Information",
            headers: vec!["Name", "Usage", "Temp", "Memory Used", "Memory Total", "Driver"],
            rows: snapshot.gpus.iter().map(gpu_row).collect(),
        });
    }

    tables.push(Table {
        title: "CPU Information",
        headers: vec!["Core", "Usage", "Frequency", "Temperature"],
        rows: snapshot
            .cpu
            .cores
            .iter()
            .enumerate()
            .map(|(i, core)| cpu_row(i, core, snapshot.cpu.frequency))
            .collect(),
    });

    tables.push(Table {
        title: "Memory Information",
        headers: vec![
            "RAM Usage",
            "RAM Used",
            "RAM Total",
            "Swap Usage",
            "Swap Used",
            "Swap Total",
        ],
        rows: vec![memory_row(&snapshot.memory)],
    });

    tables.push(Table {
        title: "Disk Information",
        headers: vec!["Device", "Mountpoint", "Usage", "Used", "Total"],
        rows: snapshot.disks.iter().map(disk_row).collect(),
    });

    tables.push(Table {
        title: "Network Information",
        headers: vec!["Bytes Sent", "Bytes Received", "Packets Sent", "Packets Received"],
        rows: vec![network_row(&snapshot.network)],
    });

    tables
}
