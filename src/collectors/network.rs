use crate::models::NetworkInfo;
use log::debug;
use std::time::Instant;
use sysinfo::Networks;

pub fn collect() -> NetworkInfo {
    let start = Instant::now();
    let networks = Networks::new_with_refreshed_list();

    let result = networks
        .list()
        .values()
        .fold(NetworkInfo::default(), |acc, data| NetworkInfo {
            bytes_sent: acc.bytes_sent.saturating_add(data.total_transmitted()),
            bytes_recv: acc.bytes_recv.saturating_add(data.total_received()),
            packets_sent: acc
                .packets_sent
                .saturating_add(data.total_packets_transmitted()),
            packets_recv: acc
                .packets_recv
                .saturating_add(data.total_packets_received()),
        });
    debug!("collect (network) took: {} ms", start.elapsed().as_millis());
    result
}
