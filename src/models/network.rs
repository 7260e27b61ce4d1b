/// Counters are cumulative since boot.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkInfo {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

impl Default for NetworkInfo {
    fn default() -> Self {
        Self {
            bytes_sent: 0,
            bytes_recv: 0,
            packets_sent: 0,
            packets_recv: 0,
        }
    }
}
