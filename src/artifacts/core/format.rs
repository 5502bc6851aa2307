const KIB: usize = 1024;
const MIB: usize = 1024 * 1024;

/// Size in mebibytes with two decimals, e.g. `2.00 MiB`.
pub fn format_mebibytes(bytes: usize) -> String {
    format!("{:.2} MiB", bytes as f64 / MIB as f64)
}

/// Human readable byte count: `32 B`, `456.0 KB`, `1.20 MB`.
pub fn format_bytes(bytes: usize) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}
