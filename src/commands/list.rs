//! List commands implementation

use cdqspi_core::{Family, Tier, PARTS};

use crate::backend;

/// List the backends compiled in
pub fn list_backends() {
    println!("Available backends:");
    println!();
    for b in backend::available_backends() {
        println!("  {:10} - {}", b.name, b.description);
    }
}

/// List the part table
pub fn list_parts(vendor_filter: Option<&str>) {
    println!("Supported flash parts:");
    println!();
    println!(
        "{:<10} {:<22} {:>8} {:>10} {:>9}  {}",
        "Vendor", "Name", "Size", "JEDEC ID", "Erase", "Family"
    );
    println!("{}", "-".repeat(78));

    for part in PARTS {
        if let Some(vendor) = vendor_filter {
            if !part.vendor.to_lowercase().contains(&vendor.to_lowercase()) {
                continue;
            }
        }

        let erase = part
            .min_erase_tier()
            .map(|t| format_size(part.size(t)))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:<22} {:>8} {:>10} {:>9}  {:?}",
            part.vendor,
            part.name,
            format_size(part.size(Tier::Device)),
            format!("{:08X}", part.id),
            erase,
            Family::from_id(part.id)
        );
    }
}

pub(crate) fn format_size(bytes: u32) -> String {
    if bytes >= 1024 * 1024 {
        format!("{} MiB", bytes / (1024 * 1024))
    } else if bytes >= 1024 {
        format!("{} KiB", bytes / 1024)
    } else {
        format!("{} B", bytes)
    }
}
