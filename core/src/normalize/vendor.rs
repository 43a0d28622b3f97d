/// Bundled MAC prefix registrations. Covers common physical and virtual adapters
/// seen in tracker blocks
const VENDORS: &[(&str, &str)] = &[
    ("00-03-FF", "Microsoft Corporation"),
    ("00-05-69", "VMware, Inc."),
    ("00-0C-29", "VMware, Inc."),
    ("00-0D-3A", "Microsoft Corporation"),
    ("00-13-72", "Dell Inc."),
    ("00-14-22", "Dell Inc."),
    ("00-15-5D", "Microsoft Corporation"),
    ("00-16-3E", "Xensource, Inc."),
    ("00-1A-A0", "Dell Inc."),
    ("00-1C-14", "VMware, Inc."),
    ("00-1C-42", "Parallels, Inc."),
    ("00-21-9B", "Dell Inc."),
    ("00-24-E8", "Dell Inc."),
    ("00-25-64", "Dell Inc."),
    ("00-50-56", "VMware, Inc."),
    ("00-E0-4C", "Realtek Semiconductor Corp."),
    ("08-00-27", "PCS Systemtechnik GmbH"),
    ("18-03-73", "Dell Inc."),
    ("28-D2-44", "LCFC(HeFei) Electronics Technology Co., Ltd"),
    ("3C-07-54", "Apple, Inc."),
    ("52-54-00", "QEMU"),
    ("54-BF-64", "Dell Inc."),
    ("64-00-6A", "Dell Inc."),
    ("8C-EC-4B", "Dell Inc."),
    ("98-90-96", "Dell Inc."),
    ("A4-BB-6D", "Dell Inc."),
    ("B0-4F-13", "Hon Hai Precision Ind. Co., Ltd."),
    ("B8-85-84", "Dell Inc."),
    ("D8-9E-F3", "Dell Inc."),
    ("F0-1F-AF", "Dell Inc."),
    ("F4-8E-38", "Dell Inc."),
    ("F8-BC-12", "Dell Inc."),
];

/// Resolve a MAC address to its adapter vendor. The first three octets are the
/// registered prefix. A miss never fails, it yields the unknown vendor marker
pub(crate) fn resolve_vendor(mac: &str) -> &'static str {
    let octets: Vec<&str> = mac.split([':', '-']).take(3).collect();
    let octet_count = 3;
    if octets.len() != octet_count {
        return "(Unknown vendor)";
    }

    let prefix = octets.join("-").to_uppercase();
    for (registered, vendor) in VENDORS {
        if *registered == prefix {
            return vendor;
        }
    }
    "(Unknown vendor)"
}

#[cfg(test)]
mod tests {
    use super::resolve_vendor;

    #[test]
    fn test_resolve_vendor() {
        assert_eq!(resolve_vendor("00:14:22:0d:94:04"), "Dell Inc.");
        assert_eq!(resolve_vendor("08:00:27:6e:b4:5e"), "PCS Systemtechnik GmbH");
    }

    #[test]
    fn test_resolve_vendor_case_and_separator() {
        // The same prefix resolves regardless of case or octet separator
        assert_eq!(resolve_vendor("00:14:22:AA:BB:CC"), "Dell Inc.");
        assert_eq!(resolve_vendor("00-14-22-0d-94-04"), "Dell Inc.");
        assert_eq!(
            resolve_vendor(resolve_vendor("no-mac-here")),
            "(Unknown vendor)"
        );
    }

    #[test]
    fn test_resolve_vendor_unknown() {
        assert_eq!(resolve_vendor("ff:ff:ff:ff:ff:ff"), "(Unknown vendor)");
        assert_eq!(resolve_vendor(""), "(Unknown vendor)");
    }
}
