//! Table of contents entries.

use genpdf::error::Error;
use genpdf::Document;

use crate::styles::StyleSheet;

use super::gap;

/// All chapters and appendices in reading order: label, title, summary line.
pub const ENTRIES: [(&str, &str, &str); 18] = [
    ("1", "Introduction to OPNsense", "Overview, architecture, and key features"),
    ("2", "Initial Setup & Installation", "Requirements, installation, and first boot"),
    ("3", "Dashboard & Navigation", "Interface overview and customization"),
    ("4", "Firewall Configuration", "Rules, aliases, states, and advanced options"),
    ("5", "Network Address Translation", "Port forwarding, outbound NAT, 1:1 NAT"),
    ("6", "Virtual Private Networks", "IPsec, OpenVPN, and WireGuard in depth"),
    ("7", "DNS Services (Unbound)", "Resolver, DNSSEC, blocklists, and DoT/DoH"),
    ("8", "Intrusion Detection (Suricata)", "IDS/IPS configuration and tuning"),
    ("9", "Traffic Shaping & QoS", "Pipes, queues, and bandwidth management"),
    ("10", "High Availability & CARP", "Failover clustering and state sync"),
    ("11", "Additional Services", "DHCP, NTP, proxies, and plugins"),
    ("12", "Troubleshooting & Diagnostics", "Tools, commands, and common issues"),
    ("13", "OPNsense MCP Server (AI/LLM)", "Programmatic access for AI agents"),
    (
        "14",
        "VLAN Configuration",
        "Creating VLANs, interface assignment, inter-VLAN routing",
    ),
    (
        "15",
        "Certificates & PKI",
        "CA management, server/client certs, ACME/Let's Encrypt",
    ),
    ("A", "Quick Reference", "Commands, ports, and file locations"),
    (
        "B",
        "pf Rule Syntax Reference",
        "Native packet filter syntax for /tmp/rules.debug",
    ),
    ("C", "REST API Reference", "Authentication, endpoints, and examples"),
];

/// Pushes the table of contents page.
pub fn push(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    document.push(styles.paragraph("ChapterTitle", "Table of Contents")?);
    gap(document, 20.0);

    for (num, title, desc) in ENTRIES {
        document.push(styles.paragraph("TOCChapter", format!("{num}. {title}"))?);
        document.push(styles.paragraph("TOCEntry", desc)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toc_lists_fifteen_chapters_and_three_appendices() {
        assert_eq!(ENTRIES.len(), 18);
        let chapters = ENTRIES.iter().filter(|(num, _, _)| num.parse::<u32>().is_ok());
        assert_eq!(chapters.count(), 15);
        assert_eq!(ENTRIES[15].0, "A");
        assert_eq!(ENTRIES[17].0, "C");
    }
}
