//! Chapters 1 through 15.

use genpdf::error::Error;
use genpdf::Document;

use crate::callout::CalloutKind;
use crate::diagrams::{NetworkDiagram, RuleOrderDiagram, VpnTunnelDiagram};
use crate::styles::StyleSheet;

use super::{bullets, callout, chapter, gap, paragraph, table};

pub(super) fn push_all(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    introduction(document, styles)?;
    initial_setup(document, styles)?;
    dashboard(document, styles)?;
    firewall(document, styles)?;
    nat(document, styles)?;
    vpn(document, styles)?;
    dns(document, styles)?;
    intrusion_detection(document, styles)?;
    traffic_shaping(document, styles)?;
    high_availability(document, styles)?;
    additional_services(document, styles)?;
    troubleshooting(document, styles)?;
    mcp_server(document, styles)?;
    vlans(document, styles)?;
    certificates(document, styles)?;
    Ok(())
}

fn introduction(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "1", "Introduction to OPNsense");

    callout(
        document,
        "THIS GUIDE IS OPTIMIZED FOR LLM/AI AGENTS. It provides structured, concise \
         reference material for querying OPNsense configuration via MCP tools or API. \
         Human-readable but machine-parseable.",
        CalloutKind::Note,
    );
    gap(document, 15.0);
    paragraph(
        document,
        styles,
        "BodyText",
        "OPNsense is an open-source firewall and routing platform based on FreeBSD with \
         HardenedBSD security enhancements. Core capabilities: stateful packet filtering (pf), \
         NAT, VPN (IPsec/OpenVPN/WireGuard), IDS/IPS (Suricata), traffic shaping, and high \
         availability (CARP).",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Quick Reference: OPNsense Fundamentals")?;
    table(
        document,
        styles,
        &[
            &["Concept", "Key Point"],
            &["Firewall Engine", "pf (packet filter) from OpenBSD - rules in /tmp/rules.debug"],
            &["Rule Direction", "Rules apply where traffic ENTERS the firewall (inbound)"],
            &["Rule Order", "First match wins (with 'quick' flag, default enabled)"],
            &["State Table", "Connections tracked automatically, return traffic auto-allowed"],
            &["NAT Processing", "NAT rules processed BEFORE firewall rules"],
            &["Default Policy", "Implicit deny - traffic blocked unless explicitly permitted"],
            &["Config File", "XML at /conf/config.xml - never edit directly, use API/GUI"],
            &["API", "REST API on port 443, key+secret auth, /api/ endpoints"],
        ],
        &[110, 330],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Key Features")?;
    table(
        document,
        styles,
        &[
            &["Feature", "Description", "Category"],
            &["Stateful Firewall", "Full packet inspection with state tracking", "Security"],
            &["Multi-WAN", "Load balancing and failover support", "Networking"],
            &["VPN Support", "IPsec, OpenVPN, WireGuard", "Connectivity"],
            &["Traffic Shaping", "QoS with pipes and queues", "Performance"],
            &["Intrusion Detection", "Suricata IDS/IPS integration", "Security"],
            &["High Availability", "CARP with configuration sync", "Reliability"],
            &["Web Proxy", "Squid with SSL inspection", "Services"],
            &["Captive Portal", "Guest network authentication", "Access Control"],
        ],
        &[120, 220, 100],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Network Architecture Overview")?;
    gap(document, 10.0);
    document.push(NetworkDiagram::new());
    gap(document, 15.0);
    paragraph(
        document,
        styles,
        "BodyText",
        "OPNsense sits between your internal networks and the internet, providing security, \
         routing, and network services. It can manage multiple network segments (VLANs) and \
         apply different security policies to each zone.",
    )?;
    Ok(())
}

fn initial_setup(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "2", "Initial Setup & Installation");

    paragraph(document, styles, "SectionTitle", "System Requirements")?;
    table(
        document,
        styles,
        &[
            &["Component", "Minimum", "Recommended"],
            &["CPU", "1 GHz dual-core", "Multi-core 64-bit (AES-NI)"],
            &["RAM", "2 GB", "8 GB or more"],
            &["Storage", "8 GB SSD", "120 GB SSD"],
            &["Network", "2 NICs", "Intel NICs recommended"],
        ],
        &[120, 150, 170],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "AES-NI support is highly recommended for VPN performance. Check CPU compatibility \
         before deployment.",
        CalloutKind::Tip,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Installation Steps")?;
    bullets(
        document,
        styles,
        &[
            "1. Download the latest OPNsense ISO from opnsense.org",
            "2. Create bootable USB using Rufus, Etcher, or dd command",
            "3. Boot from USB and select 'Install (UFS)' for most setups",
            "4. Configure network interfaces during installation",
            "5. Set root password and complete installation",
            "6. Access web interface at https://192.168.1.1 (default)",
            "7. Complete initial setup wizard",
        ],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "Post-Installation Checklist")?;
    bullets(
        document,
        styles,
        &[
            "Update to latest version (System > Firmware > Status)",
            "Configure WAN and LAN interfaces",
            "Set hostname and domain",
            "Configure DNS servers",
            "Enable SSH access (if needed)",
            "Set timezone and NTP servers",
            "Create admin user (avoid using root)",
            "Configure backup schedule",
        ],
    )?;
    Ok(())
}

fn dashboard(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "3", "Dashboard & Navigation");

    paragraph(
        document,
        styles,
        "BodyText",
        "The OPNsense web interface provides a comprehensive dashboard and intuitive \
         navigation system. The main menu is organized into logical categories for easy \
         access to all features.",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Main Menu Structure")?;
    table(
        document,
        styles,
        &[
            &["Menu", "Primary Functions"],
            &["Lobby", "Dashboard, widgets, password management"],
            &["System", "Settings, firmware, users, HA, certificates"],
            &["Interfaces", "Network interface configuration, VLANs"],
            &["Firewall", "Rules, NAT, aliases, traffic shaper"],
            &["VPN", "IPsec, OpenVPN, WireGuard"],
            &["Services", "DHCP, DNS, proxy, IDS/IPS"],
            &["Reporting", "Traffic graphs, logs, NetFlow"],
            &["Diagnostics", "System tools, packet capture, ping"],
        ],
        &[100, 340],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SubSection", "Dashboard Widgets")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "The dashboard is customizable with drag-and-drop widgets. Common widgets include:",
    )?;
    bullets(
        document,
        styles,
        &[
            "System Information: CPU, memory, uptime, version",
            "Interfaces: Interface status and traffic",
            "Gateways: WAN gateway status and latency",
            "Traffic Graphs: Real-time bandwidth visualization",
            "Services: Status of enabled services",
            "Firewall Logs: Recent blocked/passed traffic",
        ],
    )?;
    Ok(())
}

fn firewall(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "4", "Firewall Configuration");

    paragraph(
        document,
        styles,
        "BodyText",
        "OPNsense contains a stateful packet filter based on pf (packet filter) from OpenBSD. \
         The firewall inspects packets, maintains connection states, and applies rules to \
         permit or deny traffic. Understanding rule processing, state management, and \
         interface binding is essential for effective security.",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Rule Processing Order")?;
    gap(document, 10.0);
    document.push(RuleOrderDiagram::new());
    gap(document, 15.0);
    paragraph(
        document,
        styles,
        "BodyText",
        "Rules are evaluated in a specific order based on their category and position. \
         Understanding this order is critical for troubleshooting:",
    )?;
    table(
        document,
        styles,
        &[
            &["Priority", "Rule Type", "Description"],
            &["1", "Floating (quick)", "Processed first, can match any interface"],
            &["2", "Group Rules", "Applied to interface groups (e.g., all LANs)"],
            &["3", "Interface Rules", "Per-interface rules, most common type"],
            &["4", "Default Deny", "Implicit block if no rule matches"],
        ],
        &[60, 120, 260],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "By default, all rules have 'quick' enabled, meaning the first matching rule wins. \
         Without 'quick', the last matching rule would apply (rarely desired).",
        CalloutKind::Warning,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Rule Actions Explained")?;
    table(
        document,
        styles,
        &[
            &["Action", "Network Response", "Best Use Case"],
            &["Pass", "Traffic allowed", "Explicitly permit desired traffic"],
            &["Block", "Silently dropped", "WAN/untrusted - no response to attackers"],
            &["Reject", "TCP RST or ICMP unreachable", "LAN/internal - faster client feedback"],
        ],
        &[70, 150, 220],
    )?;
    gap(document, 15.0);
    paragraph(
        document,
        styles,
        "BodyText",
        "Block vs Reject: Use Block on WAN interfaces to avoid revealing firewall presence. \
         Use Reject on internal interfaces so clients receive immediate feedback rather than \
         waiting for connection timeout.",
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Stateful Packet Inspection")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "OPNsense maintains a state table tracking all active connections. This provides:",
    )?;
    bullets(
        document,
        styles,
        &[
            "Performance: Return traffic matched by state, not rule evaluation",
            "Security: TCP sequence number validation prevents injection",
            "Simplicity: Only need rules for initiating direction",
            "Tracking: Connection limits, timeouts, and diagnostics",
        ],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "State Table Options")?;
    table(
        document,
        styles,
        &[
            &["Option", "Effect", "Use Case"],
            &["Keep State", "Normal stateful (default)", "Most traffic"],
            &["Sloppy State", "Less strict validation", "Asymmetric routing"],
            &["Synproxy State", "Proxy TCP handshake", "Public servers (DDoS protection)"],
            &["No State", "Stateless rule", "High-volume UDP, broadcasts"],
        ],
        &[100, 150, 190],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "The state table size defaults to 1,000,000 entries. Monitor with 'pfctl -si' and \
         increase under Firewall > Settings > Advanced if needed for high-traffic environments.",
        CalloutKind::Tip,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Aliases")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "Aliases are named groups of hosts, networks, ports, or URLs that simplify rule \
         management. When an alias is updated, all rules using it automatically reflect \
         changes.",
    )?;
    gap(document, 10.0);
    table(
        document,
        styles,
        &[
            &["Type", "Content", "Example Values"],
            &["Hosts", "IPs or FQDNs", "10.0.0.5, server.example.com"],
            &["Networks", "CIDR subnets", "192.168.1.0/24, 10.0.0.0/8"],
            &["Ports", "Port numbers/ranges", "80, 443, 8080-8090"],
            &["URL Table (IPs)", "Remote IP list URL", "Spamhaus DROP, Firehol"],
            &["GeoIP", "Country codes", "US, CN, RU (MaxMind DB)"],
            &["MAC Address", "Hardware addresses", "00:11:22:33:44:55"],
        ],
        &[110, 120, 210],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "Nest aliases within other aliases for complex rule sets. For example, create \
         'INTERNAL_NETS' containing 'LAN_NET', 'DMZ_NET', and 'GUEST_NET' aliases.",
        CalloutKind::Tip,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Interface Rules Best Practices")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "Rules are applied on the interface where traffic enters the firewall. This is the \
         most common source of confusion for new users.",
    )?;
    gap(document, 10.0);
    callout(
        document,
        "Traffic FROM LAN TO WAN is filtered by LAN interface rules (inbound to firewall). \
         Traffic FROM WAN TO LAN is filtered by WAN interface rules.",
        CalloutKind::Warning,
    );
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "LAN Rules Example")?;
    table(
        document,
        styles,
        &[
            &["#", "Action", "Source", "Destination", "Port", "Description"],
            &["1", "Pass", "LAN net", "LAN address", "443,22", "Access firewall GUI/SSH"],
            &["2", "Block", "LAN net", "RFC1918", "Any", "Block other internal nets"],
            &["3", "Pass", "LAN net", "Any", "Any", "Allow internet access"],
        ],
        &[25, 50, 70, 80, 60, 155],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "WAN Rules Example")?;
    table(
        document,
        styles,
        &[
            &["#", "Action", "Source", "Destination", "Port", "Description"],
            &["1", "Pass", "Any", "WAN address", "443", "HTTPS to web server"],
            &["2", "Pass", "Any", "WAN address", "51820/UDP", "WireGuard VPN"],
            &["-", "Block", "Any", "Any", "Any", "(implicit default deny)"],
        ],
        &[25, 50, 70, 80, 70, 145],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Viewing the Active Ruleset")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "The actual pf ruleset loaded in memory may differ from the GUI representation. \
         Always verify with CLI tools when troubleshooting:",
    )?;
    bullets(
        document,
        styles,
        &[
            "pfctl -sr - Show all loaded rules",
            "pfctl -ss - Show state table (active connections)",
            "pfctl -si - Show filter statistics and counters",
            "pfctl -vvsr - Verbose rules with hit counters",
            "cat /tmp/rules.debug - View rules file before loading",
        ],
    )?;
    Ok(())
}

fn nat(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "5", "Network Address Translation");

    paragraph(
        document,
        styles,
        "BodyText",
        "NAT allows internal networks with private IPs to communicate with external networks. \
         OPNsense supports multiple NAT types for different scenarios.",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "NAT Types")?;
    table(
        document,
        styles,
        &[
            &["Type", "Direction", "Common Use"],
            &["Port Forward", "Inbound", "Expose internal services"],
            &["Outbound NAT", "Outbound", "Internet access for LAN"],
            &["One-to-One", "Bidirectional", "Static IP mapping"],
            &["NPTv6", "IPv6", "IPv6 prefix translation"],
        ],
        &[120, 100, 220],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SubSection", "Port Forwarding")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "Port forwarding (Destination NAT) redirects incoming traffic to internal hosts. \
         Essential fields include:",
    )?;
    bullets(
        document,
        styles,
        &[
            "Interface: Usually WAN",
            "Protocol: TCP, UDP, or both",
            "Destination Port: External port to listen on",
            "Redirect Target IP: Internal host IP",
            "Redirect Target Port: Internal port",
        ],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "NAT rules are processed BEFORE firewall rules. A port forward with 'Pass' \
         association will bypass other firewall rules for that traffic.",
        CalloutKind::Danger,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SubSection", "Outbound NAT Modes")?;
    table(
        document,
        styles,
        &[
            &["Mode", "Description"],
            &["Automatic", "Default, auto-generates rules for all interfaces"],
            &["Hybrid", "Auto rules plus custom manual rules"],
            &["Manual", "Full manual control, no auto rules"],
            &["Disabled", "No outbound NAT (transparent bridge)"],
        ],
        &[120, 320],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Practical NAT Examples")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "Expose an internal web server (192.168.1.100) to the internet on standard ports.",
    )?;
    gap(document, 10.0);
    table(
        document,
        styles,
        &[
            &["Setting", "HTTP Rule", "HTTPS Rule"],
            &["Interface", "WAN", "WAN"],
            &["Protocol", "TCP", "TCP"],
            &["Destination", "WAN address", "WAN address"],
            &["Destination Port", "80", "443"],
            &["Redirect Target IP", "192.168.1.100", "192.168.1.100"],
            &["Redirect Target Port", "80", "443"],
            &["Filter Rule Assoc.", "Pass", "Pass"],
        ],
        &[140, 150, 150],
    )?;
    Ok(())
}

fn vpn(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "6", "Virtual Private Networks");

    paragraph(
        document,
        styles,
        "BodyText",
        "OPNsense supports multiple VPN technologies for secure remote access and site-to-site \
         connectivity. Each technology has different strengths for specific deployment \
         scenarios. This chapter covers IPsec, OpenVPN, and WireGuard in detail.",
    )?;
    gap(document, 15.0);
    document.push(VpnTunnelDiagram::new());
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "VPN Technology Comparison")?;
    table(
        document,
        styles,
        &[
            &["Feature", "IPsec", "OpenVPN", "WireGuard"],
            &["Best Use Case", "Site-to-Site", "Road Warriors", "Modern/Mobile"],
            &["Performance", "Excellent", "Good", "Excellent"],
            &["Configuration", "Complex", "Moderate", "Simple"],
            &["Protocol", "UDP 500/4500", "UDP 1194 or TCP", "UDP 51820"],
            &["NAT Traversal", "NAT-T (UDP 4500)", "Native", "Native"],
            &["Mobile Support", "Limited", "Good", "Excellent"],
        ],
        &[95, 95, 95, 95],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "IPsec VPN")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "IPsec is the industry standard for site-to-site VPNs, supported by virtually all \
         enterprise firewalls. OPNsense 23.1+ uses the modern swanctl/Connections interface \
         based on strongSwan's vici protocol.",
    )?;
    gap(document, 10.0);
    paragraph(document, styles, "SubSection", "IPsec Phases Explained")?;
    table(
        document,
        styles,
        &[
            &["Phase", "Purpose", "Key Settings"],
            &[
                "Phase 1 (IKE)",
                "Authenticate peers, establish secure channel",
                "Encryption, Hash, DH Group, Lifetime",
            ],
            &[
                "Phase 2 (ESP)",
                "Negotiate data encryption parameters",
                "Encryption, Hash, PFS Group, Lifetime",
            ],
        ],
        &[80, 180, 180],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "Recommended Phase 1 Settings")?;
    table(
        document,
        styles,
        &[
            &["Setting", "Recommended Value", "Notes"],
            &["Key Exchange", "IKEv2", "More secure, faster than IKEv1"],
            &["Encryption", "AES-256-GCM", "Authenticated encryption"],
            &["DH Group", "ECP384 or Curve25519", "Modern elliptic curve"],
            &["Lifetime", "28800 seconds (8 hours)", "Balance security/overhead"],
            &["DPD", "Enabled, 10s interval", "Detect dead peers"],
        ],
        &[100, 130, 210],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "Both sides must have matching Phase 1 and Phase 2 settings. Mismatched encryption, \
         hash, or DH groups are the most common cause of tunnel failures.",
        CalloutKind::Warning,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SubSection", "IPsec Site-to-Site Setup Checklist")?;
    bullets(
        document,
        styles,
        &[
            "1. VPN > IPsec > Connections > Add new connection",
            "2. Configure local and remote endpoints (IPs or FQDNs)",
            "3. Set authentication (PSK or certificates)",
            "4. Define local and remote networks (Children/Phase 2)",
            "5. Create firewall rule: WAN, UDP 500 and 4500, to WAN address",
            "6. Create firewall rule: IPsec interface, permit traffic to/from remote nets",
            "7. Enable connection and check Status > IPsec > Overview",
        ],
    )?;
    Ok(())
}

fn dns(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "7", "DNS Services (Unbound)");

    paragraph(
        document,
        styles,
        "BodyText",
        "Unbound is OPNsense's default DNS resolver, providing recursive DNS resolution with \
         DNSSEC validation, caching, and advanced features like DNS-over-TLS (DoT). It \
         replaces the older Dnsmasq and can function as both a resolver and forwarder.",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "DNS Resolution Modes")?;
    table(
        document,
        styles,
        &[
            &["Mode", "Behavior", "Privacy", "Speed"],
            &["Recursive", "Query root servers directly", "Best (no third party)", "Slower initial"],
            &["Forwarding", "Forward to upstream DNS", "Depends on upstream", "Faster"],
            &["DoT Forwarding", "Encrypted forwarding", "Good (encrypted)", "Moderate"],
        ],
        &[90, 150, 110, 90],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "Recursive mode queries authoritative servers directly, eliminating reliance on \
         third-party DNS providers. Enable DNSSEC to validate responses cryptographically.",
        CalloutKind::Info,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "DNS-over-TLS (DoT) Configuration")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "DoT encrypts DNS queries to upstream servers, preventing eavesdropping and \
         manipulation. Configure under Services > Unbound DNS > DNS over TLS.",
    )?;
    gap(document, 10.0);
    table(
        document,
        styles,
        &[
            &["Provider", "Server", "Port", "Hostname Verification"],
            &["Cloudflare", "1.1.1.1", "853", "cloudflare-dns.com"],
            &["Google", "8.8.8.8", "853", "dns.google"],
            &["Quad9", "9.9.9.9", "853", "dns.quad9.net"],
            &["Mullvad", "194.242.2.2", "853", "dns.mullvad.net"],
        ],
        &[90, 90, 50, 210],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "DNS Blocklists")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "Unbound can block domains using the DNSBL (DNS Blocklist) feature, providing \
         network-wide ad blocking and malware protection without client-side software.",
    )?;
    bullets(
        document,
        styles,
        &[
            "Ads/Tracking: Block advertising and analytics domains",
            "Malware: Block known malicious domains",
            "Adult Content: Family-safe filtering",
            "Custom: Your own domain blacklist",
        ],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "Host and Domain Overrides")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "Override DNS responses for specific hosts or entire domains. Useful for:",
    )?;
    bullets(
        document,
        styles,
        &[
            "Split-horizon DNS (internal vs external resolution)",
            "Redirect internal services to local IPs",
            "Block specific domains by pointing to 0.0.0.0",
            "Override public DNS for local resources",
        ],
    )?;
    Ok(())
}

fn intrusion_detection(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "8", "Intrusion Detection (Suricata)");

    paragraph(
        document,
        styles,
        "BodyText",
        "Suricata is a high-performance Network IDS/IPS (Intrusion Detection/Prevention \
         System) integrated into OPNsense. It inspects traffic for malicious patterns, \
         exploits, and policy violations using signature-based detection.",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "IDS vs IPS Mode")?;
    table(
        document,
        styles,
        &[
            &["Mode", "Action on Match", "Impact", "Use Case"],
            &["IDS", "Alert only", "None", "Monitoring, tuning rules"],
            &["IPS (Inline)", "Block traffic", "May block legitimate", "Active protection"],
        ],
        &[70, 110, 100, 160],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "Start with IDS mode to tune rules and eliminate false positives before enabling \
         IPS blocking. Aggressive IPS rules can break legitimate applications.",
        CalloutKind::Warning,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Ruleset Sources")?;
    table(
        document,
        styles,
        &[
            &["Ruleset", "Type", "Focus"],
            &["ET Open", "Free", "Emerging threats, malware, exploits"],
            &["ET Pro", "Commercial", "Enhanced ET with more coverage"],
            &["Snort Community", "Free (registration)", "Traditional IDS rules"],
            &["Abuse.ch", "Free", "SSL certs, malware URLs, botnets"],
            &["OPNsense App Detection", "Free", "Application identification"],
        ],
        &[120, 100, 220],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Configuration Steps")?;
    bullets(
        document,
        styles,
        &[
            "1. Services > Intrusion Detection > Administration",
            "2. Enable IDS, select interface(s) to monitor",
            "3. Set Pattern Matcher (Hyperscan if available, otherwise AC)",
            "4. Download tab: Enable desired rulesets",
            "5. Click 'Download & Update Rules'",
            "6. Rules tab: Review and enable rule categories",
            "7. Start with IDS mode, monitor alerts",
            "8. After tuning, optionally enable IPS mode",
        ],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "Tuning and False Positives")?;
    bullets(
        document,
        styles,
        &[
            "Disable overly broad rules generating excessive alerts",
            "Use 'Disable SID' to suppress specific signatures",
            "Create suppression rules for known-good traffic",
            "Whitelist internal scanners and security tools",
            "Review alerts regularly and adjust policies",
        ],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "Suricata is CPU-intensive. On lower-powered hardware, enable only essential rule \
         categories or consider monitoring only WAN interface.",
        CalloutKind::Info,
    );
    Ok(())
}

fn traffic_shaping(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "9", "Traffic Shaping & QoS");

    paragraph(
        document,
        styles,
        "BodyText",
        "Traffic shaping (QoS - Quality of Service) manages bandwidth allocation and \
         prioritizes critical traffic. OPNsense provides two shaping systems: the legacy \
         ALTQ scheduler and the modern pipes/queues system based on dummynet.",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Key Concepts")?;
    table(
        document,
        styles,
        &[
            &["Component", "Function", "Location"],
            &["Pipes", "Define maximum bandwidth", "Firewall > Shaper > Pipes"],
            &["Queues", "Traffic classes within pipes", "Firewall > Shaper > Queues"],
            &["Rules", "Match traffic to queues", "Firewall > Shaper > Rules"],
        ],
        &[80, 180, 180],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "Common QoS Scenarios")?;
    bullets(
        document,
        styles,
        &[
            "VoIP Priority: Low latency queue for SIP/RTP traffic",
            "Bandwidth Caps: Per-user or per-network limits",
            "Gaming: Prioritize game traffic over bulk downloads",
            "Work Applications: Prioritize VPN and business apps",
            "Guest Network: Limit guest VLAN bandwidth",
        ],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "Shape to 95% of actual bandwidth. This keeps queuing under YOUR control rather than \
         letting your ISP's equipment decide what gets dropped.",
        CalloutKind::Tip,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SubSection", "FQ-CoDel for Bufferbloat")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "FQ-CoDel (Fair Queuing with Controlled Delay) reduces bufferbloat - excessive \
         latency caused by large buffers. Enable CoDel on queues for responsive connections \
         even under heavy load.",
    )?;
    Ok(())
}

fn high_availability(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "10", "High Availability & CARP");

    paragraph(
        document,
        styles,
        "BodyText",
        "OPNsense supports high availability through CARP (Common Address Redundancy \
         Protocol), enabling automatic failover between two firewalls. Combined with pfsync \
         for state synchronization and XMLRPC for configuration sync, this provides seamless \
         failover.",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "HA Components")?;
    table(
        document,
        styles,
        &[
            &["Component", "Purpose", "Protocol"],
            &["CARP", "Virtual IP failover", "IP Protocol 112"],
            &["pfsync", "State table sync", "IP Protocol 240"],
            &["XMLRPC", "Config synchronization", "TCP 443 (HTTPS)"],
        ],
        &[90, 200, 150],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "Prerequisites")?;
    bullets(
        document,
        styles,
        &[
            "Two identical OPNsense installations (same version)",
            "Dedicated sync interface directly connected (crossover or switch)",
            "Same interface assignments on both nodes",
            "Unique real IPs + shared CARP VIPs on each interface",
        ],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SubSection", "CARP VIP Configuration")?;
    table(
        document,
        styles,
        &[
            &["Field", "Description"],
            &["Mode", "CARP"],
            &["Interface", "WAN, LAN, or VLAN"],
            &["Address", "Shared virtual IP"],
            &["VHID", "Virtual Host ID (unique per VIP per broadcast domain)"],
            &["Password", "Shared secret (same on both nodes)"],
            &["Advertising Frequency", "Base=1, Skew=0 for primary, Skew=100 for secondary"],
        ],
        &[130, 310],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "The node with lower skew value becomes MASTER. Set primary to skew 0 and secondary \
         to skew 100. During maintenance, increase primary's skew to force failover.",
        CalloutKind::Tip,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SubSection", "Troubleshooting HA")?;
    bullets(
        document,
        styles,
        &[
            "Both nodes MASTER: VHID conflict or sync interface down",
            "State not syncing: Check pfsync interface, firewall rules",
            "Config not syncing: Verify XMLRPC credentials and connectivity",
            "VPN failover slow: Enable DPD on VPN connections",
        ],
    )?;
    Ok(())
}

fn additional_services(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "11", "Additional Services");

    paragraph(
        document,
        styles,
        "BodyText",
        "Beyond the core firewall and VPN functionality, OPNsense includes many built-in \
         services and supports extensive plugins for additional functionality.",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Core Services Overview")?;
    table(
        document,
        styles,
        &[
            &["Service", "Purpose", "Location"],
            &["DHCPv4/v6", "IP address assignment", "Services > DHCPv4/v6"],
            &["NTP", "Time synchronization", "Services > Network Time"],
            &["Syslog", "Remote logging", "Services > Syslog"],
            &["SNMP", "Monitoring protocol", "Services > SNMP"],
            &["Dynamic DNS", "Update DNS records", "Services > Dynamic DNS"],
            &["Wake on LAN", "Remote power-on", "Services > Wake on LAN"],
        ],
        &[90, 150, 200],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SubSection", "DHCP Configuration")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "DHCP Server provides automatic IP configuration to clients. Key settings:",
    )?;
    bullets(
        document,
        styles,
        &[
            "Range: Pool of addresses to assign",
            "Gateway: Default route (usually OPNsense LAN IP)",
            "DNS Servers: Use OPNsense IP for local resolution",
            "Lease Time: How long assignments are valid",
            "Static Mappings: Fixed IPs for specific MAC addresses",
        ],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Popular Plugins")?;
    table(
        document,
        styles,
        &[
            &["Plugin", "Function"],
            &["os-acme-client", "Let's Encrypt certificate automation"],
            &["os-haproxy", "Load balancer and reverse proxy"],
            &["os-crowdsec", "Collaborative threat intelligence"],
            &["os-wireguard", "WireGuard VPN"],
            &["os-tailscale", "Tailscale mesh VPN"],
            &["os-telegraf", "Metrics collection (InfluxDB)"],
        ],
        &[120, 320],
    )?;
    gap(document, 10.0);
    paragraph(
        document,
        styles,
        "BodyText",
        "Install plugins via System > Firmware > Plugins. Search for 'os-' prefix.",
    )?;
    Ok(())
}

fn troubleshooting(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "12", "Troubleshooting & Diagnostics");

    paragraph(
        document,
        styles,
        "BodyText",
        "Effective troubleshooting requires familiarity with OPNsense's diagnostic tools, \
         log files, and command-line utilities. This chapter covers essential techniques for \
         diagnosing network and firewall issues.",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "GUI Diagnostic Tools")?;
    table(
        document,
        styles,
        &[
            &["Tool", "Location", "Use Case"],
            &["Live Log", "Firewall > Log Files > Live View", "Real-time rule matching"],
            &["Packet Capture", "Interfaces > Diagnostics > Packet Capture", "Deep packet analysis"],
            &["States", "Firewall > Diagnostics > States", "View active connections"],
            &["pfTop", "Diagnostics > pfTop", "Real-time state viewer"],
            &["Ping", "Interfaces > Diagnostics > Ping", "ICMP connectivity test"],
            &["Traceroute", "Interfaces > Diagnostics > Traceroute", "Path analysis"],
        ],
        &[90, 200, 150],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Essential CLI Commands")?;
    table(
        document,
        styles,
        &[
            &["Command", "Purpose"],
            &["pfctl -sr", "Show loaded firewall rules"],
            &["pfctl -ss", "Show state table (active connections)"],
            &["pfctl -k host", "Kill states for specific host"],
            &["netstat -rn", "Show routing table"],
            &["sockstat -l", "Show listening ports"],
            &["tcpdump -i em0", "Capture traffic on interface"],
            &["configctl filter reload", "Reload firewall rules"],
            &["tail -f /var/log/filter.log", "Live firewall log"],
        ],
        &[170, 270],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Common Issues & Solutions")?;
    bullets(
        document,
        styles,
        &[
            "Traffic blocked: Enable logging on rules, check Live Log, verify rule order",
            "Cannot reach internet: Check WAN status, gateway, outbound NAT",
            "DNS not resolving: Verify Unbound running, check forwarding settings",
            "VPN won't connect: Verify ports open, matching phase settings, check logs",
            "CARP not failing over: Check VHID uniqueness, sync interface, skew values",
            "Can't access GUI: SSH in, check webconfigurator service, anti-lockout rule",
        ],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "Always check /tmp/rules.debug to see the actual pf ruleset loaded. This file shows \
         the complete firewall configuration as interpreted by the system.",
        CalloutKind::Tip,
    );
    Ok(())
}

fn mcp_server(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "13", "OPNsense MCP Server");

    callout(
        document,
        "THIS CHAPTER IS FOR AI/LLM AGENTS. The OPNsense MCP Server provides programmatic \
         access to firewall management via Model Context Protocol. Use these tools instead \
         of SSH/CLI when available.",
        CalloutKind::Note,
    );
    gap(document, 15.0);
    paragraph(
        document,
        styles,
        "BodyText",
        "The opnsense-mcp-server (by vespo92) provides MCP tools for managing OPNsense \
         firewalls from AI agents like Claude. It supports both API and SSH access methods, \
         enabling firewall rule management, VLAN configuration, NAT rules, and diagnostics.",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Available MCP Tool Categories")?;
    table(
        document,
        styles,
        &[
            &["Category", "Prefix", "Purpose"],
            &["Connection", "opnsense_configure, _test_connection", "Setup and verify API access"],
            &["VLANs", "opnsense_list_vlans, _create_vlan", "VLAN management"],
            &["Firewall Rules", "opnsense_list_firewall_rules, _create_*", "Rule CRUD operations"],
            &["NAT", "opnsense_nat_list_*, _fix_dmz", "NAT rule management"],
            &["DHCP/ARP", "opnsense_list_dhcp_leases, _list_arp_*", "Network discovery"],
            &["SSH Commands", "opnsense_ssh_execute, _ssh_*", "Direct CLI access"],
            &["Backups", "opnsense_create_backup, _list_backups", "Config backup/restore"],
        ],
        &[100, 180, 160],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SubSection", "Connection & Discovery")?;
    table(
        document,
        styles,
        &[
            &["Tool", "Parameters", "Returns"],
            &["opnsense_test_connection", "(none)", "API connectivity status"],
            &["opnsense_get_interfaces", "(none)", "All interfaces with status"],
            &["opnsense_list_vlans", "(none)", "VLAN tag, interface, description"],
            &["opnsense_list_dhcp_leases", "interface (optional)", "IP, MAC, hostname, lease time"],
            &["opnsense_list_arp_entries", "(none)", "Full ARP table"],
        ],
        &[140, 120, 180],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "Firewall Rules")?;
    table(
        document,
        styles,
        &[
            &["Tool", "Key Parameters", "Notes"],
            &["opnsense_list_firewall_rules", "(none)", "All rules with UUIDs"],
            &[
                "opnsense_create_firewall_rule",
                "action, interface, direction, protocol, source, destination",
                "Create new rule",
            ],
            &["opnsense_update_firewall_rule", "uuid, + fields to update", "Modify existing rule"],
            &["opnsense_delete_firewall_rule", "uuid", "Remove rule"],
            &["opnsense_toggle_firewall_rule", "uuid", "Enable/disable rule"],
        ],
        &[150, 180, 110],
    )?;
    Ok(())
}

fn vlans(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "14", "VLAN Configuration");

    paragraph(
        document,
        styles,
        "BodyText",
        "VLANs (Virtual LANs) segment a physical network into isolated broadcast domains. \
         OPNsense supports 802.1Q VLAN tagging, allowing a single physical interface to \
         carry traffic for multiple logical networks. This is essential for network \
         segmentation, security zones, and efficient use of hardware.",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "VLAN Concepts")?;
    table(
        document,
        styles,
        &[
            &["Term", "Description"],
            &["VLAN Tag", "Numeric ID (1-4094) added to Ethernet frames"],
            &["Trunk Port", "Switch port carrying multiple VLANs (tagged)"],
            &["Access Port", "Switch port for single VLAN (untagged)"],
            &["Parent Interface", "Physical NIC that carries VLAN traffic"],
            &["VLAN Interface", "Virtual interface for specific VLAN tag"],
        ],
        &[110, 330],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "VLANs require a managed switch configured with matching VLAN tags. Unmanaged \
         switches cannot process VLAN tags and will drop tagged traffic.",
        CalloutKind::Warning,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Creating VLANs in OPNsense")?;
    bullets(
        document,
        styles,
        &[
            "1. Interfaces > Other Types > VLAN > Add",
            "2. Select Parent Interface (physical NIC connected to trunk port)",
            "3. Set VLAN Tag (must match switch configuration)",
            "4. Add Description (e.g., 'DMZ', 'Guest', 'IoT')",
            "5. Interfaces > Assignments > Assign the new VLAN",
            "6. Configure the assigned interface (IP, DHCP, etc.)",
            "7. Enable the interface",
            "8. Add firewall rules for the new VLAN interface",
        ],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Common VLAN Topologies")?;
    table(
        document,
        styles,
        &[
            &["VLAN", "Tag", "Subnet", "Purpose", "Internet Access"],
            &["LAN", "Native", "192.168.1.0/24", "Trusted devices", "Full + local"],
            &["DMZ", "10", "172.16.10.0/24", "Servers/services", "Full, limited local"],
            &["Guest", "20", "192.168.20.0/24", "Visitors", "Internet only"],
            &["IoT", "30", "192.168.30.0/24", "Smart devices", "Internet only"],
            &["Management", "99", "192.168.99.0/24", "Network gear", "No internet"],
        ],
        &[70, 40, 100, 100, 130],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Inter-VLAN Routing")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "By default, VLANs cannot communicate with each other. OPNsense acts as the router \
         between VLANs. To allow inter-VLAN traffic, create firewall rules on each VLAN \
         interface permitting traffic to other VLAN subnets.",
    )?;
    gap(document, 10.0);
    callout(
        document,
        "For security, create specific allow rules rather than broad 'allow all' between \
         VLANs. Block RFC1918 by default, then add exceptions for required services.",
        CalloutKind::Tip,
    );
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "VLAN Troubleshooting")?;
    bullets(
        document,
        styles,
        &[
            "No connectivity: Check switch VLAN config matches OPNsense tags",
            "Can ping gateway but not internet: Check outbound NAT includes VLAN subnet",
            "Inter-VLAN blocked: Verify firewall rules on SOURCE interface",
            "DHCP not working: Enable DHCP server on VLAN interface",
            "Asymmetric routing: Ensure devices use OPNsense as gateway, not switch",
        ],
    )?;
    Ok(())
}

fn certificates(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "15", "Certificates & PKI");

    callout(
        document,
        "Certificates enable encrypted communications (HTTPS, VPN) and authentication. \
         OPNsense includes a full Certificate Authority (CA) for generating and managing \
         X.509 certificates without external tools.",
        CalloutKind::Note,
    );
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Certificate Types Overview")?;
    table(
        document,
        styles,
        &[
            &["Type", "Purpose", "Location"],
            &[
                "Certificate Authority (CA)",
                "Signs other certificates, establishes trust chain",
                "System > Trust > Authorities",
            ],
            &[
                "Server Certificate",
                "Authenticates server (HTTPS, VPN server)",
                "System > Trust > Certificates",
            ],
            &[
                "Client Certificate",
                "Authenticates user/device to server",
                "System > Trust > Certificates",
            ],
            &["ACME/Let's Encrypt", "Free public TLS certificates", "Services > ACME > Certificates"],
        ],
        &[120, 200, 120],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Creating a Certificate Authority")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "A local CA allows you to sign your own server and client certificates. Required for \
         OpenVPN, IPsec with certificates, and internal HTTPS services.",
    )?;
    gap(document, 10.0);
    bullets(
        document,
        styles,
        &[
            "1. Navigate to System > Trust > Authorities",
            "2. Method: Create an internal Certificate Authority",
            "3. Key type: RSA (2048/4096) or ECDSA (prime256v1/secp384r1)",
            "4. Digest Algorithm: SHA256 or SHA384",
            "5. Lifetime: 3650 days (10 years) for CA",
            "6. Common Name: e.g., 'OPNsense Internal CA'",
        ],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "KEY TYPE SELECTION: ECDSA (prime256v1) offers faster operations and smaller keys \
         with equivalent security to RSA-3072. Use ECDSA for new deployments unless \
         compatibility with legacy systems requires RSA.",
        CalloutKind::Tip,
    );
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "CA Configuration Options")?;
    table(
        document,
        styles,
        &[
            &["Option", "Recommended", "Description"],
            &["Key Type", "ECDSA prime256v1", "Fastest, modern security"],
            &["Key Type (legacy)", "RSA 4096", "Maximum compatibility"],
            &["Digest", "SHA256", "Standard, widely supported"],
            &["Lifetime (CA)", "3650 days", "10 years for root CA"],
            &["Lifetime (server)", "397 days", "Max for browser trust"],
            &["Lifetime (client)", "365 days", "Annual renewal recommended"],
        ],
        &[120, 100, 220],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "SUBJECT ALTERNATIVE NAMES (SANs): Modern browsers require SANs for certificate \
         validation. Add all hostnames and IPs used to access the service: \
         DNS:fw.example.com, DNS:opnsense.local, IP:192.168.1.1",
        CalloutKind::Warning,
    );
    Ok(())
}
