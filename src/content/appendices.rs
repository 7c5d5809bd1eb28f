//! Appendices A through C.

use genpdf::error::Error;
use genpdf::Document;

use crate::callout::CalloutKind;
use crate::styles::StyleSheet;

use super::{bullets, callout, chapter, gap, paragraph, table};

pub(super) fn push_all(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    quick_reference(document, styles)?;
    pf_syntax(document, styles)?;
    rest_api(document, styles)?;
    Ok(())
}

fn quick_reference(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "A", "Quick Reference");

    callout(
        document,
        "STRUCTURED REFERENCE DATA for rapid LLM lookup. Use this section for quick facts \
         without reading full chapters.",
        CalloutKind::Note,
    );
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Defaults & Credentials")?;
    table(
        document,
        styles,
        &[
            &["Item", "Default", "Notes"],
            &["Web UI URL", "https://192.168.1.1", "LAN IP, HTTPS required"],
            &["Username", "root", "Create admin user, disable root"],
            &["Password", "opnsense", "CHANGE IMMEDIATELY"],
            &["SSH", "Disabled", "Enable at System > Settings > Administration"],
            &["API", "Disabled", "Enable per-user at System > Access > Users"],
        ],
        &[100, 130, 210],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Common Ports")?;
    table(
        document,
        styles,
        &[
            &["Service", "Port", "Protocol", "Notes"],
            &["Web GUI", "443", "TCP/HTTPS", "Anti-lockout on LAN"],
            &["SSH", "22", "TCP", "Disabled by default"],
            &["DNS", "53", "TCP/UDP", "Unbound resolver"],
            &["DHCP", "67-68", "UDP", "Server on 67, client on 68"],
            &["IPsec IKE", "500", "UDP", "Key exchange"],
            &["IPsec NAT-T", "4500", "UDP", "NAT traversal"],
            &["OpenVPN", "1194", "UDP (or TCP)", "Configurable"],
            &["WireGuard", "51820", "UDP", "Configurable"],
            &["NTP", "123", "UDP", "Time sync"],
        ],
        &[85, 55, 75, 225],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "File Locations")?;
    table(
        document,
        styles,
        &[
            &["Path", "Purpose", "Access"],
            &["/conf/config.xml", "Master config (XML)", "READ ONLY - use API"],
            &["/tmp/rules.debug", "Active pf ruleset", "pfctl -sr equivalent"],
            &["/var/log/filter.log", "Firewall log", "tail -f for live view"],
            &["/var/log/system.log", "System messages", "General diagnostics"],
            &["/var/log/suricata/", "IDS/IPS logs", "Alert analysis"],
            &["/usr/local/etc/", "Service configs", "Unbound, Suricata, etc."],
        ],
        &[140, 150, 150],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Essential CLI Commands")?;
    table(
        document,
        styles,
        &[
            &["Command", "Purpose"],
            &["pfctl -sr", "Show firewall rules"],
            &["pfctl -ss", "Show state table"],
            &["pfctl -k <ip>", "Kill states for IP"],
            &["pfctl -F states", "Flush ALL states (caution!)"],
            &["netstat -rn", "Routing table"],
            &["configctl filter reload", "Reload firewall"],
            &["configctl webgui restart", "Restart web GUI"],
            &["opnsense-update -c", "Check for updates"],
            &["opnsense-revert", "Revert to previous version"],
        ],
        &[200, 240],
    )?;
    Ok(())
}

fn pf_syntax(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "B", "pf Rule Syntax Reference");

    callout(
        document,
        "This appendix explains native pf (packet filter) syntax for interpreting \
         /tmp/rules.debug and pfctl -sr output. Essential for debugging firewall issues.",
        CalloutKind::Note,
    );
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Basic Rule Structure")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "pf rules follow a specific syntax. Understanding this helps interpret the actual \
         loaded ruleset versus the GUI representation:",
    )?;
    gap(document, 10.0);
    paragraph(
        document,
        styles,
        "CodeText",
        "action [direction] [log] [quick] on interface [inet|inet6] proto protocol \
         from source to destination [flags] [state]",
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "Rule Keywords")?;
    table(
        document,
        styles,
        &[
            &["Keyword", "Values", "Description"],
            &["pass", "-", "Allow traffic through"],
            &["block", "drop, return, return-rst", "Deny traffic (default: drop)"],
            &["in", "-", "Inbound traffic (entering interface)"],
            &["out", "-", "Outbound traffic (leaving interface)"],
            &["quick", "-", "Stop processing on match (first match wins)"],
            &["on", "interface name", "Apply to specific interface"],
            &["proto", "tcp, udp, icmp, etc.", "Layer 4 protocol"],
            &["from", "address/mask", "Source address"],
            &["to", "address/mask", "Destination address"],
            &["keep state", "-", "Track connection state"],
        ],
        &[80, 140, 220],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Example Rules Explained")?;
    paragraph(document, styles, "SubSection", "Allow LAN to Internet:")?;
    paragraph(
        document,
        styles,
        "CodeText",
        "pass in quick on em1 inet from 192.168.1.0/24 to any keep state",
    )?;
    gap(document, 5.0);
    table(
        document,
        styles,
        &[
            &["Component", "Meaning"],
            &["pass", "Allow traffic"],
            &["in", "Traffic entering the firewall on this interface"],
            &["quick", "Stop processing if matched"],
            &["on em1", "LAN interface"],
            &["from 192.168.1.0/24", "Source: LAN subnet"],
            &["keep state", "Track connection, allow return traffic"],
        ],
        &[150, 290],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "Port Forward (NAT + Filter):")?;
    paragraph(
        document,
        styles,
        "CodeText",
        "rdr on em0 inet proto tcp from any to (em0) port 443 -> 192.168.1.10 port 443",
    )?;
    Ok(())
}

fn rest_api(document: &mut Document, styles: &StyleSheet) -> Result<(), Error> {
    chapter(document, "C", "REST API Reference");

    callout(
        document,
        "The OPNsense REST API enables programmatic firewall management. Use this for \
         automation, integration with other tools, or when MCP tools are unavailable.",
        CalloutKind::Note,
    );
    gap(document, 15.0);

    paragraph(document, styles, "SectionTitle", "API Authentication")?;
    paragraph(
        document,
        styles,
        "BodyText",
        "OPNsense uses API key + secret authentication. Generate credentials at System > \
         Access > Users > [user] > API Keys.",
    )?;
    gap(document, 10.0);
    table(
        document,
        styles,
        &[
            &["Component", "Details"],
            &["Auth Type", "HTTP Basic Authentication"],
            &["Username", "API Key (long alphanumeric string)"],
            &["Password", "API Secret (long alphanumeric string)"],
            &["Protocol", "HTTPS only (port 443)"],
            &["Content-Type", "application/json"],
        ],
        &[120, 320],
    )?;
    gap(document, 15.0);

    paragraph(document, styles, "SubSection", "Example curl Request")?;
    paragraph(
        document,
        styles,
        "CodeText",
        "curl -k -u 'API_KEY:API_SECRET' https://192.168.1.1/api/core/system/status",
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "Common API Endpoints")?;
    table(
        document,
        styles,
        &[
            &["Endpoint", "Method", "Description"],
            &["/api/core/system/status", "GET", "System status and version"],
            &["/api/core/firmware/status", "GET", "Firmware update status"],
            &["/api/firewall/filter/searchRule", "GET", "List firewall rules"],
            &["/api/firewall/filter/addRule", "POST", "Create firewall rule"],
            &["/api/firewall/filter/setRule/{uuid}", "POST", "Update rule"],
            &["/api/firewall/filter/delRule/{uuid}", "POST", "Delete rule"],
            &["/api/firewall/filter/apply", "POST", "Apply pending changes"],
            &["/api/firewall/alias/searchItem", "GET", "List aliases"],
        ],
        &[200, 50, 190],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "API Workflow: Create Firewall Rule")?;
    bullets(
        document,
        styles,
        &[
            "1. Generate API credentials (System > Access > Users > API Keys)",
            "2. GET /api/firewall/filter/searchRule to list existing rules",
            "3. POST /api/firewall/filter/addRule with rule JSON body",
            "4. POST /api/firewall/filter/apply to activate changes",
            "5. GET /api/firewall/filter/searchRule to verify",
        ],
    )?;
    gap(document, 15.0);
    callout(
        document,
        "Always call /apply endpoint after making changes. Changes are staged until applied. \
         This allows batching multiple changes before activation.",
        CalloutKind::Warning,
    );
    gap(document, 20.0);

    paragraph(document, styles, "SectionTitle", "API Response Codes")?;
    table(
        document,
        styles,
        &[
            &["Code", "Meaning", "Action"],
            &["200", "Success", "Parse response JSON"],
            &["400", "Bad Request", "Check request format/parameters"],
            &["401", "Unauthorized", "Verify API key/secret"],
            &["403", "Forbidden", "User lacks permission"],
            &["404", "Not Found", "Check endpoint URL"],
            &["500", "Server Error", "Check OPNsense logs"],
        ],
        &[60, 120, 260],
    )?;
    gap(document, 20.0);

    paragraph(document, styles, "SubSection", "API Best Practices")?;
    bullets(
        document,
        styles,
        &[
            "Always use HTTPS (-k flag for self-signed certs)",
            "Store credentials securely (environment variables, not code)",
            "Check response status before parsing JSON",
            "Call /apply after modifications",
            "Use UUIDs from search responses for updates/deletes",
            "Test in non-production environment first",
        ],
    )?;
    Ok(())
}
