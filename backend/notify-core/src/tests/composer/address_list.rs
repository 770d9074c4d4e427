// Unit tests for the address rendering rules

use crate::composer::address_list::{
    LOCAL_MARKER, PUBLIC_MARKER, SCOPE_DIVIDER, address_section_text, format_address_list,
};

use models::{AddressInfo, AddressScope};

fn local(ip: &str) -> AddressInfo {
    AddressInfo::parse(ip, AddressScope::Local).unwrap()
}

fn public(ip: &str) -> AddressInfo {
    AddressInfo::parse(ip, AddressScope::Public).unwrap()
}

/// **VALUE**: Pins the rendering table for the common address shapes.
///
/// **WHY THIS MATTERS**: On-call engineers copy these addresses straight into ssh.
/// These four shapes cover nearly every real host.
///
/// **BUG THIS CATCHES**: Would catch any drift in quoting, separators or the V4 filter.
#[test]
fn given_address_lists_when_formatting_then_matches_rendering_table() {
    let cases: Vec<(&str, Vec<AddressInfo>, &str)> = vec![
        ("empty list", vec![], "`unknown`"),
        ("single v4", vec![local("192.168.1.1")], "`192.168.1.1`"),
        (
            "v4 and v6 mix",
            vec![local("192.168.1.1"), local("fe80::8811:86eb:a566:5033")],
            "`192.168.1.1`",
        ),
        (
            "multiple v4",
            vec![local("192.168.1.1"), local("14.89.76.251")],
            "`192.168.1.1`, `14.89.76.251`",
        ),
    ];

    for (desc, addresses, want) in cases {
        assert_eq!(format_address_list(&addresses), want, "case: {desc}");
    }
}

/// **VALUE**: A single V6 address is shown as-is.
///
/// **WHY THIS MATTERS**: IPv6-only hosts exist; with one address there is nothing to
/// filter and dropping it would render `unknown`.
///
/// **BUG THIS CATCHES**: Would catch the V4 filter being applied to single lists.
#[test]
fn given_single_v6_when_formatting_then_shows_it() {
    let addresses = vec![local("2001:db8::1")];

    assert_eq!(format_address_list(&addresses), "`2001:db8::1`");
}

/// **VALUE**: All-V6 lists fall back to the first address.
///
/// **WHY THIS MATTERS**: Filtering to V4 would otherwise leave nothing to show.
///
/// **BUG THIS CATCHES**: Would catch the fallback choosing the last address, or
/// rendering `unknown` when addresses exist.
#[test]
fn given_only_v6_addresses_when_formatting_then_falls_back_to_first() {
    let addresses = vec![local("fe80::1"), local("2001:db8::2")];

    assert_eq!(format_address_list(&addresses), "`fe80::1`");
}

#[test]
fn given_v6_first_then_v4_when_formatting_then_v4_survives() {
    let addresses = vec![local("fe80::1"), local("10.0.0.5"), local("2001:db8::2")];

    assert_eq!(format_address_list(&addresses), "`10.0.0.5`");
}

#[test]
fn given_only_local_v4_when_building_section_then_labels_ipv4() {
    let addresses = vec![local("192.168.1.1"), local("10.0.0.1")];

    assert_eq!(
        address_section_text(&addresses),
        ":information_source: *IPv4* `192.168.1.1`, `10.0.0.1`"
    );
}

#[test]
fn given_no_addresses_when_building_section_then_labels_unknown() {
    assert_eq!(
        address_section_text(&[]),
        ":information_source: *IP* `unknown`"
    );
}

#[test]
fn given_v6_fallback_when_building_section_then_labels_ipv6() {
    let addresses = vec![local("fe80::1"), local("fe80::2")];

    assert_eq!(
        address_section_text(&addresses),
        ":information_source: *IPv6* `fe80::1`"
    );
}

/// **VALUE**: With both scopes present, public addresses come first under their marker.
///
/// **WHY THIS MATTERS**: The public address is what remote tooling can reach; listing it
/// first makes it the one people copy.
///
/// **BUG THIS CATCHES**: Would catch scope grouping following input order or losing
/// its markers.
#[test]
fn given_public_and_local_when_building_section_then_public_group_leads() {
    // GIVEN: Local addresses enumerated before the public one
    let addresses = vec![
        local("10.0.0.5"),
        local("fe80::1"),
        public("203.0.113.7"),
    ];

    // WHEN: Building the section text
    let text = address_section_text(&addresses);

    // THEN: Public marker, divider, local marker; V6 filtered
    assert_eq!(
        text,
        format!("{PUBLIC_MARKER} `203.0.113.7`{SCOPE_DIVIDER}{LOCAL_MARKER} `10.0.0.5`")
    );
}

#[test]
fn given_only_public_address_when_building_section_then_no_scope_markers() {
    let addresses = vec![public("203.0.113.7")];

    let text = address_section_text(&addresses);

    assert!(!text.contains(PUBLIC_MARKER));
    assert_eq!(text, ":information_source: *IPv4* `203.0.113.7`");
}

/// **VALUE**: A V6 address never shows up next to a surviving V4, even when it is the
/// only address of its scope.
///
/// **WHY THIS MATTERS**: Hosts with a link-local interface and a public V4, or a V4 LAN
/// address behind a V6 public prefix, are common. The V4 filter applies to the whole
/// list before anything is grouped by scope.
///
/// **BUG THIS CATCHES**: Would catch per-scope filtering, where a lone V6 in one group
/// passes through as a "single address".
#[test]
fn given_lone_v6_in_one_scope_when_building_section_then_only_v4_is_shown() {
    let cases: Vec<(&str, Vec<AddressInfo>, &str)> = vec![
        (
            "v6 local, v4 public",
            vec![local("fe80::1"), public("203.0.113.7")],
            ":information_source: *IPv4* `203.0.113.7`",
        ),
        (
            "v4 local, v6 public",
            vec![local("192.168.1.5"), public("2001:db8::7")],
            ":information_source: *IPv4* `192.168.1.5`",
        ),
    ];

    for (desc, addresses, want) in cases {
        let text = address_section_text(&addresses);

        assert_eq!(text, want, "case: {desc}");
        assert!(!text.contains(PUBLIC_MARKER), "case: {desc}");
        assert!(!text.contains(LOCAL_MARKER), "case: {desc}");
    }
}

#[test]
fn given_only_v6_in_both_scopes_when_building_section_then_falls_back_to_first() {
    let addresses = vec![local("fe80::1"), public("2001:db8::7")];

    assert_eq!(
        address_section_text(&addresses),
        ":information_source: *IPv6* `fe80::1`"
    );
}

#[test]
fn given_v4_in_both_scopes_with_v6_when_building_section_then_groups_survivors() {
    let addresses = vec![
        local("fe80::1"),
        local("192.168.1.5"),
        public("2001:db8::7"),
        public("203.0.113.7"),
    ];

    assert_eq!(
        address_section_text(&addresses),
        format!("{PUBLIC_MARKER} `203.0.113.7`{SCOPE_DIVIDER}{LOCAL_MARKER} `192.168.1.5`")
    );
}
