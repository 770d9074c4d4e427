//! Rendering rules for the address line of an alert.

use models::{AddressInfo, AddressScope};

pub const UNKNOWN_ADDRESS: &str = "`unknown`";
pub const PUBLIC_MARKER: &str = ":globe_with_meridians: *Public*";
pub const LOCAL_MARKER: &str = ":house: *Local*";
pub const SCOPE_DIVIDER: &str = "  |  ";

const LABEL_PREFIX: &str = ":information_source:";
const ADDRESS_SEPARATOR: &str = ", ";

fn quoted(address: &AddressInfo) -> String {
    format!("`{}`", address.address())
}

/// The addresses that [`format_address_list`] actually shows.
///
/// More than one address keeps only V4 entries; if none are V4 the first
/// input address stands in for the whole list.
fn rendered<'a>(addresses: &[&'a AddressInfo]) -> Vec<&'a AddressInfo> {
    match addresses {
        [] => Vec::new(),
        [single] => vec![*single],
        [first, ..] => {
            let v4: Vec<&AddressInfo> = addresses.iter().copied().filter(|a| a.is_v4()).collect();
            if v4.is_empty() { vec![*first] } else { v4 }
        }
    }
}

fn join(addresses: &[&AddressInfo]) -> String {
    if addresses.is_empty() {
        return UNKNOWN_ADDRESS.to_string();
    }

    addresses
        .iter()
        .map(|a| quoted(a))
        .collect::<Vec<_>>()
        .join(ADDRESS_SEPARATOR)
}

/// Render an address list as code-quoted markdown.
///
/// - `[]` gives `` `unknown` ``
/// - one address gives that address, whatever its version
/// - several addresses give the V4 ones joined by `", "`, or the first
///   address if all of them are V6
pub fn format_address_list(addresses: &[AddressInfo]) -> String {
    let refs: Vec<&AddressInfo> = addresses.iter().collect();
    join(&rendered(&refs))
}

fn label_for(shown: &[&AddressInfo]) -> String {
    let version = shown
        .first()
        .map(|a| a.version().to_string())
        .unwrap_or_else(|| String::from("IP"));
    format!("{LABEL_PREFIX} *{version}*")
}

fn in_scope<'a>(shown: &[&'a AddressInfo], scope: AddressScope) -> Vec<&'a AddressInfo> {
    shown.iter().copied().filter(|a| a.scope() == scope).collect()
}

/// Markdown for the address section of an alert.
///
/// The V4 filter of [`format_address_list`] runs over the whole list first.
/// If both public and local addresses survive it, the public group comes
/// first, each group under its own marker. Otherwise the survivors are
/// prefixed with a version label, e.g. `:information_source: *IPv4* `10.0.0.5``.
pub fn address_section_text(addresses: &[AddressInfo]) -> String {
    let refs: Vec<&AddressInfo> = addresses.iter().collect();
    let shown = rendered(&refs);

    let public = in_scope(&shown, AddressScope::Public);
    let local = in_scope(&shown, AddressScope::Local);

    if !public.is_empty() && !local.is_empty() {
        return format!(
            "{PUBLIC_MARKER} {}{SCOPE_DIVIDER}{LOCAL_MARKER} {}",
            join(&public),
            join(&local),
        );
    }

    format!("{} {}", label_for(&shown), join(&shown))
}
