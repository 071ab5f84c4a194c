//! Shared contact, classification, and history emission
//!
//! Both document modes populate these blocks with identical logic; the
//! describers delegate here so the two modes cannot drift apart.

use crate::config::ServiceConfig;
use crate::constants::{OPERATOR_ROLE, PUBLISHER_ROLE, attributes};
use crate::dataset::Attribute;
use crate::sink::{ContactAddress, DocumentSink};

/// Emit the contact nodes in fixed order: inventory, data, contributor.
///
/// The inventory and data contacts are taken from service configuration and
/// emitted only when at least one of their fields is non-empty. The
/// contributor contact is derived from the dataset's contributor attributes
/// and emitted whenever any exist, even if neither role nor name matched.
pub(crate) fn emit_contacts<S: DocumentSink>(
    sink: &mut S,
    config: &ServiceConfig,
    contributors: &[Attribute],
) {
    let inventory = &config.inventory_contact;
    if !inventory.is_blank() {
        let address = ContactAddress {
            email: inventory.email.clone(),
            phone: inventory.phone.clone(),
        };
        sink.add_contact(OPERATOR_ROLE, &inventory.name, Some(&address));
    }

    let data = &config.data_contact;
    if !data.is_blank() {
        let address = ContactAddress {
            email: data.email.clone(),
            phone: data.phone.clone(),
        };
        sink.add_contact(PUBLISHER_ROLE, &data.name, Some(&address));
    }

    if !contributors.is_empty() {
        let (role, name) = contributor_contact(contributors);
        sink.add_contact(&role, &name, None);
    }
}

/// Merge contributor attributes into a single (role, name) pair.
///
/// An attribute whose name carries the role marker overwrites the role, one
/// carrying the name marker overwrites the name. Last write wins per field
/// across the scan; unmatched attributes leave the field empty.
fn contributor_contact(contributors: &[Attribute]) -> (String, String) {
    let mut role = String::new();
    let mut name = String::new();
    for attr in contributors {
        let attr_name = attr.name.to_lowercase();
        if attr_name.contains(attributes::ROLE_MARKER) {
            role = attr.value.clone();
        } else if attr_name.contains(attributes::NAME_MARKER) {
            name = attr.value.clone();
        }
    }
    (role, name)
}

/// Emit the classification block: the platform type when present, otherwise
/// a removal signal for the templated node.
pub(crate) fn emit_classification<S: DocumentSink>(sink: &mut S, platform_type: Option<&Attribute>) {
    match platform_type {
        Some(attr) => sink.add_classifier(&attr.name, "", &attr.value),
        None => sink.remove_classification(),
    }
}

/// Emit the history block: the provenance text when present, otherwise a
/// removal signal for the templated node.
pub(crate) fn emit_history<S: DocumentSink>(sink: &mut S, history: Option<&Attribute>) {
    match history {
        Some(attr) => sink.set_history(&attr.value),
        None => sink.remove_history(),
    }
}
