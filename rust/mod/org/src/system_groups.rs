//! System group markers, localized names, and organization provisioning.
//!
//! Two groups exist in every organization without anyone creating them:
//! the all-users group and the dev group. They are identified by reserved
//! `type` markers, their display names are locale-derived (never stored),
//! and they can neither be renamed nor deleted.

use tracing::info;

use crate::error::OrgError;
use crate::model::Group;

/// Reserved `type` marker for the organization-wide all-users group.
pub const ALL_USER: &str = "ALL_USER";

/// Reserved `type` marker for the internal dev group.
pub const DEV: &str = "DEV";

/// Resolve the localized display name for a system group type marker.
///
/// Locales match on the primary language subtag, so `en-US` and `en_GB`
/// both resolve as `en`. Unknown markers and unsupported locales are
/// errors — callers must surface them instead of falling back to a stored
/// name, which for system groups is empty or meaningless.
pub fn resolve_name(type_marker: &str, locale: &str) -> Result<&'static str, OrgError> {
    let lang = locale.split(['-', '_']).next().unwrap_or_default();
    match (type_marker, lang) {
        (ALL_USER, "en") => Ok("All Users"),
        (ALL_USER, "zh") => Ok("所有成员"),
        (DEV, "en") => Ok("Developers"),
        (DEV, "zh") => Ok("开发者"),
        (ALL_USER | DEV, _) => Err(OrgError::NotFound(format!(
            "no display name for system group type '{}' in locale '{}'",
            type_marker, locale
        ))),
        _ => Err(OrgError::Validation(format!(
            "unknown system group type: {}",
            type_marker
        ))),
    }
}

/// Build the synthetic system groups for a freshly provisioned organization.
///
/// Returns the all-users group followed by the dev group. The caller is
/// responsible for persisting them.
pub fn provision_for_organization(
    organization_id: &str,
    created_by: Option<String>,
) -> Vec<Group> {
    let groups = vec![
        Group::new_all_users(organization_id, created_by.clone()),
        Group::new_dev(organization_id, created_by),
    ];
    info!(organization_id, "provisioned system groups");
    groups
}
