use serde::{Deserialize, Serialize};

use openforge_core::Auditing;

use crate::error::OrgError;
use crate::system_groups;

/// A user group within an organization.
///
/// Groups are either user-defined or one of two synthetic system groups:
/// the organization-wide all-users group and the internal dev group.
/// System groups are provisioned together with the organization, carry a
/// locale-derived display name (the stored `name` is empty), and can
/// neither be renamed nor deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Identity and audit provenance.
    #[serde(flatten)]
    pub auditing: Auditing,

    /// Stored display name. Only meaningful for user-defined groups —
    /// read through [`Group::display_name`], never directly.
    #[serde(default)]
    pub name: String,

    /// Owning organization. Immutable for the lifetime of the record.
    pub organization_id: String,

    /// Marks the organization's built-in all-users group.
    /// Unset is treated as false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_users_group: Option<bool>,

    /// Group type. Two reserved values mark system groups
    /// ([`system_groups::ALL_USER`], [`system_groups::DEV`]);
    /// user-defined groups leave this unset.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub group_type: Option<String>,
}

/// Presentation order of a group.
///
/// System groups are pinned to the head of any listing: all-users first,
/// then dev, then user-defined groups by creation time ascending. The
/// derived `Ord` gives exactly that three-tier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupRank {
    AllUsers,
    Dev,
    /// User-defined group, ordered by `created_at` epoch milliseconds.
    Regular(i64),
}

impl Group {
    // ── Lifecycle ──

    /// Build the synthetic all-users group for an organization.
    pub fn new_all_users(organization_id: &str, created_by: Option<String>) -> Self {
        Self {
            auditing: Auditing::new(created_by),
            name: String::new(),
            organization_id: organization_id.to_string(),
            all_users_group: Some(true),
            group_type: Some(system_groups::ALL_USER.to_string()),
        }
    }

    /// Build the synthetic dev group for an organization.
    pub fn new_dev(organization_id: &str, created_by: Option<String>) -> Self {
        Self {
            auditing: Auditing::new(created_by),
            name: String::new(),
            organization_id: organization_id.to_string(),
            all_users_group: None,
            group_type: Some(system_groups::DEV.to_string()),
        }
    }

    /// Build a user-defined group.
    pub fn new_custom(
        organization_id: &str,
        name: impl Into<String>,
        created_by: Option<String>,
    ) -> Self {
        Self {
            auditing: Auditing::new(created_by),
            name: name.into(),
            organization_id: organization_id.to_string(),
            all_users_group: None,
            group_type: None,
        }
    }

    /// Rebuild this group with a new stored name.
    ///
    /// Only user-defined groups can be renamed — a system group's display
    /// name is locale-derived and immutable.
    pub fn renamed(&self, name: impl Into<String>, updated_by: Option<String>) -> Result<Self, OrgError> {
        if self.is_system_group() {
            return Err(OrgError::ReadOnly(
                "system groups cannot be renamed".to_string(),
            ));
        }
        Ok(Self {
            auditing: self.auditing.touched(updated_by),
            name: name.into(),
            ..self.clone()
        })
    }

    /// Guard consulted before deleting a group. System groups are never
    /// deletable.
    pub fn ensure_deletable(&self) -> Result<(), OrgError> {
        if self.is_system_group() {
            return Err(OrgError::ReadOnly(
                "system groups cannot be deleted".to_string(),
            ));
        }
        Ok(())
    }

    // ── Classification ──

    /// Whether this is the organization's all-users group.
    ///
    /// True when the explicit flag is set, or when the record predates the
    /// flag and carries only the reserved `type` marker. Both the naming
    /// and the ordering logic go through this single predicate.
    pub fn is_all_users_group(&self) -> bool {
        self.all_users_group.unwrap_or(false)
            || self.group_type.as_deref() == Some(system_groups::ALL_USER)
    }

    /// Whether this is the internal dev group. The all-users flag plays no
    /// role here.
    pub fn is_dev_group(&self) -> bool {
        self.group_type.as_deref() == Some(system_groups::DEV)
    }

    /// Whether this is any system group.
    pub fn is_system_group(&self) -> bool {
        self.is_all_users_group() || self.is_dev_group()
    }

    /// Whether this is a user-defined group.
    pub fn is_not_system_group(&self) -> bool {
        !self.is_system_group()
    }

    /// Effective group type for reads. The all-users flag wins over the
    /// stored `type`; storage is never rewritten.
    pub fn effective_type(&self) -> Option<&str> {
        if self.is_all_users_group() {
            Some(system_groups::ALL_USER)
        } else {
            self.group_type.as_deref()
        }
    }

    /// Resolve the display name for a locale.
    ///
    /// System groups resolve through the symbol table on the effective
    /// type; lookup failures propagate rather than falling back to the
    /// stored `name`. User-defined groups return the stored name verbatim,
    /// for any locale.
    pub fn display_name(&self, locale: &str) -> Result<String, OrgError> {
        match self.effective_type() {
            Some(marker) if self.is_system_group() => {
                system_groups::resolve_name(marker, locale).map(str::to_string)
            }
            _ => Ok(self.name.clone()),
        }
    }

    // ── Ordering ──

    /// Presentation rank. Pure and total: safe to evaluate concurrently on
    /// any snapshot, malformed or not. When a record carries both the
    /// all-users flag and the dev marker, all-users wins.
    pub fn rank(&self) -> GroupRank {
        if self.is_all_users_group() {
            GroupRank::AllUsers
        } else if self.is_dev_group() {
            GroupRank::Dev
        } else {
            GroupRank::Regular(self.auditing.created_at_millis())
        }
    }
}

/// Sort groups into presentation order: all-users, dev, then user-defined
/// groups oldest first. Stable — equal ranks keep their encounter order.
pub fn sort_for_display(groups: &mut [Group]) {
    groups.sort_by_key(Group::rank);
}
