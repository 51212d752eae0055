use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::nullable::Nullable;

/// A bag that contains information about a schedule preference assignment
/// for the group schedule toolbox block.
///
/// Wire names are camelCase and every field is optional. The assignment
/// GUID is a weak reference; nothing here resolves or validates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePreferenceAssignmentBag {
    /// The group member assignment unique identifier.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub group_member_assignment_guid: Nullable<Uuid>,

    /// The location name.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub location_name: Nullable<String>,

    /// The schedule name.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub schedule_name: Nullable<String>,
}
