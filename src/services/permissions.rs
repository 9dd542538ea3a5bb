//! Role-based permission lookup
//!
//! Static capability tables for the four admin console roles. The lookup
//! is a pure function with no side effects; every (role, permission) pair
//! has an answer and unknown capability names answer `false`.

use serde::{Deserialize, Serialize};

use crate::models::AdminRole;

/// Capabilities an admin role can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ManageUsers,
    ManageMentors,
    ModerateContent,
    ViewUserReports,
    ViewFinancialReports,
    ExportReports,
    ManageFinances,
    ManageAdmins,
    ManageSystemSettings,
    RunAutomations,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ManageUsers => "manage_users",
            Permission::ManageMentors => "manage_mentors",
            Permission::ModerateContent => "moderate_content",
            Permission::ViewUserReports => "view_user_reports",
            Permission::ViewFinancialReports => "view_financial_reports",
            Permission::ExportReports => "export_reports",
            Permission::ManageFinances => "manage_finances",
            Permission::ManageAdmins => "manage_admins",
            Permission::ManageSystemSettings => "manage_system_settings",
            Permission::RunAutomations => "run_automations",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "manage_users" => Some(Permission::ManageUsers),
            "manage_mentors" => Some(Permission::ManageMentors),
            "moderate_content" => Some(Permission::ModerateContent),
            "view_user_reports" => Some(Permission::ViewUserReports),
            "view_financial_reports" => Some(Permission::ViewFinancialReports),
            "export_reports" => Some(Permission::ExportReports),
            "manage_finances" => Some(Permission::ManageFinances),
            "manage_admins" => Some(Permission::ManageAdmins),
            "manage_system_settings" => Some(Permission::ManageSystemSettings),
            "run_automations" => Some(Permission::RunAutomations),
            _ => None,
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const SUPER_ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ManageUsers,
    Permission::ManageMentors,
    Permission::ModerateContent,
    Permission::ViewUserReports,
    Permission::ViewFinancialReports,
    Permission::ExportReports,
    Permission::ManageFinances,
    Permission::ManageAdmins,
    Permission::ManageSystemSettings,
    Permission::RunAutomations,
];

const ADMIN_MANAGER_PERMISSIONS: &[Permission] = &[
    Permission::ManageUsers,
    Permission::ManageMentors,
    Permission::ModerateContent,
    Permission::ViewUserReports,
    Permission::ViewFinancialReports,
    Permission::ManageFinances,
];

const REPORTS_VIEWER_PERMISSIONS: &[Permission] = &[
    Permission::ViewUserReports,
    Permission::ViewFinancialReports,
    Permission::ExportReports,
];

const AI_AGENT_PERMISSIONS: &[Permission] = &[
    Permission::ModerateContent,
    Permission::RunAutomations,
    Permission::ViewUserReports,
];

/// Capability list for a role
pub fn role_permissions(role: AdminRole) -> &'static [Permission] {
    match role {
        AdminRole::SuperAdmin => SUPER_ADMIN_PERMISSIONS,
        AdminRole::AdminManager => ADMIN_MANAGER_PERMISSIONS,
        AdminRole::ReportsViewer => REPORTS_VIEWER_PERMISSIONS,
        AdminRole::AiAgent => AI_AGENT_PERMISSIONS,
    }
}

/// Check whether a role holds a permission
pub fn has_permission(role: AdminRole, permission: Permission) -> bool {
    role_permissions(role).contains(&permission)
}

/// Check a permission by capability name
///
/// Unknown names answer `false`, mirroring the admin console's
/// default-empty lookup for unmapped entries.
pub fn has_permission_named(role: AdminRole, permission: &str) -> bool {
    Permission::parse(permission).map_or(false, |p| has_permission(role, p))
}

/// Capability names for a role, in table order
pub fn permission_names(role: AdminRole) -> Vec<String> {
    role_permissions(role)
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_admin_holds_everything() {
        for role in [
            AdminRole::AdminManager,
            AdminRole::ReportsViewer,
            AdminRole::AiAgent,
        ] {
            for permission in role_permissions(role) {
                assert!(
                    has_permission(AdminRole::SuperAdmin, *permission),
                    "super_admin should hold {}",
                    permission
                );
            }
        }
    }

    #[test]
    fn test_small_roles_overlap_manager_without_being_subsets() {
        // Both narrow roles share capabilities with admin_manager...
        assert!(has_permission(AdminRole::ReportsViewer, Permission::ViewFinancialReports));
        assert!(has_permission(AdminRole::AiAgent, Permission::ModerateContent));

        // ...but each holds something admin_manager lacks.
        assert!(has_permission(AdminRole::ReportsViewer, Permission::ExportReports));
        assert!(!has_permission(AdminRole::AdminManager, Permission::ExportReports));
        assert!(has_permission(AdminRole::AiAgent, Permission::RunAutomations));
        assert!(!has_permission(AdminRole::AdminManager, Permission::RunAutomations));
    }

    #[test]
    fn test_manager_cannot_manage_admins_or_settings() {
        assert!(!has_permission(AdminRole::AdminManager, Permission::ManageAdmins));
        assert!(!has_permission(AdminRole::AdminManager, Permission::ManageSystemSettings));
    }

    #[test]
    fn test_lookup_is_total_over_the_enum() {
        for role in [
            AdminRole::SuperAdmin,
            AdminRole::AdminManager,
            AdminRole::ReportsViewer,
            AdminRole::AiAgent,
        ] {
            // Every pair answers without panicking.
            let _ = has_permission(role, Permission::ManageUsers);
            let _ = has_permission(role, Permission::RunAutomations);
        }
    }

    #[test]
    fn test_unknown_capability_name_answers_false() {
        assert!(!has_permission_named(AdminRole::SuperAdmin, "launch_rockets"));
        assert!(!has_permission_named(AdminRole::ReportsViewer, ""));
        assert!(has_permission_named(AdminRole::ReportsViewer, "export_reports"));
    }

    #[test]
    fn test_permission_name_round_trip() {
        for permission in SUPER_ADMIN_PERMISSIONS {
            assert_eq!(Permission::parse(permission.as_str()), Some(*permission));
        }
    }
}
