//! Route permission table for role-based access control
//!
//! A route is declared either with a simple role list (every listed role
//! holds every action) or with a detailed per-action map. Both forms are
//! normalized into a uniform `[RoleSet; N]` lookup at construction time, so
//! permission checks are a pure table lookup with no runtime shape
//! discrimination.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::role::{Role, RoleSet};

/// An action that can be performed on a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Verify,
    Approve,
}

impl Action {
    /// All actions, in declaration order
    pub const ALL: [Action; 6] = [
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Verify,
        Action::Approve,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Verify => "verify",
            Action::Approve => "approve",
        };
        f.write_str(name)
    }
}

/// Declarative permission config for one route, as written in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoutePermission {
    /// Every listed role holds every action
    Simple(Vec<Role>),
    /// Per-action role lists; unlisted actions are denied to everyone
    Detailed(HashMap<Action, Vec<Role>>),
}

/// Normalized per-route entry: one role set per action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct RouteEntry {
    actions: [RoleSet; Action::ALL.len()],
}

impl From<&RoutePermission> for RouteEntry {
    fn from(config: &RoutePermission) -> Self {
        let mut entry = RouteEntry::default();
        match config {
            RoutePermission::Simple(roles) => {
                let set = RoleSet::from_roles(roles);
                entry.actions = [set; Action::ALL.len()];
            }
            RoutePermission::Detailed(map) => {
                for (action, roles) in map {
                    entry.actions[action.index()] = RoleSet::from_roles(roles);
                }
            }
        }
        entry
    }
}

/// Immutable route-permission lookup table
///
/// Built once from declarative config; all queries afterwards are pure.
/// Unknown paths deny every action to every role.
#[derive(Debug, Clone)]
pub struct PermissionTable {
    routes: HashMap<String, RouteEntry>,
}

impl PermissionTable {
    /// Build a table from declarative route configs
    #[must_use]
    pub fn new<I, S>(configs: I) -> Self
    where
        I: IntoIterator<Item = (S, RoutePermission)>,
        S: Into<String>,
    {
        let routes = configs
            .into_iter()
            .map(|(path, config)| (path.into(), RouteEntry::from(&config)))
            .collect();
        Self { routes }
    }

    /// Check whether a role may perform an action on a path
    #[must_use]
    pub fn has_permission(&self, path: &str, role: Role, action: Action) -> bool {
        self.routes
            .get(path)
            .is_some_and(|entry| entry.actions[action.index()].allows(role))
    }

    /// Check whether a role may access a route at all (the `view` action)
    #[must_use]
    pub fn has_route_access(&self, path: &str, role: Role) -> bool {
        self.has_permission(path, role, Action::View)
    }

    /// All actions the role holds on the path
    #[must_use]
    pub fn actions_for(&self, path: &str, role: Role) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.has_permission(path, role, *action))
            .collect()
    }

    /// All paths the role can access, sorted for stable output
    #[must_use]
    pub fn accessible_routes(&self, role: Role) -> Vec<&str> {
        let mut paths: Vec<&str> = self
            .routes
            .keys()
            .map(String::as_str)
            .filter(|path| self.has_route_access(path, role))
            .collect();
        paths.sort_unstable();
        paths
    }

    /// Number of configured routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for PermissionTable {
    /// The built-in dashboard route table
    fn default() -> Self {
        use Action::{Approve, Create, Delete, Edit, Verify, View};
        use Role::{Admin, Guru, Siswa};

        let detailed = |entries: &[(Action, &[Role])]| {
            RoutePermission::Detailed(
                entries
                    .iter()
                    .map(|(action, roles)| (*action, roles.to_vec()))
                    .collect(),
            )
        };

        Self::new([
            (
                "/dashboard",
                RoutePermission::Simple(vec![Admin, Guru, Siswa]),
            ),
            (
                "/dashboard/dudi",
                detailed(&[
                    (View, &[Admin, Guru, Siswa]),
                    (Create, &[Admin]),
                    (Edit, &[Admin]),
                    (Delete, &[Admin]),
                ]),
            ),
            ("/dashboard/users", RoutePermission::Simple(vec![Admin])),
            ("/dashboard/periode", RoutePermission::Simple(vec![Admin])),
            ("/dashboard/batch", RoutePermission::Simple(vec![Admin])),
            (
                "/dashboard/students",
                detailed(&[
                    (View, &[Admin, Guru]),
                    (Create, &[Admin]),
                    (Edit, &[Admin]),
                    (Delete, &[Admin]),
                ]),
            ),
            (
                "/dashboard/internships",
                detailed(&[
                    (View, &[Admin, Guru]),
                    (Create, &[Guru]),
                    (Edit, &[Guru]),
                    (Approve, &[Admin]),
                ]),
            ),
            (
                "/dashboard/journals",
                detailed(&[
                    (View, &[Admin, Guru, Siswa]),
                    (Create, &[Siswa]),
                    (Verify, &[Guru]),
                    (Edit, &[Siswa]),
                ]),
            ),
            (
                "/dashboard/my-internship",
                RoutePermission::Simple(vec![Siswa]),
            ),
            ("/dashboard/profile", RoutePermission::Simple(vec![Siswa])),
            ("/dashboard/settings", RoutePermission::Simple(vec![Admin])),
            (
                "/dashboard/reports",
                RoutePermission::Simple(vec![Admin, Guru]),
            ),
        ])
    }
}
