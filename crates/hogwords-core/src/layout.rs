//! Role-aware page shells.
//!
//! Each role gets one fixed shell. The shell decides the landing route and
//! the navigation shown above a course page.

use serde::Serialize;

use crate::session::Role;

/// Page shell rendered around a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    /// Marketing header, no dashboard navigation.
    Public,
    StudentDashboard,
    TeacherWorkspace,
    AdminPanel,
}

/// A navigation entry in a shell's top bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

impl NavLink {
    fn new(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
        }
    }
}

impl LayoutVariant {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Student => Self::StudentDashboard,
            Role::Teacher => Self::TeacherWorkspace,
            Role::Admin => Self::AdminPanel,
            Role::Guest => Self::Public,
        }
    }

    /// Landing route for this shell.
    pub fn home_route(&self) -> &'static str {
        match self {
            Self::Public => "/",
            Self::StudentDashboard => "/dashboard",
            Self::TeacherWorkspace => "/teacher/dashboard",
            Self::AdminPanel => "/admin/dashboard",
        }
    }

    /// Top bar links shown above a course page.
    ///
    /// The first link is always the way back out of the course. Teacher
    /// management links need a course id; without one only the back link
    /// is shown. The public shell uses the marketing header instead.
    pub fn course_links(&self, course_id: Option<&str>) -> Vec<NavLink> {
        match self {
            Self::Public => Vec::new(),
            Self::StudentDashboard => vec![
                NavLink::new("Shaxsiy kabinet", "/courses"),
                NavLink::new("Kurslarim", "/my-courses"),
            ],
            Self::TeacherWorkspace => {
                let mut links = vec![NavLink::new("Dashboard", self.home_route())];
                if let Some(id) = course_id.filter(|id| !id.is_empty()) {
                    links.push(NavLink::new(
                        "Tahrirlash",
                        format!("/teacher/courses/{id}/edit"),
                    ));
                    links.push(NavLink::new(
                        "Talabalar",
                        format!("/teacher/courses/{id}/students"),
                    ));
                    links.push(NavLink::new(
                        "Statistika",
                        format!("/teacher/courses/{id}/stats"),
                    ));
                }
                links
            }
            Self::AdminPanel => vec![NavLink::new("Admin Panel", self.home_route())],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::StudentDashboard => "student_dashboard",
            Self::TeacherWorkspace => "teacher_workspace",
            Self::AdminPanel => "admin_panel",
        }
    }
}

impl From<Role> for LayoutVariant {
    fn from(role: Role) -> Self {
        Self::for_role(role)
    }
}
