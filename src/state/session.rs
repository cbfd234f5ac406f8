//! Signed-in user, roles and the role-gated dashboard menu

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Staff role chosen at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Kepsek,
    Guru,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Kepsek, Role::Guru];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Kepsek => "kepsek",
            Self::Guru => "guru",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Kepsek => "Kepala Sekolah",
            Self::Guru => "Guru",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Admin => "Akses penuh ke semua fitur",
            Self::Kepsek => "Monitoring & laporan sekolah",
            Self::Guru => "Akademik, absensi & penilaian",
        }
    }

    /// Step through the roles in login-screen order, wrapping at both ends
    pub fn cycle(self, forward: bool) -> Self {
        let index = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        let len = Self::ALL.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::ALL[next]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Up to two initials for the avatar badge
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphabetic()))
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// What the login form hands to the authenticator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// An authenticated user for the lifetime of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            user,
            started_at: Utc::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Dashboard routes each role may open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleMenuConfig(HashMap<Role, Vec<String>>);

const ADMIN_ROUTES: &[&str] = &[
    "/dashboard",
    "/dashboard/siswa",
    "/dashboard/guru",
    "/dashboard/akademik",
    "/dashboard/jadwal",
    "/dashboard/absensi",
    "/dashboard/penilaian",
    "/dashboard/bk",
    "/dashboard/prestasi",
    "/dashboard/pengumuman",
    "/dashboard/arsip",
    "/dashboard/laporan",
    "/dashboard/pengaturan",
];

const KEPSEK_ROUTES: &[&str] = &[
    "/dashboard",
    "/dashboard/siswa",
    "/dashboard/guru",
    "/dashboard/akademik",
    "/dashboard/prestasi",
    "/dashboard/pengumuman",
    "/dashboard/laporan",
];

const GURU_ROUTES: &[&str] = &[
    "/dashboard",
    "/dashboard/siswa",
    "/dashboard/jadwal",
    "/dashboard/absensi",
    "/dashboard/penilaian",
    "/dashboard/pengumuman",
];

impl Default for RoleMenuConfig {
    fn default() -> Self {
        let owned = |routes: &[&str]| routes.iter().map(|r| r.to_string()).collect();
        Self(HashMap::from([
            (Role::Admin, owned(ADMIN_ROUTES)),
            (Role::Kepsek, owned(KEPSEK_ROUTES)),
            (Role::Guru, owned(GURU_ROUTES)),
        ]))
    }
}

impl RoleMenuConfig {
    pub fn routes(&self, role: Role) -> &[String] {
        self.0.get(&role).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_permitted(&self, role: Role, route: &str) -> bool {
        self.routes(role).iter().any(|r| r == route)
    }

    /// Replace the routes of the roles present in `overrides`
    pub fn merge(mut self, overrides: RoleMenuConfig) -> Self {
        self.0.extend(overrides.0);
        self
    }
}

/// Sidebar label for a dashboard route
pub fn menu_label(route: &str) -> &str {
    match route {
        "/dashboard" => "Dashboard",
        "/dashboard/siswa" => "Data Siswa",
        "/dashboard/guru" => "Data Guru",
        "/dashboard/akademik" => "Akademik",
        "/dashboard/jadwal" => "Jadwal Pelajaran",
        "/dashboard/absensi" => "Absensi",
        "/dashboard/penilaian" => "Penilaian",
        "/dashboard/bk" => "Bimbingan Konseling",
        "/dashboard/prestasi" => "Prestasi",
        "/dashboard/pengumuman" => "Pengumuman",
        "/dashboard/arsip" => "Arsip",
        "/dashboard/laporan" => "Laporan",
        "/dashboard/pengaturan" => "Pengaturan",
        other => other.rsplit('/').next().unwrap_or(other),
    }
}
