use std::env;

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            port,
            database_url,
            host,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavItem {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavSection {
    pub title: String,
    pub items: Vec<NavItem>,
}

/// Navigation tree handed to the dashboard views. Built once at startup and
/// carried in the router state instead of living as a module-level constant.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardConfig {
    pub main: Vec<NavSection>,
    pub secondary: Vec<NavItem>,
}

impl DashboardConfig {
    pub fn standard() -> Self {
        let section = |title: &str, items: &[(&str, &str)]| NavSection {
            title: title.to_string(),
            items: items
                .iter()
                .map(|(t, u)| NavItem {
                    title: t.to_string(),
                    url: u.to_string(),
                })
                .collect(),
        };

        Self {
            main: vec![
                section(
                    "Dashboard",
                    &[
                        ("Overview", "/dashboard"),
                        ("Recent Activity", "/dashboard/activity"),
                    ],
                ),
                section(
                    "Inventory",
                    &[
                        ("Hotels", "/hotels"),
                        ("Room Types", "/room-types"),
                        ("Availability", "/availability"),
                    ],
                ),
                section(
                    "Pricing",
                    &[("Seasons", "/seasons"), ("Room Rates", "/rates")],
                ),
                section(
                    "Property Content",
                    &[
                        ("Images", "/hotels/images"),
                        ("Cancellation Policies", "/hotels/policies"),
                    ],
                ),
            ],
            secondary: vec![
                NavItem {
                    title: "Settings".to_string(),
                    url: "/settings".to_string(),
                },
                NavItem {
                    title: "Feedback".to_string(),
                    url: "/feedback".to_string(),
                },
            ],
        }
    }
}
