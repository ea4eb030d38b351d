/// The five pages of the dashboard, addressed by a string key in `?active=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Employees,
    Teams,
    Challenges,
    Reports,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Employees => "employees",
            Page::Teams => "teams",
            Page::Challenges => "challenges",
            Page::Reports => "reports",
        }
    }

    /// Unknown keys fall back to the dashboard
    pub fn from_key(key: &str) -> Page {
        Page::all()
            .into_iter()
            .find(|p| p.key() == key.trim())
            .unwrap_or_default()
    }

    pub fn all() -> Vec<Page> {
        vec![
            Page::Dashboard,
            Page::Employees,
            Page::Teams,
            Page::Challenges,
            Page::Reports,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Employees => "Employees",
            Page::Teams => "Teams",
            Page::Challenges => "Challenges",
            Page::Reports => "Reports",
        }
    }

    /// Subtitle in the header
    pub fn description(&self) -> &'static str {
        match self {
            Page::Dashboard => "Welcome back! Here's your wellness overview",
            Page::Employees => "Manage your team members and track their wellness journey",
            Page::Teams => "Organize teams and boost collaboration",
            Page::Challenges => "Create and manage wellness challenges",
            Page::Reports => "Analyze wellness data and generate insights",
        }
    }

    /// Caption under the sidebar menu item
    pub fn menu_caption(&self) -> &'static str {
        match self {
            Page::Dashboard => "Overview & Analytics",
            Page::Employees => "Manage Team Members",
            Page::Teams => "Team Management",
            Page::Challenges => "Wellness Challenges",
            Page::Reports => "Analytics & Insights",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "bar-chart",
            Page::Employees => "users",
            Page::Teams => "trophy",
            Page::Challenges => "target",
            Page::Reports => "trending-up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_key(page.key()), page);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_dashboard() {
        assert_eq!(Page::from_key("settings"), Page::Dashboard);
        assert_eq!(Page::from_key(""), Page::Dashboard);
        assert_eq!(Page::from_key("Teams"), Page::Dashboard);
    }
}
