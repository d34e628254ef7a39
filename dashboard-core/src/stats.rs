use crate::icon::Icon;

/// Summary card on the landing page. Values are display strings, not numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    pub trend: &'static str,
}

pub const STATS: [StatMetric; 3] = [
    StatMetric {
        title: "Total Users",
        value: "1,234",
        icon: Icon::Users,
        trend: "+12.3%",
    },
    StatMetric {
        title: "Active Now",
        value: "321",
        icon: Icon::Activity,
        trend: "+4.5%",
    },
    StatMetric {
        title: "Revenue",
        value: "$12,345",
        icon: Icon::LineChart,
        trend: "+23.1%",
    },
];

pub const ACTIVITY_TITLE: &str = "Recent Activity";
pub const EMPTY_ACTIVITY_MESSAGE: &str = "No recent activity to show.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_icons_follow_titles() {
        let icons: Vec<_> = STATS.iter().map(|s| s.icon).collect();
        assert_eq!(icons, [Icon::Users, Icon::Activity, Icon::LineChart]);
    }
}
