//! Static page copy: feature cards, testimonials and the icons they use.

/// Icons used on the page (Lucide, 24x24 stroke icons).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconRef {
    Star,
    Users,
    Zap,
    BarChart,
    ChevronRight,
    MousePointer,
}

impl IconRef {
    /// Stable name, rendered as `data-icon` so markup can be checked.
    pub fn name(self) -> &'static str {
        match self {
            IconRef::Star => "star",
            IconRef::Users => "users",
            IconRef::Zap => "zap",
            IconRef::BarChart => "bar-chart",
            IconRef::ChevronRight => "chevron-right",
            IconRef::MousePointer => "mouse-pointer",
        }
    }

    /// SVG path data (`d` attributes) on a 24x24 viewBox.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconRef::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            IconRef::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconRef::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            IconRef::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
            IconRef::ChevronRight => &["m9 18 6-6-6-6"],
            IconRef::MousePointer => &["m4 4 7.07 17 2.51-7.39L21 11.07z", "m13 13 6 6"],
        }
    }
}

/// One card of the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconRef,
    pub title: &'static str,
    pub description: &'static str,
}

/// One user quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
}

pub const HERO_TITLE: &str = "Build Atomic Habits";
pub const HERO_SUBTITLE: &str = "Transform your life with zhabits, the app inspired by 'Atomic Habits' that helps you create and maintain tiny habits for remarkable results.";
pub const HERO_CTA: &str = "Start Your Journey";

pub const FEATURES_HEADING: &str = "Atomic Features";

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: IconRef::Star,
        title: "1% Better Every Day",
        description: "Focus on small improvements that compound over time for significant results.",
    },
    Feature {
        icon: IconRef::Users,
        title: "Identity-Based Habits",
        description: "Build habits that align with the type of person you want to become.",
    },
    Feature {
        icon: IconRef::Zap,
        title: "Habit Stacking",
        description: "Link new habits to existing ones for easier integration into your routine.",
    },
    Feature {
        icon: IconRef::BarChart,
        title: "Progress Tracking",
        description: "Visualize your habit formation and celebrate small wins along the way.",
    },
];

pub const TESTIMONIALS_HEADING: &str = "What Our Users Say";

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Alex",
        quote: "zhabits has helped me implement the concepts from 'Atomic Habits' in my daily life. The results are incredible!",
    },
    Testimonial {
        name: "Sam",
        quote: "The habit stacking feature in zhabits made it so much easier for me to build new, positive habits.",
    },
];

pub const CTA_HEADING: &str = "Ready to Transform Your Habits?";
pub const CTA_COPY: &str = "Join thousands of users who are already building atomic habits with zhabits. Start your journey to lasting change today!";
pub const CTA_LABEL: &str = "Launch App";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_are_declared_in_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            [
                "1% Better Every Day",
                "Identity-Based Habits",
                "Habit Stacking",
                "Progress Tracking"
            ]
        );
        let icons: Vec<_> = FEATURES.iter().map(|f| f.icon).collect();
        assert_eq!(
            icons,
            [IconRef::Star, IconRef::Users, IconRef::Zap, IconRef::BarChart]
        );
    }

    #[test]
    fn every_icon_has_path_data() {
        let all = [
            IconRef::Star,
            IconRef::Users,
            IconRef::Zap,
            IconRef::BarChart,
            IconRef::ChevronRight,
            IconRef::MousePointer,
        ];
        for icon in all {
            assert!(!icon.paths().is_empty(), "{} has no paths", icon.name());
        }
    }
}
