//! Static page content: hero slides, demo videos, press items and the
//! figures shown in the cluster, pilot and market sections.

use std::num::NonZeroUsize;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
}

impl Slide {
    pub fn image_url(&self) -> String {
        config::resolve_public(self.image)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoItem {
    pub title: &'static str,
    pub desc: &'static str,
    pub youtube_id: &'static str,
}

/// A press release card backed by a PDF under the public directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub title: &'static str,
    pub desc: &'static str,
    pub pdf_path: &'static str,
}

impl NewsItem {
    pub fn pdf_url(&self) -> String {
        config::resolve_public(self.pdf_path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterFeature {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PilotMarket {
    pub name: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        id: "hero-1",
        image: "images/HomePage_img1.jpg",
        alt: "EV dashboard background",
    },
    Slide {
        id: "hero-2",
        image: "images/hero-2.svg",
        alt: "EV charging background",
    },
    Slide {
        id: "hero-3",
        image: "images/hero-3.svg",
        alt: "EV infrastructure background",
    },
];

pub const SLIDE_COUNT: NonZeroUsize = match NonZeroUsize::new(SLIDES.len()) {
    Some(count) => count,
    None => panic!("hero needs at least one slide"),
};

pub const DEMOS: [DemoItem; 4] = [
    DemoItem {
        title: "EV Buddy PowerShare",
        desc: "EV Charging from One Car to Another: Beta service is available in NJ",
        youtube_id: "89oIQkmxe3w",
    },
    DemoItem {
        title: "RANGE ANXIETY IS DEAD",
        desc: "EV Buddy PowerShare charging a Lucid EV using our portable V2V",
        youtube_id: "z-snSx1SnOs",
    },
    DemoItem {
        title: "BrightDrop Van",
        desc: "Commercial fleet charging made simple with BrightDrop",
        youtube_id: "ysz5S6PUM-U",
    },
    DemoItem {
        title: "BMW EV",
        desc: "Premium charging experience for BMW electric vehicles",
        youtube_id: "ScMzIvxBSi4",
    },
];

pub const NEWS: [NewsItem; 4] = [
    NewsItem {
        title: "EV Buddy: NJ CSIT-Approved Exclusive EV-to-EV Charger",
        desc: "EV Buddy is NJ CSIT's sole approved EV-to-EV charger, recognized for its innovation.",
        pdf_path: "PressAndNews/itserve-award-CjSkpRC2.pdf",
    },
    NewsItem {
        title: "EV Buddy Opens Waitlist for Mobile V2V DC Fast-Charging Service",
        desc: "Drivers & hosts earn delivering on-site V2V DC fast charging. Join EV Buddy's waitlist.",
        pdf_path: "PressAndNews/evbuddy-waitlist-CZRXKxEg.pdf",
    },
    NewsItem {
        title: "EV Buddy x EcoG: Next-Gen V2V Charging Partnership",
        desc: "EV Buddy and EcoG announce a strategic agreement for next-gen V2V fast DC portable chargers.",
        pdf_path: "PressAndNews/evbuddy-ecog-DmLFxWcc.pdf",
    },
    NewsItem {
        title: "PlugIn Voices Support for EVBuddy's EVChargeShare",
        desc: "Exciting news for EV Buddy! PlugIn has expressed strong support for our patent-pending portable V2V DC fast charging.",
        pdf_path: "PressAndNews/Einpressware-q4ojpea_.pdf",
    },
];

pub const CLUSTER_FEATURES: [ClusterFeature; 5] = [
    ClusterFeature {
        title: "Scalable Power",
        body: "Dynamic Power Allocation ensures maximum efficiency and scalability for high-demand environments.",
    },
    ClusterFeature {
        title: "32\" Multimedia Touch Screen",
        body: "Intuitive user interaction combined with targeted advertising opportunities to boost revenue.",
    },
    ClusterFeature {
        title: "Smart Cable Management",
        body: "Future-proof organizational systems for a clean, safe, and efficient charging experience.",
    },
    ClusterFeature {
        title: "Safety & Certification",
        body: "Built to the highest international standards, ensuring reliability and full regulatory compliance.",
    },
    ClusterFeature {
        title: "Streaming Revenue",
        body: "Lower break-even point with integrated multimedia monetization and advertising systems.",
    },
];

pub const PILOTS: [PilotMarket; 3] = [
    PilotMarket { name: "Northeast", note: "Pilot Program Launching Soon" },
    PilotMarket { name: "Bay Area", note: "Pilot Program Launching Soon" },
    PilotMarket { name: "Oregon markets", note: "Pilot Program Launching Soon" },
];

pub const MARKET_POINTS: [&str; 6] = [
    "First Portable V2V Charger",
    "Patent-Pending Technology",
    "3x Scalable Revenue Streams",
    "Pilot Program Ready",
    "Strategic Infrastructure Play",
    "Disruptive CaaS Model",
];

pub const MARKET_STATS: [MarketStat; 4] = [
    MarketStat { value: "$65B", label: "EV Charging Market" },
    MarketStat { value: "23%", label: "YoY EV Growth" },
    MarketStat { value: "$5B", label: "Roadside Market" },
    MarketStat { value: "287M+", label: "EVs by 2030" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slide_ids_are_unique() {
        let ids: HashSet<_> = SLIDES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SLIDES.len());
        assert_eq!(SLIDE_COUNT.get(), SLIDES.len());
    }

    #[test]
    fn news_items_point_at_pdfs() {
        for item in NEWS.iter() {
            assert!(item.pdf_path.ends_with(".pdf"), "{}", item.pdf_path);
            assert!(item.pdf_url().ends_with(item.pdf_path));
        }
        let paths: HashSet<_> = NEWS.iter().map(|n| n.pdf_path).collect();
        assert_eq!(paths.len(), NEWS.len());
    }

    #[test]
    fn demo_video_ids_are_plain_tokens() {
        for demo in DEMOS.iter() {
            assert!(!demo.youtube_id.is_empty());
            assert!(demo
                .youtube_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }
}
