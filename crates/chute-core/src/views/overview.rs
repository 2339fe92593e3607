/// A link on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub path: &'static str,
}

const SECTIONS: &[Section] = &[
    Section {
        title: "Live stream",
        path: "/live-stream",
    },
    Section {
        title: "Photos",
        path: "/photos",
    },
    Section {
        title: "Security",
        path: "/security",
    },
];

/// Landing page. Static, nothing to poll.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewView;

impl OverviewView {
    pub const NAME: &'static str = "overview";

    pub fn sections(&self) -> &'static [Section] {
        SECTIONS
    }
}
