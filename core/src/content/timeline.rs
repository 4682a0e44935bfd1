//! Milestones shown in the journey section, newest first.

use super::{Accent, Side, Tag, TimelineEntry};

pub static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2025",
        title: "Community Leadership & Management",
        items: &[
            "Discord Administrator at FCoder",
            "Team Member at GitHub Education",
            "Facilitating technical discussions and knowledge sharing",
        ],
        tags: &[Tag::new("Community Leadership", Accent::Purple)],
        side: Side::Left,
        accent: Accent::Purple,
    },
    TimelineEntry {
        year: "2024",
        title: "New Beginnings at FPT University",
        items: &[
            "Got Scholarships for Information Technology at FPT University (100%+)",
            "2nd Prize in the Freshman Sports Festival (Chess)",
        ],
        tags: &[Tag::new("University Achievements", Accent::Emerald)],
        side: Side::Right,
        accent: Accent::Emerald,
    },
    TimelineEntry {
        year: "2024",
        title: "Outstanding Academic Excellence",
        items: &[
            "2nd Prize in the Provincial Excellent Student Selection Exam (Physics)",
            "Scored 9.25 in Physics in the National High School Graduation Exam (Top 1.9%)",
        ],
        tags: &[Tag::new("High School Achievements", Accent::Indigo)],
        side: Side::Left,
        accent: Accent::Emerald,
    },
    TimelineEntry {
        year: "2023",
        title: "National Recognition in Physics",
        items: &[
            "3rd Prize in the Provincial Excellent Student Selection Exam (Physics)",
            "Candidate in the National Excellent Student Selection Exam (Physics)",
        ],
        tags: &[Tag::new("High School Achievements", Accent::Indigo)],
        side: Side::Right,
        accent: Accent::Blue,
    },
    TimelineEntry {
        year: "2022",
        title: "Continued Excellence in Physics",
        items: &["3rd Prize in the Provincial Excellent Student Selection Exam (Physics)"],
        tags: &[Tag::new("High School Achievements", Accent::Indigo)],
        side: Side::Left,
        accent: Accent::Orange,
    },
    TimelineEntry {
        year: "2021",
        title: "Academic & Sports Excellence",
        items: &[
            "3rd Prize in the Provincial Excellent Student Selection Exam (Physics)",
            "1st Prize in the Provincial Phu Dong Sports Game (Chess)",
        ],
        tags: &[Tag::new("Junior High School Achievements", Accent::Violet)],
        side: Side::Right,
        accent: Accent::Pink,
    },
];
