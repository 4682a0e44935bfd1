use super::{Accent, LearningItem, PersonalTrait, SkillGroup, SkillIcon, SkillRating};

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Development",
        icon: SkillIcon::Code,
        skills: &[
            SkillRating::new("Frontend", 3, 5, Accent::Emerald),
            SkillRating::new("Backend", 1, 5, Accent::Blue),
            SkillRating::new("Problem Solving", 3, 5, Accent::Purple),
        ],
    },
    SkillGroup {
        title: "Leadership",
        icon: SkillIcon::People,
        skills: &[
            SkillRating::new("Team Collaboration", 3, 5, Accent::Emerald),
            SkillRating::new("Communication", 3, 5, Accent::Blue),
            SkillRating::new("Community Building", 2, 5, Accent::Purple),
        ],
    },
];

pub static PERSONAL_TRAITS: &[PersonalTrait] = &[
    PersonalTrait { label: "Problem Solver", accent: Accent::Emerald },
    PersonalTrait { label: "Front-end Developer", accent: Accent::Blue },
    PersonalTrait { label: "Physics Enthusiast", accent: Accent::Orange },
    PersonalTrait { label: "Chess Player", accent: Accent::Pink },
];

pub static LEARNING_ITEMS: &[LearningItem] = &[
    LearningItem {
        text: "Advanced Java Programming & Spring Framework",
        accent: Accent::Purple,
    },
    LearningItem {
        text: "Basic Kotlin Programming & Minecraft Modding",
        accent: Accent::Blue,
    },
    LearningItem {
        text: "Data Structures & Algorithms",
        accent: Accent::Emerald,
    },
];

pub static FUN_FACTS: &[&str] = &[
    "🏆 Won multiple provincial physics competitions",
    "♟️ Chess enthusiast with tournament wins",
    "💡 All my projects stem from my own real-life needs",
];
