//! Built-in exercise catalog.
//!
//! A fixed, ordered table of training categories and the exercise
//! prescriptions each one contributes to a planned session, plus the emoji
//! shown next to an exercise name and the category groups offered when
//! planning.

use phf::phf_map;

use crate::models::ExerciseTemplate;

/// Glyph used for exercises with no dedicated emoji.
pub const DEFAULT_EMOJI: &str = "💪";

/// Static form of an [`ExerciseTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub sets: u32,
    pub reps: &'static str,
    pub weight: u32,
    pub duration: u32,
    pub notes: &'static str,
}

impl CatalogEntry {
    pub fn to_template(&self) -> ExerciseTemplate {
        ExerciseTemplate {
            name: self.name.to_string(),
            sets: self.sets,
            reps: self.reps.to_string(),
            weight: self.weight,
            duration: self.duration,
            notes: self.notes.to_string(),
        }
    }
}

const fn t(
    name: &'static str,
    sets: u32,
    reps: &'static str,
    weight: u32,
    duration: u32,
    notes: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        name,
        sets,
        reps,
        weight,
        duration,
        notes,
    }
}

static CATEGORIES: &[(&str, &[CatalogEntry])] = &[
    (
        "Warm Up",
        &[
            t("Dynamic Stretching", 1, "-", 0, 5, ""),
            t("Light Jog", 1, "-", 0, 10, ""),
            t("Leg Swings", 2, "10", 0, 0, "Each leg"),
        ],
    ),
    (
        "ABC Drills",
        &[
            t("A Skip", 3, "20", 0, 0, ""),
            t("B Skip", 3, "20", 0, 0, ""),
            t("C Skip", 3, "20", 0, 0, ""),
            t("Straight Leg Bounds", 3, "15", 0, 0, ""),
            t("Butt Kicks", 3, "20", 0, 0, ""),
        ],
    ),
    (
        "Heavy Weights",
        &[
            t("Bench Press", 4, "8", 80, 0, ""),
            t("Squats", 5, "5", 100, 0, ""),
            t("Deadlifts", 3, "6", 120, 0, ""),
            t("Overhead Press", 4, "8", 50, 0, ""),
            t("Barbell Rows", 4, "10", 60, 0, ""),
        ],
    ),
    (
        "Light Weights",
        &[
            t("Dumbbell Curls", 3, "12", 15, 0, ""),
            t("Lateral Raises", 3, "15", 10, 0, ""),
            t("Tricep Extensions", 3, "12", 12, 0, ""),
            t("Hammer Curls", 3, "12", 15, 0, ""),
        ],
    ),
    (
        "Plyometrics",
        &[
            t("Box Jumps", 4, "8", 0, 0, "24 inch box"),
            t("Broad Jumps", 4, "6", 0, 0, ""),
            t("Depth Jumps", 3, "5", 0, 0, ""),
            t("Single Leg Hops", 3, "10", 0, 0, "Each leg"),
        ],
    ),
    (
        "Step Ups",
        &[
            t("Step Ups", 3, "12", 0, 0, "Each leg"),
            t("Single Leg Step Ups", 3, "8", 0, 0, "Each leg"),
            t("Weighted Step Ups", 3, "10", 20, 0, "Each leg"),
        ],
    ),
    (
        "Wall",
        &[
            t("Wall Drives", 3, "20", 0, 0, "Each leg"),
            t("Wall Sit", 3, "-", 0, 1, ""),
        ],
    ),
    (
        "Core",
        &[
            t("Planks", 3, "-", 0, 1, ""),
            t("Russian Twists", 3, "30", 10, 0, ""),
            t("Bicycle Crunches", 3, "20", 0, 0, ""),
            t("Leg Raises", 3, "15", 0, 0, ""),
            t("Dead Bugs", 3, "12", 0, 0, ""),
        ],
    ),
    (
        "Cool Down",
        &[
            t("Static Stretching", 1, "-", 0, 10, ""),
            t("Foam Rolling", 1, "-", 0, 5, ""),
            t("Walking", 1, "-", 0, 5, ""),
        ],
    ),
    (
        "Half Squads",
        &[
            t("Half Squats", 4, "6", 60, 0, ""),
        ],
    ),
    (
        "Snatches",
        &[
            t("Power Snatch", 4, "3", 40, 0, ""),
            t("Hang Snatch", 4, "4", 35, 0, ""),
        ],
    ),
    (
        "Cleans",
        &[
            t("Power Clean", 5, "3", 60, 0, ""),
            t("Hang Clean", 4, "4", 55, 0, ""),
        ],
    ),
    (
        "Block Work",
        &[
            t("Block Starts", 6, "1", 0, 0, "30m"),
            t("Block Accelerations", 5, "1", 0, 0, "40m"),
        ],
    ),
    (
        "Speed Work",
        &[
            t("Sprint Intervals", 6, "1", 0, 0, "100m"),
            t("Flying Sprints", 4, "1", 0, 0, "60m"),
            t("Tempo Runs", 8, "1", 0, 0, "200m @ 75%"),
        ],
    ),
    (
        "Med Ball",
        &[
            t("Med Ball Throws", 4, "10", 5, 0, ""),
            t("Med Ball Slams", 4, "12", 8, 0, ""),
            t("Med Ball Rotations", 3, "15", 5, 0, ""),
        ],
    ),
    (
        "Hurdle Drills",
        &[
            t("Hurdle Hops", 4, "10", 0, 0, ""),
            t("Hurdle Mobility", 3, "8", 0, 0, "Each leg"),
            t("Hurdle Walkovers", 3, "10", 0, 0, ""),
        ],
    ),
    (
        "Sprints",
        &[
            t("Track Sprints", 5, "1", 0, 0, "100m"),
            t("Hill Sprints", 6, "1", 0, 0, "50m uphill"),
        ],
    ),
];

static GROUPS: &[(&str, &[&str])] = &[
    ("Essential", &["Warm Up", "Cool Down", "Core"]),
    ("Strength", &["Heavy Weights", "Light Weights", "Half Squads"]),
    ("Power", &["Plyometrics", "Med Ball", "Snatches", "Cleans"]),
    ("Speed", &["ABC Drills", "Speed Work", "Sprints", "Block Work"]),
    ("Mobility", &["Step Ups", "Wall", "Hurdle Drills"]),
];

static EMOJIS: phf::Map<&'static str, &'static str> = phf_map! {
    "Dynamic Stretching" => "🤸",
    "Light Jog" => "🏃",
    "Leg Swings" => "🦵",
    "A Skip" => "🏃",
    "B Skip" => "🏃",
    "C Skip" => "🏃",
    "Straight Leg Bounds" => "🦘",
    "Butt Kicks" => "🦵",
    "Bench Press" => "🏋️",
    "Squats" => "🏋️",
    "Deadlifts" => "🏋️",
    "Overhead Press" => "🏋️",
    "Barbell Rows" => "🏋️",
    "Dumbbell Curls" => "💪",
    "Lateral Raises" => "💪",
    "Tricep Extensions" => "💪",
    "Hammer Curls" => "💪",
    "Box Jumps" => "📦",
    "Broad Jumps" => "🦘",
    "Depth Jumps" => "📦",
    "Single Leg Hops" => "🦘",
    "Step Ups" => "🪜",
    "Single Leg Step Ups" => "🪜",
    "Weighted Step Ups" => "🪜",
    "Wall Drives" => "🧱",
    "Wall Sit" => "🧱",
    "Planks" => "🧘",
    "Russian Twists" => "🔄",
    "Bicycle Crunches" => "🚴",
    "Leg Raises" => "🦵",
    "Dead Bugs" => "🪲",
    "Static Stretching" => "🧘",
    "Foam Rolling" => "🎢",
    "Walking" => "🚶",
    "Half Squats" => "🏋️",
    "Power Snatch" => "🏋️",
    "Hang Snatch" => "🏋️",
    "Power Clean" => "🏋️",
    "Hang Clean" => "🏋️",
    "Block Starts" => "🏁",
    "Block Accelerations" => "⚡",
    "Sprint Intervals" => "⚡",
    "Flying Sprints" => "💨",
    "Tempo Runs" => "🏃",
    "Med Ball Throws" => "⚽",
    "Med Ball Slams" => "⚽",
    "Med Ball Rotations" => "⚽",
    "Hurdle Hops" => "🚧",
    "Hurdle Mobility" => "🚧",
    "Hurdle Walkovers" => "🚧",
    "Track Sprints" => "🏃",
    "Hill Sprints" => "⛰️",
};

/// Category names in catalog order.
pub fn category_names() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|(name, _)| *name)
}

/// Raw catalog entries of a category, `None` when the category is unknown.
pub fn entries_for_category(name: &str) -> Option<&'static [CatalogEntry]> {
    CATEGORIES
        .iter()
        .find(|(category, _)| *category == name)
        .map(|(_, entries)| *entries)
}

/// Exercise templates planned for a category, in catalog order.
///
/// Unknown categories contribute no exercises.
pub fn templates_for_category(name: &str) -> Vec<ExerciseTemplate> {
    entries_for_category(name)
        .map(|entries| entries.iter().map(CatalogEntry::to_template).collect())
        .unwrap_or_default()
}

/// Emoji for an exercise name, falling back to [`DEFAULT_EMOJI`].
///
/// ```rust
/// use athlete_core::catalog::{emoji_for, DEFAULT_EMOJI};
///
/// assert_eq!(emoji_for("Box Jumps"), "📦");
/// assert_eq!(emoji_for("Custom Lift"), DEFAULT_EMOJI);
/// ```
pub fn emoji_for(name: &str) -> &'static str {
    EMOJIS.get(name).copied().unwrap_or(DEFAULT_EMOJI)
}

/// Category groups and their member categories, in display order.
pub fn category_groups() -> &'static [(&'static str, &'static [&'static str])] {
    GROUPS
}

/// Categories belonging to a group, `None` when the group is unknown.
pub fn categories_in_group(group: &str) -> Option<&'static [&'static str]> {
    GROUPS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(group))
        .map(|(_, categories)| *categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warm_up_and_core_sizes() {
        assert_eq!(templates_for_category("Warm Up").len(), 3);
        assert_eq!(templates_for_category("Core").len(), 5);
    }

    #[test]
    fn test_templates_keep_catalog_order() {
        let names: Vec<String> = templates_for_category("Heavy Weights")
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(
            names,
            ["Bench Press", "Squats", "Deadlifts", "Overhead Press", "Barbell Rows"]
        );
    }

    #[test]
    fn test_template_fields() {
        let leg_swings = &templates_for_category("Warm Up")[2];
        assert_eq!(leg_swings.sets, 2);
        assert_eq!(leg_swings.reps, "10");
        assert_eq!(leg_swings.weight, 0);
        assert_eq!(leg_swings.notes, "Each leg");
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(templates_for_category("Underwater Basket Weaving").is_empty());
        assert!(entries_for_category("warm up").is_none());
    }

    #[test]
    fn test_every_grouped_category_exists() {
        for (group, categories) in category_groups() {
            for category in *categories {
                assert!(
                    entries_for_category(category).is_some(),
                    "{group} references missing category {category}"
                );
            }
        }
    }

    #[test]
    fn test_every_catalog_exercise_has_an_emoji() {
        for name in category_names() {
            for entry in entries_for_category(name).unwrap() {
                assert!(EMOJIS.contains_key(entry.name), "{}", entry.name);
            }
        }
    }

    #[test]
    fn test_group_lookup_is_case_insensitive() {
        assert_eq!(
            categories_in_group("strength"),
            Some(&["Heavy Weights", "Light Weights", "Half Squads"][..])
        );
        assert!(categories_in_group("Cardio").is_none());
    }

    #[test]
    fn test_category_names_order() {
        let names: Vec<&str> = category_names().collect();
        assert_eq!(names.len(), 17);
        assert_eq!(names[0], "Warm Up");
        assert_eq!(names[16], "Sprints");
    }
}
