//! Stage and monster catalog definitions.

/// Represents one stage of the battle progression.
#[derive(Debug, Clone)]
pub struct StageTemplate {
    pub id: u32,
    pub name: &'static str,
    /// Presentation hint for the battle backdrop; the progression engine
    /// never reads it.
    pub background: &'static str,
    pub monsters: Vec<MonsterTemplate>,
    pub boss: MonsterTemplate,
}

/// A monster that can appear in a stage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub glyph: &'static str,
    pub base_hp: u32,
    pub is_boss: bool,
}

const fn monster(name: &'static str, glyph: &'static str, base_hp: u32) -> MonsterTemplate {
    MonsterTemplate {
        name,
        glyph,
        base_hp,
        is_boss: false,
    }
}

const fn boss(name: &'static str, glyph: &'static str, base_hp: u32) -> MonsterTemplate {
    MonsterTemplate {
        name,
        glyph,
        base_hp,
        is_boss: true,
    }
}

/// Returns all stages in play order. The catalog cycles indefinitely; a
/// finished last stage wraps back to the first with scaled-up health.
pub fn get_all_stages() -> Vec<StageTemplate> {
    vec![
        StageTemplate {
            id: 0,
            name: "Hygiene Havoc",
            background: "blue",
            monsters: vec![
                monster("Plaque Grunt", "🦠", 10),
                monster("Unwashed Mud Monster", "💩", 10),
                monster("Stinky Sock Sprite", "🧦", 10),
                monster("Dust Puff", "💨", 10),
                monster("Dirty Laundry Beast", "👕", 10),
            ],
            boss: boss("Cavity Overlord", "🦷", 30),
        },
        StageTemplate {
            id: 1,
            name: "Mealtime Defense",
            background: "green",
            monsters: vec![
                monster("Picky Eater Imp", "🥦", 10),
                monster("Cola Jellyfish", "🥤", 10),
                monster("Leftover Lurker", "🍚", 10),
                monster("Candy Thief", "🍬", 10),
                monster("Fried Chicken Fiend", "🍗", 10),
            ],
            boss: boss("Snack Glutton Dragon", "🐲", 30),
        },
        StageTemplate {
            id: 2,
            name: "Bedtime Battle",
            background: "indigo",
            monsters: vec![
                monster("Snooze Piglet", "🐷", 10),
                monster("Phone Phantom", "📱", 10),
                monster("Night Owl Cat", "🐱", 10),
                monster("TV Trancer", "📺", 10),
                monster("Console Gremlin", "🎮", 10),
            ],
            boss: boss("Dawdle King", "🦥", 30),
        },
        StageTemplate {
            id: 3,
            name: "Manners & Order",
            background: "orange",
            monsters: vec![
                monster("Toy Snatcher", "🦝", 10),
                monster("Shriek Imp", "😱", 10),
                monster("Litter Beast", "🗑️", 10),
                monster("Interrupting Sprite", "🗣️", 10),
                monster("Shoving Bully", "🦏", 10),
            ],
            boss: boss("Havoc Gorilla", "🦍", 30),
        },
        StageTemplate {
            id: 4,
            name: "Study Quest",
            background: "yellow",
            monsters: vec![
                monster("Daydream Bird", "🐦", 10),
                monster("Careless Blunderer", "🤷", 10),
                monster("Eraser Thief", "🧽", 10),
                monster("Scribble Demon", "🖍️", 10),
                monster("Homework Sloth", "🐌", 10),
            ],
            boss: boss("Study Slump King", "👿", 30),
        },
        StageTemplate {
            id: 5,
            name: "Exercise Gauntlet",
            background: "red",
            monsters: vec![
                monster("Couch Potato", "🥔", 10),
                monster("Tired-Out Imp", "🥵", 10),
                monster("Homebody Snail", "🐌", 10),
                monster("No-Walk Wanderer", "🚶", 10),
                monster("Lazy Sloth", "🦥", 10),
            ],
            boss: boss("Flabby Behemoth", "🐘", 30),
        },
    ]
}

/// Number of stages in the catalog.
pub fn stage_count() -> usize {
    get_all_stages().len()
}

/// Gets a stage by catalog index (0-based, already wrapped).
pub fn get_stage(index: usize) -> Option<StageTemplate> {
    get_all_stages().into_iter().nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MONSTERS_PER_STAGE;

    #[test]
    fn test_stage_count() {
        assert_eq!(stage_count(), 6);
    }

    #[test]
    fn test_stage_names() {
        let stages = get_all_stages();
        assert_eq!(stages[0].name, "Hygiene Havoc");
        assert_eq!(stages[1].name, "Mealtime Defense");
        assert_eq!(stages[2].name, "Bedtime Battle");
        assert_eq!(stages[3].name, "Manners & Order");
        assert_eq!(stages[4].name, "Study Quest");
        assert_eq!(stages[5].name, "Exercise Gauntlet");
    }

    #[test]
    fn test_monster_counts() {
        for stage in get_all_stages() {
            assert_eq!(
                stage.monsters.len(),
                MONSTERS_PER_STAGE,
                "Stage {} should have {} regular monsters",
                stage.name,
                MONSTERS_PER_STAGE
            );
        }
    }

    #[test]
    fn test_boss_flags() {
        for stage in get_all_stages() {
            assert!(
                stage.boss.is_boss,
                "Stage {} boss should carry the boss flag",
                stage.name
            );
            for m in &stage.monsters {
                assert!(
                    !m.is_boss,
                    "Stage {} regular monster {} should not be a boss",
                    stage.name, m.name
                );
            }
        }
    }

    #[test]
    fn test_boss_base_hp_above_regular() {
        for stage in get_all_stages() {
            for m in &stage.monsters {
                assert!(stage.boss.base_hp > m.base_hp);
            }
        }
    }

    #[test]
    fn test_stage_ids_match_order() {
        for (i, stage) in get_all_stages().iter().enumerate() {
            assert_eq!(stage.id as usize, i);
        }
    }

    #[test]
    fn test_get_stage() {
        assert_eq!(get_stage(0).unwrap().name, "Hygiene Havoc");
        assert_eq!(get_stage(5).unwrap().name, "Exercise Gauntlet");
        assert!(get_stage(6).is_none());
    }
}
